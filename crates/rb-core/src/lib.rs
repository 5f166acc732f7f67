//! Immutable state-transition core of the report builder.
//!
//! Given the current [`Snapshot`] and a [`Message`], the [`Reducer`]
//! produces the next snapshot deterministically. The core never performs
//! I/O; fetching reports and rendering them belong to its callers.
//!
//! # Module Structure
//!
//! - `store` - ordered entity store for display fields and filters
//! - `tree` - lazily populated relation tree
//! - `state` - the snapshot
//! - `message` / `handler` / `reducer` - events and the transition function
//! - `view` - derived projections and their memo cache

pub mod clock;
pub mod error;
pub mod handler;
pub mod message;
pub mod reducer;
pub mod settings;
pub mod state;
pub mod store;
pub mod tree;
pub mod view;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{SettingsError, TransitionError};
pub use message::{
    DisplayFieldMessage, EditorMessage, FilterMessage, LayoutMessage, Message, ReportMessage,
};
pub use reducer::{Reducer, transition};
pub use settings::{Settings, TabTarget};
pub use state::Snapshot;
pub use store::{Entity, EntityMessage, EntityStore, Update};
pub use tree::{NodeId, RelationNode};
pub use view::ViewCache;
