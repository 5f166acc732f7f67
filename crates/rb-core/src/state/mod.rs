//! Snapshot types.
//!
//! The snapshot separates concerns the same way the editor screen does:
//!
//! - **Snapshot**: root value; report data fetched from the backend
//! - **EditorState**: scratch edits of the selected report
//! - **LayoutState**: search boxes and side panels
//!
//! Every field is crate-private. Consumers read through the accessors on
//! [`Snapshot`] and the projections in [`crate::view`].

mod editor;
mod layout;
mod snapshot;

pub use editor::EditorState;
pub use layout::LayoutState;
pub use snapshot::Snapshot;
