//! Message handlers.
//!
//! Each message group has a handler implementing [`MessageHandler`]. A
//! handler borrows the current snapshot and returns the next one; it never
//! mutates its input. [`crate::Reducer::transition`] dispatches to them:
//!
//! ```ignore
//! match message {
//!     Message::Report(msg) => ReportHandler::new(clock).handle(snapshot, msg),
//!     Message::Editor(msg) => EditorHandler::new(settings).handle(snapshot, msg),
//!     // ...
//! }
//! ```

mod editor;
mod layout;
mod report;

use crate::error::TransitionError;
use crate::state::Snapshot;

pub use editor::EditorHandler;
pub use layout::LayoutHandler;
pub use report::ReportHandler;

/// Handles one message group.
///
/// # Type Parameters
///
/// * `M` - The message type this handler processes
pub trait MessageHandler<M> {
    /// Compute the snapshot that follows `state` after `msg`.
    ///
    /// On error the caller keeps `state`.
    fn handle(&self, state: &Snapshot, msg: M) -> Result<Snapshot, TransitionError>;
}
