//! Snapshot reducer.
//!
//! The single entry point for state changes: `(snapshot, message) -> snapshot`.
//! Transitions are synchronous and side-effect free apart from reading the
//! injected [`Clock`].

use crate::clock::{Clock, SystemClock};
use crate::error::TransitionError;
use crate::handler::{EditorHandler, LayoutHandler, MessageHandler, ReportHandler};
use crate::message::Message;
use crate::settings::Settings;
use crate::state::Snapshot;
use crate::store::EntityStore;

/// Applies messages to snapshots.
#[derive(Debug)]
pub struct Reducer {
    settings: Settings,
    clock: Box<dyn Clock>,
}

impl Default for Reducer {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl Reducer {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            clock: Box::new(SystemClock),
        }
    }

    /// Replace the time source.
    #[must_use]
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Compute the snapshot that follows `snapshot` after `message`.
    ///
    /// Unrecognized messages return an unchanged copy. On error `snapshot`
    /// remains the current state.
    pub fn transition(
        &self,
        snapshot: &Snapshot,
        message: Message,
    ) -> Result<Snapshot, TransitionError> {
        tracing::debug!(kind = message.kind(), "transition");
        match message {
            Message::Report(msg) => ReportHandler::new(self.clock.as_ref()).handle(snapshot, msg),

            Message::Editor(msg) => EditorHandler::new(&self.settings).handle(snapshot, msg),

            Message::Layout(msg) => LayoutHandler.handle(snapshot, msg),

            Message::DisplayField(msg) => {
                let mut next = snapshot.clone();
                next.display_fields = EntityStore::reduce(&snapshot.display_fields, msg);
                Ok(next)
            }

            Message::Filter(msg) => {
                let mut next = snapshot.clone();
                next.filters = EntityStore::reduce(&snapshot.filters, msg);
                Ok(next)
            }

            Message::Noop | Message::Unknown => Ok(snapshot.clone()),
        }
    }

    /// Fold a sequence of messages, stopping at the first error.
    ///
    /// The error carries the index of the rejected message.
    pub fn replay<I>(&self, snapshot: &Snapshot, messages: I) -> Result<Snapshot, (usize, TransitionError)>
    where
        I: IntoIterator<Item = Message>,
    {
        messages
            .into_iter()
            .enumerate()
            .try_fold(snapshot.clone(), |state, (index, message)| {
                self.transition(&state, message).map_err(|e| (index, e))
            })
    }
}

/// Apply one message with default settings and the system clock.
pub fn transition(snapshot: &Snapshot, message: Message) -> Result<Snapshot, TransitionError> {
    Reducer::default().transition(snapshot, message)
}
