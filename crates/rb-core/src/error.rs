//! Error types for the transition core.
//!
//! The reducer is deliberately forgiving: absent keys, unmatched tree nodes
//! and unrecognized events are silent no-ops. Only broken preconditions
//! surface as [`TransitionError`].

use std::path::PathBuf;

use thiserror::Error;

/// A transition that could not be applied.
///
/// The input snapshot is never modified when this is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TransitionError {
    /// The event needs a selected report but none is loaded.
    #[error("no active report: '{event}' requires a selected report")]
    NoActiveReport {
        /// Kind of the rejected event.
        event: &'static str,
    },
}

/// Invalid or unreadable reducer settings.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("failed to read settings {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse settings: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Both entity kinds were mapped onto the same tab index.
    #[error("display fields and filters cannot share tab {0}")]
    ConflictingTabs(usize),
}
