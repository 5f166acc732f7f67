//! Event log loading and replay.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use chrono::{DateTime, Utc};
use tracing::{info, warn};

use rb_core::{FixedClock, Message, Reducer, Settings, Snapshot};

/// Inputs for one replay run.
#[derive(Debug, Clone)]
pub struct ReplayOptions {
    pub events: PathBuf,
    pub settings: Option<PathBuf>,
    /// Freeze time at this instant instead of reading the wall clock.
    pub clock: Option<DateTime<Utc>>,
}

/// Load reducer settings, falling back to defaults when no file is given.
pub fn load_settings(path: Option<&Path>) -> Result<Settings> {
    let Some(path) = path else {
        return Ok(Settings::default());
    };
    Settings::load_from(path).with_context(|| format!("load settings {}", path.display()))
}

/// Read an event log from disk.
pub fn load_events(path: &Path) -> Result<Vec<Message>> {
    let content =
        fs::read_to_string(path).with_context(|| format!("read events {}", path.display()))?;
    parse_events(&content).with_context(|| format!("parse events {}", path.display()))
}

/// Parse an event log.
///
/// Accepts a JSON array of events, or one event per line with blank lines
/// skipped.
pub fn parse_events(content: &str) -> Result<Vec<Message>> {
    let trimmed = content.trim_start();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }
    if trimmed.starts_with('[') {
        return serde_json::from_str(trimmed).context("decode event array");
    }
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            serde_json::from_str(line).with_context(|| format!("decode event on line {}", index + 1))
        })
        .collect()
}

/// Build the reducer for `options`.
pub fn build_reducer(options: &ReplayOptions) -> Result<Reducer> {
    let settings = load_settings(options.settings.as_deref())?;
    let reducer = Reducer::new(settings);
    Ok(match options.clock {
        Some(at) => reducer.with_clock(FixedClock::new(at)),
        None => reducer,
    })
}

/// Replay the event log from an empty snapshot.
pub fn run_replay(options: &ReplayOptions) -> Result<Snapshot> {
    let reducer = build_reducer(options)?;
    let events = load_events(&options.events)?;
    replay_events(&reducer, events)
}

/// Fold `events` from an empty snapshot, naming the rejected event on error.
pub fn replay_events(reducer: &Reducer, events: Vec<Message>) -> Result<Snapshot> {
    let kinds: Vec<&'static str> = events.iter().map(Message::kind).collect();
    let settings = reducer.settings();
    info!(
        events = events.len(),
        display_fields_tab = settings.tabs.display_fields,
        filters_tab = settings.tabs.filters,
        default_filter_type = %settings.filters.default_filter_type,
        "replaying event log"
    );
    match reducer.replay(&Snapshot::new(), events) {
        Ok(state) => {
            info!(
                display_fields = state.display_fields().len(),
                filters = state.filters().len(),
                "replay complete"
            );
            Ok(state)
        }
        Err((index, error)) => {
            let kind = kinds.get(index).copied().unwrap_or("unknown");
            warn!(index, kind, %error, "event rejected");
            bail!("event #{index} ({kind}) rejected: {error}")
        }
    }
}
