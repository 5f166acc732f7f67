//! Message (event) vocabulary.
//!
//! Every event the reducer understands is a variant of [`Message`], grouped
//! by what it targets. Events are plain data; producing them (network
//! responses, user input) happens elsewhere.
//!
//! On the wire an event is one JSON object: a `group` tag, a `kind` tag and
//! an optional `payload`:
//!
//! ```json
//! {"group": "editor", "kind": "tab_changed", "payload": 1}
//! ```
//!
//! Unrecognized groups or kinds decode to an `Unknown` variant, which the
//! reducer treats as a no-op, whatever payload they carry. A listed kind with
//! a malformed payload is still a decode error.

pub mod editor;
pub mod layout;
pub mod report;

use rb_model::{DisplayField, Filter};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::store::EntityMessage;

pub use editor::EditorMessage;
pub use layout::LayoutMessage;
pub use report::ReportMessage;

/// CRUD events for display fields.
pub type DisplayFieldMessage = EntityMessage<DisplayField>;

/// CRUD events for filters.
pub type FilterMessage = EntityMessage<Filter>;

/// Root message enum.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "group", rename_all = "snake_case")]
pub enum Message {
    // =========================================================================
    // Backend outcomes
    // =========================================================================
    /// Report list, report fetch, edit, delete, preview and export outcomes
    Report(ReportMessage),

    // =========================================================================
    // Editing
    // =========================================================================
    /// Description, distinct flag, tabs and field picking
    Editor(EditorMessage),

    /// Search boxes and side panels
    Layout(LayoutMessage),

    // =========================================================================
    // Entity CRUD
    // =========================================================================
    DisplayField(DisplayFieldMessage),

    Filter(FilterMessage),

    /// No operation
    Noop,

    /// Any event this version does not recognize
    Unknown,
}

impl Message {
    /// Dotted name of the event, used in logs and errors.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Report(msg) => msg.kind(),
            Self::Editor(msg) => msg.kind(),
            Self::Layout(msg) => msg.kind(),
            Self::DisplayField(msg) => match msg {
                EntityMessage::LoadAll(_) => "display_field.load_all",
                EntityMessage::AddOne(_) => "display_field.add_one",
                EntityMessage::UpdateOne(_) => "display_field.update_one",
                EntityMessage::UpdateMany(_) => "display_field.update_many",
                EntityMessage::DeleteOne(_) => "display_field.delete_one",
                EntityMessage::Reorder { .. } => "display_field.reorder",
                EntityMessage::Unknown => "display_field.unknown",
            },
            Self::Filter(msg) => match msg {
                EntityMessage::LoadAll(_) => "filter.load_all",
                EntityMessage::AddOne(_) => "filter.add_one",
                EntityMessage::UpdateOne(_) => "filter.update_one",
                EntityMessage::UpdateMany(_) => "filter.update_many",
                EntityMessage::DeleteOne(_) => "filter.delete_one",
                EntityMessage::Reorder { .. } => "filter.reorder",
                EntityMessage::Unknown => "filter.unknown",
            },
            Self::Noop => "noop",
            Self::Unknown => "unknown",
        }
    }
}

impl<'de> Deserialize<'de> for Message {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        if let Some(group) = value.get("group").and_then(Value::as_str) {
            let kind = value.get("kind").and_then(Value::as_str);
            match (unknown_in(group), kind) {
                (Some(unknown), Some(kind)) if !is_listed(group, kind) => return Ok(unknown),
                (None, _) if group != "noop" => return Ok(Self::Unknown),
                _ => {}
            }
        }
        serde_json::from_value::<WireMessage>(value)
            .map(Self::from)
            .map_err(D::Error::custom)
    }
}

/// The `Unknown` variant of a recognized group.
fn unknown_in(group: &str) -> Option<Message> {
    match group {
        "report" => Some(Message::Report(ReportMessage::Unknown)),
        "editor" => Some(Message::Editor(EditorMessage::Unknown)),
        "layout" => Some(Message::Layout(LayoutMessage::Unknown)),
        "display_field" => Some(Message::DisplayField(EntityMessage::Unknown)),
        "filter" => Some(Message::Filter(EntityMessage::Unknown)),
        _ => None,
    }
}

fn is_listed(group: &str, kind: &str) -> bool {
    KINDS
        .iter()
        .any(|listed| listed.split_once('.') == Some((group, kind)))
}

/// Decoding shape for events whose group and kind are both recognized.
#[derive(Deserialize)]
#[serde(tag = "group", rename_all = "snake_case")]
enum WireMessage {
    Report(ReportMessage),
    Editor(EditorMessage),
    Layout(LayoutMessage),
    DisplayField(DisplayFieldMessage),
    Filter(FilterMessage),
    Noop,
}

impl From<WireMessage> for Message {
    fn from(wire: WireMessage) -> Self {
        match wire {
            WireMessage::Report(msg) => Self::Report(msg),
            WireMessage::Editor(msg) => Self::Editor(msg),
            WireMessage::Layout(msg) => Self::Layout(msg),
            WireMessage::DisplayField(msg) => Self::DisplayField(msg),
            WireMessage::Filter(msg) => Self::Filter(msg),
            WireMessage::Noop => Self::Noop,
        }
    }
}

/// Every event kind accepted in an event log, as `group.kind`.
pub const KINDS: &[&str] = &[
    "report.set_report_list",
    "report.fetch_started",
    "report.set_title",
    "report.fetch_succeeded",
    "report.report_fields_succeeded",
    "report.fields_succeeded",
    "report.related_fields_succeeded",
    "report.edit_succeeded",
    "report.preview_generated",
    "report.delete_succeeded",
    "report.export_downloaded",
    "editor.description_changed",
    "editor.distinct_toggled",
    "editor.tab_changed",
    "editor.add_report_field",
    "editor.field_selected",
    "layout.report_search_changed",
    "layout.field_search_changed",
    "layout.relations_search_changed",
    "layout.left_nav_toggled",
    "layout.right_nav_toggled",
    "display_field.load_all",
    "display_field.add_one",
    "display_field.update_one",
    "display_field.update_many",
    "display_field.delete_one",
    "display_field.reorder",
    "filter.load_all",
    "filter.add_one",
    "filter.update_one",
    "filter.update_many",
    "filter.delete_one",
    "filter.reorder",
    "noop",
];
