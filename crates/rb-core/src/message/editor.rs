//! Report editor messages.

use rb_model::{Field, NewReportField};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "payload", rename_all = "snake_case")]
pub enum EditorMessage {
    DescriptionChanged(String),

    /// `Some` sets the flag, `None` flips it
    DistinctToggled(Option<bool>),

    TabChanged(usize),

    /// Append the picked field to the entity kind of the active tab
    AddReportField(NewReportField),

    FieldSelected(Field),

    #[serde(other)]
    Unknown,
}

impl EditorMessage {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::DescriptionChanged(_) => "editor.description_changed",
            Self::DistinctToggled(_) => "editor.distinct_toggled",
            Self::TabChanged(_) => "editor.tab_changed",
            Self::AddReportField(_) => "editor.add_report_field",
            Self::FieldSelected(_) => "editor.field_selected",
            Self::Unknown => "editor.unknown",
        }
    }
}
