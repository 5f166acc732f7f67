//! Search box and side panel messages.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "payload", rename_all = "snake_case")]
pub enum LayoutMessage {
    ReportSearchChanged(String),
    FieldSearchChanged(String),
    RelationsSearchChanged(String),
    LeftNavToggled,
    RightNavToggled,
    #[serde(other)]
    Unknown,
}

impl LayoutMessage {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ReportSearchChanged(_) => "layout.report_search_changed",
            Self::FieldSearchChanged(_) => "layout.field_search_changed",
            Self::RelationsSearchChanged(_) => "layout.relations_search_changed",
            Self::LeftNavToggled => "layout.left_nav_toggled",
            Self::RightNavToggled => "layout.right_nav_toggled",
            Self::Unknown => "layout.unknown",
        }
    }
}
