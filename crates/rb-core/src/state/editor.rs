use chrono::{DateTime, Utc};
use rb_model::{Field, ReportDetailed};

/// Scratch state of the report being edited.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EditorState {
    /// Description as currently typed; seeded from the fetched report.
    pub(crate) description_input: String,
    /// Distinct flag as currently toggled; seeded from the fetched report.
    pub(crate) is_distinct: bool,
    pub(crate) active_tab: usize,
    pub(crate) selected_field: Option<Field>,
    /// When the report was last saved successfully.
    pub(crate) report_saved: Option<DateTime<Utc>>,
}

impl EditorState {
    /// Start editing from the server's copy of `report`.
    pub(crate) fn seed_from(&mut self, report: &ReportDetailed) {
        self.description_input.clone_from(&report.description);
        self.is_distinct = report.distinct;
    }
}
