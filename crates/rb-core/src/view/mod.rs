//! Derived views.
//!
//! Pure projections over a [`Snapshot`]. Each is a total function: when the
//! slice it needs is unset it returns `None` rather than failing. Nothing
//! here is computed eagerly; consumers call what they render.
//!
//! [`ViewCache`] memoizes the list projections for consumers that read them
//! on every frame.

mod cache;

use rb_model::{DisplayField, Filter, LastGeneratedReport, NewReportInfo, ReportDetailed, ReportId};

use crate::state::Snapshot;

pub use cache::ViewCache;

pub fn selected_report_id(state: &Snapshot) -> Option<ReportId> {
    state.selected_report().map(|report| report.id)
}

/// Display fields in position order.
pub fn display_fields(state: &Snapshot) -> Vec<DisplayField> {
    state.display_fields.to_vec()
}

pub fn display_fields_count(state: &Snapshot) -> usize {
    state.display_fields.len()
}

/// Filters in position order.
pub fn filters(state: &Snapshot) -> Vec<Filter> {
    state.filters.to_vec()
}

pub fn filters_count(state: &Snapshot) -> usize {
    state.filters.len()
}

/// File reference of the selected report's last export.
pub fn last_generated_report(state: &Snapshot) -> Option<LastGeneratedReport> {
    state.selected_report().map(LastGeneratedReport::from)
}

/// Name, description and root model of the selected report.
pub fn new_report_info(state: &Snapshot) -> Option<NewReportInfo> {
    state.selected_report().map(NewReportInfo::from)
}

/// The selected report with the editor's scratch values and the current
/// display fields and filters merged in. This is the payload a save sends.
pub fn edited_report(state: &Snapshot) -> Option<ReportDetailed> {
    let mut report = state.selected_report()?.clone();
    report.description = state.description_input().to_string();
    report.distinct = state.is_distinct();
    report.displayfield_set = display_fields(state);
    report.filterfield_set = filters(state);
    Some(report)
}
