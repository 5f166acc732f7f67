//! Root snapshot.

use chrono::{DateTime, Utc};
use rb_model::{DisplayField, Field, Filter, ReportDetailed, ReportPreview, ReportSummary};
use std::sync::Arc;

use super::{EditorState, LayoutState};
use crate::store::EntityStore;
use crate::tree::RelationNode;

/// Complete, immutable application state at one point in time.
///
/// Large slices sit behind `Arc`: a transition clones the snapshot cheaply
/// and replaces only the slices it changes. Untouched slices keep their
/// identity, which is what [`crate::view::ViewCache`] keys on.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Snapshot {
    pub(crate) reports: Arc<Vec<ReportSummary>>,
    pub(crate) selected_report: Option<Arc<ReportDetailed>>,
    pub(crate) related_fields: Arc<Vec<RelationNode>>,
    pub(crate) fields: Arc<Vec<Field>>,
    pub(crate) title: String,
    pub(crate) report_preview: Option<Arc<ReportPreview>>,
    pub(crate) display_fields: Arc<EntityStore<DisplayField>>,
    pub(crate) filters: Arc<EntityStore<Filter>>,
    pub(crate) editor: EditorState,
    pub(crate) layout: LayoutState,
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Report data
    // ========================================================================

    pub fn reports(&self) -> &[ReportSummary] {
        &self.reports
    }

    pub fn selected_report(&self) -> Option<&ReportDetailed> {
        self.selected_report.as_deref()
    }

    pub fn related_fields(&self) -> &[RelationNode] {
        &self.related_fields
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn report_preview(&self) -> Option<&ReportPreview> {
        self.report_preview.as_deref()
    }

    pub fn display_fields(&self) -> &EntityStore<DisplayField> {
        &self.display_fields
    }

    pub fn filters(&self) -> &EntityStore<Filter> {
        &self.filters
    }

    // ========================================================================
    // Editor scratch state
    // ========================================================================

    pub fn description_input(&self) -> &str {
        &self.editor.description_input
    }

    pub fn is_distinct(&self) -> bool {
        self.editor.is_distinct
    }

    pub fn active_tab(&self) -> usize {
        self.editor.active_tab
    }

    pub fn selected_field(&self) -> Option<&Field> {
        self.editor.selected_field.as_ref()
    }

    pub fn last_saved(&self) -> Option<DateTime<Utc>> {
        self.editor.report_saved
    }

    // ========================================================================
    // Layout
    // ========================================================================

    pub fn report_search_text(&self) -> &str {
        &self.layout.report_search_text
    }

    pub fn field_search_text(&self) -> &str {
        &self.layout.field_search_text
    }

    pub fn relations_search_text(&self) -> &str {
        &self.layout.relations_search_text
    }

    pub fn left_nav_open(&self) -> bool {
        self.layout.left_nav_open
    }

    pub fn right_nav_open(&self) -> bool {
        self.layout.right_nav_open
    }
}
