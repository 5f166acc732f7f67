//! Report editor handlers.
//!
//! Handles:
//! - Description and distinct scratch edits
//! - Tab navigation and field selection
//! - Adding the picked field to the active tab's entity kind

use std::sync::Arc;

use rb_model::{DisplayField, Filter, NewReportField};

use super::MessageHandler;
use crate::error::TransitionError;
use crate::message::EditorMessage;
use crate::settings::{Settings, TabTarget};
use crate::state::Snapshot;

/// Handler for editor messages.
pub struct EditorHandler<'a> {
    settings: &'a Settings,
}

impl<'a> EditorHandler<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }
}

impl MessageHandler<EditorMessage> for EditorHandler<'_> {
    fn handle(&self, state: &Snapshot, msg: EditorMessage) -> Result<Snapshot, TransitionError> {
        match msg {
            EditorMessage::DescriptionChanged(text) => {
                let mut next = state.clone();
                next.editor.description_input = text;
                Ok(next)
            }

            EditorMessage::DistinctToggled(value) => {
                let mut next = state.clone();
                next.editor.is_distinct = value.unwrap_or(!state.editor.is_distinct);
                Ok(next)
            }

            EditorMessage::TabChanged(tab) => {
                let mut next = state.clone();
                next.editor.active_tab = tab;
                Ok(next)
            }

            EditorMessage::AddReportField(field) => self.add_report_field(state, field),

            EditorMessage::FieldSelected(field) => {
                let mut next = state.clone();
                next.editor.selected_field = Some(field);
                Ok(next)
            }

            EditorMessage::Unknown => Ok(state.clone()),
        }
    }
}

impl EditorHandler<'_> {
    fn add_report_field(
        &self,
        state: &Snapshot,
        field: NewReportField,
    ) -> Result<Snapshot, TransitionError> {
        let Some(target) = self.settings.tab_target(state.editor.active_tab) else {
            tracing::trace!(tab = state.editor.active_tab, "no entity kind on active tab");
            return Ok(state.clone());
        };
        let Some(report) = state.selected_report.as_deref() else {
            tracing::warn!("add report field without a selected report");
            return Err(TransitionError::NoActiveReport {
                event: "editor.add_report_field",
            });
        };

        let mut next = state.clone();
        match target {
            TabTarget::DisplayFields => {
                let position = state.display_fields.next_position();
                let display_field = DisplayField::from_new(field, report.id, position);
                next.display_fields = Arc::new(state.display_fields.add_one(display_field));
            }
            TabTarget::Filters => {
                let position = state.filters.next_position();
                let filter = Filter::from_new(
                    field,
                    report.id,
                    position,
                    self.settings.filters.default_filter_type,
                );
                next.filters = Arc::new(state.filters.add_one(filter));
            }
        }
        Ok(next)
    }
}
