//! Backend outcome handlers.
//!
//! Handles:
//! - Report list and report fetch lifecycle
//! - Fields and the relation tree
//! - Edit, delete, preview and export outcomes

use std::sync::Arc;

use super::MessageHandler;
use crate::clock::Clock;
use crate::error::TransitionError;
use crate::message::ReportMessage;
use crate::state::Snapshot;
use crate::tree::{self, RelationNode};

/// Handler for report messages.
pub struct ReportHandler<'a> {
    clock: &'a dyn Clock,
}

impl<'a> ReportHandler<'a> {
    pub fn new(clock: &'a dyn Clock) -> Self {
        Self { clock }
    }
}

impl MessageHandler<ReportMessage> for ReportHandler<'_> {
    fn handle(&self, state: &Snapshot, msg: ReportMessage) -> Result<Snapshot, TransitionError> {
        let mut next = state.clone();
        match msg {
            ReportMessage::SetReportList(reports) => {
                next.reports = Arc::new(reports);
            }

            ReportMessage::FetchStarted(id) => {
                tracing::debug!(report = %id, "report fetch started");
                next.selected_report = None;
                next.editor.description_input = String::new();
            }

            ReportMessage::SetTitle(title) => {
                next.title = title;
            }

            ReportMessage::FetchSucceeded(report) => {
                next.editor.seed_from(&report);
                next.selected_report = Some(Arc::new(report));
                next.related_fields = Arc::default();
                next.fields = Arc::default();
            }

            ReportMessage::ReportFieldsSucceeded {
                fields,
                related_fields,
            } => {
                let roots: Vec<RelationNode> =
                    related_fields.into_iter().map(RelationNode::root).collect();
                next.related_fields = Arc::new(roots);
                next.fields = Arc::new(fields);
            }

            ReportMessage::FieldsSucceeded(fields) => {
                next.fields = Arc::new(fields);
            }

            ReportMessage::RelatedFieldsSucceeded {
                parent,
                related_fields,
            } => {
                if tree::find(&state.related_fields, &parent).is_some() {
                    next.related_fields = Arc::new(tree::populate_children(
                        &state.related_fields,
                        &parent,
                        &related_fields,
                    ));
                } else {
                    tracing::trace!(parent = %parent, "related fields for unknown node ignored");
                }
            }

            ReportMessage::EditSucceeded(report) => {
                next.editor.seed_from(&report);
                next.editor.report_saved = Some(self.clock.now());
                next.selected_report = Some(Arc::new(report));
            }

            ReportMessage::PreviewGenerated(preview) => {
                next.report_preview = Some(Arc::new(preview));
            }

            ReportMessage::DeleteSucceeded(id) => {
                if state.reports.iter().any(|report| report.id == id) {
                    next.reports = Arc::new(
                        state
                            .reports
                            .iter()
                            .filter(|report| report.id != id)
                            .cloned()
                            .collect(),
                    );
                }
                next.selected_report = None;
            }

            ReportMessage::ExportDownloaded(report_file) => {
                if let Some(selected) = &state.selected_report {
                    let mut report = selected.as_ref().clone();
                    report.report_file = Some(report_file);
                    report.report_file_creation = Some(self.clock.now_iso());
                    next.selected_report = Some(Arc::new(report));
                } else {
                    tracing::trace!("export downloaded without a selected report");
                }
            }

            ReportMessage::Unknown => {}
        }
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::{TimeZone, Utc};
    use rb_model::{ReportDetailed, ReportId};

    fn clock() -> FixedClock {
        FixedClock::new(Utc.with_ymd_and_hms(2024, 5, 6, 7, 8, 9).unwrap())
    }

    #[test]
    fn export_stamps_file_and_time_only() {
        let clock = clock();
        let handler = ReportHandler::new(&clock);
        let report = ReportDetailed::new(ReportId::new(4), "Loans").with_description("all");
        let state = handler
            .handle(&Snapshot::new(), ReportMessage::FetchSucceeded(report.clone()))
            .expect("report handler never fails");

        let next = handler
            .handle(&state, ReportMessage::ExportDownloaded("/media/4.csv".to_string()))
            .expect("report handler never fails");
        let selected = next.selected_report().expect("report still selected");
        assert_eq!(selected.report_file.as_deref(), Some("/media/4.csv"));
        assert_eq!(
            selected.report_file_creation.as_deref(),
            Some("2024-05-06T07:08:09.000Z")
        );
        let mut expected = report;
        expected.report_file = selected.report_file.clone();
        expected.report_file_creation = selected.report_file_creation.clone();
        assert_eq!(selected, &expected);
    }

    #[test]
    fn export_without_selection_changes_nothing() {
        let clock = clock();
        let state = Snapshot::new();
        let next = ReportHandler::new(&clock)
            .handle(&state, ReportMessage::ExportDownloaded("x".to_string()))
            .expect("report handler never fails");
        assert_eq!(next, state);
    }

    #[test]
    fn edit_success_stamps_last_saved() {
        let clock = clock();
        let next = ReportHandler::new(&clock)
            .handle(
                &Snapshot::new(),
                ReportMessage::EditSucceeded(
                    ReportDetailed::new(ReportId::new(2), "Saved")
                        .with_description("fresh")
                        .with_distinct(true),
                ),
            )
            .expect("report handler never fails");
        assert_eq!(next.last_saved(), Some(clock.now()));
        assert_eq!(next.description_input(), "fresh");
        assert!(next.is_distinct());
    }
}
