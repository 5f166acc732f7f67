//! Backend outcome messages.

use rb_model::{Field, RelatedField, ReportDetailed, ReportId, ReportPreview, ReportSummary};
use serde::{Deserialize, Serialize};

use crate::tree::NodeId;

/// Results of report requests made by the network layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "payload", rename_all = "snake_case")]
pub enum ReportMessage {
    /// Report list fetched
    SetReportList(Vec<ReportSummary>),

    /// A report fetch was started
    FetchStarted(ReportId),

    /// Page title changed
    SetTitle(String),

    /// Report fetched
    FetchSucceeded(ReportDetailed),

    /// Fields and top-level relations of the report's root model fetched
    ReportFieldsSucceeded {
        fields: Vec<Field>,
        related_fields: Vec<RelatedField>,
    },

    /// Fields of a related model fetched
    FieldsSucceeded(Vec<Field>),

    /// Relations below `parent` fetched
    RelatedFieldsSucceeded {
        parent: NodeId,
        related_fields: Vec<RelatedField>,
    },

    /// Report saved
    EditSucceeded(ReportDetailed),

    /// Preview generated
    PreviewGenerated(ReportPreview),

    /// Report deleted
    DeleteSucceeded(ReportId),

    /// Export finished; payload is the file reference
    ExportDownloaded(String),

    #[serde(other)]
    Unknown,
}

impl ReportMessage {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::SetReportList(_) => "report.set_report_list",
            Self::FetchStarted(_) => "report.fetch_started",
            Self::SetTitle(_) => "report.set_title",
            Self::FetchSucceeded(_) => "report.fetch_succeeded",
            Self::ReportFieldsSucceeded { .. } => "report.report_fields_succeeded",
            Self::FieldsSucceeded(_) => "report.fields_succeeded",
            Self::RelatedFieldsSucceeded { .. } => "report.related_fields_succeeded",
            Self::EditSucceeded(_) => "report.edit_succeeded",
            Self::PreviewGenerated(_) => "report.preview_generated",
            Self::DeleteSucceeded(_) => "report.delete_succeeded",
            Self::ExportDownloaded(_) => "report.export_downloaded",
            Self::Unknown => "report.unknown",
        }
    }
}
