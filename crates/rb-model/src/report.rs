//! Reports and their projections.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{DisplayField, Filter, ModelError, ReportId};

/// Entry of the report list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub id: ReportId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub modified: Option<String>,
    #[serde(default)]
    pub root_model: u64,
    #[serde(default)]
    pub root_model_name: String,
    #[serde(default)]
    pub user_created: Option<u64>,
}

/// A fully fetched report, as shown in the editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportDetailed {
    pub id: ReportId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub modified: Option<String>,
    #[serde(default)]
    pub root_model: u64,
    #[serde(default)]
    pub root_model_name: String,
    #[serde(default)]
    pub distinct: bool,
    #[serde(default)]
    pub user_created: Option<u64>,
    #[serde(default)]
    pub user_modified: Option<u64>,
    /// Location of the last exported file.
    #[serde(default)]
    pub report_file: Option<String>,
    /// ISO-8601 creation time of `report_file`.
    #[serde(default)]
    pub report_file_creation: Option<String>,
    #[serde(default)]
    pub displayfield_set: Vec<DisplayField>,
    #[serde(default)]
    pub filterfield_set: Vec<Filter>,
}

impl ReportDetailed {
    pub fn new(id: ReportId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            modified: None,
            root_model: 0,
            root_model_name: String::new(),
            distinct: false,
            user_created: None,
            user_modified: None,
            report_file: None,
            report_file_creation: None,
            displayfield_set: Vec::new(),
            filterfield_set: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_distinct(mut self, distinct: bool) -> Self {
        self.distinct = distinct;
        self
    }

    pub fn with_root_model(mut self, root_model: u64, root_model_name: impl Into<String>) -> Self {
        self.root_model = root_model;
        self.root_model_name = root_model_name.into();
        self
    }

    /// Parse `report_file_creation`.
    ///
    /// Returns `Ok(None)` when no file has been generated yet.
    pub fn report_file_created_at(&self) -> Result<Option<DateTime<Utc>>, ModelError> {
        self.report_file_creation
            .as_deref()
            .map(|value| {
                DateTime::parse_from_rfc3339(value)
                    .map(|ts| ts.with_timezone(&Utc))
                    .map_err(|e| ModelError::InvalidTimestamp {
                        value: value.to_string(),
                        reason: e.to_string(),
                    })
            })
            .transpose()
    }
}

/// Tabular preview of a report's output.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportPreview {
    pub data: Vec<Vec<serde_json::Value>>,
    pub meta: PreviewMeta,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewMeta {
    pub titles: Vec<String>,
}

/// File reference of the last export of the selected report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastGeneratedReport {
    pub report_file: Option<String>,
    pub report_file_creation: Option<String>,
}

/// Fields needed to create a copy of the selected report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewReportInfo {
    pub name: String,
    pub description: String,
    pub root_model: u64,
}

impl From<&ReportDetailed> for LastGeneratedReport {
    fn from(report: &ReportDetailed) -> Self {
        Self {
            report_file: report.report_file.clone(),
            report_file_creation: report.report_file_creation.clone(),
        }
    }
}

impl From<&ReportDetailed> for NewReportInfo {
    fn from(report: &ReportDetailed) -> Self {
        Self {
            name: report.name.clone(),
            description: report.description.clone(),
            root_model: report.root_model,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_file_timestamp_parses() {
        let mut report = ReportDetailed::new(ReportId::new(1), "Books");
        assert_eq!(report.report_file_created_at(), Ok(None));

        report.report_file_creation = Some("2024-03-01T12:30:00.000Z".to_string());
        let parsed = report
            .report_file_created_at()
            .expect("valid timestamp")
            .expect("timestamp present");
        assert_eq!(parsed.to_rfc3339(), "2024-03-01T12:30:00+00:00");
    }

    #[test]
    fn bad_report_file_timestamp_is_an_error() {
        let mut report = ReportDetailed::new(ReportId::new(1), "Books");
        report.report_file_creation = Some("yesterday".to_string());
        assert!(matches!(
            report.report_file_created_at(),
            Err(ModelError::InvalidTimestamp { .. })
        ));
    }
}
