//! Selectable columns and model relations.

use serde::{Deserialize, Serialize};

/// A selectable column on the report's root model (or a related model).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Field {
    pub name: String,
    pub field: String,
    pub field_verbose: String,
    pub field_type: String,
    pub is_default: bool,
    pub can_filter: bool,
    /// Lookup path from the root model, e.g. `"author__"`.
    pub path: String,
    pub path_verbose: String,
    pub help_text: String,
}

/// A relation from one model to another, as returned by the backend.
///
/// Relations carry no children of their own; nesting is tracked by the
/// relation tree in `rb-core`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RelatedField {
    pub field_name: String,
    pub verbose_name: String,
    pub path: String,
    pub help_text: String,
    pub model_id: u64,
    pub parent_model_name: String,
    pub parent_model_app_label: String,
    pub included_model: bool,
}

impl RelatedField {
    pub fn new(field_name: impl Into<String>, verbose_name: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
            verbose_name: verbose_name.into(),
            ..Self::default()
        }
    }
}

/// The column a user picked to add to the active tab.
///
/// The reducer turns this into a display field or a filter, allocating its
/// position and tagging it with the selected report.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NewReportField {
    pub path: String,
    pub path_verbose: String,
    pub field: String,
    pub field_verbose: String,
    pub name: String,
    pub field_type: String,
}

impl NewReportField {
    pub fn new(field: impl Into<String>, field_verbose: impl Into<String>) -> Self {
        let field = field.into();
        Self {
            name: field.clone(),
            field,
            field_verbose: field_verbose.into(),
            ..Self::default()
        }
    }

    pub fn with_path(mut self, path: impl Into<String>, path_verbose: impl Into<String>) -> Self {
        self.path = path.into();
        self.path_verbose = path_verbose.into();
        self
    }

    pub fn with_field_type(mut self, field_type: impl Into<String>) -> Self {
        self.field_type = field_type.into();
        self
    }
}

impl From<&Field> for NewReportField {
    fn from(field: &Field) -> Self {
        Self {
            path: field.path.clone(),
            path_verbose: field.path_verbose.clone(),
            field: field.field.clone(),
            field_verbose: field.field_verbose.clone(),
            name: field.name.clone(),
            field_type: field.field_type.clone(),
        }
    }
}
