//! Report-owned entities: display fields (columns) and filters.
//!
//! Both carry a `position` that orders them within their report. Partial
//! updates are expressed as patches; `None` leaves a field untouched.

use serde::{Deserialize, Deserializer, Serialize};

use crate::{FilterType, NewReportField, ReportId};

/// Default column width for newly added display fields.
pub const DEFAULT_DISPLAY_WIDTH: u32 = 15;

/// One output column of a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayField {
    /// Backend id, absent until the report is saved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub report: ReportId,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub path_verbose: String,
    pub field: String,
    #[serde(default)]
    pub field_verbose: String,
    pub name: String,
    #[serde(default)]
    pub sort: Option<u32>,
    #[serde(default)]
    pub sort_reverse: bool,
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default)]
    pub aggregate: String,
    pub position: u32,
    #[serde(default)]
    pub total: bool,
    #[serde(default)]
    pub group: bool,
    #[serde(default)]
    pub display_format: Option<u64>,
    #[serde(default)]
    pub field_type: String,
}

fn default_width() -> u32 {
    DEFAULT_DISPLAY_WIDTH
}

impl DisplayField {
    /// Build a display field for a freshly picked column.
    pub fn from_new(field: NewReportField, report: ReportId, position: u32) -> Self {
        Self {
            id: None,
            report,
            path: field.path,
            path_verbose: field.path_verbose,
            field: field.field,
            field_verbose: field.field_verbose,
            name: field.name,
            sort: None,
            sort_reverse: false,
            width: DEFAULT_DISPLAY_WIDTH,
            aggregate: String::new(),
            position,
            total: false,
            group: false,
            display_format: None,
            field_type: field.field_type,
        }
    }
}

/// Partial update of a [`DisplayField`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayFieldPatch {
    pub name: Option<String>,
    #[serde(deserialize_with = "double_option")]
    pub sort: Option<Option<u32>>,
    pub sort_reverse: Option<bool>,
    pub width: Option<u32>,
    pub aggregate: Option<String>,
    pub total: Option<bool>,
    pub group: Option<bool>,
    #[serde(deserialize_with = "double_option")]
    pub display_format: Option<Option<u64>>,
}

impl DisplayFieldPatch {
    pub fn apply_to(&self, target: &mut DisplayField) {
        if let Some(name) = &self.name {
            target.name.clone_from(name);
        }
        if let Some(sort) = self.sort {
            target.sort = sort;
        }
        if let Some(sort_reverse) = self.sort_reverse {
            target.sort_reverse = sort_reverse;
        }
        if let Some(width) = self.width {
            target.width = width;
        }
        if let Some(aggregate) = &self.aggregate {
            target.aggregate.clone_from(aggregate);
        }
        if let Some(total) = self.total {
            target.total = total;
        }
        if let Some(group) = self.group {
            target.group = group;
        }
        if let Some(display_format) = self.display_format {
            target.display_format = display_format;
        }
    }
}

// An explicit `null` clears the value; a missing key leaves it alone.
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// One filter condition of a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub report: ReportId,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub path_verbose: String,
    pub field: String,
    #[serde(default)]
    pub field_verbose: String,
    #[serde(default)]
    pub filter_type: FilterType,
    #[serde(default)]
    pub filter_value: String,
    #[serde(default)]
    pub filter_value2: String,
    #[serde(default)]
    pub exclude: bool,
    pub position: u32,
    #[serde(default)]
    pub field_type: String,
}

impl Filter {
    /// Build a filter for a freshly picked column.
    pub fn from_new(
        field: NewReportField,
        report: ReportId,
        position: u32,
        filter_type: FilterType,
    ) -> Self {
        Self {
            id: None,
            report,
            path: field.path,
            path_verbose: field.path_verbose,
            field: field.field,
            field_verbose: field.field_verbose,
            filter_type,
            filter_value: String::new(),
            filter_value2: String::new(),
            exclude: false,
            position,
            field_type: field.field_type,
        }
    }
}

/// Partial update of a [`Filter`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterPatch {
    pub filter_type: Option<FilterType>,
    pub filter_value: Option<String>,
    pub filter_value2: Option<String>,
    pub exclude: Option<bool>,
}

impl FilterPatch {
    pub fn apply_to(&self, target: &mut Filter) {
        if let Some(filter_type) = self.filter_type {
            target.filter_type = filter_type;
        }
        if let Some(value) = &self.filter_value {
            target.filter_value.clone_from(value);
        }
        if let Some(value) = &self.filter_value2 {
            target.filter_value2.clone_from(value);
        }
        if let Some(exclude) = self.exclude {
            target.exclude = exclude;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_patch_leaves_display_field_untouched() {
        let original = DisplayField::from_new(
            NewReportField::new("title", "Title"),
            ReportId::new(3),
            0,
        );
        let mut patched = original.clone();
        DisplayFieldPatch::default().apply_to(&mut patched);
        assert_eq!(patched, original);
    }

    #[test]
    fn patch_can_clear_sort() {
        let mut field = DisplayField::from_new(
            NewReportField::new("title", "Title"),
            ReportId::new(3),
            0,
        );
        field.sort = Some(1);
        DisplayFieldPatch {
            sort: Some(None),
            ..Default::default()
        }
        .apply_to(&mut field);
        assert_eq!(field.sort, None);
    }

    #[test]
    fn null_in_patch_json_clears_sort() {
        let patch: DisplayFieldPatch =
            serde_json::from_str(r#"{"sort": null}"#).expect("deserialize patch");
        assert_eq!(patch.sort, Some(None));
        let patch: DisplayFieldPatch = serde_json::from_str("{}").expect("deserialize patch");
        assert_eq!(patch.sort, None);
    }

    #[test]
    fn filter_patch_merges_only_given_fields() {
        let mut filter = Filter::from_new(
            NewReportField::new("age", "Age"),
            ReportId::new(3),
            2,
            FilterType::Exact,
        );
        FilterPatch {
            filter_type: Some(FilterType::Gte),
            filter_value: Some("18".to_string()),
            ..Default::default()
        }
        .apply_to(&mut filter);
        assert_eq!(filter.filter_type, FilterType::Gte);
        assert_eq!(filter.filter_value, "18");
        assert!(filter.filter_value2.is_empty());
        assert!(!filter.exclude);
        assert_eq!(filter.position, 2);
    }
}
