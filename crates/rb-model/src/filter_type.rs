//! Filter lookup types.
//!
//! A filter applies one Django-style field lookup to its field. The wire
//! representation is the lookup name itself (`"exact"`, `"icontains"`, ...).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ModelError;

/// Lookup applied by a report filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterType {
    /// Exact match (the default for newly added filters).
    #[default]
    Exact,
    /// Case-insensitive exact match.
    Iexact,
    Contains,
    Icontains,
    /// Membership in a comma separated list.
    In,
    Gt,
    Gte,
    Lt,
    Lte,
    Startswith,
    Istartswith,
    Endswith,
    Iendswith,
    /// Between `filter_value` and `filter_value2`.
    Range,
    WeekDay,
    Isnull,
    Max,
    Min,
}

impl FilterType {
    pub const ALL: [Self; 18] = [
        Self::Exact,
        Self::Iexact,
        Self::Contains,
        Self::Icontains,
        Self::In,
        Self::Gt,
        Self::Gte,
        Self::Lt,
        Self::Lte,
        Self::Startswith,
        Self::Istartswith,
        Self::Endswith,
        Self::Iendswith,
        Self::Range,
        Self::WeekDay,
        Self::Isnull,
        Self::Max,
        Self::Min,
    ];

    /// Lookup name as sent to the backend.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::Iexact => "iexact",
            Self::Contains => "contains",
            Self::Icontains => "icontains",
            Self::In => "in",
            Self::Gt => "gt",
            Self::Gte => "gte",
            Self::Lt => "lt",
            Self::Lte => "lte",
            Self::Startswith => "startswith",
            Self::Istartswith => "istartswith",
            Self::Endswith => "endswith",
            Self::Iendswith => "iendswith",
            Self::Range => "range",
            Self::WeekDay => "week_day",
            Self::Isnull => "isnull",
            Self::Max => "max",
            Self::Min => "min",
        }
    }

    /// Returns true if the lookup reads `filter_value2` as well.
    pub fn uses_second_value(&self) -> bool {
        matches!(self, Self::Range)
    }
}

impl fmt::Display for FilterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == needle)
            .ok_or_else(|| ModelError::UnknownFilterType(s.to_string()))
    }
}
