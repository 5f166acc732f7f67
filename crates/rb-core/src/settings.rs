//! Reducer settings.
//!
//! Settings are plain data parsed from TOML. Transitions never touch the
//! filesystem; [`Settings::load_from`] is for callers at startup.

use std::fs;
use std::path::Path;

use rb_model::FilterType;
use serde::{Deserialize, Serialize};

use crate::error::SettingsError;

// =============================================================================
// ROOT SETTINGS
// =============================================================================

/// Settings that shape how events are interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Which editor tab adds to which entity kind.
    pub tabs: TabSettings,

    /// Defaults for newly added filters.
    pub filters: FilterSettings,
}

impl Settings {
    /// Parse settings from TOML. Missing keys fall back to defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, SettingsError> {
        let settings: Self = toml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read and parse a TOML settings file.
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let content = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn to_toml_string(&self) -> Result<String, SettingsError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.tabs.display_fields == self.tabs.filters {
            return Err(SettingsError::ConflictingTabs(self.tabs.filters));
        }
        Ok(())
    }

    /// Entity kind that "add report field" targets on the given tab.
    pub fn tab_target(&self, active_tab: usize) -> Option<TabTarget> {
        if active_tab == self.tabs.display_fields {
            Some(TabTarget::DisplayFields)
        } else if active_tab == self.tabs.filters {
            Some(TabTarget::Filters)
        } else {
            None
        }
    }
}

// =============================================================================
// SECTIONS
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TabSettings {
    pub display_fields: usize,
    pub filters: usize,
}

impl Default for TabSettings {
    fn default() -> Self {
        Self {
            display_fields: 0,
            filters: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSettings {
    pub default_filter_type: FilterType,
}

/// Entity kind edited on a tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabTarget {
    DisplayFields,
    Filters,
}
