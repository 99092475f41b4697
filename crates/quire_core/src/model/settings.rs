//! User settings record.
//!
//! # Responsibility
//! - Hold book-creation defaults and the UI theme choice.
//! - Support merge-style partial updates.

use crate::model::book::DEFAULT_PAGE_COUNT;
use crate::model::template::DEFAULT_TEMPLATE_ID;
use serde::{Deserialize, Serialize};

/// Application settings persisted alongside books and templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Template pre-selected in book creation.
    pub default_template: String,
    /// Page count pre-selected in book creation.
    pub default_page_count: u32,
    /// UI theme name; opaque to core.
    pub theme: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_template: DEFAULT_TEMPLATE_ID.to_string(),
            default_page_count: DEFAULT_PAGE_COUNT,
            theme: "dark".to_string(),
        }
    }
}

/// Partial settings fields for merge-style updates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsPatch {
    pub default_template: Option<String>,
    pub default_page_count: Option<u32>,
    pub theme: Option<String>,
}

impl Settings {
    /// Merges patch fields into this record.
    pub fn apply_patch(&mut self, patch: SettingsPatch) {
        if let Some(default_template) = patch.default_template {
            self.default_template = default_template;
        }
        if let Some(default_page_count) = patch.default_page_count {
            self.default_page_count = default_page_count;
        }
        if let Some(theme) = patch.theme {
            self.theme = theme;
        }
    }
}
