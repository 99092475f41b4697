//! Paper template catalog.
//!
//! # Responsibility
//! - Describe the immutable catalog entries offered at book creation.
//! - Keep the built-in catalog (4 free, 2 premium) in one place.
//!
//! # Invariants
//! - Templates are never user-created; the catalog is seeded once.
//! - Premium entries are selectable but block book creation.

use serde::{Deserialize, Serialize};

/// Template id used when book creation omits one.
pub const DEFAULT_TEMPLATE_ID: &str = "ruled";

/// Underlying page background style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaperKind {
    Ruled,
    Grid,
    Dot,
    Unruled,
}

/// Immutable catalog entry describing page styling and premium gating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: PaperKind,
    pub is_premium: bool,
    pub description: String,
}

impl Template {
    fn catalog_entry(
        id: &str,
        name: &str,
        kind: PaperKind,
        is_premium: bool,
        description: &str,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            kind,
            is_premium,
            description: description.to_string(),
        }
    }
}

/// Built-in template catalog, in presentation order.
pub fn default_catalog() -> Vec<Template> {
    vec![
        Template::catalog_entry("ruled", "Ruled", PaperKind::Ruled, false, "Classic lined paper"),
        Template::catalog_entry(
            "grid",
            "Grid",
            PaperKind::Grid,
            false,
            "Perfect for diagrams and sketches",
        ),
        Template::catalog_entry(
            "dot",
            "Dot Grid",
            PaperKind::Dot,
            false,
            "Subtle dots for flexible layouts",
        ),
        Template::catalog_entry("unruled", "Blank", PaperKind::Unruled, false, "Clean blank pages"),
        Template::catalog_entry(
            "study",
            "Study Notes",
            PaperKind::Ruled,
            true,
            "Optimized for note-taking",
        ),
        Template::catalog_entry("diary", "Diary", PaperKind::Ruled, true, "Personal journal layout"),
    ]
}
