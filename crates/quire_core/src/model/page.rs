//! Page and line shapes.
//!
//! # Responsibility
//! - Model one fixed-grid page of 33 line slots.
//! - Keep the plain-text vs tagged-block distinction explicit in the type
//!   system instead of a dynamic check at load time.
//!
//! # Invariants
//! - `Line::Plain("")` is the canonical empty slot.
//! - `blocks` is reserved in the persisted schema and never populated.

use crate::model::book::LINES_PER_PAGE;
use serde::{Deserialize, Serialize};

/// Block tag carried by structured lines.
///
/// Wire strings match the persisted schema (`"h1"`, `"bullet-list"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockKind {
    #[serde(rename = "h1")]
    H1,
    #[serde(rename = "h2")]
    H2,
    #[serde(rename = "h3")]
    H3,
    #[serde(rename = "table")]
    Table,
    #[serde(rename = "bullet-list")]
    BulletList,
    #[serde(rename = "number-list")]
    NumberList,
    #[serde(rename = "blank")]
    Blank,
}

impl BlockKind {
    /// Returns the heading level for `h1`/`h2`/`h3` tags.
    pub fn heading_level(self) -> Option<u8> {
        match self {
            Self::H1 => Some(1),
            Self::H2 => Some(2),
            Self::H3 => Some(3),
            _ => None,
        }
    }

    /// Persisted wire string for this tag.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::H3 => "h3",
            Self::Table => "table",
            Self::BulletList => "bullet-list",
            Self::NumberList => "number-list",
            Self::Blank => "blank",
        }
    }
}

/// One editable row within a page.
///
/// Persisted either as a bare JSON string (plain text) or as an object
/// carrying a `blockType` tag. The untagged representation keeps stored data
/// byte-compatible with the documented record layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Line {
    Plain(String),
    Block {
        text: String,
        #[serde(rename = "blockType")]
        block_type: BlockKind,
    },
}

impl Line {
    /// Canonical empty line slot.
    pub fn empty() -> Self {
        Self::Plain(String::new())
    }

    /// Text content regardless of variant.
    pub fn text(&self) -> &str {
        match self {
            Self::Plain(text) => text,
            Self::Block { text, .. } => text,
        }
    }

    /// Block tag, when this line carries one.
    pub fn block_kind(&self) -> Option<BlockKind> {
        match self {
            Self::Plain(_) => None,
            Self::Block { block_type, .. } => Some(*block_type),
        }
    }

    /// Whether this slot holds neither text nor a block tag.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Plain(text) if text.is_empty())
    }
}

/// One of a book's fixed-count content units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    /// 1-based position, unique within its book.
    pub page_number: u32,
    /// Exactly `LINES_PER_PAGE` slots, positionally ordered.
    pub lines: Vec<Line>,
    /// Reserved in the persisted schema; never populated.
    pub blocks: Vec<serde_json::Value>,
}

impl Page {
    /// Creates a pre-allocated empty page.
    pub fn empty(page_number: u32) -> Self {
        Self {
            page_number,
            lines: vec![Line::empty(); LINES_PER_PAGE],
            blocks: Vec::new(),
        }
    }
}

/// Partial page content for merge-style updates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PagePatch {
    /// Replacement line sequence; must keep the fixed slot count.
    pub lines: Option<Vec<Line>>,
}

impl Page {
    /// Merges patch fields into this page.
    pub fn apply_patch(&mut self, patch: PagePatch) {
        if let Some(lines) = patch.lines {
            self.lines = lines;
        }
    }
}
