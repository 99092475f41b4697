//! In-memory editing state for one page.
//!
//! # Responsibility
//! - Hold the fixed 33-slot line grid and the active focus position.
//! - Apply shortcut transforms and keystroke navigation.
//! - Serialize to / restore from the persisted `lines` sequence.
//!
//! # Invariants
//! - Slot count never changes; transforms replace a slot's body in place.
//! - Rich bodies (tables, lists, blank space) exist only in-session; the
//!   persisted form keeps the text plus the `blockType` tag.

use crate::editor::shortcut::{match_shortcut, Shortcut};
use crate::model::book::LINES_PER_PAGE;
use crate::model::page::{BlockKind, Line};

/// Marker style for list blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListStyle {
    Bullet,
    Number,
}

/// Editable table grid created by the `T1`/`T2` shortcuts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableBlock {
    pub rows: usize,
    pub cols: usize,
    /// Row-major cell texts; the header row comes prefilled.
    pub cells: Vec<Vec<String>>,
}

impl TableBlock {
    fn new(rows: usize, cols: usize) -> Self {
        let cells = (0..rows)
            .map(|row| {
                (0..cols)
                    .map(|col| {
                        if row == 0 {
                            format!("Column {}", col + 1)
                        } else {
                            String::new()
                        }
                    })
                    .collect()
            })
            .collect();
        Self { rows, cols, cells }
    }
}

/// List block created by the `L1`/`L2` shortcuts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListBlock {
    pub style: ListStyle,
    /// Three independently editable items.
    pub items: Vec<String>,
}

impl ListBlock {
    fn new(style: ListStyle) -> Self {
        Self {
            style,
            items: vec![String::new(); 3],
        }
    }
}

/// Transient rich content of one slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineBody {
    /// Ordinary text row (also used by headings).
    Text,
    Table(TableBlock),
    List(ListBlock),
    /// Ruled blank space spanning the given number of line-heights.
    Blank { line_heights: u8 },
}

/// One slot of the editing grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorLine {
    pub text: String,
    /// Block tag carried into persistence, when any.
    pub kind: Option<BlockKind>,
    pub body: LineBody,
}

impl EditorLine {
    fn empty() -> Self {
        Self {
            text: String::new(),
            kind: None,
            body: LineBody::Text,
        }
    }

    /// Whether this slot shows as holding content.
    pub fn has_content(&self) -> bool {
        !self.text.trim().is_empty()
    }

    fn accepts_text(&self) -> bool {
        matches!(self.body, LineBody::Text)
    }
}

/// Active input position within the page grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Line { line: usize, column: usize },
    TableCell { line: usize, row: usize, col: usize },
    ListItem { line: usize, item: usize },
}

/// Editing state for a single page: the fixed line grid plus focus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageEditor {
    lines: Vec<EditorLine>,
    focus: Focus,
}

impl Default for PageEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl PageEditor {
    /// Creates an empty grid with focus at the first line.
    pub fn new() -> Self {
        Self {
            lines: (0..LINES_PER_PAGE).map(|_| EditorLine::empty()).collect(),
            focus: Focus::Line { line: 0, column: 0 },
        }
    }

    /// Restores editing state from persisted lines.
    ///
    /// Plain strings become line text; structured variants restore text and
    /// the block tag (heading styles follow the tag). Rich structure is not
    /// reconstructed - persistence keeps only the tag.
    pub fn from_lines(lines: &[Line]) -> Self {
        let mut editor = Self::new();
        for (slot, line) in editor.lines.iter_mut().zip(lines) {
            slot.text = line.text().to_string();
            slot.kind = line.block_kind();
        }
        editor
    }

    /// Serializes the grid positionally for storage.
    ///
    /// Tagged slots emit the structured variant; untagged slots emit the
    /// trimmed plain text, so empty slots serialize as empty strings.
    pub fn to_lines(&self) -> Vec<Line> {
        self.lines
            .iter()
            .map(|slot| match slot.kind {
                Some(block_type) => Line::Block {
                    text: flatten_body(slot),
                    block_type,
                },
                None => Line::Plain(slot.text.trim().to_string()),
            })
            .collect()
    }

    pub fn line(&self, index: usize) -> Option<&EditorLine> {
        self.lines.get(index)
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Places the caret on a line, clamping the column to the text length.
    pub fn focus_line(&mut self, line: usize, column: usize) {
        if line >= self.lines.len() {
            return;
        }
        let max_column = self.lines[line].text.chars().count();
        self.focus = Focus::Line {
            line,
            column: column.min(max_column),
        };
    }

    /// Replaces a line's text from an input event, applying at most one
    /// shortcut transform.
    ///
    /// Slots already holding a rich body ignore text input. A recognized
    /// shortcut strips its token and converts the slot; anything else leaves
    /// the text exactly as typed.
    pub fn set_line_text(&mut self, index: usize, text: &str) -> Option<Shortcut> {
        if index >= self.lines.len() || !self.lines[index].accepts_text() {
            return None;
        }

        self.lines[index].text = text.to_string();
        let (shortcut, rest) = match_shortcut(text)?;
        let rest = rest.to_string();
        self.apply_shortcut(index, shortcut, rest);
        Some(shortcut)
    }

    fn apply_shortcut(&mut self, index: usize, shortcut: Shortcut, rest: String) {
        let slot = &mut self.lines[index];
        match shortcut {
            Shortcut::H1 | Shortcut::H2 | Shortcut::H3 => {
                slot.kind = Some(match shortcut {
                    Shortcut::H1 => BlockKind::H1,
                    Shortcut::H2 => BlockKind::H2,
                    _ => BlockKind::H3,
                });
                slot.text = rest;
                // Caret returns to the start of the heading.
                self.focus = Focus::Line {
                    line: index,
                    column: 0,
                };
            }
            Shortcut::T1 | Shortcut::T2 => {
                let size = if shortcut == Shortcut::T1 { 2 } else { 3 };
                slot.kind = Some(BlockKind::Table);
                slot.body = LineBody::Table(TableBlock::new(size, size));
                slot.text = rest;
                self.focus = Focus::TableCell {
                    line: index,
                    row: 0,
                    col: 0,
                };
            }
            Shortcut::L1 | Shortcut::L2 => {
                let style = if shortcut == Shortcut::L1 {
                    ListStyle::Bullet
                } else {
                    ListStyle::Number
                };
                slot.kind = Some(match style {
                    ListStyle::Bullet => BlockKind::BulletList,
                    ListStyle::Number => BlockKind::NumberList,
                });
                slot.body = LineBody::List(ListBlock::new(style));
                slot.text = rest;
                self.focus = Focus::ListItem {
                    line: index,
                    item: 0,
                };
            }
            Shortcut::B1 | Shortcut::B2 => {
                let line_heights = if shortcut == Shortcut::B1 { 2 } else { 4 };
                slot.kind = Some(BlockKind::Blank);
                slot.body = LineBody::Blank { line_heights };
                // The placeholder replaces any typed remainder.
                slot.text = String::new();
                self.focus = Focus::Line {
                    line: index,
                    column: 0,
                };
            }
        }
    }

    /// Enter: move focus to the start of the next line. Lines are fixed
    /// one-per-row, so no newline is ever inserted; the last line is a no-op.
    pub fn press_enter(&mut self) {
        if let Focus::Line { line, .. } = self.focus {
            if line + 1 < self.lines.len() {
                self.focus = Focus::Line {
                    line: line + 1,
                    column: 0,
                };
            }
        }
    }

    /// Backspace: on an empty line, move focus to the end of the previous
    /// line instead of deleting structure; otherwise delete the character
    /// before the caret.
    pub fn press_backspace(&mut self) {
        let Focus::Line { line, column } = self.focus else {
            return;
        };

        if self.lines[line].text.trim().is_empty() {
            if line > 0 {
                let column = self.lines[line - 1].text.chars().count();
                self.focus = Focus::Line {
                    line: line - 1,
                    column,
                };
            }
            return;
        }

        if column == 0 {
            return;
        }
        let text: String = self.lines[line]
            .text
            .chars()
            .enumerate()
            .filter(|(i, _)| *i != column - 1)
            .map(|(_, ch)| ch)
            .collect();
        self.lines[line].text = text;
        self.focus = Focus::Line {
            line,
            column: column - 1,
        };
    }

    /// Edits one cell of a table slot; focus follows the edited cell.
    pub fn set_table_cell(&mut self, index: usize, row: usize, col: usize, text: &str) -> bool {
        let Some(slot) = self.lines.get_mut(index) else {
            return false;
        };
        let LineBody::Table(table) = &mut slot.body else {
            return false;
        };
        let Some(cell) = table.cells.get_mut(row).and_then(|cells| cells.get_mut(col)) else {
            return false;
        };

        *cell = text.to_string();
        self.focus = Focus::TableCell {
            line: index,
            row,
            col,
        };
        true
    }

    /// Edits one item of a list slot; focus follows the edited item.
    pub fn set_list_item(&mut self, index: usize, item: usize, text: &str) -> bool {
        let Some(slot) = self.lines.get_mut(index) else {
            return false;
        };
        let LineBody::List(list) = &mut slot.body else {
            return false;
        };
        let Some(entry) = list.items.get_mut(item) else {
            return false;
        };

        *entry = text.to_string();
        self.focus = Focus::ListItem { line: index, item };
        true
    }
}

/// Flattens a slot's body to the single text value carried by its persisted
/// block line. Cell and item texts join with a single space.
fn flatten_body(slot: &EditorLine) -> String {
    match &slot.body {
        LineBody::Text => slot.text.trim().to_string(),
        LineBody::Table(table) => join_non_empty(table.cells.iter().flatten()),
        LineBody::List(list) => join_non_empty(list.items.iter()),
        LineBody::Blank { .. } => String::new(),
    }
}

fn join_non_empty<'a>(parts: impl Iterator<Item = &'a String>) -> String {
    parts
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
