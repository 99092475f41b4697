//! Book domain model.
//!
//! # Responsibility
//! - Define the canonical book record and its lifecycle helpers.
//! - Enforce the fixed page/line grid invariants on every write path.
//!
//! # Invariants
//! - `id` is stable, time-derived and never reused for another book.
//! - `pages.len() == page_count`; `pages[i].page_number == i + 1`.
//! - `updated_at` never moves backwards.
//!
//! # See also
//! - docs/architecture/data-model.md

use crate::model::page::{Page, PagePatch};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable identifier for a book, derived from its creation time in epoch
/// milliseconds. Kept as a type alias to make semantic intent explicit.
pub type BookId = i64;

/// Fixed number of line slots per page.
pub const LINES_PER_PAGE: usize = 33;

/// Page count used when book creation omits one.
pub const DEFAULT_PAGE_COUNT: u32 = 50;

/// Title used when book creation leaves the title blank.
pub const DEFAULT_TITLE: &str = "Untitled Book";

/// A user-created notebook bound to a template and a fixed page count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: BookId,
    pub title: String,
    /// References `Template::id`; intentionally not enforced against the
    /// catalog so books survive catalog edits.
    pub template_id: String,
    /// Fixed at creation; pages are never added or removed afterwards.
    pub page_count: u32,
    /// Last viewed page, within `1..=page_count`.
    pub current_page: u32,
    /// Epoch milliseconds.
    pub created_at: i64,
    /// Epoch milliseconds; refreshed on every mutation.
    pub updated_at: i64,
    pub pages: Vec<Page>,
}

impl Book {
    /// Creates a book with `page_count` pre-allocated empty pages.
    pub fn new(
        id: BookId,
        title: impl Into<String>,
        template_id: impl Into<String>,
        page_count: u32,
        now_ms: i64,
    ) -> Self {
        let pages = (1..=page_count).map(Page::empty).collect();
        Self {
            id,
            title: title.into(),
            template_id: template_id.into(),
            page_count,
            current_page: 1,
            created_at: now_ms,
            updated_at: now_ms,
            pages,
        }
    }

    /// Finds a page by its 1-based number.
    pub fn page(&self, page_number: u32) -> Option<&Page> {
        self.pages
            .iter()
            .find(|page| page.page_number == page_number)
    }

    pub fn page_mut(&mut self, page_number: u32) -> Option<&mut Page> {
        self.pages
            .iter_mut()
            .find(|page| page.page_number == page_number)
    }

    /// Merges patch fields into this book. Timestamps are not touched here;
    /// callers refresh `updated_at` through [`Book::touch`].
    pub fn apply_patch(&mut self, patch: BookPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(current_page) = patch.current_page {
            self.current_page = current_page;
        }
        if let Some(pages) = patch.pages {
            self.pages = pages;
        }
    }

    /// Refreshes `updated_at`, clamped so it never moves backwards even if
    /// the wall clock does.
    pub fn touch(&mut self, now_ms: i64) {
        self.updated_at = now_ms.max(self.updated_at);
    }

    /// Checks the fixed-grid invariants.
    pub fn validate(&self) -> Result<(), BookValidationError> {
        if self.page_count == 0 {
            return Err(BookValidationError::ZeroPageCount);
        }
        if self.pages.len() != self.page_count as usize {
            return Err(BookValidationError::PageCountMismatch {
                expected: self.page_count,
                actual: self.pages.len(),
            });
        }
        for (index, page) in self.pages.iter().enumerate() {
            let expected_number = index as u32 + 1;
            if page.page_number != expected_number {
                return Err(BookValidationError::NonDensePageNumbers {
                    index,
                    page_number: page.page_number,
                });
            }
            if page.lines.len() != LINES_PER_PAGE {
                return Err(BookValidationError::WrongLineCount {
                    page_number: page.page_number,
                    lines: page.lines.len(),
                });
            }
        }
        if self.current_page < 1 || self.current_page > self.page_count {
            return Err(BookValidationError::CurrentPageOutOfRange {
                current_page: self.current_page,
                page_count: self.page_count,
            });
        }
        Ok(())
    }
}

/// Partial book fields for merge-style updates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookPatch {
    pub title: Option<String>,
    pub current_page: Option<u32>,
    pub pages: Option<Vec<Page>>,
}

impl BookPatch {
    /// Patch replacing a single page's content within the book.
    pub fn for_page(book: &Book, page_number: u32, patch: PagePatch) -> Option<Self> {
        let mut pages = book.pages.clone();
        let page = pages
            .iter_mut()
            .find(|page| page.page_number == page_number)?;
        page.apply_patch(patch);
        Some(Self {
            pages: Some(pages),
            ..Self::default()
        })
    }
}

/// Violations of the fixed page/line grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookValidationError {
    ZeroPageCount,
    PageCountMismatch { expected: u32, actual: usize },
    NonDensePageNumbers { index: usize, page_number: u32 },
    WrongLineCount { page_number: u32, lines: usize },
    CurrentPageOutOfRange { current_page: u32, page_count: u32 },
}

impl Display for BookValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroPageCount => write!(f, "book must own at least one page"),
            Self::PageCountMismatch { expected, actual } => write!(
                f,
                "book declares {expected} pages but owns {actual}"
            ),
            Self::NonDensePageNumbers { index, page_number } => write!(
                f,
                "page at index {index} is numbered {page_number}, expected {}",
                index + 1
            ),
            Self::WrongLineCount { page_number, lines } => write!(
                f,
                "page {page_number} holds {lines} line slots, expected {LINES_PER_PAGE}"
            ),
            Self::CurrentPageOutOfRange {
                current_page,
                page_count,
            } => write!(
                f,
                "current page {current_page} is outside 1..={page_count}"
            ),
        }
    }
}

impl Error for BookValidationError {}
