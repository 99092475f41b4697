//! Shelf use-case service.
//!
//! # Responsibility
//! - Expose the full document-store surface: bootstrap, book CRUD, page
//!   merges, template catalog, settings and spread navigation.
//! - Apply creation defaults and the premium-template gate.
//!
//! # Invariants
//! - Book ids are time-derived and unique; collisions within one
//!   millisecond are resolved by bumping the candidate id.
//! - Every mutation refreshes `updated_at`, never backwards.
//! - Missing books/pages degrade to `Ok(None)`/no-op; storage failures
//!   propagate as errors.

use crate::model::book::{Book, BookId, BookPatch, DEFAULT_PAGE_COUNT, DEFAULT_TITLE};
use crate::model::page::{Page, PagePatch};
use crate::model::settings::{Settings, SettingsPatch};
use crate::model::template::{Template, DEFAULT_TEMPLATE_ID};
use crate::repo::book_repo::{BookRepository, RepoError, RepoResult};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};

pub type ServiceResult<T> = Result<T, BookServiceError>;

/// Service error for shelf use-cases.
#[derive(Debug)]
pub enum BookServiceError {
    /// Premium templates are selectable but block book creation until an
    /// entitlement system exists.
    PremiumTemplate(String),
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for BookServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PremiumTemplate(id) => {
                write!(f, "template `{id}` is premium and requires an upgrade")
            }
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for BookServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::PremiumTemplate(_) => None,
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<RepoError> for BookServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Sort policy applied to the library listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BookSort {
    /// Last-update time, newest first.
    #[default]
    Recent,
    /// Creation time, newest first.
    Created,
    /// Title, A to Z.
    Alphabetical,
}

/// Book creation parameters; unset fields fall back to the documented
/// defaults (blank title -> "Untitled Book", template -> ruled, pages -> 50).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateBookRequest {
    pub title: Option<String>,
    pub template_id: Option<String>,
    pub page_count: Option<u32>,
}

/// Shelf service facade over repository implementations.
pub struct BookService<R: BookRepository> {
    repo: R,
}

impl<R: BookRepository> BookService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Seeds the default catalog and settings when the store is fresh.
    /// Idempotent; existing data is never overwritten.
    pub fn initialize(&self) -> ServiceResult<()> {
        let seeded = self.repo.seed_defaults()?;
        info!("event=store_init module=service status=ok seeded={seeded}");
        Ok(())
    }

    /// Creates the demo books on an empty shelf. Returns how many books were
    /// created; an already-populated shelf is left untouched.
    pub fn seed_sample_books(&self) -> ServiceResult<usize> {
        if !self.repo.list_books()?.is_empty() {
            return Ok(0);
        }

        let samples: [(&str, &str, u32); 3] = [
            ("My Journal", "ruled", 50),
            ("Study Notes", "grid", 100),
            ("Project Ideas", "dot", 50),
        ];
        for (title, template_id, page_count) in samples {
            self.create_book(CreateBookRequest {
                title: Some(title.to_string()),
                template_id: Some(template_id.to_string()),
                page_count: Some(page_count),
            })?;
        }

        info!(
            "event=sample_seed module=service status=ok count={}",
            samples.len()
        );
        Ok(samples.len())
    }

    /// Returns all books under the requested sort policy.
    pub fn list_books(&self, sort: BookSort) -> ServiceResult<Vec<Book>> {
        let mut books = self.repo.list_books()?;
        match sort {
            BookSort::Recent => books.sort_by(|a, b| b.updated_at.cmp(&a.updated_at)),
            BookSort::Created => books.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            BookSort::Alphabetical => books.sort_by(|a, b| a.title.cmp(&b.title)),
        }
        Ok(books)
    }

    /// Gets one book by id.
    pub fn get_book(&self, id: BookId) -> ServiceResult<Option<Book>> {
        Ok(self.repo.get_book(id)?)
    }

    /// Creates a book from the given parameters.
    ///
    /// # Contract
    /// - Applies the documented defaults for blank/unset fields.
    /// - Rejects premium templates without touching the store.
    /// - Pre-allocates `page_count` pages of empty line slots.
    pub fn create_book(&self, request: CreateBookRequest) -> ServiceResult<Book> {
        let title = match request.title {
            Some(title) if !title.trim().is_empty() => title,
            _ => DEFAULT_TITLE.to_string(),
        };
        let template_id = match request.template_id {
            Some(id) if !id.trim().is_empty() => id,
            _ => DEFAULT_TEMPLATE_ID.to_string(),
        };
        let page_count = match request.page_count {
            Some(count) if count > 0 => count,
            _ => DEFAULT_PAGE_COUNT,
        };

        // Catalog membership is not enforced, but catalog entries flagged
        // premium block creation.
        let is_premium = self
            .repo
            .list_templates()?
            .iter()
            .any(|template| template.id == template_id && template.is_premium);
        if is_premium {
            return Err(BookServiceError::PremiumTemplate(template_id));
        }

        let now = now_epoch_ms();
        let id = self.next_book_id(now)?;
        let book = Book::new(id, title, template_id, page_count, now);
        self.repo.put_book(&book)?;

        info!(
            "event=book_create module=service status=ok id={} pages={}",
            book.id, book.page_count
        );
        Ok(book)
    }

    /// Merges partial fields into an existing book, refreshing `updated_at`
    /// regardless of which fields changed. Returns `None` when absent.
    pub fn update_book(&self, id: BookId, patch: BookPatch) -> ServiceResult<Option<Book>> {
        let Some(mut book) = self.repo.get_book(id)? else {
            return Ok(None);
        };

        book.apply_patch(patch);
        book.touch(now_epoch_ms());
        self.repo.put_book(&book)?;
        Ok(Some(book))
    }

    /// Removes a book; absent ids are a silent no-op.
    pub fn delete_book(&self, id: BookId) -> ServiceResult<()> {
        self.repo.delete_book(id)?;
        info!("event=book_delete module=service status=ok id={id}");
        Ok(())
    }

    /// Gets one page of a book; `None` when either is missing.
    pub fn get_page(&self, book_id: BookId, page_number: u32) -> ServiceResult<Option<Page>> {
        let Some(book) = self.repo.get_book(book_id)? else {
            return Ok(None);
        };
        Ok(book.page(page_number).cloned())
    }

    /// Merges partial content into one page, persisting through the book
    /// update path so `updated_at` refreshes. Returns the updated page, or
    /// `None` when the book or page is missing.
    pub fn update_page(
        &self,
        book_id: BookId,
        page_number: u32,
        patch: PagePatch,
    ) -> ServiceResult<Option<Page>> {
        let Some(book) = self.repo.get_book(book_id)? else {
            return Ok(None);
        };
        let Some(book_patch) = BookPatch::for_page(&book, page_number, patch) else {
            return Ok(None);
        };

        let updated = self.update_book(book_id, book_patch)?;
        Ok(updated.and_then(|book| book.page(page_number).cloned()))
    }

    /// Moves the reading position by `delta` pages (spreads step by ±2),
    /// persisting `current_page`. Out-of-range targets leave the book
    /// untouched; missing ids return `None`.
    pub fn turn_pages(&self, id: BookId, delta: i32) -> ServiceResult<Option<Book>> {
        let Some(book) = self.repo.get_book(id)? else {
            return Ok(None);
        };

        let target = i64::from(book.current_page) + i64::from(delta);
        if target < 1 || target > i64::from(book.page_count) {
            return Ok(Some(book));
        }

        self.update_book(
            id,
            BookPatch {
                current_page: Some(target as u32),
                ..BookPatch::default()
            },
        )
    }

    /// Returns the template catalog.
    pub fn list_templates(&self) -> ServiceResult<Vec<Template>> {
        Ok(self.repo.list_templates()?)
    }

    /// Returns current settings.
    pub fn get_settings(&self) -> ServiceResult<Settings> {
        Ok(self.repo.get_settings()?)
    }

    /// Merges partial settings fields and persists the result.
    pub fn update_settings(&self, patch: SettingsPatch) -> ServiceResult<Settings> {
        let mut settings = self.repo.get_settings()?;
        settings.apply_patch(patch);
        self.repo.put_settings(&settings)?;
        Ok(settings)
    }

    /// Derives a unique time-based id, bumping past occupied ids so two
    /// creations within the same millisecond cannot collide.
    fn next_book_id(&self, now_ms: i64) -> RepoResult<BookId> {
        let mut candidate = now_ms;
        while self.repo.contains_book(candidate)? {
            candidate += 1;
        }
        Ok(candidate)
    }
}

/// Current wall-clock time in epoch milliseconds.
pub fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}
