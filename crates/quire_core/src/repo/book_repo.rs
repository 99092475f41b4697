//! Shelf repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over books, templates and settings records.
//! - Keep SQL and JSON encoding details inside the persistence boundary.
//!
//! # Invariants
//! - `put_book` validates the fixed page/line grid before writing.
//! - Each book row carries the complete JSON record and is replaced
//!   wholesale on every write.
//! - Missing rows are reported as `Ok(None)`/no-op, never as errors.
//!
//! # See also
//! - docs/architecture/data-model.md

use crate::db::DbError;
use crate::model::book::{Book, BookId, BookValidationError};
use crate::model::settings::Settings;
use crate::model::template::{default_catalog, Template};
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for shelf persistence operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(BookValidationError),
    Db(DbError),
    Json(serde_json::Error),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::Json(err) => write!(f, "invalid shelf record: {err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::Json(err) => Some(err),
        }
    }
}

impl From<BookValidationError> for RepoError {
    fn from(value: BookValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<serde_json::Error> for RepoError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// Repository interface for shelf persistence.
pub trait BookRepository {
    /// Seeds the default template catalog and settings when absent.
    /// Returns whether anything was written. Never overwrites existing rows.
    fn seed_defaults(&self) -> RepoResult<bool>;
    /// Returns all books in storage order; callers apply sort policy.
    fn list_books(&self) -> RepoResult<Vec<Book>>;
    /// Gets one book by id.
    fn get_book(&self, id: BookId) -> RepoResult<Option<Book>>;
    /// Whether a book row exists for `id`.
    fn contains_book(&self, id: BookId) -> RepoResult<bool>;
    /// Validates and writes the complete book record, replacing any
    /// previous row with the same id.
    fn put_book(&self, book: &Book) -> RepoResult<()>;
    /// Removes the book row; silently succeeds when absent.
    fn delete_book(&self, id: BookId) -> RepoResult<()>;
    /// Returns the persisted catalog, or the built-in defaults when the
    /// store has never been seeded.
    fn list_templates(&self) -> RepoResult<Vec<Template>>;
    /// Returns persisted settings, or the defaults when never seeded.
    fn get_settings(&self) -> RepoResult<Settings>;
    /// Replaces the settings record.
    fn put_settings(&self, settings: &Settings) -> RepoResult<()>;
}

/// SQLite-backed shelf repository.
pub struct SqliteBookRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteBookRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl BookRepository for SqliteBookRepository<'_> {
    fn seed_defaults(&self) -> RepoResult<bool> {
        let mut seeded = false;

        let template_rows: i64 =
            self.conn
                .query_row("SELECT COUNT(*) FROM templates;", [], |row| row.get(0))?;
        if template_rows == 0 {
            let mut stmt = self.conn.prepare(
                "INSERT INTO templates (id, position, record) VALUES (?1, ?2, ?3);",
            )?;
            for (position, template) in default_catalog().iter().enumerate() {
                let record = serde_json::to_string(template)?;
                stmt.execute(params![template.id, position as i64, record])?;
            }
            seeded = true;
        }

        let settings_present: i64 = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM settings WHERE slot = 0);",
            [],
            |row| row.get(0),
        )?;
        if settings_present == 0 {
            let record = serde_json::to_string(&Settings::default())?;
            self.conn
                .execute("INSERT INTO settings (slot, record) VALUES (0, ?1);", [record])?;
            seeded = true;
        }

        Ok(seeded)
    }

    fn list_books(&self) -> RepoResult<Vec<Book>> {
        let mut stmt = self.conn.prepare("SELECT record FROM books ORDER BY rowid;")?;
        let mut rows = stmt.query([])?;
        let mut books = Vec::new();

        while let Some(row) = rows.next()? {
            let record: String = row.get(0)?;
            books.push(serde_json::from_str(&record)?);
        }

        Ok(books)
    }

    fn get_book(&self, id: BookId) -> RepoResult<Option<Book>> {
        let record: Option<String> = self
            .conn
            .query_row("SELECT record FROM books WHERE id = ?1;", [id], |row| {
                row.get(0)
            })
            .optional()?;

        match record {
            Some(record) => Ok(Some(serde_json::from_str(&record)?)),
            None => Ok(None),
        }
    }

    fn contains_book(&self, id: BookId) -> RepoResult<bool> {
        let present: i64 = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM books WHERE id = ?1);",
            [id],
            |row| row.get(0),
        )?;
        Ok(present == 1)
    }

    fn put_book(&self, book: &Book) -> RepoResult<()> {
        book.validate()?;

        let record = serde_json::to_string(book)?;
        self.conn.execute(
            "INSERT INTO books (id, record, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT(id) DO UPDATE SET
                record = excluded.record,
                updated_at = excluded.updated_at;",
            params![book.id, record, book.created_at, book.updated_at],
        )?;

        Ok(())
    }

    fn delete_book(&self, id: BookId) -> RepoResult<()> {
        self.conn.execute("DELETE FROM books WHERE id = ?1;", [id])?;
        Ok(())
    }

    fn list_templates(&self) -> RepoResult<Vec<Template>> {
        let mut stmt = self
            .conn
            .prepare("SELECT record FROM templates ORDER BY position;")?;
        let mut rows = stmt.query([])?;
        let mut templates = Vec::new();

        while let Some(row) = rows.next()? {
            let record: String = row.get(0)?;
            templates.push(serde_json::from_str(&record)?);
        }

        if templates.is_empty() {
            return Ok(default_catalog());
        }

        Ok(templates)
    }

    fn get_settings(&self) -> RepoResult<Settings> {
        let record: Option<String> = self
            .conn
            .query_row("SELECT record FROM settings WHERE slot = 0;", [], |row| {
                row.get(0)
            })
            .optional()?;

        match record {
            Some(record) => Ok(serde_json::from_str(&record)?),
            None => Ok(Settings::default()),
        }
    }

    fn put_settings(&self, settings: &Settings) -> RepoResult<()> {
        let record = serde_json::to_string(settings)?;
        self.conn.execute(
            "INSERT INTO settings (slot, record) VALUES (0, ?1)
             ON CONFLICT(slot) DO UPDATE SET record = excluded.record;",
            [record],
        )?;
        Ok(())
    }
}
