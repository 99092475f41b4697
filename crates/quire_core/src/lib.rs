//! Core domain logic for Quire, a local-first paper notebook.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod editor;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use editor::page_editor::{
    EditorLine, Focus, LineBody, ListBlock, ListStyle, PageEditor, TableBlock,
};
pub use editor::shortcut::{match_shortcut, Shortcut};
pub use editor::spread::Spread;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::book::{Book, BookId, BookPatch, BookValidationError, LINES_PER_PAGE};
pub use model::page::{BlockKind, Line, Page, PagePatch};
pub use model::settings::{Settings, SettingsPatch};
pub use model::template::{default_catalog, PaperKind, Template};
pub use repo::book_repo::{BookRepository, RepoError, RepoResult, SqliteBookRepository};
pub use service::book_service::{
    BookService, BookServiceError, BookSort, CreateBookRequest, ServiceResult,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
