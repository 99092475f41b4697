//! Domain model for books, pages, lines, templates and settings.
//!
//! # Responsibility
//! - Define the canonical data shapes the store and editor agree on.
//! - Keep persisted JSON field names stable (camelCase wire schema).
//!
//! # Invariants
//! - A book always owns exactly `page_count` pages, numbered densely from 1.
//! - Every page holds exactly `LINES_PER_PAGE` line slots.
//!
//! # See also
//! - docs/architecture/data-model.md

pub mod book;
pub mod page;
pub mod settings;
pub mod template;
