//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the shelf data access contract.
//! - Isolate SQLite and JSON record details from service orchestration.
//!
//! # Invariants
//! - Repository writes must pass `Book::validate()` before persistence.
//! - Book records are replaced wholesale; there are no partial row updates.

pub mod book_repo;
