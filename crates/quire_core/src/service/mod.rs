//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into shelf-level APIs.
//! - Keep presentation layers decoupled from storage details.

pub mod book_service;
