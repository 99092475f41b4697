//! Line editor model: shortcut recognition, block transforms, focus
//! navigation and the page serialization round-trip.
//!
//! # Responsibility
//! - Turn raw per-line text input into typed block structures.
//! - Produce/consume the flattened `lines` representation the store
//!   persists verbatim.
//!
//! # Invariants
//! - A page is a fixed grid of 33 line slots; slots are never inserted or
//!   removed.
//! - At most one shortcut is applied per input event.

pub mod page_editor;
pub mod shortcut;
pub mod spread;
