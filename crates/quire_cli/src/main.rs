//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `quire_core` linkage.
//! - Probe storage wiring end to end with a throwaway in-memory shelf.

use quire_core::{BookService, SqliteBookRepository};

fn main() {
    println!("quire_core ping={}", quire_core::ping());
    println!("quire_core version={}", quire_core::core_version());

    match quire_core::db::open_db_in_memory() {
        Ok(conn) => {
            let service = BookService::new(SqliteBookRepository::new(&conn));
            let probe = service
                .initialize()
                .and_then(|()| service.list_templates());
            match probe {
                Ok(templates) => println!("quire_core templates={}", templates.len()),
                Err(err) => eprintln!("quire_core store probe failed: {err}"),
            }
        }
        Err(err) => eprintln!("quire_core db open failed: {err}"),
    }
}
