use quire_core::db::open_db_in_memory;
use quire_core::{
    BlockKind, BookService, CreateBookRequest, Line, PagePatch, RepoError, SqliteBookRepository,
    LINES_PER_PAGE,
};
use std::thread::sleep;
use std::time::Duration;

fn sample_lines() -> Vec<Line> {
    let mut lines = vec![Line::Plain(String::new()); LINES_PER_PAGE];
    lines[0] = Line::Plain("Hello".to_string());
    lines[1] = Line::Block {
        text: "Title".to_string(),
        block_type: BlockKind::H1,
    };
    lines[2] = Line::Block {
        text: "milk eggs bread".to_string(),
        block_type: BlockKind::BulletList,
    };
    lines[3] = Line::Block {
        text: String::new(),
        block_type: BlockKind::Blank,
    };
    lines
}

#[test]
fn saving_and_reloading_preserves_the_plain_block_distinction() {
    let conn = open_db_in_memory().unwrap();
    let service = BookService::new(SqliteBookRepository::new(&conn));
    service.initialize().unwrap();

    let book = service.create_book(CreateBookRequest::default()).unwrap();
    let lines = sample_lines();

    let saved = service
        .update_page(
            book.id,
            4,
            PagePatch {
                lines: Some(lines.clone()),
            },
        )
        .unwrap()
        .unwrap();
    assert_eq!(saved.lines, lines);

    let reloaded = service.get_page(book.id, 4).unwrap().unwrap();
    assert_eq!(reloaded.lines, lines);
    assert_eq!(reloaded.lines[0], Line::Plain("Hello".to_string()));
    assert_eq!(reloaded.lines[1].block_kind(), Some(BlockKind::H1));
    assert!(reloaded.lines[4].is_empty());

    // Untouched pages stay empty.
    let other = service.get_page(book.id, 5).unwrap().unwrap();
    assert!(other.lines.iter().all(Line::is_empty));
}

#[test]
fn update_page_refreshes_the_book_updated_at() {
    let conn = open_db_in_memory().unwrap();
    let service = BookService::new(SqliteBookRepository::new(&conn));
    service.initialize().unwrap();

    let book = service.create_book(CreateBookRequest::default()).unwrap();
    sleep(Duration::from_millis(5));

    service
        .update_page(
            book.id,
            1,
            PagePatch {
                lines: Some(sample_lines()),
            },
        )
        .unwrap()
        .unwrap();

    let loaded = service.get_book(book.id).unwrap().unwrap();
    assert!(loaded.updated_at >= book.updated_at);
    assert!(loaded.updated_at > book.created_at);
}

#[test]
fn missing_book_or_page_degrades_to_none() {
    let conn = open_db_in_memory().unwrap();
    let service = BookService::new(SqliteBookRepository::new(&conn));
    service.initialize().unwrap();

    assert!(service.get_page(12_345, 1).unwrap().is_none());

    let book = service.create_book(CreateBookRequest::default()).unwrap();
    assert!(service.get_page(book.id, 99).unwrap().is_none());

    let updated = service
        .update_page(
            12_345,
            1,
            PagePatch {
                lines: Some(sample_lines()),
            },
        )
        .unwrap();
    assert!(updated.is_none());

    let updated = service
        .update_page(
            book.id,
            99,
            PagePatch {
                lines: Some(sample_lines()),
            },
        )
        .unwrap();
    assert!(updated.is_none());
}

#[test]
fn update_page_rejects_a_broken_line_grid() {
    let conn = open_db_in_memory().unwrap();
    let service = BookService::new(SqliteBookRepository::new(&conn));
    service.initialize().unwrap();

    let book = service.create_book(CreateBookRequest::default()).unwrap();

    let err = service
        .update_page(
            book.id,
            1,
            PagePatch {
                lines: Some(vec![Line::Plain("too short".to_string())]),
            },
        )
        .unwrap_err();
    assert!(matches!(
        err,
        quire_core::BookServiceError::Repo(RepoError::Validation(_))
    ));

    // The failed write must not corrupt the stored book.
    let loaded = service.get_book(book.id).unwrap().unwrap();
    assert_eq!(loaded.pages[0].lines.len(), LINES_PER_PAGE);
}

#[test]
fn persisted_record_keeps_the_documented_json_layout() {
    let conn = open_db_in_memory().unwrap();
    let service = BookService::new(SqliteBookRepository::new(&conn));
    service.initialize().unwrap();

    let book = service.create_book(CreateBookRequest::default()).unwrap();
    service
        .update_page(
            book.id,
            1,
            PagePatch {
                lines: Some(sample_lines()),
            },
        )
        .unwrap()
        .unwrap();

    let record: String = conn
        .query_row("SELECT record FROM books WHERE id = ?1;", [book.id], |row| {
            row.get(0)
        })
        .unwrap();
    let json: serde_json::Value = serde_json::from_str(&record).unwrap();

    assert_eq!(json["pages"][0]["lines"][0], "Hello");
    assert_eq!(
        json["pages"][0]["lines"][1],
        serde_json::json!({ "text": "Title", "blockType": "h1" })
    );
    assert_eq!(json["pages"][0]["lines"][4], "");
    assert_eq!(json["pages"][0]["blocks"], serde_json::json!([]));
}
