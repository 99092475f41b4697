use quire_core::{BlockKind, Focus, LineBody, ListStyle, PageEditor, Shortcut};

#[test]
fn heading_shortcut_tags_the_line_and_returns_the_caret_to_start() {
    let mut editor = PageEditor::new();

    let applied = editor.set_line_text(0, "H1 My Title");
    assert_eq!(applied, Some(Shortcut::H1));

    let line = editor.line(0).unwrap();
    assert_eq!(line.text, "My Title");
    assert_eq!(line.kind, Some(BlockKind::H1));
    assert_eq!(line.body, LineBody::Text);
    assert_eq!(editor.focus(), Focus::Line { line: 0, column: 0 });
}

#[test]
fn heading_levels_map_to_their_tags() {
    let mut editor = PageEditor::new();
    editor.set_line_text(0, "h2 Section");
    editor.set_line_text(1, "H3 Detail");

    assert_eq!(editor.line(0).unwrap().kind, Some(BlockKind::H2));
    assert_eq!(editor.line(1).unwrap().kind, Some(BlockKind::H3));
}

#[test]
fn unknown_token_leaves_the_text_untouched() {
    let mut editor = PageEditor::new();

    assert_eq!(editor.set_line_text(0, "XY hello"), None);
    let line = editor.line(0).unwrap();
    assert_eq!(line.text, "XY hello");
    assert_eq!(line.kind, None);
}

#[test]
fn token_without_a_space_is_not_recognized() {
    let mut editor = PageEditor::new();

    assert_eq!(editor.set_line_text(0, "H1"), None);
    assert_eq!(editor.line(0).unwrap().text, "H1");
}

#[test]
fn only_one_shortcut_applies_per_input_event() {
    let mut editor = PageEditor::new();

    assert_eq!(editor.set_line_text(0, "H1 H2 text"), Some(Shortcut::H1));

    let line = editor.line(0).unwrap();
    assert_eq!(line.kind, Some(BlockKind::H1));
    // The second token survives as plain heading text.
    assert_eq!(line.text, "H2 text");
}

#[test]
fn small_table_shortcut_builds_a_2x2_grid_and_focuses_the_first_cell() {
    let mut editor = PageEditor::new();

    assert_eq!(editor.set_line_text(3, "T1 "), Some(Shortcut::T1));

    let line = editor.line(3).unwrap();
    assert_eq!(line.kind, Some(BlockKind::Table));
    let LineBody::Table(table) = &line.body else {
        panic!("expected a table body");
    };
    assert_eq!((table.rows, table.cols), (2, 2));
    assert_eq!(table.cells[0], ["Column 1", "Column 2"]);
    assert_eq!(table.cells[1], ["", ""]);
    assert_eq!(
        editor.focus(),
        Focus::TableCell {
            line: 3,
            row: 0,
            col: 0
        }
    );
}

#[test]
fn large_table_shortcut_builds_a_3x3_grid() {
    let mut editor = PageEditor::new();
    editor.set_line_text(0, "T2 ");

    let LineBody::Table(table) = &editor.line(0).unwrap().body else {
        panic!("expected a table body");
    };
    assert_eq!((table.rows, table.cols), (3, 3));
    assert_eq!(table.cells[0], ["Column 1", "Column 2", "Column 3"]);
}

#[test]
fn list_shortcuts_build_three_editable_items() {
    let mut editor = PageEditor::new();

    assert_eq!(editor.set_line_text(0, "L1 "), Some(Shortcut::L1));
    let LineBody::List(bullets) = &editor.line(0).unwrap().body else {
        panic!("expected a list body");
    };
    assert_eq!(bullets.style, ListStyle::Bullet);
    assert_eq!(bullets.items, ["", "", ""]);
    assert_eq!(editor.line(0).unwrap().kind, Some(BlockKind::BulletList));
    assert_eq!(editor.focus(), Focus::ListItem { line: 0, item: 0 });

    assert_eq!(editor.set_line_text(1, "l2 "), Some(Shortcut::L2));
    let LineBody::List(numbers) = &editor.line(1).unwrap().body else {
        panic!("expected a list body");
    };
    assert_eq!(numbers.style, ListStyle::Number);
    assert_eq!(editor.line(1).unwrap().kind, Some(BlockKind::NumberList));
}

#[test]
fn blank_space_shortcuts_span_two_or_four_line_heights() {
    let mut editor = PageEditor::new();

    assert_eq!(editor.set_line_text(0, "B1 "), Some(Shortcut::B1));
    assert_eq!(
        editor.line(0).unwrap().body,
        LineBody::Blank { line_heights: 2 }
    );

    assert_eq!(editor.set_line_text(1, "B2 sketch area"), Some(Shortcut::B2));
    let line = editor.line(1).unwrap();
    assert_eq!(line.body, LineBody::Blank { line_heights: 4 });
    assert_eq!(line.kind, Some(BlockKind::Blank));
    // The placeholder replaces any typed remainder.
    assert_eq!(line.text, "");
}

#[test]
fn rich_body_slots_ignore_further_text_input() {
    let mut editor = PageEditor::new();
    editor.set_line_text(0, "T1 ");

    assert_eq!(editor.set_line_text(0, "H1 overwrite"), None);
    assert_eq!(editor.line(0).unwrap().kind, Some(BlockKind::Table));
}

#[test]
fn table_cells_and_list_items_edit_independently() {
    let mut editor = PageEditor::new();
    editor.set_line_text(0, "T1 ");
    editor.set_line_text(1, "L1 ");

    assert!(editor.set_table_cell(0, 1, 0, "42"));
    assert_eq!(
        editor.focus(),
        Focus::TableCell {
            line: 0,
            row: 1,
            col: 0
        }
    );
    assert!(!editor.set_table_cell(0, 5, 0, "out of range"));
    assert!(!editor.set_table_cell(2, 0, 0, "not a table"));

    assert!(editor.set_list_item(1, 2, "third"));
    assert_eq!(editor.focus(), Focus::ListItem { line: 1, item: 2 });
    assert!(!editor.set_list_item(1, 3, "no fourth item"));

    let LineBody::Table(table) = &editor.line(0).unwrap().body else {
        panic!("expected a table body");
    };
    assert_eq!(table.cells[1][0], "42");
    let LineBody::List(list) = &editor.line(1).unwrap().body else {
        panic!("expected a list body");
    };
    assert_eq!(list.items[2], "third");
}
