use super::super::*;
use crate::core::{CellElementFactory, HeaderElementFactory, TextBoxElementFactory};
use std::fs;
use std::path::PathBuf;
use std::rc::Rc;
use tempfile::TempDir;

const PERSON_LAYOUT: &str = r#"{
    "defaults": { "place_holder": "Insert value" },
    "columns": [
        {
            "headers": [
                { "title": "GIVEN", "group": "GIVEN", "information_header": true },
                { "id": "p", "title": "Person" },
                { "title": "Age" }
            ]
        },
        {
            "width": 220,
            "movable": true,
            "read_only": false,
            "place_holder": "Expected value",
            "headers": [
                { "id": "result", "title": "Result", "group": "EXPECT", "read_only": true }
            ]
        }
    ]
}"#;

/// Helper: Creates the cell and header factories for a test
fn factories() -> (Rc<dyn CellElementFactory>, Rc<dyn HeaderElementFactory>) {
    (
        Rc::new(TextBoxElementFactory::for_cells()),
        Rc::new(TextBoxElementFactory::for_headers()),
    )
}

/// Helper: Writes a layout file into a temporary directory
fn create_layout_file(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("layout.json");
    fs::write(&path, content).unwrap();
    (temp_dir, path)
}

#[test]
fn test_parse_layout() {
    let layout = GridLayout::from_json_str(PERSON_LAYOUT).unwrap();

    assert_eq!(layout.columns.len(), 2);
    assert_eq!(layout.defaults.place_holder, "Insert value");
    assert_eq!(layout.defaults.width, 150.0);
    assert_eq!(layout.columns[1].width, Some(220.0));
    assert_eq!(layout.columns[0].headers.len(), 3);
}

#[test]
fn test_empty_layout_is_valid() {
    let layout = GridLayout::from_json_str("{}").unwrap();
    assert_eq!(layout, GridLayout::default());
}

#[test]
fn test_column_without_headers_is_rejected() {
    let result = GridLayout::from_json_str(
        r#"{ "columns": [ { "headers": [ {} ] }, { "width": 10 } ] }"#,
    );

    match result {
        Err(LayoutError::NoHeaders { column }) => assert_eq!(column, 1),
        other => panic!("Expected NoHeaders error, got: {:?}", other),
    }
}

#[test]
fn test_malformed_json_is_parse_error() {
    let result = GridLayout::from_json_str("{ \"columns\": [");
    assert!(matches!(result, Err(LayoutError::Parse(_))));
}

#[test]
fn test_load_layout_file() {
    let (_temp_dir, path) = create_layout_file(PERSON_LAYOUT);

    let layout = GridLayout::load(&path);
    assert!(layout.is_ok(), "Should load a valid layout file");
    assert_eq!(layout.unwrap().columns.len(), 2);
}

#[test]
fn test_load_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing.json");

    match GridLayout::load(&path) {
        Err(LayoutError::NotFound(missing)) => assert_eq!(missing, path),
        other => panic!("Expected NotFound error, got: {:?}", other),
    }
}

#[test]
fn test_levels_inherit_like_new_level() {
    let layout = GridLayout::from_json_str(PERSON_LAYOUT).unwrap();
    let (cell_factory, header_factory) = factories();

    let columns = layout.build_columns(&cell_factory, &header_factory);
    let headers = columns[0].header_meta_data();
    assert_eq!(headers.len(), 3);

    // Top row: information header, no id yet
    assert_eq!(headers[0].title(), Some("GIVEN"));
    assert_eq!(headers[0].column_id(), None);
    assert!(headers[0].is_information_header());

    // Group is inherited, information flag is not
    assert_eq!(headers[1].column_id(), Some("p"));
    assert_eq!(headers[1].column_group(), "GIVEN");
    assert!(!headers[1].is_information_header());

    // Id and group are inherited from the row above
    assert_eq!(headers[2].column_id(), Some("p"));
    assert_eq!(headers[2].title(), Some("Age"));
    assert_eq!(headers[2].column_group(), "GIVEN");
}

#[test]
fn test_column_overrides_and_defaults() {
    let layout = GridLayout::from_json_str(PERSON_LAYOUT).unwrap();
    let (cell_factory, header_factory) = factories();

    let columns = layout.build_columns(&cell_factory, &header_factory);

    let first = &columns[0];
    assert_eq!(first.width(), 150.0);
    assert!(!first.is_movable());
    assert!(first.is_read_only());
    assert_eq!(first.place_holder(), "Insert value");

    let second = &columns[1];
    assert_eq!(second.width(), 220.0);
    assert!(second.is_movable());
    assert!(!second.is_read_only());
    assert_eq!(second.place_holder(), "Expected value");
    assert!(second.header_meta_data()[0].is_read_only());
}

#[test]
fn test_columns_share_factories() {
    let layout = GridLayout::from_json_str(PERSON_LAYOUT).unwrap();
    let (cell_factory, header_factory) = factories();

    for column in layout.build_columns(&cell_factory, &header_factory) {
        assert!(Rc::ptr_eq(column.factory(), &cell_factory));
        for header in column.header_meta_data() {
            assert!(Rc::ptr_eq(header.factory(), &header_factory));
        }
    }
}

#[test]
fn test_header_builder_matches_manual_chain() {
    let layout = GridLayout::from_json_str(PERSON_LAYOUT).unwrap();
    let (_, header_factory) = factories();

    let mut manual = crate::builders::HeaderBuilder::get(header_factory.clone());
    manual
        .set_column_title("GIVEN")
        .set_column_group("GIVEN")
        .set_information_header(true);
    manual
        .new_level()
        .set_column_id("p")
        .set_column_title("Person")
        .new_level()
        .set_column_title("Age");

    let from_layout = layout.columns[0].header_builder(&header_factory);
    assert_eq!(from_layout.build(), manual.build());
}
