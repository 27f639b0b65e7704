use std::fs;
use std::path::Path;

use polylang::{parse_dir, parse_path, Error};
use tempfile::TempDir;

fn write(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).unwrap();
}

fn names(program: &polylang::Program) -> Vec<&str> {
    program.nodes.iter().map(|node| node.name()).collect()
}

#[test]
fn merges_files_in_name_order() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "b.polylang", "collection B { id: string; } function helper() {}");
    write(dir.path(), "a.polylang", "collection A { id: string; }");
    write(dir.path(), "c.txt", "not a schema");

    let program = parse_dir(dir.path()).unwrap();
    assert_eq!(names(&program), vec!["A", "B", "helper"]);
}

#[test]
fn subdirectories_are_not_recursed() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("nested")).unwrap();
    write(&dir.path().join("nested"), "inner.polylang", "collection Inner {}");
    write(dir.path(), "outer.polylang", "collection Outer {}");

    let program = parse_dir(dir.path()).unwrap();
    assert_eq!(names(&program), vec!["Outer"]);
}

#[test]
fn empty_directory_is_an_empty_program() {
    let dir = TempDir::new().unwrap();
    assert!(parse_dir(dir.path()).unwrap().nodes.is_empty());
}

#[test]
fn first_failure_stops_the_scan() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "a.polylang", "collection A {}");
    write(dir.path(), "b.polylang", "collection B {\n  id string;\n}");
    write(dir.path(), "c.polylang", "collection C {}");

    let error = parse_dir(dir.path()).unwrap_err();
    match &error {
        Error::Directory { file, partial, .. } => {
            assert_eq!(file.file_name().unwrap(), "b.polylang");
            assert_eq!(names(partial), vec!["A"]);
        }
        other => panic!("expected directory error, got {:?}", other),
    }

    let syntax = error.syntax_error().unwrap();
    assert_eq!(syntax.span.line, 2);
    assert_eq!(error.file().unwrap().file_name().unwrap(), "b.polylang");
}

#[test]
fn path_dispatches_on_kind() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "one.polylang", "collection One {}");

    let from_dir = parse_path(dir.path()).unwrap();
    let from_file = parse_path(dir.path().join("one.polylang")).unwrap();
    assert_eq!(from_dir, from_file);
}

#[test]
fn missing_directory_is_io_error() {
    let dir = TempDir::new().unwrap();
    let error = parse_dir(dir.path().join("absent")).unwrap_err();
    match error {
        Error::Io { path, source } => {
            assert!(path.ends_with("absent"));
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected io error, got {:?}", other),
    }
}

#[test]
fn metadata_file_round_trip() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "meta.json",
        r#"[{"kind":"collection","namespace":{"kind":"namespace","value":"demo"},"name":"Account","attributes":[]}]"#,
    );

    let root = polylang::parse_metadata_file(dir.path().join("meta.json")).unwrap();
    let collection = root[0].as_collection().unwrap();
    assert_eq!(collection.name, "Account");
    assert_eq!(collection.namespace.value, "demo");
}
