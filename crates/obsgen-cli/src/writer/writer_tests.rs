#![allow(non_snake_case)]

use super::*;
use obsgen_core::go::GoFile;

fn unit(file_name: &str) -> SourceUnit {
    SourceUnit {
        file_name: file_name.to_string(),
        file: GoFile {
            package: "obsws".to_string(),
            header: vec!["This file is automatically generated.".to_string()],
            decls: Vec::new(),
        },
    }
}

#[test]
fn write_units___two_units___both_written_in_order() {
    let dir = tempfile::tempdir().unwrap();

    let written = write_units(dir.path(), &[unit("a.go"), unit("b.go")]).unwrap();

    assert_eq!(written, vec![dir.path().join("a.go"), dir.path().join("b.go")]);
    assert_eq!(
        fs::read_to_string(&written[0]).unwrap(),
        "package obsws\n\n// This file is automatically generated.\n"
    );
}

#[test]
fn write_units___existing_file___is_replaced() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.go"), "stale").unwrap();

    write_units(dir.path(), &[unit("a.go")]).unwrap();

    assert!(fs::read_to_string(dir.path().join("a.go")).unwrap().starts_with("package obsws"));
}

#[test]
fn write_units___missing_dir___errors_with_path() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope");

    let err = write_units(&missing, &[unit("a.go")]).unwrap_err();

    assert!(err.to_string().contains("a.go"));
}

#[test]
fn write_units___no_units___writes_nothing() {
    let dir = tempfile::tempdir().unwrap();

    let written = write_units(dir.path(), &[]).unwrap();

    assert!(written.is_empty());
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}
