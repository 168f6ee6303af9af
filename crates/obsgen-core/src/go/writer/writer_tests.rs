#![allow(non_snake_case)]

use super::*;

#[test]
fn CodeWriter___block___indents_body_with_tabs() {
    let mut out = String::new();
    let mut w = CodeWriter::new(&mut out);

    w.block("type A struct", |w| {
        w.writeln("Name string")?;
        w.block("Inner struct", |w| w.writeln("X int"))
    })
    .unwrap();

    assert_eq!(
        out,
        "type A struct {\n\tName string\n\tInner struct {\n\t\tX int\n\t}\n}\n"
    );
}

#[test]
fn CodeWriter___indent_guard___restores_level_on_drop() {
    let mut out = String::new();
    let mut w = CodeWriter::new(&mut out);

    {
        let _indent = w.indent();
        w.writeln("inner").unwrap();
    }
    w.writeln("outer").unwrap();

    assert_eq!(out, "\tinner\nouter\n");
}

#[test]
fn CodeWriter___blank_line___has_no_trailing_whitespace() {
    let mut out = String::new();
    let mut w = CodeWriter::new(&mut out);

    let _indent = w.indent();
    w.writeln("a").unwrap();
    w.blank_line().unwrap();
    w.writeln("b").unwrap();

    assert_eq!(out, "\ta\n\n\tb\n");
}

#[test]
fn CodeWriter___comments___prefixes_each_line() {
    let mut out = String::new();
    let mut w = CodeWriter::new(&mut out);

    w.comments(&["First.", "Second."]).unwrap();

    assert_eq!(out, "// First.\n// Second.\n");
}

#[test]
fn CodeWriter___write_separated___joins_items() {
    let mut out = String::new();
    let mut w = CodeWriter::new(&mut out);

    w.write_separated(["a int", "b string"], ", ", |w, item| w.write(item))
        .unwrap();

    assert_eq!(out, "a int, b string");
}
