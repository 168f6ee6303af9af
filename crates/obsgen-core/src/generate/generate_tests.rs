#![allow(non_snake_case)]

use super::*;
use crate::diagnostics::Diagnostic;

const FIXTURE: &str = include_str!("../../tests/fixtures/protocol.json");

fn doc() -> ProtocolDoc {
    ProtocolDoc::from_json(FIXTURE).unwrap()
}

fn file_names(units: &[SourceUnit]) -> Vec<&str> {
    units.iter().map(|u| u.file_name.as_str()).collect()
}

#[test]
fn Selection___default___is_empty() {
    assert!(Selection::default().is_empty());
    assert!(!Selection::all().is_empty());
}

#[test]
fn Generator___empty_selection___produces_nothing() {
    let doc = doc();
    let config = CodegenConfig::default();

    let output = Generator::new(&doc, &config).generate(Selection::default());

    assert!(output.value.is_empty());
    assert!(output.diagnostics.is_empty());
}

#[test]
fn Generator___all___units_in_stage_order() {
    let doc = doc();
    let config = CodegenConfig::default();

    let output = Generator::new(&doc, &config).generate(Selection::all());

    assert_eq!(
        file_names(&output.value),
        vec![
            "events_scenes.go",
            "events_general.go",
            "requests_general.go",
            "requests_scene_items.go",
            REGISTRY_FILE,
        ]
    );
}

#[test]
fn Generator___unit___has_package_and_header() {
    let doc = doc();
    let config = CodegenConfig::from_toml(
        "[package]\nname = \"obsproto\"\n[links]\nprotocol = \"P\"\ngenerator = \"G\"\n",
    )
    .unwrap();

    let output = Generator::new(&doc, &config).registry();
    let source = output.value.render();

    assert!(source.starts_with(
        "package obsproto\n\n\
         // This file is automatically generated.\n\
         // Protocol: P\n\
         // Generator: G\n\n"
    ));
}

#[test]
fn Generator___requests___struct_factory_response_per_request() {
    let doc = doc();
    let config = CodegenConfig::default();

    let units = Generator::new(&doc, &config).requests().value;

    let kinds: Vec<String> = units[0]
        .file
        .decls
        .iter()
        .map(|d| match d {
            Decl::Struct(s) => s.name.clone(),
            Decl::Func(f) => f.name.clone(),
            Decl::Var(v) => v.name.clone(),
        })
        .collect();
    assert_eq!(
        kinds,
        vec![
            "GetVersionRequest",
            "NewGetVersionRequest",
            "GetVersionResponse",
            "SetHeartbeatRequest",
            "NewSetHeartbeatRequest",
            "SetHeartbeatResponse",
        ]
    );
}

#[test]
fn Generator___events___struct_per_event() {
    let doc = doc();
    let config = CodegenConfig::default();

    let units = Generator::new(&doc, &config).events().value;
    let source = units[0].render();

    assert!(source.contains("type SwitchScenesEvent struct {"));
    assert!(source.contains("type ScenesChangedEvent struct {\n\t_event `json:\",squash\"`\n}"));
    assert!(source.contains("\tSources []map[string]interface{} `json:\"sources\"`\n"));
}

#[test]
fn Generator___unknown_type___reported_once_per_field() {
    let doc = doc();
    let config = CodegenConfig::default();

    let output = Generator::new(&doc, &config).generate(Selection::all());

    assert_eq!(
        output.diagnostics.iter().collect::<Vec<_>>(),
        vec![&Diagnostic::UnknownType {
            owner: "HeartbeatEvent".into(),
            field: "stats".into(),
            raw_type: "OBSStats".into(),
        }]
    );
    assert_eq!(
        output.diagnostics.unknown_types().into_iter().collect::<Vec<_>>(),
        vec!["OBSStats"]
    );
}

#[test]
fn Generator___repeated_runs___identical_output() {
    let doc = doc();
    let config = CodegenConfig::default();
    let generator = Generator::new(&doc, &config);

    let first: Vec<String> = generator
        .generate(Selection::all())
        .value
        .iter()
        .map(SourceUnit::render)
        .collect();
    let second: Vec<String> = generator
        .generate(Selection::all())
        .value
        .iter()
        .map(SourceUnit::render)
        .collect();

    assert_eq!(first, second);
}

#[test]
fn Generator___registry_only___single_unit() {
    let doc = doc();
    let config = CodegenConfig::default();
    let selection = Selection {
        registry: true,
        ..Selection::default()
    };

    let output = Generator::new(&doc, &config).generate(selection);

    assert_eq!(file_names(&output.value), vec![REGISTRY_FILE]);
}
