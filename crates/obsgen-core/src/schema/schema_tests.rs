#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

const FIXTURE: &str = include_str!("../../tests/fixtures/protocol.json");

#[test]
fn ProtocolDoc___from_json___categories_keep_document_order() {
    let doc = ProtocolDoc::from_json(FIXTURE).unwrap();

    let events: Vec<&str> = doc.events.keys().map(String::as_str).collect();
    let requests: Vec<&str> = doc.requests.keys().map(String::as_str).collect();
    assert_eq!(events, vec!["scenes", "general"]);
    assert_eq!(requests, vec!["general", "scene items"]);
}

#[test]
fn ProtocolDoc___all_events___flattens_in_order() {
    let doc = ProtocolDoc::from_json(FIXTURE).unwrap();

    let names: Vec<&str> = doc.all_events().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["SwitchScenes", "ScenesChanged", "Heartbeat"]);
}

#[test]
fn ProtocolDoc___absent_lists___default_to_empty() {
    let doc = ProtocolDoc::from_json(FIXTURE).unwrap();

    let get_version = doc.all_requests().next().unwrap();
    assert!(get_version.params.is_empty());
    assert_eq!(get_version.returns.len(), 3);

    let changed = doc.all_events().nth(1).unwrap();
    assert!(changed.returns.is_empty());
}

#[test]
fn ProtocolDoc___empty_object___has_no_categories() {
    let doc = ProtocolDoc::from_json("{}").unwrap();

    assert!(doc.events.is_empty());
    assert!(doc.requests.is_empty());
}

#[test_case(r#"{"events":{"a":[{"description":"d","heading":{"text":"X"}}]}}"# ; "missing name")]
#[test_case(r#"{"events":{"a":[{"name":"X","heading":{"text":"X"}}]}}"# ; "missing description")]
#[test_case(r#"{"events":{"a":[{"name":"X","description":"d"}]}}"# ; "missing heading")]
#[test_case(r#"{"requests":{"a":[{"name":"X","description":"d","heading":{"text":"X"},"params":[{"name":"p","description":"d"}]}]}}"# ; "field missing type")]
#[test_case("not json" ; "malformed")]
fn ProtocolDoc___invalid_document___is_json_error(json: &str) {
    let err = ProtocolDoc::from_json(json).unwrap_err();

    assert!(matches!(err, CodegenError::Json(_)));
}

#[test]
fn ProtocolDoc___from_file___missing_path_is_file_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.json");

    let err = ProtocolDoc::from_file(&path).unwrap_err();

    assert!(matches!(err, CodegenError::FileNotFound(p) if p == path));
}

#[test]
fn ProtocolDoc___from_file___reads_document() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("protocol.json");
    std::fs::write(&path, FIXTURE).unwrap();

    let doc = ProtocolDoc::from_file(&path).unwrap();

    assert_eq!(doc.all_requests().count(), 4);
}

#[test]
fn Heading___anchor___is_lowercased() {
    let heading = Heading {
        text: "GetSceneItemProperties".into(),
    };

    assert_eq!(heading.anchor(), "getsceneitemproperties");
}

#[test]
fn Request___response_struct___uses_returns_and_derived_description() {
    let doc = ProtocolDoc::from_json(FIXTURE).unwrap();
    let request = doc.all_requests().next().unwrap();

    let shape = request.response_struct();

    assert_eq!(shape.struct_name(), "GetVersionResponse");
    assert_eq!(shape.description, "Response for GetVersionRequest.");
    assert_eq!(shape.fields.len(), 3);
}

#[test]
fn Request___request_struct___uses_params() {
    let doc = ProtocolDoc::from_json(FIXTURE).unwrap();
    let request = doc.all_requests().nth(1).unwrap();

    let shape = request.request_struct();

    assert_eq!(shape.struct_name(), "SetHeartbeatRequest");
    assert_eq!(shape.kind, MessageKind::Request);
    assert_eq!(shape.fields[0].name, "enable");
}
