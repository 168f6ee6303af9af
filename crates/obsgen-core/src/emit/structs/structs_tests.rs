#![allow(non_snake_case)]

use super::*;
use crate::diagnostics::Diagnostic;
use crate::go::Render;
use crate::schema::{Field, Heading, Request};

const DOC: &str = "https://example.com/protocol.md";

fn field(name: &str, ty: &str, description: &str) -> Field {
    Field {
        name: name.into(),
        ty: ty.into(),
        description: description.into(),
    }
}

fn request(name: &str, params: Vec<Field>, returns: Vec<Field>) -> Request {
    Request {
        name: name.into(),
        description: "Does a thing.".into(),
        since: Some("4.0.0".into()),
        heading: Heading { text: name.into() },
        params,
        returns,
    }
}

#[test]
fn emit_struct___scene_name___string_required_with_tag() {
    let req = request(
        "SetCurrentScene",
        vec![field("scene-name", "String", "Name of the scene to switch to.")],
        vec![],
    );

    let decl = emit_struct(&req.request_struct(), DOC).value;

    let f = &decl.fields[0];
    assert_eq!(f.name, "SceneName");
    assert_eq!(f.ty, "string");
    assert_eq!(f.tag.as_deref(), Some(r#"json:"scene-name""#));
    assert_eq!(f.docs, vec!["Name of the scene to switch to.", "Required: Yes."]);
}

#[test]
fn emit_struct___optional_source_id___required_no() {
    let req = request(
        "GetSource",
        vec![field("source-id", "string (optional)", "Source id")],
        vec![],
    );

    let decl = emit_struct(&req.request_struct(), DOC).value;

    let f = &decl.fields[0];
    assert_eq!(f.name, "SourceID");
    assert_eq!(f.docs, vec!["Source id.", "Required: No."]);
}

#[test]
fn emit_struct___no_params___request_is_bare_envelope() {
    let req = request("GetVersion", vec![], vec![]);

    let decl = emit_struct(&req.request_struct(), DOC).value;

    assert!(decl.fields.is_empty());
    assert_eq!(decl.embed.type_name, "_request");
    assert_eq!(decl.embed.tag, None);
    assert!(decl.to_source().contains("type GetVersionRequest struct {\n\t_request\n}\n"));
}

#[test]
fn emit_struct___no_returns___response_keeps_squash_tag() {
    let req = request("SetHeartbeat", vec![field("enable", "boolean", "On.")], vec![]);

    let decl = emit_struct(&req.response_struct(), DOC).value;

    assert_eq!(decl.name, "SetHeartbeatResponse");
    assert!(decl.fields.is_empty());
    assert_eq!(decl.embed.type_name, "_response");
    assert_eq!(decl.embed.tag.as_deref(), Some(SQUASH_TAG));
}

#[test]
fn emit_struct___envelope___comes_after_declared_fields() {
    let req = request(
        "SetPosition",
        vec![field("x", "double", "X."), field("y", "double", "Y.")],
        vec![],
    );

    let source = emit_struct(&req.request_struct(), DOC).value.to_source();

    let x = source.find("X float64").unwrap();
    let y = source.find("Y float64").unwrap();
    let envelope = source.find("_request `json:\",squash\"`").unwrap();
    assert!(x < y && y < envelope);
}

#[test]
fn emit_struct___duplicate_names___both_kept_and_annotated() {
    let req = request(
        "Clash",
        vec![
            field("scene-name", "String", "First."),
            field("scene_name", "String", "Second."),
        ],
        vec![],
    );

    let emitted = emit_struct(&req.request_struct(), DOC);

    assert_eq!(emitted.value.fields.len(), 2);
    for f in &emitted.value.fields {
        assert_eq!(f.name, "SceneName");
        assert_eq!(f.docs.last().map(String::as_str), Some("TODO: Duplicate name."));
    }
    assert_eq!(
        emitted.value.fields[0].tag.as_deref(),
        Some(r#"json:"scene-name""#)
    );
    assert_eq!(
        emitted.value.fields[1].tag.as_deref(),
        Some(r#"json:"scene_name""#)
    );
    assert_eq!(emitted.diagnostics.len(), 1);
}

#[test]
fn emit_struct___unknown_type___falls_back_with_todo() {
    let req = request("Stats", vec![], vec![field("stats", "OBSStats", "OBS Stats")]);

    let emitted = emit_struct(&req.response_struct(), DOC);

    let f = &emitted.value.fields[0];
    assert_eq!(f.ty, "interface{}");
    assert_eq!(
        f.docs,
        vec!["OBS Stats.", "Required: Yes.", "TODO: Unknown type (OBSStats)."]
    );
    assert!(matches!(
        emitted.diagnostics.iter().next(),
        Some(Diagnostic::UnknownType { owner, .. }) if owner == "StatsResponse"
    ));
}

#[test]
fn emit_struct___unknown_and_duplicate___one_line_each() {
    let req = request(
        "Both",
        vec![field("a-b", "Color", "One."), field("a_b", "Color", "Two.")],
        vec![],
    );

    let decl = emit_struct(&req.request_struct(), DOC).value;

    assert_eq!(
        decl.fields[0].docs,
        vec![
            "One.",
            "Required: Yes.",
            "TODO: Unknown type (Color).",
            "TODO: Duplicate name."
        ]
    );
}

#[test]
fn emit_struct___struct_docs___description_since_and_link() {
    let mut req = request("GetVersion", vec![], vec![]);
    req.description = "Returns the version. Use it, e.g. at startup".into();
    req.since = Some("unreleased".into());

    let decl = emit_struct(&req.request_struct(), DOC).value;

    assert_eq!(
        decl.docs,
        vec![
            "GetVersionRequest : Returns the version.",
            "Use it, e.g. at startup.",
            "Since obs-websocket version: Unreleased.",
            "https://example.com/protocol.md#getversion",
        ]
    );
}

#[test]
fn emit_struct___response_docs___refer_to_request() {
    let req = request("GetVersion", vec![], vec![]);

    let decl = emit_struct(&req.response_struct(), DOC).value;

    assert_eq!(decl.docs[0], "GetVersionResponse : Response for GetVersionRequest.");
}

#[test]
fn emit_struct___no_since___omits_version_line() {
    let mut req = request("GetVersion", vec![], vec![]);
    req.since = None;

    let decl = emit_struct(&req.request_struct(), DOC).value;

    assert!(!decl.docs.iter().any(|d| d.starts_with("Since")));
    assert_eq!(decl.docs.len(), 2);
}
