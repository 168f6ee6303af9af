//! Struct emission for events, requests and responses.
//!
//! Layout of an emitted struct:
//!
//! ```go
//! // SwitchScenesEvent : Indicates a scene change.
//! // Since obs-websocket version: 0.3.
//! // https://github.com/Palakis/obs-websocket/blob/master/docs/generated/protocol.md#switchscenes
//! type SwitchScenesEvent struct {
//!     // The new scene.
//!     // Required: Yes.
//!     SceneName string `json:"scene-name"`
//!     _event `json:",squash"`
//! }
//! ```
//!
//! Declared fields keep schema order; the envelope always comes last.

use super::docs::{field_sentences, sentences};
use super::fields::{ResolvedField, resolve_fields};
use crate::diagnostics::Emitted;
use crate::go::{Embed, StructDecl, StructField};
use crate::message::{MessageKind, StructShape};
use crate::naming::sentence_case;

/// Tag that inlines the envelope's fields when decoding.
pub const SQUASH_TAG: &str = r#"json:",squash""#;

/// Emit the struct described by `shape`.
///
/// `doc_url` is the protocol documentation page; the entry's heading
/// anchor is appended to it.
pub fn emit_struct(shape: &StructShape<'_>, doc_url: &str) -> Emitted<StructDecl> {
    let struct_name = shape.struct_name();
    let fields = resolve_fields(&struct_name, shape.fields);

    let decl = StructDecl {
        docs: struct_docs(shape, &struct_name, doc_url),
        fields: fields.value.iter().map(struct_field).collect(),
        embed: envelope(shape),
        name: struct_name,
    };

    Emitted::new(decl, fields.diagnostics)
}

fn struct_docs(shape: &StructShape<'_>, struct_name: &str, doc_url: &str) -> Vec<String> {
    let mut docs = sentences(&format!("{struct_name} : {}", shape.description));
    if let Some(since) = shape.since.filter(|s| !s.is_empty()) {
        docs.push(format!("Since obs-websocket version: {}.", sentence_case(since)));
    }
    docs.push(format!("{doc_url}#{}", shape.heading.anchor()));
    docs
}

fn struct_field(field: &ResolvedField) -> StructField {
    let mut docs = field_sentences(&field.description);
    docs.push(format!(
        "Required: {}.",
        if field.optional { "No" } else { "Yes" }
    ));
    if field.unknown {
        docs.push(format!("TODO: Unknown type ({}).", field.raw_type));
    }
    if field.duplicate {
        docs.push("TODO: Duplicate name.".to_string());
    }

    StructField {
        docs,
        name: field.ident.clone(),
        ty: field.go_type.as_go().to_string(),
        tag: Some(format!(r#"json:"{}""#, field.raw_name)),
    }
}

fn envelope(shape: &StructShape<'_>) -> Embed {
    // A request without params embeds its envelope untagged.
    let tag = match shape.kind {
        MessageKind::Request if shape.fields.is_empty() => None,
        _ => Some(SQUASH_TAG.to_string()),
    };

    Embed {
        type_name: shape.kind.envelope().to_string(),
        tag,
    }
}

#[cfg(test)]
#[path = "structs/structs_tests.rs"]
mod structs_tests;
