//! Dispatch registry emission.
//!
//! Built in two phases. [`NameIndex::collect`] walks every category and
//! gathers the message names; [`emit_registry`] then turns the complete
//! index into declarations. Nothing is emitted until every category has
//! been seen.
//!
//! The registry has three name-keyed maps and two unwrap functions:
//!
//! - `ReqMap` (exported): request name to a blank `*<Name>Request`. The
//!   runtime uses it to build a request from a type name.
//! - `respMap`, `eventMap` (unexported): only read by the unwrap functions
//!   and the runtime decoder inside the package.
//! - `derefResponse`, `derefEvent`: switch on the concrete pointer type and
//!   return a copy of the value, or `nil` for a type outside the known set.

use crate::diagnostics::{Diagnostic, Diagnostics, Emitted};
use crate::go::{Decl, Expr, FuncBody, FuncDecl, Param, SwitchCase, TypeSwitch, VarDecl};
use crate::message::MessageKind;
use crate::schema::ProtocolDoc;
use indexmap::IndexSet;

/// Name of the exported request map.
pub const REQUEST_MAP: &str = "ReqMap";
/// Name of the response map.
pub const RESPONSE_MAP: &str = "respMap";
/// Name of the event map.
pub const EVENT_MAP: &str = "eventMap";
/// Name of the response unwrap function.
pub const DEREF_RESPONSE: &str = "derefResponse";
/// Name of the event unwrap function.
pub const DEREF_EVENT: &str = "derefEvent";

/// Every message name in the document, each listed once.
///
/// A name declared twice keeps the position of its first declaration;
/// the later declaration replaces it, which for zero-value entries is
/// indistinguishable. Each repeat is reported as a
/// [`Diagnostic::DuplicateName`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameIndex {
    pub requests: IndexSet<String>,
    pub events: IndexSet<String>,
}

impl NameIndex {
    /// Collect names from every category of `doc`.
    pub fn collect(doc: &ProtocolDoc) -> Emitted<NameIndex> {
        let mut index = NameIndex::default();
        let mut diagnostics = Diagnostics::new();

        for request in doc.all_requests() {
            if !index.requests.insert(request.name.clone()) {
                tracing::warn!(name = %request.name, "request declared more than once");
                diagnostics.push(Diagnostic::DuplicateName {
                    kind: MessageKind::Request,
                    name: request.name.clone(),
                });
            }
        }
        for event in doc.all_events() {
            if !index.events.insert(event.name.clone()) {
                tracing::warn!(name = %event.name, "event declared more than once");
                diagnostics.push(Diagnostic::DuplicateName {
                    kind: MessageKind::Event,
                    name: event.name.clone(),
                });
            }
        }

        Emitted::new(index, diagnostics)
    }
}

/// Emit the registry declarations for a complete name index.
pub fn emit_registry(index: &NameIndex) -> Vec<Decl> {
    vec![
        Decl::Var(name_map(
            REQUEST_MAP,
            "maps request type names to blank requests.",
            MessageKind::Request,
            &index.requests,
        )),
        Decl::Var(name_map(
            RESPONSE_MAP,
            "maps request type names to blank responses.",
            MessageKind::Response,
            &index.requests,
        )),
        Decl::Var(name_map(
            EVENT_MAP,
            "maps event type names to blank events.",
            MessageKind::Event,
            &index.events,
        )),
        Decl::Func(unwrap_func(
            DEREF_RESPONSE,
            "r",
            MessageKind::Response,
            &index.requests,
        )),
        Decl::Func(unwrap_func(
            DEREF_EVENT,
            "e",
            MessageKind::Event,
            &index.events,
        )),
    ]
}

fn name_map(var: &str, doc: &str, kind: MessageKind, names: &IndexSet<String>) -> VarDecl {
    VarDecl {
        docs: vec![format!("{var} {doc}")],
        name: var.to_string(),
        value: Expr::MapLit {
            ty: format!("map[string]{}", kind.interface()),
            entries: names
                .iter()
                .map(|name| (name.clone(), Expr::zero_ptr(kind.struct_name(name))))
                .collect(),
        },
    }
}

fn unwrap_func(
    func: &str,
    binding: &str,
    kind: MessageKind,
    names: &IndexSet<String>,
) -> FuncDecl {
    let interface = kind.interface();
    let noun = interface.to_lowercase();

    FuncDecl {
        docs: vec![
            format!("{func} returns a copy of the concrete {noun} held by {binding}."),
            format!("It returns nil if {binding} is not a known {noun} type."),
        ],
        name: func.to_string(),
        params: vec![Param {
            name: binding.to_string(),
            ty: interface.to_string(),
        }],
        result: interface.to_string(),
        body: FuncBody::TypeSwitch(TypeSwitch {
            binding: binding.to_string(),
            subject: binding.to_string(),
            cases: names
                .iter()
                .map(|name| SwitchCase {
                    ty: format!("*{}", kind.struct_name(name)),
                    result: Expr::Deref(Box::new(Expr::ident(binding))),
                })
                .collect(),
            default: Expr::Nil,
        }),
    }
}
