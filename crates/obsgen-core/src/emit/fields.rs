//! Per-struct field resolution.

use crate::diagnostics::{Diagnostic, Diagnostics, Emitted};
use crate::naming::{self, Visibility};
use crate::schema::Field;
use crate::types::{self, GoType};
use std::collections::HashMap;

/// A schema field with its Go name and type worked out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedField {
    /// Name as written in the schema; used as the JSON tag.
    pub raw_name: String,
    /// Exported Go identifier.
    pub ident: String,
    /// Function argument name (unexported, keyword-safe).
    pub arg_name: String,
    pub go_type: GoType,
    pub optional: bool,
    pub unknown: bool,
    /// Another field of the same struct has the same `ident`.
    pub duplicate: bool,
    pub raw_type: String,
    pub description: String,
}

/// Resolve every field of the struct `owner`, in schema order.
///
/// Colliding identifiers are flagged on every field involved; nothing is
/// renamed or dropped.
pub fn resolve_fields(owner: &str, fields: &[Field]) -> Emitted<Vec<ResolvedField>> {
    let mut resolved: Vec<ResolvedField> = fields
        .iter()
        .map(|field| {
            let ty = types::resolve(&field.ty);
            ResolvedField {
                raw_name: field.name.clone(),
                ident: naming::normalize(&field.name, Visibility::Exported),
                arg_name: naming::to_arg_name(&field.name),
                go_type: ty.go_type,
                optional: ty.optional,
                unknown: ty.unknown,
                duplicate: false,
                raw_type: field.ty.clone(),
                description: field.description.clone(),
            }
        })
        .collect();

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for field in &resolved {
        *counts.entry(field.ident.as_str()).or_default() += 1;
    }
    let duplicated: Vec<String> = counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(ident, _)| ident.to_string())
        .collect();

    for field in &mut resolved {
        field.duplicate = duplicated.contains(&field.ident);
    }

    let mut diagnostics = Diagnostics::new();
    let mut reported: Vec<&str> = Vec::new();
    for field in &resolved {
        if field.unknown {
            diagnostics.push(Diagnostic::UnknownType {
                owner: owner.to_string(),
                field: field.raw_name.clone(),
                raw_type: field.raw_type.clone(),
            });
        }
        if field.duplicate && !reported.contains(&field.ident.as_str()) {
            reported.push(&field.ident);
            diagnostics.push(Diagnostic::DuplicateField {
                owner: owner.to_string(),
                ident: field.ident.clone(),
            });
        }
    }

    Emitted::new(resolved, diagnostics)
}
