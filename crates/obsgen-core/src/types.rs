//! Mapping from schema type strings to Go types.
//!
//! Lookup is case-insensitive. A trailing `(optional)` marker is stripped
//! first and recorded separately. Type strings missing from the table are
//! never an error: they resolve to `interface{}` and are flagged as
//! unknown so the emitter can leave a visible note.

use std::fmt;

/// Marker that makes a field optional when it ends the raw type string.
pub const OPTIONAL_MARKER: &str = "(optional)";

/// Go types a schema type can resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GoType {
    Bool,
    Int,
    Float64,
    String,
    /// `[]interface{}`
    Array,
    /// `map[string]interface{}`
    Object,
    /// `[]map[string]interface{}`
    ObjectArray,
    /// `interface{}`
    Any,
}

impl GoType {
    /// Go source spelling of the type.
    pub fn as_go(self) -> &'static str {
        match self {
            GoType::Bool => "bool",
            GoType::Int => "int",
            GoType::Float64 => "float64",
            GoType::String => "string",
            GoType::Array => "[]interface{}",
            GoType::Object => "map[string]interface{}",
            GoType::ObjectArray => "[]map[string]interface{}",
            GoType::Any => "interface{}",
        }
    }
}

impl fmt::Display for GoType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_go())
    }
}

/// Type mapping from schema spelling to Go
struct TypeMapping {
    schema_type: &'static str,
    go_type: GoType,
}

const TYPE_MAPPINGS: &[TypeMapping] = &[
    TypeMapping {
        schema_type: "bool",
        go_type: GoType::Bool,
    },
    TypeMapping {
        schema_type: "boolean",
        go_type: GoType::Bool,
    },
    TypeMapping {
        schema_type: "int",
        go_type: GoType::Int,
    },
    TypeMapping {
        schema_type: "float",
        go_type: GoType::Float64,
    },
    TypeMapping {
        schema_type: "double",
        go_type: GoType::Float64,
    },
    TypeMapping {
        schema_type: "string",
        go_type: GoType::String,
    },
    TypeMapping {
        schema_type: "array",
        go_type: GoType::Array,
    },
    TypeMapping {
        schema_type: "object",
        go_type: GoType::Object,
    },
    TypeMapping {
        schema_type: "array of objects",
        go_type: GoType::ObjectArray,
    },
    TypeMapping {
        schema_type: "object|array",
        go_type: GoType::Any,
    },
    // Scene and source unions are always homogeneous lists in practice.
    TypeMapping {
        schema_type: "scene|array",
        go_type: GoType::ObjectArray,
    },
    TypeMapping {
        schema_type: "source|array",
        go_type: GoType::ObjectArray,
    },
];

/// Outcome of resolving one raw type string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedType {
    pub go_type: GoType,
    pub optional: bool,
    /// The bare type had no table entry; `go_type` is the `Any` fallback.
    pub unknown: bool,
}

/// Split a raw type into its bare type and optional flag.
///
/// ```
/// use obsgen_core::types::strip_optional;
///
/// assert_eq!(strip_optional("String (optional)"), ("String", true));
/// assert_eq!(strip_optional("String"), ("String", false));
/// ```
pub fn strip_optional(raw: &str) -> (&str, bool) {
    match raw.strip_suffix(OPTIONAL_MARKER) {
        Some(bare) => (bare.trim(), true),
        None => (raw, false),
    }
}

/// Resolve a raw schema type string.
pub fn resolve(raw: &str) -> ResolvedType {
    let (bare, optional) = strip_optional(raw);
    let key = bare.to_lowercase();

    match TYPE_MAPPINGS.iter().find(|m| m.schema_type == key) {
        Some(mapping) => ResolvedType {
            go_type: mapping.go_type,
            optional,
            unknown: false,
        },
        None => ResolvedType {
            go_type: GoType::Any,
            optional,
            unknown: true,
        },
    }
}
