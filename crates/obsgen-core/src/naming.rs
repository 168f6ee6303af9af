//! Naming convention utilities for code generation.
//!
//! Schema names (`scene-name`, `sources[].name`, `settings.*.value`) are
//! turned into Go identifiers by [`normalize`].
//!
//! | Input | Visibility | Output |
//! |-------|------------|--------|
//! | `scene-name` | exported | `SceneName` |
//! | `scene-name` | unexported | `sceneName` |
//! | `source-id` | exported | `SourceID` |
//! | `items[].obs-fps` | exported | `ItemsOBSFPS` |
//!
//! # Acronyms
//!
//! After separators are resolved, every occurrence of `Id`, `Obs` and `Fps`
//! is upper-cased. The match is a plain substring match, so it also fires
//! inside longer words (`Idle` becomes `IDle`). Downstream code depends on
//! these exact names, so the rule is kept as is.

use crate::message::MESSAGE_ID_GENERATOR;

/// Separators removed during normalization. Multi-character separators
/// come first so `.` never splits `.*.` or `[].` apart.
const SEPARATORS: &[&str] = &["-", "_", ".*.", "[].", "."];

const ACRONYMS: &[(&str, &str)] = &[("Id", "ID"), ("Obs", "OBS"), ("Fps", "FPS")];

const GO_KEYWORDS: &[&str] = &[
    "break",
    "case",
    "chan",
    "const",
    "continue",
    "default",
    "defer",
    "else",
    "fallthrough",
    "for",
    "func",
    "go",
    "goto",
    "if",
    "import",
    "interface",
    "map",
    "package",
    "range",
    "return",
    "select",
    "struct",
    "switch",
    "type",
    "var",
];

/// Go identifier visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// Upper-case first letter, visible outside the package.
    Exported,
    /// Lower-case first letter.
    Unexported,
}

/// Convert a schema name to a Go identifier.
///
/// # Examples
///
/// ```
/// use obsgen_core::naming::{normalize, Visibility};
///
/// assert_eq!(normalize("scene-name", Visibility::Exported), "SceneName");
/// assert_eq!(normalize("scene-name", Visibility::Unexported), "sceneName");
/// assert_eq!(normalize("source-id", Visibility::Exported), "SourceID");
/// ```
pub fn normalize(raw: &str, visibility: Visibility) -> String {
    let mut s = match visibility {
        Visibility::Exported => capitalize(raw),
        Visibility::Unexported => decapitalize(raw),
    };

    for sep in SEPARATORS {
        while let Some(i) = s.find(sep) {
            if s.ends_with(sep) {
                s.truncate(s.len() - sep.len());
                continue;
            }
            let rest = &s[i + sep.len()..];
            let mut chars = rest.chars();
            let next: String = chars
                .next()
                .map(|c| c.to_uppercase().collect())
                .unwrap_or_default();
            s = format!("{}{}{}", &s[..i], next, chars.as_str());
        }
    }

    ACRONYMS
        .iter()
        .fold(s, |acc, (from, to)| acc.replace(from, to))
}

/// Convert a schema name to a Go function argument name.
///
/// Same as the unexported form of [`normalize`], with Go keywords and the
/// message id generator prefixed by an underscore. The argument can then
/// neither break the parse nor shadow the generator inside the factory.
///
/// ```
/// use obsgen_core::naming::to_arg_name;
///
/// assert_eq!(to_arg_name("scene-name"), "sceneName");
/// assert_eq!(to_arg_name("type"), "_type");
/// assert_eq!(to_arg_name("get-message-id"), "_getMessageID");
/// ```
pub fn to_arg_name(raw: &str) -> String {
    let ident = normalize(raw, Visibility::Unexported);
    if GO_KEYWORDS.contains(&ident.as_str()) || ident == MESSAGE_ID_GENERATOR {
        format!("_{ident}")
    } else {
        ident
    }
}

/// Build a file name that is safe on every platform.
///
/// Characters outside `[A-Za-z0-9_.-]` become underscores.
///
/// ```
/// use obsgen_core::naming::to_file_name;
///
/// assert_eq!(to_file_name("events", "scene items"), "events_scene_items.go");
/// ```
pub fn to_file_name(prefix: &str, category: &str) -> String {
    let stem: String = format!("{prefix}_{category}")
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!("{stem}.go")
}

/// Capitalize the first letter of a string.
///
/// # Examples
///
/// ```
/// use obsgen_core::naming::capitalize;
///
/// assert_eq!(capitalize("hello"), "Hello");
/// assert_eq!(capitalize(""), "");
/// ```
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Lower-case the first letter of a string.
pub fn decapitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_lowercase().chain(chars).collect(),
    }
}

/// Upper-case the first letter and lower-case the rest.
///
/// Used for version tags: `unreleased` and `UNRELEASED` both become
/// `Unreleased`.
pub fn sentence_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first
            .to_uppercase()
            .chain(chars.as_str().to_lowercase().chars())
            .collect(),
    }
}
