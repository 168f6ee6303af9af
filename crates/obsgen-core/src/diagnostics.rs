//! Non-fatal findings collected during generation.
//!
//! Emitters return their findings next to their output instead of writing
//! them to shared state, so independent emitter calls can be merged in any
//! order by the caller.

use crate::message::MessageKind;
use std::collections::BTreeSet;
use std::fmt;

/// A single non-fatal finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A field type string has no entry in the type table.
    UnknownType {
        owner: String,
        field: String,
        raw_type: String,
    },

    /// Two or more fields of one struct normalize to the same identifier.
    DuplicateField { owner: String, ident: String },

    /// A message name is declared more than once; the later declaration
    /// replaces the earlier one in the dispatch registry.
    DuplicateName { kind: MessageKind, name: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnknownType {
                owner,
                field,
                raw_type,
            } => write!(f, "{owner}.{field}: unknown type ({raw_type})"),
            Diagnostic::DuplicateField { owner, ident } => {
                write!(f, "{owner}: duplicate field name {ident}")
            }
            Diagnostic::DuplicateName { kind, name } => {
                write!(f, "{kind} {name} is declared more than once")
            }
        }
    }
}

/// Ordered collection of diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.entries.push(diagnostic);
    }

    /// Append all of `other`, keeping its order.
    pub fn merge(&mut self, other: Diagnostics) {
        self.extend(other);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter()
    }

    /// Distinct raw type strings that failed to resolve, sorted.
    pub fn unknown_types(&self) -> BTreeSet<&str> {
        self.entries
            .iter()
            .filter_map(|d| match d {
                Diagnostic::UnknownType { raw_type, .. } => Some(raw_type.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Extend<Diagnostic> for Diagnostics {
    fn extend<I: IntoIterator<Item = Diagnostic>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} diagnostic(s)", self.entries.len())?;
        for entry in &self.entries {
            writeln!(f, "  {entry}")?;
        }
        Ok(())
    }
}

/// Emitter output paired with the diagnostics found while producing it.
#[derive(Debug, Clone)]
pub struct Emitted<T> {
    pub value: T,
    pub diagnostics: Diagnostics,
}

impl<T> Emitted<T> {
    pub fn new(value: T, diagnostics: Diagnostics) -> Self {
        Self { value, diagnostics }
    }

    /// Output with no diagnostics.
    pub fn clean(value: T) -> Self {
        Self::new(value, Diagnostics::new())
    }

    /// Move the diagnostics into `sink` and return the value.
    pub fn merge_into(self, sink: &mut Diagnostics) -> T {
        sink.merge(self.diagnostics);
        self.value
    }
}
