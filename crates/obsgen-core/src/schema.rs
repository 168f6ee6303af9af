//! In-memory model of the protocol document.
//!
//! The document is a JSON object with two top-level mappings, `events` and
//! `requests`, each keyed by category name. Category order follows the
//! document so that every derived artifact is stable across runs.
//!
//! ```json
//! {
//!   "events": { "scenes": [ { "name": "SwitchScenes", ... } ] },
//!   "requests": { "general": [ { "name": "GetVersion", ... } ] }
//! }
//! ```
//!
//! Required keys (`name`, `description`, `heading.text`, and the three keys
//! of every field) are enforced by deserialization: a missing key is a
//! fatal [`CodegenError::Json`](crate::CodegenError::Json), never a skipped
//! entry.

use crate::error::{CodegenError, CodegenResult};
use crate::message::{MessageKind, StructShape};
use indexmap::IndexMap;
use serde::Deserialize;
use std::path::Path;

/// The loaded protocol document. Read-only after construction.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProtocolDoc {
    /// Category name to events, in declaration order.
    #[serde(default)]
    pub events: IndexMap<String, Vec<Event>>,

    /// Category name to requests, in declaration order.
    #[serde(default)]
    pub requests: IndexMap<String, Vec<Request>>,
}

/// A server-sent event.
#[derive(Debug, Clone, Deserialize)]
pub struct Event {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub since: Option<String>,
    pub heading: Heading,
    #[serde(default)]
    pub returns: Vec<Field>,
}

/// A client request. Its `returns` define the paired response type.
#[derive(Debug, Clone, Deserialize)]
pub struct Request {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub since: Option<String>,
    pub heading: Heading,
    #[serde(default)]
    pub params: Vec<Field>,
    #[serde(default)]
    pub returns: Vec<Field>,
}

/// Section heading of an entry in the protocol documentation.
#[derive(Debug, Clone, Deserialize)]
pub struct Heading {
    pub text: String,
}

/// A single named, typed, described member of a message.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Field {
    /// Name in schema casing, e.g. `scene-name`.
    pub name: String,

    /// Raw type string, possibly suffixed with `(optional)`.
    #[serde(rename = "type")]
    pub ty: String,

    pub description: String,
}

impl Heading {
    /// Documentation anchor fragment for this heading.
    pub fn anchor(&self) -> String {
        self.text.to_lowercase()
    }
}

impl ProtocolDoc {
    /// Load a document from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> CodegenResult<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(CodegenError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse a document from JSON text.
    pub fn from_json(content: &str) -> CodegenResult<Self> {
        let doc = serde_json::from_str(content)?;
        Ok(doc)
    }

    /// All events across categories, in document order.
    pub fn all_events(&self) -> impl Iterator<Item = &Event> {
        self.events.values().flatten()
    }

    /// All requests across categories, in document order.
    pub fn all_requests(&self) -> impl Iterator<Item = &Request> {
        self.requests.values().flatten()
    }
}

impl Event {
    /// Shape of the `<Name>Event` struct.
    pub fn event_struct(&self) -> StructShape<'_> {
        StructShape {
            kind: MessageKind::Event,
            name: &self.name,
            description: self.description.clone(),
            since: self.since.as_deref(),
            heading: &self.heading,
            fields: &self.returns,
        }
    }
}

impl Request {
    /// Shape of the `<Name>Request` struct.
    pub fn request_struct(&self) -> StructShape<'_> {
        StructShape {
            kind: MessageKind::Request,
            name: &self.name,
            description: self.description.clone(),
            since: self.since.as_deref(),
            heading: &self.heading,
            fields: &self.params,
        }
    }

    /// Shape of the derived `<Name>Response` struct.
    pub fn response_struct(&self) -> StructShape<'_> {
        StructShape {
            kind: MessageKind::Response,
            name: &self.name,
            description: format!("Response for {}Request.", self.name),
            since: self.since.as_deref(),
            heading: &self.heading,
            fields: &self.returns,
        }
    }
}

#[cfg(test)]
#[path = "schema/schema_tests.rs"]
mod schema_tests;
