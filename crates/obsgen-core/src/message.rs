//! Message kinds and their envelopes.

use crate::schema::{Field, Heading};
use std::fmt;

/// Name of the runtime function that produces fresh message ids.
pub const MESSAGE_ID_GENERATOR: &str = "getMessageID";

/// The three kinds of message a protocol entry turns into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MessageKind {
    Event,
    Request,
    Response,
}

impl MessageKind {
    /// Suffix appended to the schema name to form the struct name.
    pub fn suffix(self) -> &'static str {
        match self {
            MessageKind::Event => "Event",
            MessageKind::Request => "Request",
            MessageKind::Response => "Response",
        }
    }

    /// The runtime interface every struct of this kind satisfies.
    pub fn interface(self) -> &'static str {
        self.suffix()
    }

    /// The envelope type embedded in every struct of this kind.
    pub fn envelope(self) -> &'static str {
        match self {
            MessageKind::Event => "_event",
            MessageKind::Request => "_request",
            MessageKind::Response => "_response",
        }
    }

    /// Struct name for a schema entry of this kind.
    pub fn struct_name(self, name: &str) -> String {
        format!("{name}{}", self.suffix())
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

/// Everything the struct emitter needs to know about one message type.
#[derive(Debug, Clone)]
pub struct StructShape<'a> {
    pub kind: MessageKind,
    pub name: &'a str,
    pub description: String,
    pub since: Option<&'a str>,
    pub heading: &'a Heading,
    pub fields: &'a [Field],
}

impl StructShape<'_> {
    pub fn struct_name(&self) -> String {
        self.kind.struct_name(self.name)
    }
}
