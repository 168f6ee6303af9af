//! obsgen-core - Schema-to-bindings compiler for the obs-websocket protocol
//!
//! This crate turns the machine-readable protocol description into Go
//! source:
//! - one struct per event, request and response, with field docs
//! - a `New<Name>Request` factory per request
//! - a dispatch registry mapping type names to blank values, plus unwrap
//!   functions for the response and event interfaces
//!
//! # Usage
//!
//! ```rust,no_run
//! use obsgen_core::{CodegenConfig, Generator, ProtocolDoc, Selection};
//!
//! let doc = ProtocolDoc::from_file("protocol.json")?;
//! let config = CodegenConfig::default();
//! let output = Generator::new(&doc, &config).generate(Selection::all());
//!
//! for unit in &output.value {
//!     std::fs::write(&unit.file_name, unit.render())?;
//! }
//! if !output.diagnostics.is_empty() {
//!     eprintln!("{}", output.diagnostics);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod diagnostics;
pub mod emit;
mod error;
pub mod generate;
pub mod go;
pub mod message;
pub mod naming;
pub mod schema;
pub mod types;

pub use config::CodegenConfig;
pub use diagnostics::{Diagnostic, Diagnostics, Emitted};
pub use error::{CodegenError, CodegenResult};
pub use generate::{Generator, Selection, SourceUnit};
pub use message::MessageKind;
pub use schema::{Event, Field, Heading, ProtocolDoc, Request};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        CodegenConfig, CodegenError, CodegenResult, Diagnostics, Emitted, Generator, ProtocolDoc,
        Selection, SourceUnit,
    };
}
