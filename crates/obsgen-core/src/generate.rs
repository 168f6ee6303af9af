//! Generation driver: from a loaded document to source units.
//!
//! One unit per category for events and for requests, plus one registry
//! unit. Units are plain values; writing them out is left to the caller.

use crate::config::CodegenConfig;
use crate::diagnostics::{Diagnostics, Emitted};
use crate::emit::{NameIndex, emit_constructor, emit_registry, emit_struct};
use crate::go::{Decl, GoFile, Render};
use crate::naming::to_file_name;
use crate::schema::ProtocolDoc;

/// File name of the dispatch registry unit.
pub const REGISTRY_FILE: &str = "typeswitches.go";

/// First header line of every unit.
pub const GENERATED_NOTICE: &str = "This file is automatically generated.";

/// Which outputs to produce. Nothing is selected by default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    pub events: bool,
    pub requests: bool,
    pub registry: bool,
}

impl Selection {
    pub fn all() -> Self {
        Self {
            events: true,
            requests: true,
            registry: true,
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.events || self.requests || self.registry)
    }
}

/// One emitted source file.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceUnit {
    pub file_name: String,
    pub file: GoFile,
}

impl SourceUnit {
    /// Go source text of this unit.
    pub fn render(&self) -> String {
        self.file.to_source()
    }
}

/// Produces source units for one document and configuration.
pub struct Generator<'a> {
    doc: &'a ProtocolDoc,
    config: &'a CodegenConfig,
}

impl<'a> Generator<'a> {
    pub fn new(doc: &'a ProtocolDoc, config: &'a CodegenConfig) -> Self {
        Self { doc, config }
    }

    fn header(&self) -> Vec<String> {
        vec![
            GENERATED_NOTICE.to_string(),
            format!("Protocol: {}", self.config.links.protocol),
            format!("Generator: {}", self.config.links.generator),
        ]
    }

    fn unit(&self, file_name: String, decls: Vec<Decl>) -> SourceUnit {
        SourceUnit {
            file_name,
            file: GoFile {
                package: self.config.package.name.clone(),
                header: self.header(),
                decls,
            },
        }
    }

    /// One unit per event category.
    pub fn events(&self) -> Emitted<Vec<SourceUnit>> {
        let doc_url = &self.config.links.protocol;
        let mut diagnostics = Diagnostics::new();
        let mut units = Vec::with_capacity(self.doc.events.len());

        for (category, events) in &self.doc.events {
            tracing::debug!(category = %category, count = events.len(), "emitting events");
            let decls = events
                .iter()
                .map(|event| {
                    let decl = emit_struct(&event.event_struct(), doc_url);
                    Decl::Struct(decl.merge_into(&mut diagnostics))
                })
                .collect();
            units.push(self.unit(to_file_name("events", category), decls));
        }

        Emitted::new(units, diagnostics)
    }

    /// One unit per request category, holding each request struct, its
    /// factory and its response struct.
    pub fn requests(&self) -> Emitted<Vec<SourceUnit>> {
        let doc_url = &self.config.links.protocol;
        let mut diagnostics = Diagnostics::new();
        let mut units = Vec::with_capacity(self.doc.requests.len());

        for (category, requests) in &self.doc.requests {
            tracing::debug!(category = %category, count = requests.len(), "emitting requests");
            let mut decls = Vec::with_capacity(requests.len() * 3);
            for request in requests {
                let request_decl = emit_struct(&request.request_struct(), doc_url);
                decls.push(Decl::Struct(request_decl.merge_into(&mut diagnostics)));
                decls.push(Decl::Func(emit_constructor(request)));
                let response_decl = emit_struct(&request.response_struct(), doc_url);
                decls.push(Decl::Struct(response_decl.merge_into(&mut diagnostics)));
            }
            units.push(self.unit(to_file_name("requests", category), decls));
        }

        Emitted::new(units, diagnostics)
    }

    /// The dispatch registry unit.
    pub fn registry(&self) -> Emitted<SourceUnit> {
        let index = NameIndex::collect(self.doc);
        tracing::debug!(
            requests = index.value.requests.len(),
            events = index.value.events.len(),
            "emitting registry"
        );
        let unit = self.unit(REGISTRY_FILE.to_string(), emit_registry(&index.value));
        Emitted::new(unit, index.diagnostics)
    }

    /// All selected units: events, then requests, then the registry.
    pub fn generate(&self, selection: Selection) -> Emitted<Vec<SourceUnit>> {
        let mut diagnostics = Diagnostics::new();
        let mut units = Vec::new();

        if selection.events {
            units.extend(self.events().merge_into(&mut diagnostics));
        }
        if selection.requests {
            units.extend(self.requests().merge_into(&mut diagnostics));
        }
        if selection.registry {
            units.push(self.registry().merge_into(&mut diagnostics));
        }

        Emitted::new(units, diagnostics)
    }
}

#[cfg(test)]
#[path = "generate/generate_tests.rs"]
mod generate_tests;
