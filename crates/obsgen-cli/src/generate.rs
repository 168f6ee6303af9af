//! Generate command implementation
//!
//! Loads the configuration and the protocol document, then writes the
//! selected units stage by stage: events, requests, registry. A later
//! stage failing leaves the files of earlier stages in place.

use crate::{format, writer};
use anyhow::{Context, Result, bail};
use obsgen_core::{CodegenConfig, Diagnostics, Generator, ProtocolDoc, Selection};
use std::fs;
use std::path::PathBuf;

/// Everything one run needs.
#[derive(Debug, Clone)]
pub struct Options {
    /// Protocol JSON document
    pub path: PathBuf,
    pub output: PathBuf,
    /// Explicit config file; else `obsgen.toml` in `work_dir`
    pub config: Option<PathBuf>,
    pub work_dir: PathBuf,
    pub selection: Selection,
    /// Run the formatter when the config enables it
    pub format: bool,
    pub strict: bool,
}

/// Run the generator and return what it reported.
pub fn run(options: &Options) -> Result<Diagnostics> {
    let config = CodegenConfig::load(options.config.as_deref(), &options.work_dir)?;
    let doc = ProtocolDoc::from_file(&options.path)?;
    tracing::debug!(
        path = %options.path.display(),
        events = doc.all_events().count(),
        requests = doc.all_requests().count(),
        "loaded protocol document"
    );

    if options.selection.is_empty() {
        tracing::info!("nothing selected; pass --events, --requests, --typeswitches or --all");
        return Ok(Diagnostics::new());
    }

    fs::create_dir_all(&options.output).with_context(|| {
        format!(
            "Failed to create output directory {}",
            options.output.display()
        )
    })?;

    let generator = Generator::new(&doc, &config);
    let mut diagnostics = Diagnostics::new();
    let mut written = Vec::new();

    if options.selection.events {
        let units = generator.events().merge_into(&mut diagnostics);
        written.extend(writer::write_units(&options.output, &units)?);
    }
    if options.selection.requests {
        let units = generator.requests().merge_into(&mut diagnostics);
        written.extend(writer::write_units(&options.output, &units)?);
    }
    if options.selection.registry {
        let unit = generator.registry().merge_into(&mut diagnostics);
        written.extend(writer::write_units(&options.output, &[unit])?);
    }

    if options.format && config.format.enabled {
        if let Err(err) = format::format_files(&config.format, &written) {
            tracing::warn!("{err:#}");
        }
    }

    report(&diagnostics);

    if options.strict && !diagnostics.is_empty() {
        bail!(
            "{} diagnostic(s) reported and --strict is set",
            diagnostics.len()
        );
    }

    Ok(diagnostics)
}

fn report(diagnostics: &Diagnostics) {
    for diagnostic in diagnostics.iter() {
        tracing::warn!("{diagnostic}");
    }

    let unknown = diagnostics.unknown_types();
    if !unknown.is_empty() {
        let list: Vec<&str> = unknown.into_iter().collect();
        tracing::warn!("unknown types: {}", list.join(", "));
    }
}
