//! Writing rendered units to disk.

use anyhow::{Context, Result};
use obsgen_core::SourceUnit;
use std::fs;
use std::path::{Path, PathBuf};

/// Write every unit into `dir`, replacing existing files.
///
/// Returns the written paths in unit order.
pub fn write_units(dir: &Path, units: &[SourceUnit]) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(units.len());

    for unit in units {
        let path = dir.join(&unit.file_name);
        fs::write(&path, unit.render())
            .with_context(|| format!("Failed to write {}", path.display()))?;
        tracing::info!(path = %path.display(), "wrote");
        written.push(path);
    }

    Ok(written)
}

#[cfg(test)]
#[path = "writer/writer_tests.rs"]
mod writer_tests;
