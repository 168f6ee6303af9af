//! Post-write formatter invocation.

use anyhow::{Context, Result, bail};
use obsgen_core::config::FormatSection;
use std::path::PathBuf;
use std::process::Command;

/// Run the configured formatter over `files`.
///
/// The command gets the configured arguments followed by the file list.
pub fn format_files(format: &FormatSection, files: &[PathBuf]) -> Result<()> {
    if files.is_empty() {
        return Ok(());
    }

    tracing::debug!(command = %format.command, files = files.len(), "running formatter");

    let output = Command::new(&format.command)
        .args(&format.args)
        .args(files)
        .output()
        .with_context(|| format!("Failed to execute formatter: {}", format.command))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!(
            "Formatter '{}' exited with {}: {}",
            format.command,
            output.status,
            stderr.trim()
        );
    }

    Ok(())
}
