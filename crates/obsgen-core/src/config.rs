//! Generator configuration (`obsgen.toml`).
//!
//! Every key is optional; a missing file means built-in defaults.
//!
//! ```toml
//! [package]
//! name = "obsws"
//!
//! [links]
//! protocol = "https://github.com/Palakis/obs-websocket/blob/master/docs/generated/protocol.md"
//! generator = "https://github.com/christopher-dG/go-obs-websocket"
//!
//! [format]
//! enabled = true
//! command = "gofmt"
//! args = ["-w"]
//! ```

use crate::error::{CodegenError, CodegenResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "obsgen.toml";

const DEFAULT_PROTOCOL_URL: &str =
    "https://github.com/Palakis/obs-websocket/blob/master/docs/generated/protocol.md";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CodegenConfig {
    #[serde(default)]
    pub package: PackageSection,

    #[serde(default)]
    pub links: LinksSection,

    #[serde(default)]
    pub format: FormatSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageSection {
    /// Go package clause written at the top of every unit.
    #[serde(default = "default_package")]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinksSection {
    /// Protocol documentation page; struct docs link to its anchors.
    #[serde(default = "default_protocol_url")]
    pub protocol: String,

    /// Where the generator lives; written into every unit header.
    #[serde(default = "default_generator_url")]
    pub generator: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormatSection {
    /// Run the formatter over the written files
    #[serde(default = "default_format_enabled")]
    pub enabled: bool,

    #[serde(default = "default_format_command")]
    pub command: String,

    /// Arguments placed before the file list
    #[serde(default = "default_format_args")]
    pub args: Vec<String>,
}

fn default_package() -> String {
    "obsws".to_string()
}

fn default_protocol_url() -> String {
    DEFAULT_PROTOCOL_URL.to_string()
}

fn default_generator_url() -> String {
    env!("CARGO_PKG_REPOSITORY").to_string()
}

fn default_format_enabled() -> bool {
    true
}

fn default_format_command() -> String {
    "gofmt".to_string()
}

fn default_format_args() -> Vec<String> {
    vec!["-w".to_string()]
}

impl Default for PackageSection {
    fn default() -> Self {
        Self {
            name: default_package(),
        }
    }
}

impl Default for LinksSection {
    fn default() -> Self {
        Self {
            protocol: default_protocol_url(),
            generator: default_generator_url(),
        }
    }
}

impl Default for FormatSection {
    fn default() -> Self {
        Self {
            enabled: default_format_enabled(),
            command: default_format_command(),
            args: default_format_args(),
        }
    }
}

impl CodegenConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> CodegenResult<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(CodegenError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> CodegenResult<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve the configuration for a run.
    ///
    /// An explicit path must exist. Without one, [`DEFAULT_CONFIG_FILE`] in
    /// `dir` is used when present, else the defaults.
    pub fn load(explicit: Option<&Path>, dir: &Path) -> CodegenResult<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let candidate = dir.join(DEFAULT_CONFIG_FILE);
                if candidate.is_file() {
                    tracing::debug!(path = %candidate.display(), "using config file");
                    Self::from_file(candidate)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> CodegenResult<()> {
        if !is_go_identifier(&self.package.name) {
            return Err(CodegenError::Config(format!(
                "package name '{}' is not a valid Go identifier",
                self.package.name
            )));
        }

        if self.links.protocol.trim().is_empty() {
            return Err(CodegenError::Config(
                "protocol link cannot be empty".to_string(),
            ));
        }

        if self.links.generator.trim().is_empty() {
            return Err(CodegenError::Config(
                "generator link cannot be empty".to_string(),
            ));
        }

        if self.format.enabled && self.format.command.trim().is_empty() {
            return Err(CodegenError::Config(
                "format command cannot be empty when formatting is enabled".to_string(),
            ));
        }

        Ok(())
    }
}

/// Check if a string is a valid Go identifier
fn is_go_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first == '_' || first.is_alphabetic() => {
            chars.all(|c| c == '_' || c.is_alphanumeric())
        }
        _ => false,
    }
}
