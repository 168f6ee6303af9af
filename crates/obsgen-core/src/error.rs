//! Error types for bindings generation

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for generator operations
pub type CodegenResult<T> = Result<T, CodegenError>;

/// Fatal errors raised while loading inputs.
///
/// Problems found inside a well-formed schema (unknown types, colliding
/// names) are not errors; they are reported through
/// [`Diagnostics`](crate::Diagnostics).
#[derive(Error, Debug)]
pub enum CodegenError {
    /// I/O error while reading an input file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The schema document could not be parsed, or an entry lacks a required key
    #[error("invalid protocol document: {0}")]
    Json(#[from] serde_json::Error),

    /// The input path does not exist
    #[error("file '{}' does not exist", .0.display())]
    FileNotFound(PathBuf),

    /// Configuration file could not be parsed or failed validation
    #[error("configuration error: {0}")]
    Config(String),
}

impl CodegenError {
    /// Returns a stable numeric code for the error kind
    pub fn error_code(&self) -> u32 {
        match self {
            CodegenError::Io(_) => 1,
            CodegenError::Json(_) => 2,
            CodegenError::FileNotFound(_) => 3,
            CodegenError::Config(_) => 4,
        }
    }
}

impl From<toml::de::Error> for CodegenError {
    fn from(err: toml::de::Error) -> Self {
        CodegenError::Config(err.to_string())
    }
}
