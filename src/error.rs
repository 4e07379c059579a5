//! Error types for import-remap.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for import-remap operations.
pub type Result<T> = std::result::Result<T, ImportMapError>;

/// Main error type for import-remap.
#[derive(Error, Debug)]
pub enum ImportMapError {
    /// A specifier was mapped to a bare import
    #[error(
        "Import specifier can NOT be mapped to a bare import statement. \
         Import specifier \"{key}\" is being wrongly mapped to \"{value}\""
    )]
    BareSpecifier { key: String, value: String },

    /// A mapped specifier is also declared external
    #[error(
        "Import specifier must NOT be present in the bundler's external config. \
         Please remove the specifier from the external config."
    )]
    ExternalConflict,

    /// A path source has an unrecognized extension
    #[error("Unsupported file type: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
