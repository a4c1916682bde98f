//! Error types for imcite-core
//!
//! Lookups and removals on absent keys are not errors: they return `None` or
//! do nothing. Errors only come from the edges of the system (files, parsing,
//! configuration).

use std::path::PathBuf;

use thiserror::Error;

pub use crate::config::ConfigError;

/// Result type alias for imcite operations
pub type Result<T> = std::result::Result<T, ImciteError>;

/// Main error type for imcite operations
#[derive(Error, Debug)]
pub enum ImciteError {
    /// Report export errors
    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    /// Corpus loading errors
    #[error("Corpus error: {0}")]
    Corpus(#[from] CorpusError),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Export-specific errors
#[derive(Error, Debug)]
pub enum ExportError {
    /// Destination could not be created or written
    #[error("Failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Corpus-loading errors
#[derive(Error, Debug)]
pub enum CorpusError {
    /// Source file could not be read
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Source is not a valid corpus description
    #[error("Invalid corpus JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
