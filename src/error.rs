//! Error types for CitySift
//!
//! Filtering an in-memory string list cannot fail; everything here
//! covers the application shell around it (dataset files, CLI
//! arguments, terminal IO).

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for CitySift operations
#[derive(Error, Debug)]
pub enum CitySiftError {
    #[error("Failed to open city list '{}': {}", .0.display(), .1)]
    DatasetOpenError(PathBuf, std::io::Error),

    #[error("Failed to parse city list '{}': {}", .0.display(), .1)]
    DatasetParseError(PathBuf, serde_json::Error),

    #[error("City list '{}' contains no entries", .0.display())]
    EmptyDataset(PathBuf),

    #[error("Unknown output format '{0}' (expected 'text' or 'json')")]
    UnknownOutputFormat(String),

    #[error("JSON encoding error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type alias for CitySift operations
pub type Result<T> = std::result::Result<T, CitySiftError>;
