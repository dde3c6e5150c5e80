//! Error types for the catalogue generator
//!
//! The generation engine itself is total; every fallible operation lives at
//! the wrapper boundary (date parsing, serialization, file output).

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for quakegen
#[derive(Debug, Error)]
pub enum QuakegenError {
    #[error("Invalid date: {0}")]
    Date(#[from] chrono::ParseError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}
