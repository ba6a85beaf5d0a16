//! Media descriptor loading errors.

use std::path::PathBuf;

/// Errors that can occur while loading a media descriptor.
#[derive(Debug, thiserror::Error)]
pub enum DescriptorError {
    #[error("Descriptor not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Failed to read descriptor: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Invalid descriptor JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}
