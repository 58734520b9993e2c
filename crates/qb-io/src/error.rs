//! Error types for the bridge pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for bridge operations.
pub type Result<T> = std::result::Result<T, BridgeError>;

/// Errors that can occur around the transformation core.
#[derive(Error, Debug)]
pub enum BridgeError {
    /// The input path is neither a `.qtbridge` bundle nor a `.metadata` file.
    #[error("unsupported input `{path}` — expected a .qtbridge or .metadata file")]
    UnsupportedInput { path: PathBuf },

    /// The metadata file could not be read.
    #[error("failed to read metadata file `{path}`: {source}")]
    MetadataRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The metadata file is not valid scene-graph JSON.
    #[error("failed to parse metadata file `{path}`: {source}")]
    MetadataParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Bundle extraction error.
    #[error("archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// Error surfaced by the transformation core.
    #[error(transparent)]
    Transpile(#[from] qb_core::TranspileError),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
