//! Error types for the transformation core.

use thiserror::Error;

/// Result type alias for core transformation operations.
pub type Result<T> = std::result::Result<T, TranspileError>;

/// Errors that can occur while transpiling a scene graph.
#[derive(Error, Debug)]
pub enum TranspileError {
    /// Unique ids were forced but the node carries no `uuid`.
    #[error("node `{node}` has no uuid but unique ids were requested")]
    MissingUuid { node: String },
}
