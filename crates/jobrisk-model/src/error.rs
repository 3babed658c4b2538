//! Error types for model operations.

use thiserror::Error;

/// Result type for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;

/// Errors that can occur while loading or scoring with a model artifact.
#[derive(Debug, Error)]
pub enum ModelError {
    /// IO error while reading the artifact file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Artifact deserialization error
    #[error("Artifact deserialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Artifact format version this build does not understand
    #[error("Unsupported artifact format version {found} (supported: {supported})")]
    UnsupportedVersion {
        /// Version found in the artifact
        found: u32,
        /// Version this build supports
        supported: u32,
    },

    /// Structurally invalid artifact
    #[error("Malformed artifact: {0}")]
    Malformed(String),

    /// Transformed vector does not match what the forest expects.
    ///
    /// This is a model/transformer version mismatch, a configuration defect
    /// rather than a per-request condition.
    #[error(
        "Feature shape mismatch: forest expects {expected} features, transformer produced {actual}"
    )]
    FeatureShapeMismatch {
        /// Feature count the forest was trained on
        expected: usize,
        /// Feature count actually produced
        actual: usize,
    },
}
