//! Error types for the embedding engine.

use thiserror::Error;

/// Result type alias for embedding operations.
pub type Result<T> = std::result::Result<T, EmbeddingError>;

/// Errors that can occur in the embedding engine.
#[derive(Error, Debug)]
pub enum EmbeddingError {
    /// Token absent from the vocabulary.
    #[error("word not found in vocabulary: {0}")]
    WordNotFound(String),

    /// Invalid training configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Dimension mismatch.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Cosine similarity requested against a zero-magnitude vector.
    #[error("cosine similarity undefined for zero-magnitude vector")]
    UndefinedSimilarity,
}
