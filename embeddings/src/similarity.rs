//! Numeric primitives for embedding vectors.

use crate::error::{EmbeddingError, Result};

/// Compute the dot product between two vectors.
pub fn dot_product(a: &[f64], b: &[f64]) -> Result<f64> {
    if a.len() != b.len() {
        return Err(EmbeddingError::DimensionMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }

    Ok(a.iter().zip(b.iter()).map(|(x, y)| x * y).sum())
}

/// The logistic function, mapping any real number into (0, 1).
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Compute the cosine similarity between two vectors.
///
/// Returns a value between -1.0 and 1.0, where:
/// - 1.0 means identical directions
/// - 0.0 means orthogonal vectors
/// - -1.0 means opposite directions
///
/// Fails with [`EmbeddingError::UndefinedSimilarity`] when either vector has
/// zero magnitude, since the quotient is undefined there.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> Result<f64> {
    let dot = dot_product(a, b)?;
    let magnitude_a: f64 = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let magnitude_b: f64 = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    if magnitude_a == 0.0 || magnitude_b == 0.0 {
        return Err(EmbeddingError::UndefinedSimilarity);
    }

    Ok(dot / (magnitude_a * magnitude_b))
}
