//! Configuration for embedding training.

use serde::{Deserialize, Serialize};

use crate::error::{EmbeddingError, Result};

/// Configuration for the vocabulary and the skip-gram update rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingConfig {
    /// Learning rate.
    pub alpha: f64,

    /// Number of training iterations. Stored for callers that plan their own
    /// epoch loop; a single call to `train` always makes exactly one pass.
    pub iterations: usize,

    /// Context radius: positions `[i - window_size, i + window_size]` count
    /// as co-occurring with position `i`.
    pub window_size: usize,

    /// Dimension of every embedding vector.
    pub vector_size: usize,

    /// Gradient scale divisor. Despite the name this is not a frequency
    /// cutoff: rare words are never pruned, the count ratio is folded into
    /// the update step instead.
    pub min_count: u64,
}

impl TrainingConfig {
    /// Set the learning rate.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Set the context window radius.
    pub fn with_window_size(mut self, window_size: usize) -> Self {
        self.window_size = window_size;
        self
    }

    /// Set the embedding dimension.
    pub fn with_vector_size(mut self, vector_size: usize) -> Self {
        self.vector_size = vector_size;
        self
    }

    /// Set the gradient scale divisor.
    pub fn with_min_count(mut self, min_count: u64) -> Self {
        self.min_count = min_count;
        self
    }

    /// Check that the configuration can drive training at all.
    ///
    /// `min_count` divides every gradient step and `vector_size` shapes every
    /// vector, so zero is rejected for both.
    pub fn validate(&self) -> Result<()> {
        if self.min_count == 0 {
            return Err(EmbeddingError::InvalidConfig(
                "min_count must be positive".to_string(),
            ));
        }
        if self.vector_size == 0 {
            return Err(EmbeddingError::InvalidConfig(
                "vector_size must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            alpha: 0.025,
            iterations: 10,
            window_size: 5,
            vector_size: 10,
            min_count: 5,
        }
    }
}
