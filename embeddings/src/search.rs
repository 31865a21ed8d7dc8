//! Nearest-neighbor search over vocabulary vectors.

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{EmbeddingError, Result};
use crate::similarity::cosine_similarity;
use crate::vocab::Vocabulary;

/// A neighbor search result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Neighbor {
    /// The matched token.
    pub token: String,

    /// Cosine similarity to the query.
    pub score: f64,
}

impl Neighbor {
    fn new(token: impl Into<String>, score: f64) -> Self {
        Self {
            token: token.into(),
            score,
        }
    }
}

/// Scans every vocabulary vector for the entries most similar to a query.
///
/// The search borrows the vocabulary for its own lifetime and never copies
/// vectors. Selection is the bounded linear scan: candidates fill the result
/// set until it holds `top_n` entries, after which each candidate replaces
/// the current minimum only when it scores strictly higher. O(vocabulary ×
/// top_n), deliberately unoptimized for the scale this engine targets.
pub struct NeighborSearch<'a> {
    vocab: &'a Vocabulary,
}

impl<'a> NeighborSearch<'a> {
    /// Create a search view over a vocabulary.
    pub fn new(vocab: &'a Vocabulary) -> Self {
        Self { vocab }
    }

    /// Find the `top_n` tokens most similar to a vocabulary token.
    ///
    /// Fails with [`EmbeddingError::WordNotFound`] when the token is absent
    /// and with [`EmbeddingError::UndefinedSimilarity`] when its vector is
    /// still all zeros (an untrained token has no direction to compare).
    /// The query token itself never appears in the results.
    pub fn similar_to_word(&self, token: &str, top_n: usize) -> Result<Vec<Neighbor>> {
        let query = self.vocab.vector(token)?;
        self.scan(query, top_n, Some(token))
    }

    /// Find the `top_n` tokens most similar to an arbitrary query vector.
    ///
    /// The query must have exactly `vector_size` components. No token is
    /// excluded from the candidates.
    pub fn similar_to_vector(&self, query: &[f64], top_n: usize) -> Result<Vec<Neighbor>> {
        let expected = self.vocab.config().vector_size;
        if query.len() != expected {
            return Err(EmbeddingError::DimensionMismatch {
                expected,
                actual: query.len(),
            });
        }
        self.scan(query, top_n, None)
    }

    /// Find the single token most similar to an arbitrary query vector.
    pub fn nearest(&self, query: &[f64]) -> Result<Option<Neighbor>> {
        Ok(self.similar_to_vector(query, 1)?.into_iter().next())
    }

    fn scan(&self, query: &[f64], top_n: usize, exclude: Option<&str>) -> Result<Vec<Neighbor>> {
        if top_n == 0 {
            return Ok(Vec::new());
        }
        if query.iter().all(|x| *x == 0.0) {
            return Err(EmbeddingError::UndefinedSimilarity);
        }

        // Lexicographic scan order keeps the bounded selection deterministic
        // regardless of how the underlying map iterates.
        let mut entries: Vec<_> = self.vocab.iter().collect();
        entries.sort_unstable_by_key(|(token, _)| *token);

        let mut selected: Vec<Neighbor> = Vec::with_capacity(top_n.min(entries.len()));
        let mut scanned = 0usize;
        for (token, word) in entries {
            if exclude == Some(token) {
                continue;
            }
            let score = match cosine_similarity(query, word.vector()) {
                Ok(score) => score,
                // Untrained entries have no direction and cannot be ranked.
                Err(EmbeddingError::UndefinedSimilarity) => continue,
                Err(err) => return Err(err),
            };
            scanned += 1;

            if selected.len() < top_n {
                selected.push(Neighbor::new(token, score));
                continue;
            }
            let mut min_index = 0;
            for (index, neighbor) in selected.iter().enumerate() {
                if neighbor.score < selected[min_index].score {
                    min_index = index;
                }
            }
            if score > selected[min_index].score {
                selected[min_index] = Neighbor::new(token, score);
            }
        }

        debug!("scanned {scanned} candidates for nearest neighbors");

        // Highest score first, ties broken by token so results are stable.
        selected.sort_by(|a, b| {
            OrderedFloat(b.score)
                .cmp(&OrderedFloat(a.score))
                .then_with(|| a.token.cmp(&b.token))
        });
        Ok(selected)
    }
}
