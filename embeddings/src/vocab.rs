//! Vocabulary store: token counts and embedding vectors.

use std::collections::HashMap;

use tracing::debug;

use crate::Embedding;
use crate::config::TrainingConfig;
use crate::error::{EmbeddingError, Result};

/// A vocabulary entry: how often the token has been seen, and its current
/// embedding vector.
#[derive(Debug, Clone)]
pub struct Word {
    pub(crate) count: u64,
    pub(crate) vector: Embedding,
}

impl Word {
    fn new(vector_size: usize) -> Self {
        Self {
            count: 1,
            vector: vec![0.0; vector_size],
        }
    }

    /// Number of times the token has been registered.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// The current embedding vector. Always `vector_size` components; all
    /// zeros until training has visited the token.
    pub fn vector(&self) -> &[f64] {
        &self.vector
    }
}

/// The token catalog and training configuration.
///
/// The vocabulary exclusively owns every [`Word`] and its vector buffer; the
/// trainer and the neighbor search only borrow entries for the duration of a
/// single call. Entries are never removed.
pub struct Vocabulary {
    words: HashMap<String, Word>,
    config: TrainingConfig,
}

impl Vocabulary {
    /// Create an empty vocabulary.
    ///
    /// Fails with [`EmbeddingError::InvalidConfig`] when the configuration
    /// cannot drive training (zero `min_count` or `vector_size`).
    pub fn new(config: TrainingConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            words: HashMap::new(),
            config,
        })
    }

    /// Register one occurrence of a token.
    ///
    /// The first registration creates the entry with a zero vector and count
    /// 1; later registrations only increment the count. The vocabulary grows
    /// without bound.
    pub fn add_word(&mut self, token: impl Into<String>) {
        let token = token.into();
        if let Some(word) = self.words.get_mut(&token) {
            word.count += 1;
        } else {
            debug!("new vocabulary word: {token}");
            self.words
                .insert(token, Word::new(self.config.vector_size));
        }
    }

    /// Get the current embedding vector for a token.
    pub fn vector(&self, token: &str) -> Result<&[f64]> {
        self.words
            .get(token)
            .map(|word| word.vector.as_slice())
            .ok_or_else(|| EmbeddingError::WordNotFound(token.to_string()))
    }

    /// Get a vocabulary entry by token.
    pub fn word(&self, token: &str) -> Option<&Word> {
        self.words.get(token)
    }

    /// Check if a token is in the vocabulary.
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains_key(token)
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the vocabulary is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All known tokens, in arbitrary order.
    pub fn tokens(&self) -> Vec<&str> {
        self.words.keys().map(String::as_str).collect()
    }

    /// The configuration this vocabulary was built with.
    pub fn config(&self) -> &TrainingConfig {
        &self.config
    }

    /// Iterate over all entries, in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Word)> {
        self.words.iter().map(|(token, word)| (token.as_str(), word))
    }

    /// Mutable access to a center/context pair for one update step.
    ///
    /// Returns `None` unless both tokens are present. When center and context
    /// are the same token the second slot is `None` and the caller must apply
    /// both halves of the update to the first entry, which is exactly what
    /// aliased operands would have done.
    pub(crate) fn pair_mut(
        &mut self,
        center: &str,
        context: &str,
    ) -> Option<(&mut Word, Option<&mut Word>)> {
        if center == context {
            return self.words.get_mut(center).map(|word| (word, None));
        }
        match self.words.get_disjoint_mut([center, context]) {
            [Some(center_word), Some(context_word)] => Some((center_word, Some(context_word))),
            _ => None,
        }
    }

    #[cfg(test)]
    pub(crate) fn set_vector(&mut self, token: &str, vector: Embedding) {
        if let Some(word) = self.words.get_mut(token) {
            word.vector = vector;
        }
    }
}
