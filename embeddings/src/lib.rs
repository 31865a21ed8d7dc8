//! # Word Embeddings
//!
//! This crate learns dense vector representations for vocabulary tokens from
//! windowed co-occurrence in a token stream, and retrieves the most similar
//! tokens to a given token or to an arbitrary vector.
//!
//! ## Features
//!
//! - **Vocabulary**: Token counts and embedding vectors in one store
//! - **Skip-gram Training**: Pairwise updates over a sliding context window
//! - **Similarity Search**: Deterministic top-N retrieval by cosine similarity
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Embedding Engine                            │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  Vocabulary ──► SkipGramTrainer ──► NeighborSearch              │
//! │       │                │                  │                     │
//! │       ▼                ▼                  ▼                     │
//! │  TrainingConfig   pairwise update   cosine similarity           │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use wordvec_embeddings::{NeighborSearch, SkipGramTrainer, TrainingConfig, Vocabulary};
//!
//! let config = TrainingConfig::default().with_window_size(2).with_vector_size(16);
//! let mut vocab = Vocabulary::new(config)?;
//! for token in &tokens {
//!     vocab.add_word(token.clone());
//! }
//!
//! SkipGramTrainer::new().train(&mut vocab, &tokens)?;
//!
//! let neighbors = NeighborSearch::new(&vocab).similar_to_word("cat", 5)?;
//! ```
//!
//! Tokenization is the caller's responsibility: the engine accepts a
//! pre-split sequence of tokens and never touches raw text or storage.

pub mod config;
pub mod error;
pub mod search;
pub mod similarity;
pub mod trainer;
pub mod vocab;

pub use config::TrainingConfig;
pub use error::{EmbeddingError, Result};
pub use search::{Neighbor, NeighborSearch};
pub use similarity::{cosine_similarity, dot_product, sigmoid};
pub use trainer::SkipGramTrainer;
pub use vocab::{Vocabulary, Word};

/// A dense vector embedding.
pub type Embedding = Vec<f64>;
