//! Skip-gram training over a context window.

use tracing::info;

use crate::error::Result;
use crate::similarity::{dot_product, sigmoid};
use crate::vocab::Vocabulary;

/// Trains vocabulary vectors from windowed co-occurrence in a token stream.
///
/// The trainer holds no state of its own; it borrows the [`Vocabulary`] for
/// the duration of one call and mutates vectors in place.
#[derive(Debug, Default)]
pub struct SkipGramTrainer;

impl SkipGramTrainer {
    /// Create a new trainer.
    pub fn new() -> Self {
        Self
    }

    /// Run one training pass over an ordered, pre-tokenized sequence.
    ///
    /// For every position `i` whose token is in the vocabulary, every
    /// in-vocabulary token at positions `[i - window_size, i + window_size]`
    /// (excluding `i` itself, clipped to the sequence bounds) is treated as a
    /// co-occurring context and the pair receives one update. Tokens absent
    /// from the vocabulary still occupy positions in the window; they are
    /// skipped, not dropped from the stream.
    ///
    /// This is always a single pass: the configured `iterations` value does
    /// not repeat it.
    pub fn train<S: AsRef<str>>(&self, vocab: &mut Vocabulary, tokens: &[S]) -> Result<()> {
        let window_size = vocab.config().window_size;
        let mut pairs = 0usize;

        for i in 0..tokens.len() {
            let center = tokens[i].as_ref();
            if !vocab.contains(center) {
                continue;
            }
            let lo = i.saturating_sub(window_size);
            let hi = (i + window_size).min(tokens.len() - 1);
            for j in lo..=hi {
                if j == i {
                    continue;
                }
                let context = tokens[j].as_ref();
                if !vocab.contains(context) {
                    continue;
                }
                self.update_pair(vocab, center, context)?;
                pairs += 1;
            }
        }

        let positions = tokens.len();
        info!("training pass complete: {pairs} pair updates over {positions} positions");
        Ok(())
    }

    /// Apply one pairwise update to a center/context pair.
    ///
    /// The dot product is re-read on every dimension, so later dimensions
    /// train against components already mutated earlier in this same call.
    /// That order dependence is part of the reference update rule and is kept
    /// as is rather than hoisting a single dot product out of the loop.
    fn update_pair(&self, vocab: &mut Vocabulary, center: &str, context: &str) -> Result<()> {
        let alpha = vocab.config().alpha;
        let min_count = vocab.config().min_count as f64;
        let dims = vocab.config().vector_size;

        let Some((center_word, context_word)) = vocab.pair_mut(center, context) else {
            return Ok(());
        };

        let center_count = center_word.count as f64;
        let context_count = context_word
            .as_ref()
            .map_or(center_word.count, |word| word.count) as f64;
        let g = (1.0 - alpha) + alpha * (center_count / min_count);

        match context_word {
            Some(context_word) => {
                for k in 0..dims {
                    let dot = dot_product(&center_word.vector, &context_word.vector)?;
                    let g1 = alpha * (context_count * (sigmoid(dot) - 1.0) / min_count);
                    let step = g1 * g;
                    center_word.vector[k] -= step;
                    context_word.vector[k] -= step;
                }
            }
            // Center and context are the same vocabulary entry: both halves
            // of the update land on the one vector, one after the other.
            None => {
                for k in 0..dims {
                    let dot = dot_product(&center_word.vector, &center_word.vector)?;
                    let g1 = alpha * (context_count * (sigmoid(dot) - 1.0) / min_count);
                    let step = g1 * g;
                    center_word.vector[k] -= step;
                    center_word.vector[k] -= step;
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TrainingConfig;
    use pretty_assertions::assert_eq;

    fn vocab_with(config: TrainingConfig, tokens: &[&str]) -> Vocabulary {
        let mut vocab = Vocabulary::new(config).unwrap();
        for token in tokens {
            vocab.add_word(*token);
        }
        vocab
    }

    fn small_config() -> TrainingConfig {
        TrainingConfig::default()
            .with_alpha(0.025)
            .with_window_size(1)
            .with_vector_size(3)
            .with_min_count(1)
    }

    #[test]
    fn test_train_moves_cooccurring_vectors() {
        let corpus = ["cat", "dog", "fish", "cat", "dog"];
        let mut vocab = vocab_with(small_config(), &corpus);
        SkipGramTrainer::new().train(&mut vocab, &corpus).unwrap();

        let vector = vocab.vector("cat").unwrap();
        assert_eq!(vector.len(), 3);
        assert!(vector.iter().all(|x| x.is_finite()));
        assert!(vector.iter().any(|x| *x != 0.0));
    }

    #[test]
    fn test_unknown_tokens_are_skipped() {
        let mut vocab = vocab_with(small_config(), &["cat", "dog"]);
        // "the" never registered: positions 1 and 3 contribute nothing.
        SkipGramTrainer::new()
            .train(&mut vocab, &["cat", "the", "dog", "the"])
            .unwrap();

        assert_eq!(vocab.vector("cat").unwrap(), &[0.0, 0.0, 0.0]);
        assert_eq!(vocab.vector("dog").unwrap(), &[0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_distant_tokens_stay_zero() {
        // "ant" and "bee" never fall within one position of each other, and
        // the filler token is not in the vocabulary.
        let corpus = ["ant", "x", "x", "x", "bee"];
        let mut vocab = vocab_with(small_config(), &["ant", "bee"]);
        SkipGramTrainer::new().train(&mut vocab, &corpus).unwrap();

        assert_eq!(vocab.vector("ant").unwrap(), &[0.0, 0.0, 0.0]);
        assert_eq!(vocab.vector("bee").unwrap(), &[0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_zero_window_never_updates() {
        let corpus = ["cat", "dog", "cat"];
        let mut vocab = vocab_with(small_config().with_window_size(0), &corpus);
        SkipGramTrainer::new().train(&mut vocab, &corpus).unwrap();

        assert_eq!(vocab.vector("cat").unwrap(), &[0.0, 0.0, 0.0]);
        assert_eq!(vocab.vector("dog").unwrap(), &[0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_repeated_token_pair_aliases_one_vector() {
        let corpus = ["cat", "cat"];
        let mut vocab = vocab_with(small_config(), &corpus);
        SkipGramTrainer::new().train(&mut vocab, &corpus).unwrap();

        // sigmoid(0) - 1 is negative, so the first step pushes every
        // component positive; the vector must have moved.
        let vector = vocab.vector("cat").unwrap();
        assert!(vector.iter().all(|x| *x > 0.0));
    }

    #[test]
    fn test_training_is_deterministic() {
        let corpus = ["cat", "dog", "fish", "cat", "dog", "fish", "dog"];

        let mut first = vocab_with(small_config(), &corpus);
        SkipGramTrainer::new().train(&mut first, &corpus).unwrap();

        let mut second = vocab_with(small_config(), &corpus);
        SkipGramTrainer::new().train(&mut second, &corpus).unwrap();

        for token in ["cat", "dog", "fish"] {
            assert_eq!(first.vector(token).unwrap(), second.vector(token).unwrap());
        }
    }

    #[test]
    fn test_empty_sequence_is_a_no_op() {
        let mut vocab = vocab_with(small_config(), &["cat"]);
        let tokens: [&str; 0] = [];
        SkipGramTrainer::new().train(&mut vocab, &tokens).unwrap();
        assert_eq!(vocab.vector("cat").unwrap(), &[0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_update_follows_reference_rule() {
        // One adjacent pair, counts 1, min_count 1, alpha 0.025, D = 2.
        // The window yields the (cat, dog) pair and then the (dog, cat)
        // pair; with equal counts the rule is symmetric in its operands, so
        // the hand-rolled replay below must match bit for bit, including the
        // second dimension re-reading the dot product of the half-updated
        // vectors.
        let config = small_config().with_vector_size(2);
        let corpus = ["cat", "dog"];
        let mut vocab = vocab_with(config, &corpus);
        SkipGramTrainer::new().train(&mut vocab, &corpus).unwrap();

        let alpha = 0.025f64;
        let g = (1.0 - alpha) + alpha * (1.0 / 1.0);
        let mut cat = vec![0.0f64; 2];
        let mut dog = vec![0.0f64; 2];
        for _ in 0..2 {
            for k in 0..2 {
                let dot: f64 = cat.iter().zip(dog.iter()).map(|(x, y)| x * y).sum();
                let g1 = alpha * (1.0 * (sigmoid(dot) - 1.0) / 1.0);
                cat[k] -= g1 * g;
                dog[k] -= g1 * g;
            }
        }

        assert_eq!(vocab.vector("cat").unwrap(), cat.as_slice());
        assert_eq!(vocab.vector("dog").unwrap(), dog.as_slice());
    }
}
