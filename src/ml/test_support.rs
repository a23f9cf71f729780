//! Deterministic stand-in for the external trainer, used by unit tests.

use std::collections::HashMap;

use crate::data::corpus::Corpus;
use crate::domain::error::Result;
use crate::ml::config::TrainingParams;
use crate::ml::trainer::EmbeddingTrainer;
use crate::ml::vocab::Vocabulary;

/// Counts corpus tokens, drops those under `min_count`, and gives every
/// survivor the vector [`fake_vector`] computes for it.
pub struct CountingTrainer;

impl EmbeddingTrainer for CountingTrainer {
    fn train(&self, corpus: &Corpus, params: &TrainingParams) -> Result<Vocabulary> {
        let counts: HashMap<String, u64> = corpus.token_counts()?;
        let entries = counts
            .into_iter()
            .filter(|(_, count)| *count >= params.min_count as u64)
            .map(|(token, _)| {
                let vector = fake_vector(&token, params.vector_dimension);
                (token, vector)
            });
        Vocabulary::from_entries(params.vector_dimension, entries)
    }
}

/// Small integers derived from the token's characters; exact in f32.
pub fn fake_vector(token: &str, dimension: usize) -> Vec<f32> {
    let seed: u32 = token.chars().map(|c| c as u32).sum();
    (0..dimension)
        .map(|i| ((seed + i as u32 * 7) % 13) as f32 - 6.0)
        .collect()
}
