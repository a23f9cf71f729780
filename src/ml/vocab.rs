//! Trained vocabulary: token → embedding vector.
//!
//! A `Vocabulary` is built once, from whatever a trainer (or a saved
//! vector file) produced, and is read-only afterwards. There is no
//! insert or update API; a new training run produces a new value.

use std::collections::HashMap;

use crate::domain::error::{ProtVecError, Result};

/// Token → vector mapping with one fixed dimension.
#[derive(Debug, Clone, PartialEq)]
pub struct Vocabulary {
    dimension: usize,
    vectors:   HashMap<String, Vec<f32>>,
}

impl Vocabulary {
    /// Build a vocabulary, checking every vector has `dimension` entries.
    ///
    /// If a token appears more than once the last vector wins.
    pub fn from_entries<I>(dimension: usize, entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, Vec<f32>)>,
    {
        let entries = entries.into_iter();
        let mut vectors = HashMap::with_capacity(entries.size_hint().0);

        for (token, vector) in entries {
            if vector.len() != dimension {
                return Err(ProtVecError::DimensionMismatch {
                    expected: dimension,
                    got:      vector.len(),
                });
            }
            vectors.insert(token, vector);
        }

        Ok(Self { dimension, vectors })
    }

    /// Vector for `token`, or `None` if it was never trained
    /// (or fell below `min_count`).
    pub fn lookup(&self, token: &str) -> Option<&[f32]> {
        self.vectors.get(token).map(Vec::as_slice)
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Number of tokens
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Entries sorted by token, so saved files are reproducible.
    pub fn sorted_entries(&self) -> Vec<(&str, &[f32])> {
        let mut entries: Vec<(&str, &[f32])> = self
            .vectors
            .iter()
            .map(|(t, v)| (t.as_str(), v.as_slice()))
            .collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }
}
