// ============================================================
// Layer 5 — Model Configuration
// ============================================================
// All hyperparameters for one model. Serialisable so the
// exact settings are stored next to the trained vectors and
// a reloaded model tokenises queries with the same `n`.
//
// Only TrainingParams (everything except `n` and the corpus
// location) is handed to the external trainer. `n` matters
// to the corpus builder and the vectorizer alone.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::error::{ProtVecError, Result};

/// Training objective of the embedding learner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Objective {
    /// Predict context tokens from the centre token
    #[default]
    SkipGram,
    /// Predict the centre token from its context
    Cbow,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Token length of each n-gram
    pub n: usize,

    /// Dimension of every embedding vector
    pub vector_dimension: usize,

    /// Context window handed to the trainer
    pub window_size: usize,

    /// Tokens seen fewer times than this are left out of the vocabulary
    pub min_count: usize,

    pub objective: Objective,

    /// Parallelism hint for the trainer
    pub workers: usize,

    /// Where to write the generated corpus. `None` means a temporary
    /// file that is removed once training finishes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corpus_path: Option<PathBuf>,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            n:                3,
            vector_dimension: 100,
            window_size:      25,
            min_count:        2,
            objective:        Objective::SkipGram,
            workers:          3,
            corpus_path:      None,
        }
    }
}

impl ModelConfig {
    /// Reject settings that would make tokenisation or training meaningless.
    pub fn validate(&self) -> Result<()> {
        if self.n == 0 {
            return Err(ProtVecError::Configuration("n must be at least 1".into()));
        }
        if self.vector_dimension == 0 {
            return Err(ProtVecError::Configuration(
                "vector_dimension must be at least 1".into(),
            ));
        }
        if self.workers == 0 {
            return Err(ProtVecError::Configuration("workers must be at least 1".into()));
        }
        Ok(())
    }

    /// The subset of settings the external trainer receives.
    pub fn training_params(&self) -> TrainingParams {
        TrainingParams {
            vector_dimension: self.vector_dimension,
            window_size:      self.window_size,
            min_count:        self.min_count,
            objective:        self.objective,
            workers:          self.workers,
        }
    }
}

/// What an `EmbeddingTrainer` is told about a training run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrainingParams {
    pub vector_dimension: usize,
    pub window_size:      usize,
    pub min_count:        usize,
    pub objective:        Objective,
    pub workers:          usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = ModelConfig::default();
        assert_eq!(cfg.n, 3);
        assert_eq!(cfg.vector_dimension, 100);
        assert_eq!(cfg.window_size, 25);
        assert_eq!(cfg.min_count, 2);
        assert_eq!(cfg.objective, Objective::SkipGram);
        assert_eq!(cfg.workers, 3);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_zero_n_is_rejected() {
        let cfg = ModelConfig { n: 0, ..Default::default() };
        assert!(matches!(cfg.validate(), Err(ProtVecError::Configuration(_))));
    }

    #[test]
    fn test_training_params_carry_everything_but_n() {
        let cfg = ModelConfig {
            n: 4,
            vector_dimension: 32,
            window_size: 5,
            min_count: 1,
            objective: Objective::Cbow,
            workers: 8,
            corpus_path: None,
        };
        let p = cfg.training_params();
        assert_eq!(p.vector_dimension, 32);
        assert_eq!(p.window_size, 5);
        assert_eq!(p.min_count, 1);
        assert_eq!(p.objective, Objective::Cbow);
        assert_eq!(p.workers, 8);
    }

    #[test]
    fn test_json_roundtrip_keeps_objective_name() {
        let cfg = ModelConfig::default();
        let json = serde_json::to_string(&cfg).unwrap();
        assert!(json.contains("\"skip_gram\""));
        assert!(!json.contains("corpus_path"));
        let back: ModelConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cfg);
    }
}
