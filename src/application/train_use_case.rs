// ============================================================
// Layer 2 — TrainUseCase
// ============================================================
// Orchestrates a full training run:
//
//   Step 1: Validate configuration            (Layer 5 - ml)
//   Step 2: Pick the input (corpus or FASTA)  (Layer 4 - data)
//   Step 3: Train through the trainer         (Layer 5 - ml)
//   Step 4: Report vocabulary coverage        (Layer 4 - data)
//   Step 5: Save vectors + config             (Layer 6 - infra)

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::data::corpus::Corpus;
use crate::infra::model_store::ModelStore;
use crate::ml::config::ModelConfig;
use crate::ml::model::ModelBuilder;
use crate::ml::protvec::ProtVec;
use crate::ml::trainer::{EmbeddingTrainer, Word2VecCommand};

// ─── Training Configuration ──────────────────────────────────────────────────
#[derive(Debug, Clone)]
pub struct TrainConfig {
    /// FASTA file to build the corpus from
    pub fasta:     Option<PathBuf>,
    /// Pre-built corpus file; wins over `fasta`
    pub corpus:    Option<PathBuf>,
    /// Where the trained model is written
    pub model_dir: PathBuf,
    /// word2vec-compatible executable
    pub word2vec:  PathBuf,
    pub model:     ModelConfig,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            fasta:     None,
            corpus:    None,
            model_dir: PathBuf::from("model"),
            word2vec:  PathBuf::from("word2vec"),
            model:     ModelConfig::default(),
        }
    }
}

// ─── TrainUseCase ─────────────────────────────────────────────────────────────
pub struct TrainUseCase {
    config: TrainConfig,
}

impl TrainUseCase {
    pub fn new(config: TrainConfig) -> Self {
        Self { config }
    }

    /// Train with the configured external word2vec program.
    pub fn execute(&self) -> Result<ProtVec> {
        let trainer = Word2VecCommand::new(&self.config.word2vec);
        self.execute_with(&trainer)
    }

    /// Train with any trainer; used directly by tests.
    pub fn execute_with<T>(&self, trainer: &T) -> Result<ProtVec>
    where
        T: EmbeddingTrainer + ?Sized,
    {
        let cfg = &self.config;

        // ── Step 1: Validate ──────────────────────────────────────────────────
        cfg.model.validate().context("Invalid model configuration")?;

        // ── Step 2: Choose input ──────────────────────────────────────────────
        let mut builder = ModelBuilder::new(cfg.model.clone());
        if let Some(corpus) = &cfg.corpus {
            let corpus = Corpus::open(corpus)
                .with_context(|| format!("Cannot open corpus '{}'", corpus.display()))?;
            builder = builder.corpus(corpus);
        }
        if let Some(fasta) = &cfg.fasta {
            tracing::info!("Building corpus from '{}' (n={})", fasta.display(), cfg.model.n);
            builder = builder.source(fasta);
        }

        // ── Step 3: Train (blocking) ──────────────────────────────────────────
        let model = builder.train(trainer).context("Training failed")?;

        // ── Step 4: Coverage report, when a corpus file outlives training ─────
        let kept_corpus = cfg.corpus.as_ref().or(cfg.model.corpus_path.as_ref());
        if let Some(path) = kept_corpus {
            let counts = Corpus::open(path)?.token_counts()?;
            let dropped = counts
                .values()
                .filter(|&&c| c < cfg.model.min_count as u64)
                .count();
            tracing::info!(
                "Corpus has {} distinct n-grams; {} below min_count={} were left out",
                counts.len(),
                dropped,
                cfg.model.min_count
            );
        }

        // ── Step 5: Persist ───────────────────────────────────────────────────
        ModelStore::new(&cfg.model_dir)
            .save(&model)
            .with_context(|| format!("Cannot save model to '{}'", cfg.model_dir.display()))?;

        Ok(ProtVec::from(model))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::ProtVecError;
    use crate::ml::test_support::CountingTrainer;

    #[test]
    fn test_fasta_to_saved_model() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let fasta = dir.path().join("train.fasta");
        std::fs::write(&fasta, ">a\nAGAMQSASM\n>b\nAGAMQSASM\n").unwrap();

        let config = TrainConfig {
            fasta: Some(fasta),
            model_dir: dir.path().join("model"),
            model: ModelConfig {
                vector_dimension: 6,
                corpus_path: Some(dir.path().join("corpus.txt")),
                ..Default::default()
            },
            ..Default::default()
        };

        let pv = TrainUseCase::new(config).execute_with(&CountingTrainer).unwrap();
        assert_eq!(pv.vocabulary_size(), 7);
        assert!(dir.path().join("model").join("vectors.txt").exists());
        assert!(dir.path().join("corpus.txt").exists());
    }

    #[test]
    fn test_no_input_is_reported_as_configuration_error() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config = TrainConfig {
            model_dir: dir.path().join("model"),
            ..Default::default()
        };

        let err = TrainUseCase::new(config).execute_with(&CountingTrainer).unwrap_err();
        let root = err.downcast_ref::<ProtVecError>().expect("library error");
        assert!(matches!(root, ProtVecError::Configuration(_)));
        assert!(!dir.path().join("model").exists());
    }
}
