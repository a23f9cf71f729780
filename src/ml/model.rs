// ============================================================
// Layer 5 — Embedding Model
// ============================================================
// Owns a ModelConfig and the Vocabulary trained under it.
//
// Building a model:
//
//   ModelBuilder::new(config)
//       .source("proteins.fasta")      ← or .corpus(Corpus::open(..)?)
//       .train(&trainer)?
//
//   - a corpus, when given, is used as-is (the source is ignored)
//   - otherwise the source FASTA is turned into a corpus file at
//     `config.corpus_path`, or in a temporary directory that is
//     deleted as soon as training returns
//   - with neither, construction fails with a configuration error
//
// Once built the model never changes. There is no retraining
// or incremental update; lookups take `&self` only.

use std::path::PathBuf;

use crate::data::corpus::{generate_corpus_file, Corpus};
use crate::domain::error::{ProtVecError, Result};
use crate::ml::config::ModelConfig;
use crate::ml::trainer::EmbeddingTrainer;
use crate::ml::vectorizer::{self, SequenceVectors};
use crate::ml::vocab::Vocabulary;

/// A trained, immutable token embedding model.
#[derive(Debug, Clone)]
pub struct EmbeddingModel {
    config:     ModelConfig,
    vocabulary: Vocabulary,
}

impl EmbeddingModel {
    /// Wrap an existing vocabulary (freshly trained or loaded from disk).
    pub fn from_parts(config: ModelConfig, vocabulary: Vocabulary) -> Result<Self> {
        config.validate()?;
        if vocabulary.dimension() != config.vector_dimension {
            return Err(ProtVecError::DimensionMismatch {
                expected: config.vector_dimension,
                got:      vocabulary.dimension(),
            });
        }
        Ok(Self { config, vocabulary })
    }

    /// Embedding of `token`, or `None` when it is not in the vocabulary.
    pub fn lookup(&self, token: &str) -> Option<&[f32]> {
        self.vocabulary.lookup(token)
    }

    /// Three per-frame vectors for `sequence`. See [`vectorizer::to_vecs`].
    pub fn to_vecs(&self, sequence: &str) -> Result<SequenceVectors> {
        vectorizer::to_vecs(self, sequence)
    }

    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// n-gram length the corpus was built with
    pub fn n(&self) -> usize {
        self.config.n
    }

    pub fn dimension(&self) -> usize {
        self.config.vector_dimension
    }
}

// ─── ModelBuilder ─────────────────────────────────────────────────────────────
/// Collects training inputs, then runs one blocking training call.
#[derive(Debug, Clone)]
pub struct ModelBuilder {
    config: ModelConfig,
    source: Option<PathBuf>,
    corpus: Option<Corpus>,
}

impl ModelBuilder {
    pub fn new(config: ModelConfig) -> Self {
        Self {
            config,
            source: None,
            corpus: None,
        }
    }

    /// FASTA file to build the corpus from.
    pub fn source(mut self, path: impl Into<PathBuf>) -> Self {
        self.source = Some(path.into());
        self
    }

    /// Pre-built corpus; takes precedence over `source`.
    pub fn corpus(mut self, corpus: Corpus) -> Self {
        self.corpus = Some(corpus);
        self
    }

    /// Train through `trainer` and return the finished model.
    pub fn train<T>(self, trainer: &T) -> Result<EmbeddingModel>
    where
        T: EmbeddingTrainer + ?Sized,
    {
        self.config.validate()?;
        let params = self.config.training_params();

        let vocabulary = match (self.corpus, self.source) {
            (Some(corpus), _) => {
                tracing::info!("Training on existing corpus '{}'", corpus.path().display());
                trainer.train(&corpus, &params)?
            }

            (None, Some(source)) => match &self.config.corpus_path {
                Some(out) => {
                    generate_corpus_file(&source, self.config.n, out)?;
                    trainer.train(&Corpus::open(out)?, &params)?
                }
                None => {
                    // Scoped to this call: removed when `scratch` drops
                    let scratch = tempfile::tempdir()
                        .map_err(|e| ProtVecError::io(std::env::temp_dir(), e))?;
                    let out = scratch.path().join("corpus.txt");
                    generate_corpus_file(&source, self.config.n, &out)?;
                    trainer.train(&Corpus::open(&out)?, &params)?
                }
            },

            (None, None) => {
                return Err(ProtVecError::Configuration(
                    "either source file or corpus is required".into(),
                ))
            }
        };

        tracing::info!(
            "Model trained: {} tokens, dimension {}",
            vocabulary.len(),
            vocabulary.dimension()
        );
        EmbeddingModel::from_parts(self.config, vocabulary)
    }
}
