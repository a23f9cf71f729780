// ============================================================
// Layer 5 — ProtVec
// ============================================================
// The public face of a trained model. It HOLDS an
// EmbeddingModel rather than being a trainer, so callers see
// only what vectorising needs:
//
//   to_vecs  — three per-frame vectors for a sequence
//   lookup   — the vector of a single n-gram
//
// and never the trainer's own knobs.

use std::path::Path;

use crate::domain::error::Result;
use crate::domain::traits::Persistable;
use crate::infra::model_store::ModelStore;
use crate::ml::config::ModelConfig;
use crate::ml::model::{EmbeddingModel, ModelBuilder};
use crate::ml::trainer::EmbeddingTrainer;
use crate::ml::vectorizer::SequenceVectors;

#[derive(Debug, Clone)]
pub struct ProtVec {
    model: EmbeddingModel,
}

impl ProtVec {
    /// Build a corpus from `fasta` and train through `trainer`.
    pub fn train_from_fasta<T>(fasta: &Path, config: ModelConfig, trainer: &T) -> Result<Self>
    where
        T: EmbeddingTrainer + ?Sized,
    {
        let model = ModelBuilder::new(config).source(fasta).train(trainer)?;
        Ok(Self { model })
    }

    pub fn to_vecs(&self, sequence: &str) -> Result<SequenceVectors> {
        self.model.to_vecs(sequence)
    }

    pub fn lookup(&self, token: &str) -> Option<&[f32]> {
        self.model.lookup(token)
    }

    pub fn config(&self) -> &ModelConfig {
        self.model.config()
    }

    /// Number of n-grams with a trained vector
    pub fn vocabulary_size(&self) -> usize {
        self.model.vocabulary().len()
    }
}

impl From<EmbeddingModel> for ProtVec {
    fn from(model: EmbeddingModel) -> Self {
        Self { model }
    }
}

impl Persistable for ProtVec {
    fn save(&self, dir: &Path) -> Result<()> {
        ModelStore::new(dir).save(&self.model)
    }

    fn load(dir: &Path) -> Result<Self> {
        ModelStore::new(dir).load().map(Self::from)
    }
}
