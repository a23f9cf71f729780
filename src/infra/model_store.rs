// ============================================================
// Layer 6 — Model Store
// ============================================================
// Saves and restores a trained EmbeddingModel.
//
// What gets written per model directory:
//   1. vectors.txt           — word2vec text vectors
//   2. protvec_config.json   — the ModelConfig it was trained with
//
// Why save the config separately?
//   The vector file knows the dimension but not `n`. Without
//   the config a reloaded model would tokenise queries with
//   the wrong n-gram length and miss every token.
//
// File layout:
//   model_dir/
//     vectors.txt
//     protvec_config.json

use std::fs;
use std::path::PathBuf;

use crate::domain::error::{ProtVecError, Result};
use crate::infra::vector_format;
use crate::ml::config::ModelConfig;
use crate::ml::model::EmbeddingModel;

const VECTORS_FILE: &str = "vectors.txt";
const CONFIG_FILE: &str = "protvec_config.json";

/// Reads and writes models under one directory.
pub struct ModelStore {
    dir: PathBuf,
}

impl ModelStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the vector file inside the store
    pub fn vectors_path(&self) -> PathBuf {
        self.dir.join(VECTORS_FILE)
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.join(CONFIG_FILE)
    }

    /// Write vectors and config, creating the directory if needed.
    pub fn save(&self, model: &EmbeddingModel) -> Result<()> {
        fs::create_dir_all(&self.dir).map_err(|e| ProtVecError::io(&self.dir, e))?;

        vector_format::save_vocabulary(model.vocabulary(), &self.vectors_path())?;
        self.save_config(model.config())?;

        tracing::info!(
            "Saved model ({} tokens) to '{}'",
            model.vocabulary().len(),
            self.dir.display()
        );
        Ok(())
    }

    /// Rebuild a model previously written by `save`.
    pub fn load(&self) -> Result<EmbeddingModel> {
        let config = self.load_config()?;
        let vocabulary = vector_format::read_vocabulary(&self.vectors_path())?;

        tracing::info!(
            "Loaded model from '{}' ({} tokens, n={}, dimension={})",
            self.dir.display(),
            vocabulary.len(),
            config.n,
            vocabulary.dimension()
        );
        EmbeddingModel::from_parts(config, vocabulary)
    }

    fn save_config(&self, config: &ModelConfig) -> Result<()> {
        let path = self.config_path();

        // The corpus location belongs to one training run, not to the model
        let stored = ModelConfig {
            corpus_path: None,
            ..config.clone()
        };
        let json = serde_json::to_string_pretty(&stored)
            .map_err(|e| ProtVecError::parse(&path, 0, e.to_string()))?;

        fs::write(&path, json).map_err(|e| ProtVecError::io(&path, e))?;
        tracing::debug!("Saved model config to '{}'", path.display());
        Ok(())
    }

    fn load_config(&self) -> Result<ModelConfig> {
        let path = self.config_path();
        let json = fs::read_to_string(&path).map_err(|e| ProtVecError::io(&path, e))?;

        serde_json::from_str(&json).map_err(|e| ProtVecError::parse(&path, e.line(), e.to_string()))
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::ml::config::Objective;
    use crate::ml::vocab::Vocabulary;

    fn model() -> EmbeddingModel {
        let config = ModelConfig {
            n: 2,
            vector_dimension: 3,
            objective: Objective::Cbow,
            corpus_path: Some(PathBuf::from("/tmp/some_corpus.txt")),
            ..Default::default()
        };
        let vocab = Vocabulary::from_entries(
            3,
            vec![
                ("AG".to_string(), vec![1.0, 2.0, 3.0]),
                ("AM".to_string(), vec![-0.5, 0.0, 0.125]),
            ],
        )
        .unwrap();
        EmbeddingModel::from_parts(config, vocab).unwrap()
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let store = ModelStore::new(dir.path().join("model"));
        let original = model();

        store.save(&original).unwrap();
        assert!(store.vectors_path().exists());
        assert!(store.config_path().exists());

        let loaded = store.load().unwrap();
        assert_eq!(loaded.n(), 2);
        assert_eq!(loaded.config().objective, Objective::Cbow);
        assert_eq!(loaded.config().corpus_path, None);
        assert_eq!(loaded.vocabulary(), original.vocabulary());
        assert_eq!(loaded.to_vecs("AG").unwrap(), original.to_vecs("AG").unwrap());
    }

    #[test]
    fn test_load_without_config_fails() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let err = ModelStore::new(dir.path()).load().unwrap_err();
        assert!(matches!(err, ProtVecError::Io { .. }));
    }

    #[test]
    fn test_corrupt_config_is_parse_error() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let store = ModelStore::new(dir.path());
        std::fs::write(store.config_path(), "{ not json").unwrap();

        assert!(matches!(store.load(), Err(ProtVecError::Parse { .. })));
    }
}
