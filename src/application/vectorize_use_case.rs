// ============================================================
// Layer 2 — VectorizeUseCase
// ============================================================
// Loads a saved model once, then turns sequences into their
// three frame vectors.
//
// Many records from a FASTA file are vectorised in parallel
// with rayon. The model is read-only, so no locking is needed,
// and results come back in file order. A single unknown
// n-gram anywhere fails the whole batch, naming the record.

use std::path::Path;

use anyhow::{Context, Result};
use rayon::prelude::*;
use serde::Serialize;

use crate::data::fasta::FastaSource;
use crate::domain::traits::{Persistable, SequenceSource};
use crate::ml::protvec::ProtVec;
use crate::ml::vectorizer::SequenceVectors;

/// One output row: record id plus its three vectors.
#[derive(Debug, Clone, Serialize)]
pub struct VectorizedRecord {
    pub id:      String,
    pub vectors: SequenceVectors,
}

pub struct VectorizeUseCase {
    protvec: ProtVec,
}

impl VectorizeUseCase {
    /// Load the model saved in `model_dir`.
    pub fn new(model_dir: &Path) -> Result<Self> {
        let protvec = ProtVec::load(model_dir).with_context(|| {
            format!(
                "Cannot load model from '{}'. Have you run 'train' first?",
                model_dir.display()
            )
        })?;
        Ok(Self { protvec })
    }

    /// Vectorise a single sequence given on the command line.
    pub fn vectorize_sequence(&self, id: &str, sequence: &str) -> Result<VectorizedRecord> {
        let vectors = self
            .protvec
            .to_vecs(sequence)
            .with_context(|| format!("Cannot vectorise '{id}'"))?;
        Ok(VectorizedRecord { id: id.to_string(), vectors })
    }

    /// Vectorise every record of a FASTA file, preserving order.
    pub fn vectorize_fasta(&self, path: &Path) -> Result<Vec<VectorizedRecord>> {
        let records = FastaSource::new(path)
            .load_all()
            .with_context(|| format!("Cannot read '{}'", path.display()))?;
        tracing::info!("Vectorising {} records from '{}'", records.len(), path.display());

        records
            .par_iter()
            .map(|r| self.vectorize_sequence(&r.id, &r.sequence))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::ProtVecError;
    use crate::ml::config::ModelConfig;
    use crate::ml::test_support::CountingTrainer;

    fn use_case(dir: &Path) -> VectorizeUseCase {
        let fasta = dir.join("train.fasta");
        std::fs::write(&fasta, ">a\nAGAMQSASM\n>b\nAGAMQSASM\n").unwrap();
        let config = ModelConfig { vector_dimension: 4, ..Default::default() };
        let pv = ProtVec::train_from_fasta(&fasta, config, &CountingTrainer).unwrap();

        let model_dir = dir.join("model");
        pv.save(&model_dir).unwrap();
        VectorizeUseCase::new(&model_dir).unwrap()
    }

    #[test]
    fn test_vectorize_fasta_keeps_order() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let uc = use_case(dir.path());

        let query = dir.path().join("query.fasta");
        let body: String = (0..20).map(|i| format!(">q{i}\nAGAMQSASM\n")).collect();
        std::fs::write(&query, body).unwrap();

        let out = uc.vectorize_fasta(&query).unwrap();
        let ids: Vec<String> = out.iter().map(|r| r.id.clone()).collect();
        let expected: Vec<String> = (0..20).map(|i| format!("q{i}")).collect();
        assert_eq!(ids, expected);
        assert!(out.windows(2).all(|w| w[0].vectors == w[1].vectors));
    }

    #[test]
    fn test_unknown_ngram_fails_with_record_context() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let uc = use_case(dir.path());

        let err = uc.vectorize_sequence("query1", "WWWW").unwrap_err();
        assert!(format!("{err:#}").contains("query1"));
        assert!(matches!(
            err.downcast_ref::<ProtVecError>(),
            Some(ProtVecError::UnknownToken(t)) if t == "WWW"
        ));
    }

    #[test]
    fn test_output_json_shape() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let uc = use_case(dir.path());

        let row = uc.vectorize_sequence("s", "AG").unwrap();
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["id"], "s");
        assert_eq!(json["vectors"].as_array().unwrap().len(), 3);
        assert_eq!(json["vectors"][0].as_array().unwrap().len(), 4);
    }

    #[test]
    fn test_missing_model_dir() {
        let dir = tempfile::tempdir().expect("create temp dir");
        assert!(VectorizeUseCase::new(&dir.path().join("absent")).is_err());
    }
}
