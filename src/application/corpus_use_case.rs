// ============================================================
// Layer 2 — CorpusUseCase
// ============================================================
// Writes a training corpus without training anything, for
// users who run their embedding tool by hand.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::data::corpus::generate_corpus_file;
use crate::domain::error::ProtVecError;

pub struct CorpusUseCase {
    fasta:  PathBuf,
    output: PathBuf,
    n:      usize,
}

impl CorpusUseCase {
    pub fn new(fasta: impl Into<PathBuf>, output: impl Into<PathBuf>, n: usize) -> Self {
        Self {
            fasta:  fasta.into(),
            output: output.into(),
            n,
        }
    }

    /// Generate the corpus; returns how many records were written.
    pub fn execute(&self) -> Result<usize> {
        if self.n == 0 {
            return Err(ProtVecError::Configuration("n must be at least 1".into()).into());
        }

        generate_corpus_file(&self.fasta, self.n, &self.output).with_context(|| {
            format!(
                "Cannot build corpus '{}' from '{}'",
                self.output.display(),
                self.fasta.display()
            )
        })
    }
}
