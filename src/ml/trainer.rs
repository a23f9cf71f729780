// ============================================================
// Layer 5 — Embedding Trainer Seam
// ============================================================
// The embedding learner itself lives outside this crate. The
// model only needs something that takes a corpus plus the
// training parameters and hands back a token → vector table.
//
// Word2VecCommand drives any program that speaks the original
// word2vec command line:
//
//   word2vec -train corpus.txt -output vectors.txt
//            -size 100 -window 25 -min-count 2
//            -cbow 0 -threads 3 -binary 0
//
// The call blocks until the program exits. Its threads and its
// runtime are its own business; there is no timeout or
// cancellation here. Progress chatter on stdout is discarded,
// stderr is kept for the error message.

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use crate::data::corpus::Corpus;
use crate::domain::error::{ProtVecError, Result};
use crate::infra::vector_format;
use crate::ml::config::{Objective, TrainingParams};
use crate::ml::vocab::Vocabulary;

/// Sentence-boundary marker word2vec adds to every vocabulary.
const SENTENCE_MARKER: &str = "</s>";

// ─── EmbeddingTrainer ─────────────────────────────────────────────────────────
/// Anything that can learn token embeddings from a corpus.
///
/// Implementations must return vectors of exactly
/// `params.vector_dimension` values and leave out every token seen
/// fewer than `params.min_count` times.
pub trait EmbeddingTrainer {
    fn train(&self, corpus: &Corpus, params: &TrainingParams) -> Result<Vocabulary>;
}

impl<T: EmbeddingTrainer + ?Sized> EmbeddingTrainer for &T {
    fn train(&self, corpus: &Corpus, params: &TrainingParams) -> Result<Vocabulary> {
        (**self).train(corpus, params)
    }
}

// ─── Word2VecCommand ──────────────────────────────────────────────────────────
/// Runs an external word2vec-compatible executable.
#[derive(Debug, Clone)]
pub struct Word2VecCommand {
    program:    PathBuf,
    extra_args: Vec<OsString>,
}

impl Word2VecCommand {
    /// Use `program` (a path or a name looked up on `PATH`).
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program:    program.into(),
            extra_args: Vec::new(),
        }
    }

    /// Append a raw argument, e.g. `-iter 10`, after the standard ones.
    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.extra_args.push(arg.into());
        self
    }

    /// Build the command line for one run.
    fn command(&self, corpus: &Corpus, output: &std::path::Path, params: &TrainingParams) -> Command {
        let cbow = match params.objective {
            Objective::SkipGram => "0",
            Objective::Cbow => "1",
        };

        let mut cmd = Command::new(&self.program);
        cmd.arg("-train").arg(corpus.path())
            .arg("-output").arg(output)
            .arg("-size").arg(params.vector_dimension.to_string())
            .arg("-window").arg(params.window_size.to_string())
            .arg("-min-count").arg(params.min_count.to_string())
            .arg("-cbow").arg(cbow)
            .arg("-threads").arg(params.workers.to_string())
            .arg("-binary").arg("0")
            .args(&self.extra_args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped());
        cmd
    }
}

impl Default for Word2VecCommand {
    fn default() -> Self {
        Self::new("word2vec")
    }
}

impl EmbeddingTrainer for Word2VecCommand {
    fn train(&self, corpus: &Corpus, params: &TrainingParams) -> Result<Vocabulary> {
        // Vectors land in a scratch directory that is removed on drop
        let scratch = tempfile::tempdir().map_err(|e| ProtVecError::io(std::env::temp_dir(), e))?;
        let output = scratch.path().join("vectors.txt");

        tracing::info!(
            "Running '{}' on '{}' (size={}, window={}, min_count={}, {:?}, threads={})",
            self.program.display(),
            corpus.path().display(),
            params.vector_dimension,
            params.window_size,
            params.min_count,
            params.objective,
            params.workers,
        );

        let result = self
            .command(corpus, &output, params)
            .output()
            .map_err(|e| {
                ProtVecError::TrainerFailed(format!(
                    "cannot start '{}': {e}",
                    self.program.display()
                ))
            })?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            return Err(ProtVecError::TrainerFailed(format!(
                "'{}' exited with {}: {}",
                self.program.display(),
                result.status,
                stderr.trim()
            )));
        }

        let file = std::fs::File::open(&output).map_err(|e| ProtVecError::io(&output, e))?;
        let raw = vector_format::read_entries(std::io::BufReader::new(file), &output)?;

        if raw.dimension != params.vector_dimension {
            return Err(ProtVecError::DimensionMismatch {
                expected: params.vector_dimension,
                got:      raw.dimension,
            });
        }

        let entries = raw.entries.into_iter().filter(|(token, _)| token != SENTENCE_MARKER);
        let vocab = Vocabulary::from_entries(raw.dimension, entries)?;
        tracing::info!("Trainer produced {} token vectors", vocab.len());
        Ok(vocab)
    }
}
