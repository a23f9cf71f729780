// ============================================================
// Layer 3 — Error Taxonomy
// ============================================================
// Every fallible library operation returns ProtVecError.
// The application and CLI layers wrap these in anyhow with
// extra context; nothing below Layer 2 retries or recovers.
//
//   Configuration     — bad or missing construction inputs
//   UnknownToken      — a query n-gram has no trained vector
//   Io                — reading a source / writing a corpus
//   Parse             — malformed FASTA or vector file
//   TrainerFailed     — the external trainer could not run
//   DimensionMismatch — a vector has the wrong length

use std::path::{Path, PathBuf};

/// Errors produced by tokenisation, corpus generation,
/// training and vectorisation.
#[derive(Debug, thiserror::Error)]
pub enum ProtVecError {
    /// Invalid model configuration, e.g. no training input at all.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A token required by `to_vecs` is absent from the vocabulary,
    /// either never seen in the corpus or dropped by `min_count`.
    #[error("model has never trained this n-gram: {0}")]
    UnknownToken(String),

    /// I/O failure, propagated unchanged with the path involved.
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A structured input file could not be parsed.
    #[error("parse error in '{}' at line {line}: {message}", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        message: String,
    },

    /// The external embedding trainer failed to start or exited non-zero.
    #[error("embedding trainer failed: {0}")]
    TrainerFailed(String),

    /// A vocabulary vector does not match the configured dimension.
    #[error("vector dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },
}

impl ProtVecError {
    /// Wrap an `io::Error` together with the file it happened on.
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn parse(path: impl AsRef<Path>, line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.as_ref().to_path_buf(),
            line,
            message: message.into(),
        }
    }
}

/// Result alias used across the library layers.
pub type Result<T> = std::result::Result<T, ProtVecError>;
