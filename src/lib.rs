//! Three-frame n-gram embeddings for biological sequences.
//!
//! A sequence is cut into non-overlapping n-grams in each of three
//! reading frames. A corpus of those n-grams trains a token embedding
//! model (through an external trainer), and a query sequence becomes
//! three vectors: the sums of its n-gram embeddings per frame.
//!
//! ```no_run
//! use std::path::Path;
//! use protvec::{ModelConfig, ProtVec, Word2VecCommand};
//!
//! # fn main() -> protvec::Result<()> {
//! let trainer = Word2VecCommand::new("word2vec");
//! let pv = ProtVec::train_from_fasta(Path::new("uniprot.fasta"), ModelConfig::default(), &trainer)?;
//! let [f0, f1, f2] = pv.to_vecs("AGAMQSASM")?.into_frames();
//! assert_eq!(f0.len(), 100);
//! # let _ = (f1, f2);
//! # Ok(())
//! # }
//! ```

pub mod application;
pub mod cli;
pub mod data;
pub mod domain;
pub mod infra;
pub mod ml;

pub use data::corpus::{generate_corpus_file, Corpus};
pub use data::tokenizer::{split_ngrams, FRAME_COUNT};
pub use domain::{ProtVecError, Result, SequenceRecord};
pub use ml::config::{ModelConfig, Objective};
pub use ml::model::{EmbeddingModel, ModelBuilder};
pub use ml::protvec::ProtVec;
pub use ml::trainer::{EmbeddingTrainer, Word2VecCommand};
pub use ml::vectorizer::SequenceVectors;
