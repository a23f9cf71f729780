// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Three subcommands:
//   corpus    — FASTA → corpus text file
//   train     — FASTA or corpus → saved model (runs word2vec)
//   vectorize — saved model + sequence(s) → JSON vectors

use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::application::train_use_case::TrainConfig;
use crate::ml::config::{ModelConfig, Objective};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write the three-frame n-gram corpus for a FASTA file
    Corpus(CorpusArgs),

    /// Train embeddings and save the model
    Train(TrainArgs),

    /// Print per-frame vectors for sequences as JSON lines
    Vectorize(VectorizeArgs),
}

#[derive(Args, Debug)]
pub struct CorpusArgs {
    /// Input FASTA file
    #[arg(long)]
    pub fasta: PathBuf,

    /// Corpus file to write (truncated if it exists)
    #[arg(long)]
    pub out: PathBuf,

    /// n-gram length
    #[arg(short, long, default_value_t = 3)]
    pub n: usize,
}

#[derive(Args, Debug)]
pub struct TrainArgs {
    /// FASTA file to build the corpus from
    #[arg(long, required_unless_present = "corpus")]
    pub fasta: Option<PathBuf>,

    /// Existing corpus file (used instead of --fasta)
    #[arg(long)]
    pub corpus: Option<PathBuf>,

    /// Keep the generated corpus at this path instead of a temp file
    #[arg(long)]
    pub corpus_out: Option<PathBuf>,

    /// Directory to save vectors and config into
    #[arg(long, default_value = "model")]
    pub model_dir: PathBuf,

    /// word2vec-compatible executable
    #[arg(long, default_value = "word2vec")]
    pub word2vec: PathBuf,

    /// n-gram length
    #[arg(short, long, default_value_t = 3)]
    pub n: usize,

    /// Embedding dimension
    #[arg(long, default_value_t = 100)]
    pub size: usize,

    /// Context window size
    #[arg(long, default_value_t = 25)]
    pub window: usize,

    /// Drop n-grams seen fewer times than this
    #[arg(long, default_value_t = 2)]
    pub min_count: usize,

    /// Train with CBOW instead of skip-gram
    #[arg(long)]
    pub cbow: bool,

    /// Trainer threads
    #[arg(long, default_value_t = 3)]
    pub workers: usize,
}

/// Convert CLI TrainArgs into the application-layer TrainConfig.
impl From<TrainArgs> for TrainConfig {
    fn from(a: TrainArgs) -> Self {
        TrainConfig {
            fasta:     a.fasta,
            corpus:    a.corpus,
            model_dir: a.model_dir,
            word2vec:  a.word2vec,
            model: ModelConfig {
                n:                a.n,
                vector_dimension: a.size,
                window_size:      a.window,
                min_count:        a.min_count,
                objective:        if a.cbow { Objective::Cbow } else { Objective::SkipGram },
                workers:          a.workers,
                corpus_path:      a.corpus_out,
            },
        }
    }
}

#[derive(Args, Debug)]
pub struct VectorizeArgs {
    /// Directory written by `train`
    #[arg(long, default_value = "model")]
    pub model_dir: PathBuf,

    /// A single sequence to vectorise
    #[arg(long, conflicts_with = "fasta", required_unless_present = "fasta")]
    pub sequence: Option<String>,

    /// Vectorise every record of this FASTA file
    #[arg(long)]
    pub fasta: Option<PathBuf>,
}
