// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Parses arguments with clap and hands off to Layer 2.
// This layer only routes and prints; it never computes.

pub mod commands;

use std::io::{self, BufWriter, Write};

use anyhow::Result;
use clap::Parser;
use commands::{Commands, CorpusArgs, TrainArgs, VectorizeArgs};

use crate::application::vectorize_use_case::VectorizedRecord;

#[derive(Parser, Debug)]
#[command(
    name = "protvec",
    version,
    about = "Three-frame n-gram embeddings for protein and DNA sequences."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Corpus(args)    => run_corpus(args),
            Commands::Train(args)     => run_train(args),
            Commands::Vectorize(args) => run_vectorize(args),
        }
    }
}

fn run_corpus(args: CorpusArgs) -> Result<()> {
    use crate::application::corpus_use_case::CorpusUseCase;

    let records = CorpusUseCase::new(&args.fasta, &args.out, args.n).execute()?;
    println!("Wrote {} records to {}", records, args.out.display());
    Ok(())
}

fn run_train(args: TrainArgs) -> Result<()> {
    use crate::application::train_use_case::TrainUseCase;

    let model_dir = args.model_dir.clone();
    let protvec = TrainUseCase::new(args.into()).execute()?;

    println!(
        "Training complete: {} n-grams saved to {}",
        protvec.vocabulary_size(),
        model_dir.display()
    );
    Ok(())
}

fn run_vectorize(args: VectorizeArgs) -> Result<()> {
    use crate::application::vectorize_use_case::VectorizeUseCase;

    let use_case = VectorizeUseCase::new(&args.model_dir)?;
    let rows = match (&args.sequence, &args.fasta) {
        (Some(seq), _) => vec![use_case.vectorize_sequence("sequence", seq)?],
        (None, Some(fasta)) => use_case.vectorize_fasta(fasta)?,
        (None, None) => anyhow::bail!("either --sequence or --fasta is required"),
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_json_lines(&rows, &mut out)?;
    out.flush()?;
    Ok(())
}

/// One JSON object per line: `{"id": ..., "vectors": [[..], [..], [..]]}`
fn write_json_lines<W: Write>(rows: &[VectorizedRecord], out: &mut W) -> Result<()> {
    for row in rows {
        serde_json::to_writer(&mut *out, row)?;
        writeln!(out)?;
    }
    Ok(())
}
