// ============================================================
// Layer 4 — Corpus Builder
// ============================================================
// Turns a file of sequence records into the plain-text corpus
// the embedding trainer reads.
//
// Corpus file contract:
//   - one line per (record, frame) pair
//   - record order first, then frame 0, 1, 2
//   - tokens separated by a single space
//   - every line terminated by '\n' (empty frames give "\n")
//   - the file is truncated and fully rewritten on every call
//
// Example for one record "AGAMQSASM" with n = 3:
//   AGA MQS ASM
//   GAM QSA
//   AMQ SAS
//
// On failure (unreadable source, malformed record, full disk)
// the error propagates unchanged and whatever was already
// written stays on disk. Callers must not use such a file.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Lines, Write};
use std::path::{Path, PathBuf};

use crate::data::fasta::FastaSource;
use crate::data::tokenizer::{split_ngrams, FRAME_COUNT};
use crate::domain::error::{ProtVecError, Result};
use crate::domain::traits::SequenceSource;

/// Write the corpus for every record of `source` into `writer`.
///
/// `label` names the destination in I/O errors.
/// Returns the number of records written.
pub fn write_corpus<S, W>(source: &S, n: usize, writer: &mut W, label: &Path) -> Result<usize>
where
    S: SequenceSource + ?Sized,
    W: Write,
{
    let mut count = 0usize;

    for record in source.records()? {
        let record = record?;
        if record.len() < n {
            tracing::debug!("Record '{}' is shorter than n={}; its frames are empty", record.id, n);
        }
        for frame in split_ngrams(&record.sequence, n) {
            writeln!(writer, "{}", frame.join(" ")).map_err(|e| ProtVecError::io(label, e))?;
        }
        count += 1;
    }

    Ok(count)
}

/// Generate a corpus file at `output_path` from the FASTA file at `source_path`.
///
/// The output file handle lives only inside this call and is closed on
/// every exit path. The buffer is flushed explicitly so a late write
/// error is reported instead of being swallowed on drop.
pub fn generate_corpus_file(
    source_path: impl AsRef<Path>,
    n:           usize,
    output_path: impl AsRef<Path>,
) -> Result<usize> {
    let source_path = source_path.as_ref();
    let output_path = output_path.as_ref();

    let file = File::create(output_path).map_err(|e| ProtVecError::io(output_path, e))?;
    let mut writer = BufWriter::new(file);

    let source = FastaSource::new(source_path);
    let records = write_corpus(&source, n, &mut writer, output_path)?;
    writer.flush().map_err(|e| ProtVecError::io(output_path, e))?;

    tracing::info!(
        "Wrote corpus '{}' ({} records, {} lines, n={})",
        output_path.display(),
        records,
        records * FRAME_COUNT,
        n
    );
    Ok(records)
}

// ─── Corpus handle ────────────────────────────────────────────────────────────
/// A corpus file that a trainer can consume.
///
/// Construction only checks that the file can be opened; contents
/// are streamed on demand.
#[derive(Debug, Clone)]
pub struct Corpus {
    path: PathBuf,
}

impl Corpus {
    /// Open an existing corpus file.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        File::open(&path).map_err(|e| ProtVecError::io(&path, e))?;
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stream the corpus one line ("sentence") at a time.
    pub fn sentences(&self) -> Result<Sentences> {
        let file = File::open(&self.path).map_err(|e| ProtVecError::io(&self.path, e))?;
        Ok(Sentences {
            lines: BufReader::new(file).lines(),
            path:  self.path.clone(),
        })
    }

    /// Occurrence count of every token in the corpus.
    pub fn token_counts(&self) -> Result<HashMap<String, u64>> {
        let mut counts: HashMap<String, u64> = HashMap::new();
        for sentence in self.sentences()? {
            for token in sentence? {
                *counts.entry(token).or_insert(0) += 1;
            }
        }
        Ok(counts)
    }
}

/// Iterator over whitespace-split corpus lines.
pub struct Sentences {
    lines: Lines<BufReader<File>>,
    path:  PathBuf,
}

impl Iterator for Sentences {
    type Item = Result<Vec<String>>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = self.lines.next()?;
        Some(
            line.map(|l| l.split_whitespace().map(str::to_string).collect())
                .map_err(|e| ProtVecError::io(&self.path, e)),
        )
    }
}
