// ============================================================
// Layer 4 — FASTA Reader
// ============================================================
// Streams sequence records out of a FASTA file.
//
// Format accepted:
//   >id optional description
//   SEQUENCE LINE 1
//   SEQUENCE LINE 2
//   >next_id ...
//
//   - sequence lines are concatenated with all whitespace removed
//   - blank lines are ignored anywhere
//   - text before the first '>' (comments, tool banners) is
//     skipped with a warning
//   - an empty file yields zero records
//
// Records come out lazily, one per `next()`, so a malformed
// record late in the file only fails when it is reached.

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};

use crate::domain::error::{ProtVecError, Result};
use crate::domain::sequence::SequenceRecord;
use crate::domain::traits::SequenceSource;

/// A FASTA file on disk. Implements the SequenceSource trait from Layer 3.
#[derive(Debug, Clone)]
pub struct FastaSource {
    path: PathBuf,
}

impl FastaSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SequenceSource for FastaSource {
    type Records = FastaRecords<BufReader<File>>;

    fn records(&self) -> Result<Self::Records> {
        let file = File::open(&self.path).map_err(|e| ProtVecError::io(&self.path, e))?;
        tracing::debug!("Opened FASTA file '{}'", self.path.display());
        Ok(FastaRecords::new(BufReader::new(file), &self.path))
    }
}

/// Lazy record iterator over any buffered reader.
///
/// `path` is only used to label errors, so in-memory readers can
/// pass any descriptive name.
pub struct FastaRecords<R> {
    lines:          Lines<R>,
    path:           PathBuf,
    line_no:        usize,
    pending_header: Option<String>,
    finished:       bool,
}

impl<R: BufRead> FastaRecords<R> {
    pub fn new(reader: R, path: impl AsRef<Path>) -> Self {
        Self {
            lines:          reader.lines(),
            path:           path.as_ref().to_path_buf(),
            line_no:        0,
            pending_header: None,
            finished:       false,
        }
    }

    fn next_line(&mut self) -> Option<Result<String>> {
        let line = self.lines.next()?;
        self.line_no += 1;
        Some(line.map_err(|e| ProtVecError::io(&self.path, e)))
    }

    /// Find the first header. Only called before the first record;
    /// later headers are picked up while reading sequence lines.
    fn read_header(&mut self) -> Option<Result<String>> {
        let mut skipped = 0usize;
        loop {
            let line = match self.next_line()? {
                Ok(line) => line,
                Err(e) => return Some(Err(e)),
            };
            let trimmed = line.trim();
            if let Some(header) = trimmed.strip_prefix('>') {
                if skipped > 0 {
                    tracing::warn!(
                        "Skipped {} line(s) before the first record in '{}'",
                        skipped,
                        self.path.display()
                    );
                }
                return Some(Ok(header.to_string()));
            }
            if !trimmed.is_empty() {
                skipped += 1;
            }
        }
    }

    fn fail(&mut self, err: ProtVecError) -> Option<Result<SequenceRecord>> {
        self.finished = true;
        Some(Err(err))
    }
}

impl<R: BufRead> Iterator for FastaRecords<R> {
    type Item = Result<SequenceRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let header = match self.pending_header.take() {
            Some(header) => header,
            None => match self.read_header() {
                Some(Ok(header)) => header,
                Some(Err(e)) => return self.fail(e),
                None => {
                    self.finished = true;
                    return None;
                }
            },
        };

        // Collect sequence lines until the next header or EOF
        let mut sequence = String::new();
        loop {
            match self.next_line() {
                None => {
                    self.finished = true;
                    break;
                }
                Some(Err(e)) => return self.fail(e),
                Some(Ok(line)) => {
                    let trimmed = line.trim();
                    if let Some(next_header) = trimmed.strip_prefix('>') {
                        self.pending_header = Some(next_header.to_string());
                        break;
                    }
                    sequence.extend(trimmed.chars().filter(|c| !c.is_whitespace()));
                }
            }
        }

        let (id, description) = split_header(&header);
        let record = SequenceRecord::new(id, description, sequence);
        if record.is_empty() {
            tracing::debug!("Record '{}' in '{}' has no residues", record.id, self.path.display());
        }
        Some(Ok(record))
    }
}

/// `"sp|P1|X some protein"` → (`"sp|P1|X"`, `"some protein"`)
fn split_header(header: &str) -> (&str, &str) {
    let header = header.trim();
    match header.split_once(char::is_whitespace) {
        Some((id, rest)) => (id, rest.trim()),
        None => (header, ""),
    }
}
