// ============================================================
// Layer 6 — word2vec Text Vector Format
// ============================================================
// Reads and writes the plain-text vector format produced by
// the original word2vec tool (`-binary 0`) and most embedding
// libraries' "save as word2vec text" functions:
//
//   3 4                      ← header: token count, dimension
//   AGA 0.1 -0.2 0.3 0.05
//   MQS 0.0 0.7 -0.1 0.2
//   ASM ...
//
// A vocabulary read back from this format is treated exactly
// like one that was just trained.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::domain::error::{ProtVecError, Result};
use crate::ml::vocab::Vocabulary;

/// Upper bound on the entries reserved up front from the header count.
const MAX_PREALLOCATED_ENTRIES: usize = 1 << 16;

/// Raw contents of a vector file: declared dimension plus entries
/// in file order.
pub struct VectorEntries {
    pub dimension: usize,
    pub entries:   Vec<(String, Vec<f32>)>,
}

/// Parse word2vec text vectors from any reader.
///
/// `label` is the path reported in errors.
pub fn read_entries<R: BufRead>(reader: R, label: &Path) -> Result<VectorEntries> {
    let mut lines = reader.lines().enumerate();

    // ── Header ────────────────────────────────────────────────────────────────
    let header = match lines.next() {
        Some((_, line)) => line.map_err(|e| ProtVecError::io(label, e))?,
        None => return Err(ProtVecError::parse(label, 1, "empty vector file")),
    };
    let (declared, dimension) = parse_header(&header)
        .ok_or_else(|| ProtVecError::parse(label, 1, format!("bad header '{}'", header.trim())))?;

    // ── Body ──────────────────────────────────────────────────────────────────
    // The declared count is only a hint; a corrupt header must not size the buffer
    let mut entries = Vec::with_capacity(declared.min(MAX_PREALLOCATED_ENTRIES));
    for (idx, line) in lines {
        let line_no = idx + 1;
        let line = line.map_err(|e| ProtVecError::io(label, e))?;

        let mut fields = line.split_whitespace();
        let token = match fields.next() {
            Some(token) => token.to_string(),
            None => continue,
        };

        let vector = fields
            .map(str::parse::<f32>)
            .collect::<std::result::Result<Vec<f32>, _>>()
            .map_err(|e| ProtVecError::parse(label, line_no, format!("token '{token}': {e}")))?;

        if vector.len() != dimension {
            return Err(ProtVecError::parse(
                label,
                line_no,
                format!("token '{token}' has {} values, expected {dimension}", vector.len()),
            ));
        }
        entries.push((token, vector));
    }

    if entries.len() != declared {
        tracing::warn!(
            "'{}' declares {} vectors but contains {}",
            label.display(),
            declared,
            entries.len()
        );
    }

    Ok(VectorEntries { dimension, entries })
}

fn parse_header(header: &str) -> Option<(usize, usize)> {
    let mut parts = header.split_whitespace();
    let count = parts.next()?.parse().ok()?;
    let dimension = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((count, dimension))
}

/// Load a vector file into a Vocabulary.
pub fn read_vocabulary(path: &Path) -> Result<Vocabulary> {
    let file = File::open(path).map_err(|e| ProtVecError::io(path, e))?;
    let raw = read_entries(BufReader::new(file), path)?;
    Vocabulary::from_entries(raw.dimension, raw.entries)
}

/// Serialise `vocab` in word2vec text format, tokens sorted.
pub fn write_vocabulary<W: Write>(vocab: &Vocabulary, writer: &mut W) -> std::io::Result<()> {
    writeln!(writer, "{} {}", vocab.len(), vocab.dimension())?;
    for (token, vector) in vocab.sorted_entries() {
        write!(writer, "{token}")?;
        for value in vector {
            write!(writer, " {value}")?;
        }
        writeln!(writer)?;
    }
    Ok(())
}

/// Write `vocab` to `path`, replacing any existing file.
pub fn save_vocabulary(vocab: &Vocabulary, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|e| ProtVecError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    write_vocabulary(vocab, &mut writer)
        .and_then(|_| writer.flush())
        .map_err(|e| ProtVecError::io(path, e))?;

    tracing::debug!("Saved {} vectors to '{}'", vocab.len(), path.display());
    Ok(())
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn parse(text: &str) -> Result<VectorEntries> {
        read_entries(Cursor::new(text), Path::new("vectors.txt"))
    }

    #[test]
    fn test_reads_word2vec_output() {
        // word2vec writes a trailing space after every value
        let raw = parse("2 3\n</s> 0.1 0.2 0.3 \nAGA -1 0.5 2e-1 \n").unwrap();
        assert_eq!(raw.dimension, 3);
        assert_eq!(raw.entries.len(), 2);
        assert_eq!(raw.entries[1].0, "AGA");
        assert_eq!(raw.entries[1].1, vec![-1.0, 0.5, 0.2]);
    }

    #[test]
    fn test_bad_header() {
        let err = parse("two three\n").err().unwrap();
        assert!(matches!(err, ProtVecError::Parse { line: 1, .. }));
    }

    #[test]
    fn test_short_vector_reports_line() {
        let err = parse("2 3\nAGA 1 2 3\nMQS 1 2\n").err().unwrap();
        match err {
            ProtVecError::Parse { line, message, .. } => {
                assert_eq!(line, 3);
                assert!(message.contains("MQS"));
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_non_numeric_value() {
        let err = parse("1 2\nAGA 1.0 abc\n").err().unwrap();
        assert!(matches!(err, ProtVecError::Parse { line: 2, .. }));
    }

    #[test]
    fn test_oversized_declared_count_only_warns() {
        let raw = parse("18446744073709551615 3\nAGA 1 2 3\n").unwrap();
        assert_eq!(raw.dimension, 3);
        assert_eq!(raw.entries.len(), 1);
        assert_eq!(raw.entries[0].1, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_save_then_load_preserves_vectors() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("vectors.txt");
        let vocab = Vocabulary::from_entries(
            2,
            vec![
                ("MQS".to_string(), vec![0.25, -1.5]),
                ("AGA".to_string(), vec![1.0e-7, 3.0]),
            ],
        )
        .unwrap();

        save_vocabulary(&vocab, &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("2 2\nAGA "));

        assert_eq!(read_vocabulary(&path).unwrap(), vocab);
    }
}
