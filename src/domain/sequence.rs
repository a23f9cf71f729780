// ============================================================
// Layer 3 — SequenceRecord Domain Type
// ============================================================
// One record read from a sequence file. By the time a record
// exists the file format is gone: only an identifier, the
// free-text description and the residue string remain.
//
// The residue alphabet is NOT validated here. Any character is
// a valid residue as far as tokenisation is concerned.

use serde::{Deserialize, Serialize};

/// A single sequence record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceRecord {
    /// First word of the header line, e.g. `sp|P69905|HBA_HUMAN`
    pub id: String,

    /// Remainder of the header line after the id (may be empty)
    pub description: String,

    /// The residues, with line breaks and surrounding whitespace removed
    pub sequence: String,
}

impl SequenceRecord {
    pub fn new(
        id:          impl Into<String>,
        description: impl Into<String>,
        sequence:    impl Into<String>,
    ) -> Self {
        Self {
            id:          id.into(),
            description: description.into(),
            sequence:    sequence.into(),
        }
    }

    /// Number of residues (characters, not bytes)
    pub fn len(&self) -> usize {
        self.sequence.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_len_counts_characters() {
        let r = SequenceRecord::new("seq1", "", "AGAMQSASM");
        assert_eq!(r.len(), 9);
        assert!(!r.is_empty());
    }

    #[test]
    fn test_empty_record() {
        let r = SequenceRecord::new("empty", "no residues", "");
        assert!(r.is_empty());
        assert_eq!(r.len(), 0);
    }
}
