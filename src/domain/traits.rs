// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The corpus builder and the vectorize workflow only see these
// traits, never a concrete file format:
//   - FastaSource implements SequenceSource
//   - a future UniProt XML or FASTQ reader would too
//
// Persistable is implemented by the ProtVec facade so a trained
// vocabulary can be written once and reloaded for inference.

use std::path::Path;

use crate::domain::error::Result;
use crate::domain::sequence::SequenceRecord;

// ─── SequenceSource ───────────────────────────────────────────────────────────
/// Anything that yields sequence records in a stable order.
///
/// Records are streamed so a large file never has to sit in memory;
/// a parse failure surfaces at the record where it happens.
pub trait SequenceSource {
    /// Iterator over the records, in source order.
    type Records: Iterator<Item = Result<SequenceRecord>>;

    /// Open the source and start streaming records.
    fn records(&self) -> Result<Self::Records>;

    /// Convenience: collect every record, stopping at the first error.
    fn load_all(&self) -> Result<Vec<SequenceRecord>> {
        self.records()?.collect()
    }
}

// ─── Persistable ──────────────────────────────────────────────────────────────
/// Any component whose state can be saved to and restored from a directory.
pub trait Persistable: Sized {
    /// Save this component's state under `dir`
    fn save(&self, dir: &Path) -> Result<()>;

    /// Restore a component previously written by `save`.
    fn load(dir: &Path) -> Result<Self>;
}
