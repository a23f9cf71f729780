// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust types and traits that define what the system
// talks about: sequence records, the error taxonomy, and the
// seams (traits) other layers implement.
//
// Rules for this layer:
//   - NO file I/O or process spawning
//   - NO embedding math
//   - Only structs, enums and traits

// A sequence record read from disk
pub mod sequence;

// Error enum shared by every library layer
pub mod error;

// Core abstractions (traits) that other layers implement
pub mod traits;

pub use error::{ProtVecError, Result};
pub use sequence::SequenceRecord;
