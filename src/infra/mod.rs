// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Persistence concerns used by more than one other layer:
//
//   vector_format.rs — word2vec text format reader/writer.
//                      The external trainer writes it; the
//                      model store reads and writes it.
//
//   model_store.rs   — saves a trained model (vectors + JSON
//                      config) to a directory and loads it
//                      back for vectorisation.

/// word2vec text vectors
pub mod vector_format;

/// Model directory save/load
pub mod model_store;
