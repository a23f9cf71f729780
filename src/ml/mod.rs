// ============================================================
// Layer 5 — ML / Model Layer
// ============================================================
// Everything about embeddings lives here. No other layer
// knows how a token becomes a vector.
//
//   config.rs     — ModelConfig and the TrainingParams subset
//                   handed to the trainer
//
//   vocab.rs      — write-once token → vector table
//
//   trainer.rs    — EmbeddingTrainer trait, plus an adapter
//                   that runs an external word2vec program
//
//   model.rs      — EmbeddingModel and the ModelBuilder that
//                   produces it (corpus generation + training)
//
//   vectorizer.rs — sequence → three summed frame vectors
//
//   protvec.rs    — facade holding a trained model

/// Model hyperparameters
pub mod config;

/// Trained token → vector table
pub mod vocab;

/// Trainer seam and external word2vec adapter
pub mod trainer;

/// EmbeddingModel and ModelBuilder
pub mod model;

/// Per-frame vector aggregation
pub mod vectorizer;

/// Composition facade over a trained model
pub mod protvec;

#[cfg(test)]
pub(crate) mod test_support;
