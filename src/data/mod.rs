// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything between a sequence file on disk and the corpus
// file the embedding trainer reads:
//
//   FASTA file
//       │
//       ▼
//   FastaSource     → streams SequenceRecords
//       │
//       ▼
//   split_ngrams    → three frames of n-gram tokens per record
//       │
//       ▼
//   CorpusBuilder   → one space-joined line per (record, frame)
//       │
//       ▼
//   Corpus          → handle the trainer consumes
//
// Each module is responsible for exactly one step.

/// Three-frame n-gram tokenizer
pub mod tokenizer;

/// FASTA record reader
pub mod fasta;

/// Corpus file generation and the Corpus handle
pub mod corpus;
