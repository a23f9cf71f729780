// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Orchestrates the other layers to accomplish one user goal.
//
// Rules for this layer:
//   - No tokenisation or vector math here
//   - No printing here (that's Layer 1)
//   - Only workflow coordination, with anyhow context added
//     to library errors so the CLI can report them plainly

// FASTA → corpus file
pub mod corpus_use_case;

// FASTA or corpus → trained, saved model
pub mod train_use_case;

// Saved model + sequences → frame vectors
pub mod vectorize_use_case;
