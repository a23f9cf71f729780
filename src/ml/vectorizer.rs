// ============================================================
// Layer 5 — Vectorizer
// ============================================================
// Turns a raw sequence into three vectors, one per reading
// frame, using a trained EmbeddingModel.
//
//   "AGAMQSASM", n = 3
//       │ split_ngrams
//       ▼
//   frame 0: AGA MQS ASM   → v(AGA) + v(MQS) + v(ASM)
//   frame 1: GAM QSA       → v(GAM) + v(QSA)
//   frame 2: AMQ SAS       → v(AMQ) + v(SAS)
//
// All-or-nothing: every token of every frame is looked up
// before anything is returned. The first missing token, in
// frame order then token order, aborts the call.
//
// A frame with no tokens (sequence too short) is the zero
// vector of the model's dimension.

use serde::Serialize;

use crate::data::tokenizer::{split_ngrams, FRAME_COUNT};
use crate::domain::error::{ProtVecError, Result};
use crate::ml::model::EmbeddingModel;

/// One summed embedding per reading frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SequenceVectors {
    frames: [Vec<f32>; FRAME_COUNT],
}

impl SequenceVectors {
    /// Vector for reading frame `frame`, or `None` unless `frame` is 0, 1 or 2.
    pub fn frame(&self, frame: usize) -> Option<&[f32]> {
        self.frames.get(frame).map(Vec::as_slice)
    }

    pub fn frames(&self) -> &[Vec<f32>; FRAME_COUNT] {
        &self.frames
    }

    pub fn into_frames(self) -> [Vec<f32>; FRAME_COUNT] {
        self.frames
    }
}

/// Vectorise `sequence` with `model`.
///
/// The model's own `n` is used for tokenisation, so queries are always
/// split the same way the training corpus was.
///
/// # Errors
/// `UnknownToken` naming the first n-gram the vocabulary lacks.
pub fn to_vecs(model: &EmbeddingModel, sequence: &str) -> Result<SequenceVectors> {
    let dimension = model.dimension();
    let ngram_frames = split_ngrams(sequence, model.n());

    let mut frames: [Vec<f32>; FRAME_COUNT] = std::array::from_fn(|_| vec![0.0f32; dimension]);

    for (sum, tokens) in frames.iter_mut().zip(ngram_frames.iter()) {
        for token in tokens {
            let vector = model
                .lookup(token)
                .ok_or_else(|| ProtVecError::UnknownToken(token.clone()))?;

            for (acc, value) in sum.iter_mut().zip(vector) {
                *acc += *value;
            }
        }
    }

    Ok(SequenceVectors { frames })
}
