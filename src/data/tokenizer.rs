// ============================================================
// Layer 4 — Three-Frame N-gram Tokenizer
// ============================================================
// Splits one sequence into non-overlapping n-grams, once for
// each of the three reading frames.
//
// Example with n = 3:
//   Sequence: "AGAMQSASM"
//   Frame 0:  AGA MQS ASM
//   Frame 1:   GAM QSA (SM)   ← trailing "SM" is dropped
//   Frame 2:    AMQ SAS (M)   ← trailing "M" is dropped
//
// The frame count is fixed at 3 whatever `n` is. It is a
// property of the scheme, not derived from `n`.
//
// Works on characters, not bytes, so multi-byte residues
// never get split in half.

/// Number of reading frames (offsets 0, 1 and 2).
pub const FRAME_COUNT: usize = 3;

/// Token lists for the three reading frames, in frame order.
pub type FrameTokens = [Vec<String>; FRAME_COUNT];

/// Split `sequence` into per-frame n-gram tokens.
///
/// Total function: an empty sequence, a sequence shorter than the
/// frame offset, or `n == 0` all produce empty frames.
///
/// # Example
/// ```
/// use protvec::data::tokenizer::split_ngrams;
///
/// let frames = split_ngrams("AGAMQSASM", 3);
/// assert_eq!(frames[0], vec!["AGA", "MQS", "ASM"]);
/// assert_eq!(frames[1], vec!["GAM", "QSA"]);
/// assert_eq!(frames[2], vec!["AMQ", "SAS"]);
/// ```
pub fn split_ngrams(sequence: &str, n: usize) -> FrameTokens {
    let chars: Vec<char> = sequence.chars().collect();

    std::array::from_fn(|offset| {
        if n == 0 || offset >= chars.len() {
            return Vec::new();
        }

        // chunks_exact drops the short remainder for us
        chars[offset..]
            .chunks_exact(n)
            .map(|group| group.iter().collect::<String>())
            .collect()
    })
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand::rngs::StdRng;

    /// How many tokens frame `frame` of a `len`-character sequence yields.
    fn frame_token_count(len: usize, n: usize, frame: usize) -> usize {
        if n == 0 {
            return 0;
        }
        len.saturating_sub(frame) / n
    }

    #[test]
    fn test_reference_example() {
        let frames = split_ngrams("AGAMQSASM", 3);
        assert_eq!(
            frames,
            [
                vec!["AGA".to_string(), "MQS".to_string(), "ASM".to_string()],
                vec!["GAM".to_string(), "QSA".to_string()],
                vec!["AMQ".to_string(), "SAS".to_string()],
            ]
        );
    }

    #[test]
    fn test_empty_sequence_gives_three_empty_frames() {
        let frames = split_ngrams("", 3);
        assert!(frames.iter().all(Vec::is_empty));
    }

    #[test]
    fn test_shorter_than_n_gives_no_tokens() {
        // 2 residues, n = 3 → nothing fits in any frame
        let frames = split_ngrams("AG", 3);
        assert!(frames.iter().all(Vec::is_empty));
    }

    #[test]
    fn test_zero_n_does_not_panic() {
        let frames = split_ngrams("AGAMQ", 0);
        assert!(frames.iter().all(Vec::is_empty));
    }

    #[test]
    fn test_unigrams_still_use_three_frames() {
        let frames = split_ngrams("ABCD", 1);
        assert_eq!(frames[0], vec!["A", "B", "C", "D"]);
        assert_eq!(frames[1], vec!["B", "C", "D"]);
        assert_eq!(frames[2], vec!["C", "D"]);
    }

    #[test]
    fn test_large_n_uses_three_frames() {
        let frames = split_ngrams("ABCDEFGHIJ", 5);
        assert_eq!(frames[0], vec!["ABCDE", "FGHIJ"]);
        assert_eq!(frames[1], vec!["BCDEF"]);
        assert_eq!(frames[2], vec!["CDEFG"]);
    }

    #[test]
    fn test_multibyte_residues_stay_whole() {
        let frames = split_ngrams("αβγδ", 2);
        assert_eq!(frames[0], vec!["αβ", "γδ"]);
        assert_eq!(frames[1], vec!["βγ"]);
        assert_eq!(frames[2], vec!["γδ"]);
    }

    #[test]
    fn test_token_counts_match_formula() {
        // Random sequences over a protein-like alphabet, seeded for repeatability
        let alphabet: Vec<char> = "ACDEFGHIKLMNPQRSTVWY".chars().collect();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..200 {
            let len: usize = rng.gen_range(0..40);
            let n: usize = rng.gen_range(1..6);
            let seq: String = (0..len)
                .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
                .collect();

            let frames = split_ngrams(&seq, n);
            for (i, frame) in frames.iter().enumerate() {
                assert_eq!(frame.len(), frame_token_count(len, n, i), "seq={seq} n={n} frame={i}");
                assert!(frame.iter().all(|t| t.chars().count() == n));
            }
        }
    }
}
