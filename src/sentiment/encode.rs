// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Tokenization and encoding of one input line.
//!
//! A line is split on single spaces and every token is mapped through the
//! vocabulary into a fixed-length index sequence. Splitting is literal:
//! consecutive, leading, or trailing spaces produce empty tokens, and an
//! empty token encodes to the sentinel index like any other unknown word.

use crate::sentiment::dict;

/// Model input length. Longer inputs are truncated, shorter ones padded.
pub const MAX_SEQ_LENGTH: usize = 15;

/// One encoded input line: exactly [`MAX_SEQ_LENGTH`] vocabulary indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TokenSequence([u32; MAX_SEQ_LENGTH]);

impl TokenSequence {
    /// The raw index sequence, padding included.
    pub fn indices(&self) -> &[u32; MAX_SEQ_LENGTH] {
        &self.0
    }

    /// Widen the indices to the `f32` tensor the model consumes.
    pub fn to_tensor(&self) -> [f32; MAX_SEQ_LENGTH] {
        let mut tensor = [0.0; MAX_SEQ_LENGTH];
        for (cell, &index) in tensor.iter_mut().zip(self.0.iter()) {
            *cell = index as f32;
        }
        tensor
    }
}

/// Encode one line of text into its fixed-length index sequence.
///
/// Tokens past [`MAX_SEQ_LENGTH`] are dropped; unused slots stay at the
/// padding index.
pub fn encode(text: &str) -> TokenSequence {
    let mut indices = [dict::UNKNOWN_INDEX; MAX_SEQ_LENGTH];
    for (slot, word) in indices.iter_mut().zip(text.split(' ')) {
        *slot = dict::lookup(word);
    }
    TokenSequence(indices)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_known_phrase() {
        let seq = encode("adoro questo prodotto");
        assert_eq!(
            seq.indices(),
            &[3, 177, 171, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]
        );
    }

    #[test]
    fn unknown_words_become_padding_index() {
        let seq = encode("adoro xyz prodotto");
        assert_eq!(seq.indices()[..3], [3, 0, 171]);
    }

    #[test]
    fn long_input_is_truncated() {
        let text = ["adoro"; 20].join(" ");
        let seq = encode(&text);
        assert_eq!(seq.indices(), &[3; MAX_SEQ_LENGTH]);
    }

    #[test]
    fn consecutive_spaces_consume_slots() {
        let seq = encode("adoro  questo");
        assert_eq!(seq.indices()[..4], [3, 0, 177, 0]);

        let seq = encode(" adoro");
        assert_eq!(seq.indices()[..2], [0, 3]);
    }

    #[test]
    fn empty_line_is_all_padding() {
        let seq = encode("");
        assert_eq!(seq.indices(), &[0; MAX_SEQ_LENGTH]);
    }

    #[test]
    fn tensor_mirrors_indices() {
        let seq = encode("adoro questo prodotto");
        let tensor = seq.to_tensor();
        assert_eq!(tensor[0], 3.0);
        assert_eq!(tensor[1], 177.0);
        assert_eq!(tensor[2], 171.0);
        assert_eq!(tensor[3..], [0.0; 12]);
    }
}
