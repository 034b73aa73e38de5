// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Model invocation seam.
//!
//! The pipeline never talks to an inference runtime directly; it hands an
//! input tensor to a [`Predictor`] and reads a score back. The real model
//! plugs in behind this trait, [`HeuristicPredictor`] stands in for it on
//! builds without one, and [`FnPredictor`] adapts any closure for tests.

use heapless::Vec;

use crate::sentiment::dict;
use crate::sentiment::encode::MAX_SEQ_LENGTH;

/// Shape of the model input: one batch of [`MAX_SEQ_LENGTH`] indices.
pub const INPUT_SHAPE: [u32; 2] = [1, MAX_SEQ_LENGTH as u32];

/// Something that can run the sentiment model over one input tensor.
pub trait Predictor {
    /// Run the model.
    ///
    /// `input` holds the tensor laid out row-major per `shape`. The returned
    /// slice is the model's output tensor, owned by the predictor and valid
    /// until the next call; element 0 is the sentiment score in `[0, 1]`.
    fn predict(&mut self, input: &[f32], shape: &[u32]) -> &[f32];
}

impl<P: Predictor + ?Sized> Predictor for &mut P {
    fn predict(&mut self, input: &[f32], shape: &[u32]) -> &[f32] {
        (**self).predict(input, shape)
    }
}

/// Adapter running the pipeline against a plain scoring function.
pub struct FnPredictor<F> {
    f: F,
    out: [f32; 1],
}

impl<F: FnMut(&[f32], &[u32]) -> f32> FnPredictor<F> {
    pub fn new(f: F) -> Self {
        Self { f, out: [0.0] }
    }
}

impl<F: FnMut(&[f32], &[u32]) -> f32> Predictor for FnPredictor<F> {
    fn predict(&mut self, input: &[f32], shape: &[u32]) -> &[f32] {
        self.out[0] = (self.f)(input, shape);
        &self.out
    }
}

const POSITIVE_WORDS: &[&str] = &[
    "adoro",
    "affidabile",
    "apprezzato",
    "avvincente",
    "bellissimo",
    "buono",
    "capolavoro",
    "coinvolgente",
    "commovente",
    "consiglio",
    "contento",
    "delizioso",
    "eccellente",
    "eccezionale",
    "emozionante",
    "fantastica",
    "fantastico",
    "felice",
    "gentile",
    "impeccabile",
    "incredibile",
    "indimenticabile",
    "magica",
    "meravigliosa",
    "ottima",
    "ottimo",
    "perfetta",
    "perfetto",
    "positiva",
    "soddisfatto",
    "speciale",
    "spettacolare",
    "squisito",
    "stupendi",
    "utile",
    "veloce",
];

const NEGATIVE_WORDS: &[&str] = &[
    "annoiati",
    "banale",
    "bruttissimo",
    "confusa",
    "deludente",
    "delusione",
    "deluso",
    "disastro",
    "disgustoso",
    "evitare",
    "fastidiosa",
    "fragile",
    "immangiabile",
    "incubo",
    "insoddisfatto",
    "inutile",
    "inutili",
    "lenta",
    "lento",
    "male",
    "negativa",
    "noiosa",
    "noioso",
    "odiato",
    "odio",
    "orribile",
    "peggior",
    "pessima",
    "pessimo",
    "scadente",
    "scortese",
    "sgarbato",
    "sgradevole",
    "sprecati",
    "terribile",
    "triste",
];

/// Inputs with no valence words land just under the positive threshold.
const NEUTRAL_BIAS: f32 = -0.5;

/// Word-valence stand-in for the trained model.
///
/// Tallies positive and negative vocabulary hits across the input and
/// squashes the net count through a sigmoid.
pub struct HeuristicPredictor {
    positive: Vec<u32, 64>,
    negative: Vec<u32, 64>,
    out: [f32; 1],
}

impl HeuristicPredictor {
    pub fn new() -> Self {
        let mut positive = Vec::new();
        let mut negative = Vec::new();
        for word in POSITIVE_WORDS {
            let index = dict::lookup(word);
            // The sentinel must never carry valence: padding would score.
            if index != dict::UNKNOWN_INDEX {
                let _ = positive.push(index);
            }
        }
        for word in NEGATIVE_WORDS {
            let index = dict::lookup(word);
            if index != dict::UNKNOWN_INDEX {
                let _ = negative.push(index);
            }
        }
        Self {
            positive,
            negative,
            out: [0.0],
        }
    }
}

impl Default for HeuristicPredictor {
    fn default() -> Self {
        Self::new()
    }
}

impl Predictor for HeuristicPredictor {
    fn predict(&mut self, input: &[f32], _shape: &[u32]) -> &[f32] {
        let mut net = NEUTRAL_BIAS;
        for &cell in input {
            let index = cell as u32;
            if self.positive.contains(&index) {
                net += 1.0;
            } else if self.negative.contains(&index) {
                net -= 1.0;
            }
        }
        self.out[0] = sigmoid(net);
        &self.out
    }
}

fn sigmoid(x: f32) -> f32 {
    1.0 / (1.0 + micromath::F32Ext::exp(-x))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentiment::encode;

    fn score_of(text: &str) -> f32 {
        let mut model = HeuristicPredictor::new();
        let tensor = encode::encode(text).to_tensor();
        model.predict(&tensor, &INPUT_SHAPE)[0]
    }

    #[test]
    fn praise_scores_positive() {
        assert!(score_of("adoro questo prodotto") >= 0.5);
        assert!(score_of("questa città è fantastica") >= 0.5);
    }

    #[test]
    fn complaints_score_negative() {
        assert!(score_of("odio questo prodotto") < 0.5);
        assert!(score_of("il film era noioso") < 0.5);
    }

    #[test]
    fn bare_stopwords_score_negative() {
        assert!(score_of("questo prodotto") < 0.5);
        assert!(score_of("") < 0.5);
    }

    #[test]
    fn scores_stay_in_unit_interval() {
        let texts = [
            "adoro adoro adoro adoro adoro",
            "odio odio odio odio odio",
            "un film",
        ];
        for text in texts {
            let score = score_of(text);
            assert!((0.0..=1.0).contains(&score), "{text}: {score}");
        }
    }

    #[test]
    fn fn_predictor_forwards_input_and_shape() {
        let mut model = FnPredictor::new(|input: &[f32], shape: &[u32]| {
            assert_eq!(shape, &INPUT_SHAPE[..]);
            assert_eq!(input.len(), MAX_SEQ_LENGTH);
            0.75
        });
        let tensor = [0.0; MAX_SEQ_LENGTH];
        assert_eq!(model.predict(&tensor, &INPUT_SHAPE), &[0.75]);
    }
}
