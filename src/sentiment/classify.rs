// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Timed model invocation and score thresholding.

use crate::hw::clock::Clock;
use crate::sentiment::encode::TokenSequence;
use crate::sentiment::predict::{Predictor, INPUT_SHAPE};

/// Scores at or above this are positive.
pub const POSITIVE_THRESHOLD: f32 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sentiment {
    Positive,
    Negative,
}

impl Sentiment {
    /// Threshold a model score. The boundary itself counts as positive;
    /// anything else, NaN included, is negative.
    pub fn from_score(score: f32) -> Self {
        if score >= POSITIVE_THRESHOLD {
            Self::Positive
        } else {
            Self::Negative
        }
    }

    /// Label as printed on the console.
    pub fn label(self) -> &'static str {
        match self {
            Self::Positive => "positivo",
            Self::Negative => "negativo",
        }
    }
}

/// Outcome of one classified input line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Classification {
    pub sentiment: Sentiment,
    pub score: f32,
    /// Wall time of the model call alone, in microseconds.
    pub micros: u64,
}

/// Run the model over one encoded sequence and threshold the result.
///
/// The clock brackets nothing but the predictor call, so the reported
/// latency is the model's and not the pipeline's.
pub fn classify<P: Predictor, C: Clock>(
    sequence: &TokenSequence,
    predictor: &mut P,
    clock: &mut C,
) -> Classification {
    let tensor = sequence.to_tensor();

    let started = clock.now_us();
    let output = predictor.predict(&tensor, &INPUT_SHAPE);
    let micros = clock.now_us().saturating_sub(started);

    let score = match output.first() {
        Some(&score) => score,
        None => {
            log::warn!("predictor returned an empty output tensor");
            0.0
        }
    };

    Classification {
        sentiment: Sentiment::from_score(score),
        score,
        micros,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hw::sim::ManualClock;
    use crate::sentiment::encode;
    use crate::sentiment::predict::FnPredictor;

    #[test]
    fn threshold_is_closed_at_half() {
        assert_eq!(Sentiment::from_score(0.5), Sentiment::Positive);
        assert_eq!(Sentiment::from_score(0.499_999), Sentiment::Negative);
        assert_eq!(Sentiment::from_score(1.0), Sentiment::Positive);
        assert_eq!(Sentiment::from_score(0.0), Sentiment::Negative);
    }

    #[test]
    fn nan_scores_are_negative() {
        assert_eq!(Sentiment::from_score(f32::NAN), Sentiment::Negative);
    }

    #[test]
    fn labels_match_console_output() {
        assert_eq!(Sentiment::Positive.label(), "positivo");
        assert_eq!(Sentiment::Negative.label(), "negativo");
    }

    #[test]
    fn latency_brackets_only_the_model_call() {
        let clock = ManualClock::new();
        clock.advance_us(10_000);

        let mut model = FnPredictor::new(|_: &[f32], _: &[u32]| {
            clock.advance_us(1_500);
            0.9
        });

        let sequence = encode::encode("adoro questo prodotto");
        let result = classify(&sequence, &mut model, &mut &clock);

        assert_eq!(result.micros, 1_500);
        assert_eq!(result.sentiment, Sentiment::Positive);
        assert_eq!(result.score, 0.9);
    }

    #[test]
    fn empty_model_output_reads_as_negative() {
        struct EmptyModel;
        impl Predictor for EmptyModel {
            fn predict(&mut self, _: &[f32], _: &[u32]) -> &[f32] {
                &[]
            }
        }

        let sequence = encode::encode("adoro");
        let result = classify(&sequence, &mut EmptyModel, &mut ManualClock::new());

        assert_eq!(result.sentiment, Sentiment::Negative);
        assert_eq!(result.score, 0.0);
    }
}
