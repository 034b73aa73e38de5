// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Interactive sentiment console.
//!
//! Owns the board resources for the demo session: prompt for a phrase, read
//! one line, encode it, run the model with the status LED lit, and report
//! the score. The loop ends when the input stream does.

use embedded_hal::digital::OutputPin;

use crate::hw::clock::Clock;
use crate::hw::console::{Console, LineBuf};
use crate::hw::led::StatusLed;
use crate::sentiment::classify::{classify, Classification};
use crate::sentiment::encode::{self, TokenSequence};
use crate::sentiment::predict::Predictor;

/// Outcome of one pass through the prompt loop.
#[derive(Debug)]
pub enum Step {
    /// One line was read, classified, and reported.
    Classified(Classification),
    /// The input stream ended.
    Stopped,
}

pub struct Repl<C, P, K, L>
where
    C: Console,
    P: Predictor,
    K: Clock,
    L: OutputPin,
{
    console: C,
    predictor: P,
    clock: K,
    led: StatusLed<L>,
    line: LineBuf,
}

impl<C, P, K, L> Repl<C, P, K, L>
where
    C: Console,
    P: Predictor,
    K: Clock,
    L: OutputPin,
{
    pub fn new(console: C, predictor: P, clock: K, led: StatusLed<L>) -> Self {
        Self {
            console,
            predictor,
            clock,
            led,
            line: LineBuf::new(),
        }
    }

    /// Print the banner and serve prompts until the input stream ends.
    pub fn run(&mut self) {
        let _ = self.console.write_str("\nSentiment Analysis Demo\n");
        self.console.flush();
        while let Step::Classified(_) = self.step() {}
    }

    /// One pass: prompt, read, classify, report.
    pub fn step(&mut self) -> Step {
        let _ = self.console.write_str("\nInserisci una frase: ");
        self.console.flush();

        if self.console.read_line(&mut self.line).is_none() {
            self.console.println("Errore o EOF durante la lettura.");
            self.console.flush();
            log::info!("input stream closed, leaving the prompt loop");
            return Step::Stopped;
        }

        let sequence = encode::encode(&self.line);
        self.echo_indices(&sequence);

        self.console.println("Starting prediction...");
        self.console.flush();

        self.led.on();
        let result = classify(&sequence, &mut self.predictor, &mut self.clock);
        self.led.off();

        log::debug!("score {:.6} in {} us", result.score, result.micros);
        self.report(&result);
        Step::Classified(result)
    }

    fn echo_indices(&mut self, sequence: &TokenSequence) {
        let mut num = itoa::Buffer::new();
        let _ = self.console.write_str("\nTokenized input (indices): ");
        for &index in sequence.indices() {
            let _ = self.console.write_str(num.format(index));
            let _ = self.console.write_str(" ");
        }
        let _ = self.console.write_str("\n");
        self.console.flush();
    }

    fn report(&mut self, result: &Classification) {
        let mut num = itoa::Buffer::new();
        let _ = self.console.write_str("Prediction took ");
        let _ = self.console.write_str(num.format(result.micros));
        let _ = self.console.write_str(" microseconds\n");
        let _ = writeln!(
            self.console,
            "Sentiment prediction score: {:.6}",
            result.score
        );
        let _ = self.console.write_str("-> Sentiment ");
        let _ = self.console.write_str(result.sentiment.label());
        let _ = self.console.write_str("\n");
        self.console.flush();
    }

    /// Release the board resources.
    pub fn free(self) -> (C, P, K, StatusLed<L>) {
        (self.console, self.predictor, self.clock, self.led)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    use crate::hw::sim::{ManualClock, ScriptedConsole, SimPin};
    use crate::sentiment::predict::FnPredictor;

    #[test]
    fn full_session_transcript() {
        let clock = ManualClock::new();
        let console = ScriptedConsole::new(&["adoro questo prodotto"]);
        let model = FnPredictor::new(|_: &[f32], _: &[u32]| {
            clock.advance_us(1_234);
            0.9
        });
        let pin = SimPin::new();
        let mut repl = Repl::new(console, model, &clock, StatusLed::active_high(&pin));
        repl.run();

        let (console, _, _, led) = repl.free();
        let out = console.output();
        assert!(out.contains("Sentiment Analysis Demo\n"));
        assert!(out.contains("\nInserisci una frase: "));
        assert!(out
            .contains("\nTokenized input (indices): 3 177 171 0 0 0 0 0 0 0 0 0 0 0 0 \n"));
        assert!(out.contains("Starting prediction...\n"));
        assert!(out.contains("Prediction took 1234 microseconds\n"));
        assert!(out.contains("Sentiment prediction score: 0.900000\n"));
        assert!(out.contains("-> Sentiment positivo\n"));
        assert!(out.contains("Errore o EOF"));
        assert!(!led.is_on());
        assert!(!pin.is_set_high());
    }

    #[test]
    fn led_lights_only_around_the_model_call() {
        let pin = SimPin::new();
        let console = ScriptedConsole::new(&["adoro"]);
        let model = FnPredictor::new(|_: &[f32], _: &[u32]| {
            assert!(pin.is_set_high());
            0.5
        });
        let mut repl = Repl::new(
            console,
            model,
            ManualClock::new(),
            StatusLed::active_high(&pin),
        );

        assert!(!pin.is_set_high());
        assert!(matches!(repl.step(), Step::Classified(_)));
        assert!(!pin.is_set_high());
    }

    #[test]
    fn low_score_reports_negativo() {
        let console = ScriptedConsole::new(&["il film era noioso"]);
        let model = FnPredictor::new(|_: &[f32], _: &[u32]| 0.25);
        let pin = SimPin::new();
        let mut repl = Repl::new(
            console,
            model,
            ManualClock::new(),
            StatusLed::active_high(&pin),
        );
        repl.run();

        let (console, ..) = repl.free();
        let out = console.output();
        assert!(out.contains("Sentiment prediction score: 0.250000\n"));
        assert!(out.contains("-> Sentiment negativo\n"));
    }

    #[test]
    fn empty_line_still_runs_the_model() {
        let calls = Cell::new(0u32);
        let console = ScriptedConsole::new(&[""]);
        let model = FnPredictor::new(|_: &[f32], _: &[u32]| {
            calls.set(calls.get() + 1);
            0.7
        });
        let pin = SimPin::new();
        let mut repl = Repl::new(
            console,
            model,
            ManualClock::new(),
            StatusLed::active_high(&pin),
        );
        repl.run();

        assert_eq!(calls.get(), 1);
        let (console, ..) = repl.free();
        let out = console.output();
        assert!(out
            .contains("\nTokenized input (indices): 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 \n"));
        assert!(out.contains("-> Sentiment positivo\n"));
    }

    #[test]
    fn stops_without_input() {
        let calls = Cell::new(0u32);
        let console = ScriptedConsole::new(&[]);
        let model = FnPredictor::new(|_: &[f32], _: &[u32]| {
            calls.set(calls.get() + 1);
            0.5
        });
        let pin = SimPin::new();
        let mut repl = Repl::new(
            console,
            model,
            ManualClock::new(),
            StatusLed::active_high(&pin),
        );
        repl.run();

        assert_eq!(calls.get(), 0);
        let (console, ..) = repl.free();
        let out = console.output();
        assert!(out.contains("Sentiment Analysis Demo\n"));
        assert!(out.contains("Errore o EOF"));
    }
}
