// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Hosted sentiment console demo.
//!
//! Runs the board's prompt loop over stdin/stdout, with the heuristic model
//! standing in for the trained one and a simulated pin behind the status LED.

use sentiboard::host::{StdClock, StdConsole};
use sentiboard::hw::sim::SimPin;
use sentiboard::hw::StatusLed;
use sentiboard::sentiment::{HeuristicPredictor, Repl};

fn main() {
    // Logging
    env_logger::init();

    // Board resources
    let console = StdConsole::new();
    let clock = StdClock::new();
    let led = StatusLed::active_high(SimPin::new());

    // Model
    let model = HeuristicPredictor::new();

    let mut repl = Repl::new(console, model, clock, led);
    repl.run();
}
