// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Simulated board resources.
//!
//! Drop-in stand-ins for the `hw` seams, usable without any hardware: a
//! scripted console, a scripted SPI receive FIFO, a manually advanced clock,
//! a call-counting delay, and a bare output pin. Tests and the hosted demos
//! share these.

use core::cell::Cell;
use core::convert::Infallible;
use core::fmt;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, OutputPin};
use heapless::Deque;

use crate::hw::clock::Clock;
use crate::hw::console::{Console, LineBuf};
use crate::hw::spi::SlaveRx;

/// Capture buffer for everything a [`ScriptedConsole`] prints.
type OutBuf = heapless::String<4096>;

/// Console that replays a fixed script of input lines and captures output.
///
/// Each `read_line` hands out the next scripted line; once the script is
/// exhausted the console reports end of stream, like a detached terminal.
pub struct ScriptedConsole<'a> {
    lines: &'a [&'a str],
    next: usize,
    out: OutBuf,
}

impl<'a> ScriptedConsole<'a> {
    pub fn new(lines: &'a [&'a str]) -> Self {
        Self {
            lines,
            next: 0,
            out: OutBuf::new(),
        }
    }

    /// Everything printed so far.
    pub fn output(&self) -> &str {
        &self.out
    }
}

impl fmt::Write for ScriptedConsole<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        // Silently stop capturing if the buffer fills up.
        let _ = self.out.push_str(s);
        Ok(())
    }
}

impl Console for ScriptedConsole<'_> {
    fn read_line(&mut self, line: &mut LineBuf) -> Option<usize> {
        let text = self.lines.get(self.next)?;
        self.next += 1;

        line.clear();
        for c in text.chars() {
            if line.push(c).is_err() {
                break;
            }
        }
        Some(line.len())
    }
}

/// Scripted SPI receive FIFO.
///
/// Events are replayed in order: a byte is handed out as a successful read,
/// a gap forces one `WouldBlock` poll first. An exhausted script blocks
/// forever, like a peer that stopped transmitting.
pub struct ScriptedRx<const N: usize = 64> {
    events: Deque<Option<u8>, N>,
}

impl<const N: usize> ScriptedRx<N> {
    pub fn new() -> Self {
        Self {
            events: Deque::new(),
        }
    }

    /// Queue one received byte. Dropped if the script is full.
    pub fn push_byte(&mut self, byte: u8) {
        let _ = self.events.push_back(Some(byte));
    }

    /// Queue one empty poll before the next byte.
    pub fn push_gap(&mut self) {
        let _ = self.events.push_back(None);
    }

    /// Queue a whole sample as its two wire bytes, MSB first.
    pub fn push_sample(&mut self, sample: i16) {
        let [high, low] = sample.to_be_bytes();
        self.push_byte(high);
        self.push_byte(low);
    }
}

impl<const N: usize> Default for ScriptedRx<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> SlaveRx for ScriptedRx<N> {
    fn try_read(&mut self) -> nb::Result<u8, Infallible> {
        match self.events.pop_front() {
            Some(Some(byte)) => Ok(byte),
            _ => Err(nb::Error::WouldBlock),
        }
    }
}

/// Clock that only moves when told to.
///
/// Interior mutability lets a predictor double advance time while the
/// invoker holds the clock, so latency bracketing is observable in tests.
pub struct ManualClock {
    us: Cell<u64>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self { us: Cell::new(0) }
    }

    pub fn advance_us(&self, us: u64) {
        self.us.set(self.us.get() + us);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now_us(&mut self) -> u64 {
        self.us.get()
    }
}

impl Clock for &ManualClock {
    fn now_us(&mut self) -> u64 {
        self.us.get()
    }
}

/// Delay provider that records how often it was asked to yield.
#[derive(Debug, Default)]
pub struct CountingDelay {
    pub calls: u32,
    pub total_ns: u64,
}

impl DelayNs for CountingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.calls += 1;
        self.total_ns += u64::from(ns);
    }
}

/// Output pin backed by a cell.
///
/// Like [`ManualClock`], it is usable through a shared reference
/// (`OutputPin` is implemented for `&SimPin`), so a test can hand the pin
/// to an LED and still watch its level from outside.
#[derive(Debug, Default)]
pub struct SimPin {
    high: Cell<bool>,
}

impl SimPin {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_set_high(&self) -> bool {
        self.high.get()
    }
}

impl ErrorType for SimPin {
    type Error = Infallible;
}

impl OutputPin for SimPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.high.set(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.high.set(true);
        Ok(())
    }
}

// `ErrorType for &SimPin` comes from embedded-hal's blanket impl.
impl OutputPin for &SimPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.high.set(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.high.set(true);
        Ok(())
    }
}
