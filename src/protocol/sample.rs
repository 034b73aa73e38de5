// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Reassembly of the SPI byte stream into signed 16-bit samples.
//!
//! The peer clocks each sample out as two bytes, most significant first.
//! [`SamplePairer`] is the bare pairing state machine; [`SampleStream`]
//! drives it against a receive register with the poll-or-sleep discipline.

use core::hint;

use embedded_hal::delay::DelayNs;

use crate::hw::spi::SlaveRx;

enum State {
    WaitHigh,
    WaitLow { high: u8 },
}

/// Pairs consecutive received bytes into big-endian signed samples.
///
/// There is no resynchronization: if the peer and this reader ever disagree
/// on pair boundaries, every later sample is silently misaligned until the
/// stream restarts.
pub struct SamplePairer {
    state: State,
}

impl SamplePairer {
    pub fn new() -> Self {
        Self {
            state: State::WaitHigh,
        }
    }

    /// Process a single received byte. Returns `Some(sample)` when the byte
    /// completes a pair.
    pub fn push(&mut self, byte: u8) -> Option<i16> {
        match self.state {
            State::WaitHigh => {
                self.state = State::WaitLow { high: byte };
                None
            }
            State::WaitLow { high } => {
                self.state = State::WaitHigh; // Reset for the next pair
                Some(i16::from_be_bytes([high, byte]))
            }
        }
    }

    /// Whether a high byte is buffered and its low byte is still outstanding.
    pub fn mid_sample(&self) -> bool {
        matches!(self.state, State::WaitLow { .. })
    }
}

impl Default for SamplePairer {
    fn default() -> Self {
        Self::new()
    }
}

/// Pause between polls while waiting for a sample to start.
pub const DEFAULT_BACKOFF_US: u32 = 100;

/// Endless sample source over a receive register.
///
/// Waiting for a sample's first byte sleeps between polls. Waiting for the
/// second byte spins without sleeping, and without a timeout: a peer that
/// stops mid-pair blocks the reader indefinitely.
pub struct SampleStream<RX, D>
where
    RX: SlaveRx,
    D: DelayNs,
{
    rx: RX,
    delay: D,
    pairer: SamplePairer,
    backoff_us: u32,
}

impl<RX, D> SampleStream<RX, D>
where
    RX: SlaveRx,
    D: DelayNs,
{
    pub fn new(rx: RX, delay: D) -> Self {
        Self {
            rx,
            delay,
            pairer: SamplePairer::new(),
            backoff_us: DEFAULT_BACKOFF_US,
        }
    }

    /// Same stream with a different idle poll pause.
    pub fn with_backoff_us(mut self, backoff_us: u32) -> Self {
        self.backoff_us = backoff_us;
        self
    }

    /// Block until the next full sample arrives.
    pub fn next_sample(&mut self) -> i16 {
        loop {
            match self.rx.try_read() {
                Ok(byte) => {
                    if let Some(sample) = self.pairer.push(byte) {
                        return sample;
                    }
                }
                Err(nb::Error::WouldBlock) => {
                    if self.pairer.mid_sample() {
                        // The peer is mid-transfer; hold the pair boundary.
                        hint::spin_loop();
                    } else {
                        self.delay.delay_us(self.backoff_us);
                    }
                }
                Err(nb::Error::Other(e)) => match e {},
            }
        }
    }

    /// Release the receive register and delay provider.
    pub fn free(self) -> (RX, D) {
        (self.rx, self.delay)
    }
}

impl<RX, D> Iterator for SampleStream<RX, D>
where
    RX: SlaveRx,
    D: DelayNs,
{
    type Item = i16;

    /// Never `None`: the stream has no end-of-data condition.
    fn next(&mut self) -> Option<i16> {
        Some(self.next_sample())
    }
}
