// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Host-side implementations of the board seams.
//!
//! Only built with the `std` feature. The demo binaries run the exact same
//! pipelines as a board build would, over stdin/stdout, `Instant`, and an
//! in-process byte channel standing in for the SPI receive FIFO.

use core::convert::Infallible;
use core::fmt;
use std::io::{self, BufRead, Write as _};
use std::sync::mpsc::{Receiver, TryRecvError};
use std::time::Instant;

use embedded_hal::delay::DelayNs;

use crate::hw::clock::Clock;
use crate::hw::console::{Console, LineBuf};
use crate::hw::spi::SlaveRx;

/// Console over the process's stdin and stdout.
pub struct StdConsole {
    stdin: io::Stdin,
    stdout: io::Stdout,
}

impl StdConsole {
    pub fn new() -> Self {
        Self {
            stdin: io::stdin(),
            stdout: io::stdout(),
        }
    }
}

impl Default for StdConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Write for StdConsole {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.stdout.write_all(s.as_bytes()).map_err(|_| fmt::Error)
    }
}

impl Console for StdConsole {
    fn read_line(&mut self, line: &mut LineBuf) -> Option<usize> {
        let mut raw = String::new();
        match self.stdin.lock().read_line(&mut raw) {
            Ok(0) | Err(_) => None,
            Ok(_) => {
                let text = raw.trim_end_matches(['\r', '\n']);
                line.clear();
                for c in text.chars() {
                    if line.push(c).is_err() {
                        break;
                    }
                }
                Some(line.len())
            }
        }
    }

    fn flush(&mut self) {
        let _ = self.stdout.flush();
    }
}

/// Microsecond clock counting from construction.
pub struct StdClock {
    epoch: Instant,
}

impl StdClock {
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }
}

impl Clock for StdClock {
    fn now_us(&mut self) -> u64 {
        self.epoch.elapsed().as_micros() as u64
    }
}

/// Delay provider backed by `thread::sleep`.
#[derive(Debug, Default)]
pub struct StdDelay;

impl DelayNs for StdDelay {
    fn delay_ns(&mut self, ns: u32) {
        std::thread::sleep(std::time::Duration::from_nanos(u64::from(ns)));
    }
}

/// SPI receive FIFO fed by another thread through an `mpsc` channel.
pub struct ChannelRx {
    rx: Receiver<u8>,
}

impl ChannelRx {
    pub fn new(rx: Receiver<u8>) -> Self {
        Self { rx }
    }
}

impl SlaveRx for ChannelRx {
    fn try_read(&mut self) -> nb::Result<u8, Infallible> {
        match self.rx.try_recv() {
            Ok(byte) => Ok(byte),
            // A hung-up peer looks the same as a quiet one: no byte yet.
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => {
                Err(nb::Error::WouldBlock)
            }
        }
    }
}
