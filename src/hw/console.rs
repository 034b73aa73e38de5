// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Console abstraction layer.
//!
//! One line of text in, report text out. The demo talks to whatever carries
//! the USB-serial console on the real board; hosted builds talk to
//! stdin/stdout. Output goes through `core::fmt::Write` so `write!` /
//! `writeln!` work on any console.

use core::fmt;

/// Capacity of the console line buffer, in bytes.
///
/// Input beyond this is truncated, matching the fixed receive buffer of the
/// board firmware.
pub const MAX_INPUT_LENGTH: usize = 256;

/// Fixed-capacity buffer holding one line of console input.
pub type LineBuf = heapless::String<MAX_INPUT_LENGTH>;

/// Blocking line-oriented console.
pub trait Console: fmt::Write {
    /// Read one line into `line`, blocking until a full line arrives.
    ///
    /// The trailing newline is stripped and `line` is cleared first. Input
    /// past [`MAX_INPUT_LENGTH`] bytes is silently truncated. Returns the
    /// number of bytes kept, or `None` once the input stream has ended or
    /// become unreadable.
    fn read_line(&mut self, line: &mut LineBuf) -> Option<usize>;

    /// Write a string followed by a line terminator.
    fn println(&mut self, s: &str) {
        let _ = self.write_str(s);
        let _ = self.write_str("\n");
    }

    /// Push any buffered output to the terminal. No-op by default.
    fn flush(&mut self) {}
}
