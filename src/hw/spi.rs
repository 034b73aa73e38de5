// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Serial Peripheral Interface (SPI) slave receive seam.
//!
//! The board is wired as an SPI slave (mode 0, MSB first, peer-clocked) and
//! only ever drains the receive FIFO. The peripheral sits behind [`SlaveRx`]
//! so the sample-reassembly protocol can run unchanged against real hardware
//! or a simulated byte source.

use core::convert::Infallible;

/// Byte-oriented receive side of an SPI slave peripheral.
///
/// A read drains one byte from the hardware FIFO; the FIFO is the only
/// buffer, so every byte is observed exactly once. Peripheral faults are not
/// modeled: the error slot is [`Infallible`], and `WouldBlock` is the normal
/// "no byte has arrived yet" poll outcome.
pub trait SlaveRx {
    /// Destructively read the next received byte, if one is available.
    fn try_read(&mut self) -> nb::Result<u8, Infallible>;
}

impl<T: SlaveRx + ?Sized> SlaveRx for &mut T {
    #[inline]
    fn try_read(&mut self) -> nb::Result<u8, Infallible> {
        (**self).try_read()
    }
}
