// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Monotonic microsecond clock seam.
//!
//! Used to bracket the inference call when measuring latency. Backed by a
//! free-running hardware timer on the board; hosted builds use the OS clock.

/// Monotonic time source with microsecond resolution.
pub trait Clock {
    /// Microseconds elapsed since some fixed, arbitrary epoch.
    ///
    /// Successive reads never decrease.
    fn now_us(&mut self) -> u64;
}

impl<T: Clock + ?Sized> Clock for &mut T {
    #[inline]
    fn now_us(&mut self) -> u64 {
        (**self).now_us()
    }
}
