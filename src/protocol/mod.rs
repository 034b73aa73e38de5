// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

pub mod sample;

pub use sample::{SamplePairer, SampleStream};
