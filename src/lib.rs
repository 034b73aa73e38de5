// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # SentiBoard Firmware
//!
//! This crate contains the demo firmware for the SentiBoard sentiment-analysis
//! board, written in Rust with a `no_std`-capable core.
//!
//! Two independent pipelines live here: an interactive console that encodes
//! Italian phrases and runs them through a sentiment model, and an SPI slave
//! reader that reassembles the incoming byte stream into signed 16-bit
//! samples.
//!
//! ## Crate Structure
//!
//! | Module | Purpose |
//! | ------ | -------- |
//! | [`hw`] | Board-level seams: console, clock, status LED, SPI receive |
//! | [`sentiment`] | Vocabulary, encoding, model invocation, and the prompt loop |
//! | [`protocol`] | SPI byte-pair reassembly into signed 16-bit samples |
//!
//! ## Getting Started
//!
//! Build docs:
//!
//! ```bash
//! cargo doc --no-deps --open
//! ```
//!
//! Run the hosted demos:
//!
//! ```bash
//! cargo run --bin sentiboard
//! cargo run --bin sample-dump
//! ```
//!
//! ## License
//!
//! Licensed under the **MIT License**.
//! See the `LICENSE` file in the repository root for full terms.
//!
//! © 2025–2026 Christopher Liu

#![cfg_attr(not(feature = "std"), no_std)]

pub mod hw;
pub mod protocol;
pub mod sentiment;

#[cfg(feature = "std")]
pub mod host;
