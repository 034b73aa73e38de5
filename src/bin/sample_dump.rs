// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Hosted SPI sample stream demo.
//!
//! A peer thread plays the SPI master, clocking out a short burst of signed
//! 16-bit samples one byte at a time; the stream on this side pairs the
//! bytes back together and prints each sample.

use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use sentiboard::host::{ChannelRx, StdDelay};
use sentiboard::protocol::SampleStream;

const BURST: [i16; 8] = [258, -1, 0, 1000, -1000, i16::MIN, i16::MAX, 42];

fn main() {
    env_logger::init();

    let (tx, rx) = mpsc::channel();

    // Peer side: one byte per transfer, most significant first, pausing
    // between samples so the reader actually polls.
    let peer = thread::spawn(move || {
        for sample in BURST {
            for byte in sample.to_be_bytes() {
                if tx.send(byte).is_err() {
                    return;
                }
            }
            thread::sleep(Duration::from_millis(2));
        }
    });

    let stream = SampleStream::new(ChannelRx::new(rx), StdDelay);
    for sample in stream.take(BURST.len()) {
        println!("sample: {sample}");
    }

    let _ = peer.join();
}
