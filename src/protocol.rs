//! The live ingestion path: raw bytes → [`frame::FrameDecoder`] →
//! [`payload::parse`] → [`sample::Aggregator`] → row sink (`spec.md` §2, §5).

pub mod frame;
pub mod payload;
pub mod sample;

use std::io::Read;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::row::RowSink;
use frame::FrameDecoder;
use sample::Aggregator;

/// Drives bytes from `reader` through the decoder, parser, and aggregator
/// until `reader` is exhausted or `shutdown` is observed set.
///
/// This is the byte-producer context of `spec.md` §5: the only suspension
/// points are the read from `reader` and the row-sink flush inside
/// [`Aggregator::handle`]. On shutdown the in-flight frame is finished before
/// returning; no draining of further pending bytes is attempted.
///
/// Per `spec.md` §7, "nothing in the live path is fatal except byte-source
/// termination" — a sink write failure is logged and the offending row is
/// dropped, but ingestion continues.
pub fn run_stream<R: Read, S: RowSink>(
    mut reader: R,
    aggregator: &Aggregator,
    sink: &mut S,
    shutdown: &AtomicBool,
) {
    let mut decoder = FrameDecoder::new();
    let mut byte = [0u8; 1];

    while !shutdown.load(Ordering::Relaxed) {
        let read = match reader.read(&mut byte) {
            Ok(0) => break,
            Ok(_) => 1,
            Err(err) => {
                log::warn!("thinkgear: transport read failed: {err}");
                continue;
            }
        };
        if read == 0 {
            continue;
        }

        if let Some(payload) = decoder.push_byte(byte[0]) {
            for value in payload::parse(payload) {
                if let Err(err) = aggregator.handle(value, sink) {
                    log::warn!("thinkgear: dropping row, sink failed: {err}");
                }
            }
        }
    }
}
