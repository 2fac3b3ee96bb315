//! Append-only row log (`spec.md` §4.D/§4.E): the live path's durable record
//! of every emitted [`Sample`](crate::protocol::sample::Sample), and the
//! offline path's way of reading it back.

pub mod sink;
pub mod source;

use crate::error::RowError;
use crate::protocol::sample::Sample;

/// Anything that can durably accept a row. Abstracted so the aggregator
/// (§4.C) does not need to know whether it is writing to a file, a socket, or
/// an in-memory buffer (as the tests do).
pub trait RowSink {
    fn append(&mut self, sample: &Sample) -> Result<(), RowError>;
}

pub use sink::CsvRowSink;
pub use source::CsvRowSource;
