//! Crate-wide error types.
//!
//! Frame-level corruption (bad length, bad checksum, payload truncation) is
//! deliberately *not* represented here: per the framing contract it is
//! expected noise, handled by silent resynchronisation, and never surfaces to
//! a caller. Only row I/O and EDF conversion can fail in a way a caller needs
//! to react to.

use std::io;
use thiserror::Error;

/// Failures appending to or reading back the delimited row log (§4.D/§4.E).
#[derive(Debug, Error)]
pub enum RowError {
    #[error("failed to write row: {0}")]
    Write(#[source] io::Error),

    #[error("failed to flush row sink: {0}")]
    Flush(#[source] io::Error),

    #[error("failed to read row source: {0}")]
    Read(#[source] io::Error),
}

/// Failures converting a loaded row log into an EDF file (§4.G–§4.J).
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("no rows available to convert")]
    NoRows,

    #[error("recording spans zero duration, cannot derive a sample grid")]
    ZeroDuration,

    #[error("a signal field exceeded its fixed-width header budget")]
    FieldTooLong,

    #[error("a header field contained a non-ASCII character")]
    NonAsciiField,

    #[error("failed to write EDF output: {0}")]
    Write(#[source] io::Error),
}
