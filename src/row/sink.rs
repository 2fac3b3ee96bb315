//! Row sink (`spec.md` §4.D): writes the schema header once, then one
//! semicolon-delimited row per emitted sample, flushing after every row
//! (durability over throughput, per §4.D/§5).

use std::io::Write;

use crate::error::RowError;
use crate::protocol::sample::{ROW_HEADER, Sample};
use crate::row::RowSink;

pub struct CsvRowSink<W: Write> {
    writer: W,
    header_written: bool,
}

impl<W: Write> CsvRowSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            header_written: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> RowSink for CsvRowSink<W> {
    fn append(&mut self, sample: &Sample) -> Result<(), RowError> {
        if !self.header_written {
            writeln!(self.writer, "{ROW_HEADER}").map_err(RowError::Write)?;
            self.header_written = true;
        }
        writeln!(self.writer, "{}", sample.format_row()).map_err(RowError::Write)?;
        self.writer.flush().map_err(RowError::Flush)?;
        Ok(())
    }
}
