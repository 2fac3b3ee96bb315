//! Row source (`spec.md` §4.E): reads the delimited row log back into typed
//! [`Sample`]s. The schema header line fails to parse as a sample and is
//! skipped by the same path as any other malformed line — no special casing
//! needed.

use std::io::BufRead;

use crate::error::RowError;
use crate::protocol::sample::Sample;

pub struct CsvRowSource<R: BufRead> {
    reader: R,
}

impl<R: BufRead> CsvRowSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Reads every remaining line, skipping any that fail to parse. Never
    /// aborts on a bad row — see `spec.md` §7.
    pub fn read_all(mut self) -> Result<Vec<Sample>, RowError> {
        let mut samples = Vec::new();
        let mut line = String::new();
        loop {
            line.clear();
            let bytes_read = self.reader.read_line(&mut line).map_err(RowError::Read)?;
            if bytes_read == 0 {
                break;
            }
            match Sample::parse_row(&line) {
                Some(sample) => samples.push(sample),
                None => log::warn!("thinkgear: skipping unparseable row: {}", line.trim_end()),
            }
        }
        Ok(samples)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn skips_header_and_malformed_rows() {
        let mut sample = Sample::default();
        sample.attention = 10;
        let csv = format!(
            "Timestamp;Attention;Meditation;PoorSignal;RawWave;SignalQuality;Delta;Theta;LowAlpha;HighAlpha;LowBeta;HighBeta;LowGamma;MidGamma\r\n{}\r\ngarbage;row\r\n",
            sample.format_row()
        );
        let source = CsvRowSource::new(Cursor::new(csv));
        let samples = source.read_all().unwrap();
        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].attention, 10);
    }

    #[test]
    fn tolerates_lf_only_line_endings() {
        let sample = Sample::default();
        let csv = format!("header\n{}\n", sample.format_row());
        let source = CsvRowSource::new(Cursor::new(csv));
        let samples = source.read_all().unwrap();
        assert_eq!(samples.len(), 1);
    }
}
