/*!
Decodes a NeuroSky ThinkGear (TGAM1) serial telemetry stream, logs the decoded
samples as a delimited text row log, and converts that row log into a
standards-compliant European Data Format (EDF) biosignal file.

The crate is split along its two data-flow halves:

- **Live path** (raw bytes → [`protocol::frame`] → [`protocol::payload`] →
  [`protocol::sample`] → [`row::RowSink`]): a byte-at-a-time, allocation-free,
  self-resynchronising frame decoder feeding a payload parser and a
  snapshot-safe sample aggregator. See [`protocol::run_stream`] for the
  driving loop.
- **Offline path** ([`row::RowSource`] → [`edf::range`] → [`edf::signal`] →
  [`edf::resample`] → [`edf::scale`] → [`edf::writer`]): reads a previously
  logged row file back, computes per-channel ranges, builds the fixed EDF
  signal list, resamples the asynchronous rows onto the EDF data-record grid,
  scales to digital samples, and emits a byte-exact EDF file. See
  [`edf::convert`].

Serial port handling, console/TUI interaction, and file-path selection are
deliberately left to the caller — this crate only consumes an opened byte
source and produces/consumes opened row sinks and sources.

# Examples

```no_run
use std::fs::File;
use std::io::BufReader;

use thinkgear_edf::config::Config;
use thinkgear_edf::row::CsvRowSource;

pub fn main() -> Result<(), Box<dyn std::error::Error>> {
    let reader = BufReader::new(File::open("eeg_data.csv")?);
    let rows = CsvRowSource::new(reader).read_all()?;

    let config = Config::default();
    let mut out = File::create("recording.edf")?;
    thinkgear_edf::edf::convert(&rows, &config, &mut out)?;

    Ok(())
}
```
*/

pub mod config;
pub mod edf;
pub mod error;
pub mod protocol;
pub mod row;
pub mod utils;
