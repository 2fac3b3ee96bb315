//! EDF emitter (`spec.md` §4.J): ties range analysis, signal building,
//! resampling, and scaling into the single "construct, populate, emit,
//! close" conversion `spec.md` §5 describes for the offline path.
//!
//! Grounded on the teacher's `EDFHeader::serialize` (field widths) and
//! `EDFFile::save` (header-then-records write-out), but write-once and
//! transactional instead of diff-based — none of the teacher's random-access
//! re-save or EDF+ annotation machinery has a counterpart here.

use std::io::Write;

use crate::config::Config;
use crate::edf::{header, range, resample, scale};
use crate::error::ConvertError;
use crate::protocol::sample::Sample;

/// Converts a loaded row log into a complete EDF file written to `out`.
/// Transactional at the whole-call grain: on failure nothing useful has been
/// written and the caller should discard `out`'s contents.
pub fn convert<W: Write>(rows: &[Sample], config: &Config, out: &mut W) -> Result<(), ConvertError> {
    if rows.is_empty() {
        return Err(ConvertError::NoRows);
    }

    let duration = (rows[rows.len() - 1].timestamp - rows[0].timestamp).as_seconds_f64();
    if duration <= 0.0 {
        return Err(ConvertError::ZeroDuration);
    }

    let ranges = range::analyse(rows);
    let mut signals = crate::edf::signal::build(&ranges, config.raw_rate, config.data_record_duration);
    let physical_series = resample::resample(rows, config.raw_rate);

    for (signal, physical) in signals.iter_mut().zip(physical_series.iter()) {
        signal.data = physical
            .iter()
            .map(|&v| scale::to_digital(v, signal.phys_min, signal.phys_max, signal.dig_min, signal.dig_max))
            .collect();
    }

    let n_records = if signals[0].samples_per_record == 0 {
        0
    } else {
        signals[0].data.len().div_ceil(signals[0].samples_per_record)
    };

    for signal in &mut signals {
        signal
            .data
            .resize(n_records * signal.samples_per_record, 0);
    }

    let main_header = header::serialize_main_header(
        rows[0].timestamp,
        n_records,
        config.data_record_duration,
        signals.len(),
    )?;
    let signal_headers = header::serialize_signal_headers(&signals)?;

    out.write_all(main_header.as_bytes()).map_err(ConvertError::Write)?;
    out.write_all(signal_headers.as_bytes()).map_err(ConvertError::Write)?;

    for r in 0..n_records {
        for signal in &signals {
            let start = r * signal.samples_per_record;
            let end = start + signal.samples_per_record;
            for sample in &signal.data[start..end] {
                out.write_all(&sample.to_le_bytes()).map_err(ConvertError::Write)?;
            }
        }
    }

    Ok(())
}
