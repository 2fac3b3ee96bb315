//! Sample aggregator (`spec.md` §4.C): folds decoded [`DataValue`]s into the
//! single current [`Sample`], triggering a row emission on the value kinds the
//! spec designates as significant.
//!
//! The "global-looking current sample" is deliberately not exposed as public
//! mutable fields (`spec.md` §9) — `Aggregator` guards it behind a `Mutex` and
//! only ever hands out an owned snapshot, so a concurrent status reader can
//! never observe a torn update.

use std::sync::Mutex;
use std::time::SystemTime;

use chrono::{DateTime, Local};

use crate::error::RowError;
use crate::protocol::payload::{DataValue, Power};
use crate::row::RowSink;

/// Number of semicolon-delimited fields in a row, matching the header.
pub const ROW_HEADER: &str = "Timestamp;Attention;Meditation;PoorSignal;RawWave;SignalQuality;\
Delta;Theta;LowAlpha;HighAlpha;LowBeta;HighBeta;LowGamma;MidGamma";

/// The aggregator's "last observed since start" record. Every field defaults
/// to zero until its corresponding [`DataValue`] arrives at least once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub timestamp: DateTime<Local>,
    pub attention: u8,
    pub meditation: u8,
    pub poor_signal: u8,
    pub raw_wave: i16,
    pub signal_quality: u8,
    pub delta: u32,
    pub theta: u32,
    pub low_alpha: u32,
    pub high_alpha: u32,
    pub low_beta: u32,
    pub high_beta: u32,
    pub low_gamma: u32,
    pub mid_gamma: u32,
}

impl Default for Sample {
    fn default() -> Self {
        Self {
            timestamp: DateTime::<Local>::from(SystemTime::UNIX_EPOCH),
            attention: 0,
            meditation: 0,
            poor_signal: 0,
            raw_wave: 0,
            signal_quality: 255,
            delta: 0,
            theta: 0,
            low_alpha: 0,
            high_alpha: 0,
            low_beta: 0,
            high_beta: 0,
            low_gamma: 0,
            mid_gamma: 0,
        }
    }
}

impl Sample {
    pub fn format_row(&self) -> String {
        format!(
            "{};{};{};{};{};{};{};{};{};{};{};{};{};{}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S%.3f"),
            self.attention,
            self.meditation,
            self.poor_signal,
            self.raw_wave,
            self.signal_quality,
            self.delta,
            self.theta,
            self.low_alpha,
            self.high_alpha,
            self.low_beta,
            self.high_beta,
            self.low_gamma,
            self.mid_gamma,
        )
    }

    /// Strict parser: any field failing to parse yields `None`. Callers
    /// (§4.E) skip the offending row rather than abort the whole read.
    pub fn parse_row(line: &str) -> Option<Sample> {
        let fields: Vec<&str> = split_row(line);
        if fields.len() != 14 {
            return None;
        }

        let timestamp =
            chrono::NaiveDateTime::parse_from_str(fields[0], "%Y-%m-%d %H:%M:%S%.3f").ok()?;
        let timestamp = timestamp.and_local_timezone(Local).single()?;

        Some(Sample {
            timestamp,
            attention: fields[1].parse().ok()?,
            meditation: fields[2].parse().ok()?,
            poor_signal: fields[3].parse().ok()?,
            raw_wave: fields[4].parse().ok()?,
            signal_quality: fields[5].parse().ok()?,
            delta: fields[6].parse().ok()?,
            theta: fields[7].parse().ok()?,
            low_alpha: fields[8].parse().ok()?,
            high_alpha: fields[9].parse().ok()?,
            low_beta: fields[10].parse().ok()?,
            high_beta: fields[11].parse().ok()?,
            low_gamma: fields[12].parse().ok()?,
            mid_gamma: fields[13].parse().ok()?,
        })
    }
}

/// Splits a row on `;`, unwrapping a single pair of surrounding double quotes
/// per field if present (CSV-standard quoting, `spec.md` §4.D).
fn split_row(line: &str) -> Vec<&str> {
    line.trim_end_matches(['\r', '\n'])
        .split(';')
        .map(|field| field.strip_prefix('"').and_then(|f| f.strip_suffix('"')).unwrap_or(field))
        .collect()
}

struct State {
    sample: Sample,
}

/// Owns the single current [`Sample`] for the lifetime of a byte stream and
/// appends a row to the sink whenever a trigger value arrives.
pub struct Aggregator {
    state: Mutex<State>,
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl Aggregator {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(State {
                sample: Sample::default(),
            }),
        }
    }

    /// Returns a consistent, owned copy of the current sample. Safe to call
    /// concurrently with [`Aggregator::handle`] from another context.
    pub fn snapshot(&self) -> Sample {
        self.state.lock().unwrap().sample
    }

    /// Folds one decoded value into the current sample, appending a row to
    /// `sink` and flushing it when the value is one of the trigger kinds.
    /// Only extended-code level 0 has defined behaviour; any other level is
    /// ignored with no side effect (`spec.md` §4.C).
    pub fn handle<S: RowSink>(&self, value: DataValue, sink: &mut S) -> Result<(), RowError> {
        let mut trigger = false;
        {
            let mut state = self.state.lock().unwrap();
            match value {
                DataValue::PoorSignal { level: 0, value } => {
                    state.sample.poor_signal = value;
                    state.sample.signal_quality = 255 - value;
                    trigger = true;
                }
                DataValue::Attention { level: 0, value } => {
                    state.sample.attention = value;
                    trigger = true;
                }
                DataValue::Meditation { level: 0, value } => {
                    state.sample.meditation = value;
                    trigger = true;
                }
                DataValue::RawWave { level: 0, value } => {
                    state.sample.raw_wave = value;
                }
                DataValue::AsicEegPower { level: 0, value } => {
                    apply_power(&mut state.sample, value);
                    trigger = true;
                }
                _ => {}
            }

            if trigger {
                state.sample.timestamp = Local::now();
            }
        }

        if trigger {
            let snapshot = self.snapshot();
            sink.append(&snapshot)?;
        }

        Ok(())
    }
}

fn apply_power(sample: &mut Sample, power: Power) {
    sample.delta = power.delta;
    sample.theta = power.theta;
    sample.low_alpha = power.low_alpha;
    sample.high_alpha = power.high_alpha;
    sample.low_beta = power.low_beta;
    sample.high_beta = power.high_beta;
    sample.low_gamma = power.low_gamma;
    sample.mid_gamma = power.mid_gamma;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::row::sink::CsvRowSink;

    #[test]
    fn poor_signal_emits_and_computes_quality() {
        let aggregator = Aggregator::new();
        let mut sink = CsvRowSink::new(Vec::new());
        aggregator
            .handle(DataValue::PoorSignal { level: 0, value: 0 }, &mut sink)
            .unwrap();
        let snapshot = aggregator.snapshot();
        assert_eq!(snapshot.poor_signal, 0);
        assert_eq!(snapshot.signal_quality, 255);
        let written = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(written.lines().count(), 2); // header + 1 row
    }

    #[test]
    fn raw_wave_updates_silently() {
        let aggregator = Aggregator::new();
        let mut sink = CsvRowSink::new(Vec::new());
        aggregator
            .handle(
                DataValue::RawWave {
                    level: 0,
                    value: 4660,
                },
                &mut sink,
            )
            .unwrap();
        assert_eq!(aggregator.snapshot().raw_wave, 4660);
        let written = String::from_utf8(sink.into_inner()).unwrap();
        assert!(written.is_empty());
    }

    #[test]
    fn extended_level_values_are_ignored() {
        let aggregator = Aggregator::new();
        let mut sink = CsvRowSink::new(Vec::new());
        aggregator
            .handle(
                DataValue::Attention {
                    level: 1,
                    value: 99,
                },
                &mut sink,
            )
            .unwrap();
        assert_eq!(aggregator.snapshot().attention, 0);
        assert!(sink.into_inner().is_empty());
    }

    #[test]
    fn row_round_trips() {
        let mut sample = Sample::default();
        sample.attention = 42;
        sample.meditation = 7;
        sample.delta = 123_456;
        let line = sample.format_row();
        let parsed = Sample::parse_row(&line).unwrap();
        assert_eq!(parsed.attention, 42);
        assert_eq!(parsed.meditation, 7);
        assert_eq!(parsed.delta, 123_456);
    }

    #[test]
    fn quoted_fields_are_accepted() {
        let line = "\"2024-01-01 00:00:00.000\";1;2;3;4;5;6;7;8;9;10;11;12;13";
        assert!(Sample::parse_row(line).is_some());
    }

    #[test]
    fn malformed_row_is_rejected() {
        assert!(Sample::parse_row("not;enough;fields").is_none());
    }
}
