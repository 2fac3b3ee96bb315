//! Resampler (`spec.md` §4.H): maps the asynchronous row timeline onto the
//! fixed-rate EDF grid. Produces physical-domain sample series; scaling to
//! digital happens afterwards in [`crate::edf::scale`].
//!
//! New to this crate; grounded in structure (not formula) on the teacher's
//! `EDFHeader::get_signal_sample_frequency` per-signal sample-count
//! bookkeeping.

use chrono::{DateTime, Local, TimeDelta};

use crate::protocol::sample::Sample;

const WINDOW_HALF_SECONDS: f64 = 0.5;

/// Returns one physical-sample series per signal, in the same order as
/// [`crate::edf::signal::build`]'s output: raw, attention, meditation,
/// signal quality, then the eight bands.
pub fn resample(rows: &[Sample], raw_rate: u32) -> Vec<Vec<f64>> {
    if rows.is_empty() {
        return vec![Vec::new(); 12];
    }

    let t0 = rows[0].timestamp;
    let t_n = rows[rows.len() - 1].timestamp;
    let duration = (t_n - t0).as_seconds_f64();

    let mut series = Vec::with_capacity(12);
    series.push(resample_raw(rows, raw_rate, duration));

    let seconds = duration.ceil().max(0.0) as i64;
    series.push(windowed_mean(rows, t0, seconds, |s| s.attention as f64));
    series.push(windowed_mean(rows, t0, seconds, |s| s.meditation as f64));
    series.push(windowed_mean(rows, t0, seconds, |s| {
        (255 - s.poor_signal as i32) as f64
    }));
    series.push(windowed_mean(rows, t0, seconds, |s| s.delta as f64));
    series.push(windowed_mean(rows, t0, seconds, |s| s.theta as f64));
    series.push(windowed_mean(rows, t0, seconds, |s| s.low_alpha as f64));
    series.push(windowed_mean(rows, t0, seconds, |s| s.high_alpha as f64));
    series.push(windowed_mean(rows, t0, seconds, |s| s.low_beta as f64));
    series.push(windowed_mean(rows, t0, seconds, |s| s.high_beta as f64));
    series.push(windowed_mean(rows, t0, seconds, |s| s.low_gamma as f64));
    series.push(windowed_mean(rows, t0, seconds, |s| s.mid_gamma as f64));

    series
}

/// Nearest-neighbour-by-index upsampling onto the declared raw rate. Not
/// time-accurate — stretches the source rows across the grid, per `spec.md`
/// §9's documented resampler-fidelity tradeoff.
fn resample_raw(rows: &[Sample], raw_rate: u32, duration: f64) -> Vec<f64> {
    let target_count = (duration * raw_rate as f64).floor() as usize;
    if target_count == 0 {
        return Vec::new();
    }

    (0..target_count)
        .map(|i| {
            let source_index =
                ((i as f64 / target_count as f64) * rows.len() as f64).floor() as usize;
            let source_index = source_index.min(rows.len() - 1);
            rows[source_index].raw_wave as f64
        })
        .collect()
}

fn windowed_mean(
    rows: &[Sample],
    t0: DateTime<Local>,
    seconds: i64,
    accessor: impl Fn(&Sample) -> f64,
) -> Vec<f64> {
    (0..seconds)
        .map(|s| {
            let target = t0 + TimeDelta::seconds(s);
            let mut sum = 0.0;
            let mut count = 0usize;
            for row in rows {
                let offset = (row.timestamp - target).as_seconds_f64().abs();
                if offset <= WINDOW_HALF_SECONDS {
                    sum += accessor(row);
                    count += 1;
                }
            }
            if count == 0 { 0.0 } else { sum / count as f64 }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn sample_at(t0: DateTime<Local>, offset_secs: i64, attention: u8) -> Sample {
        let mut s = Sample::default();
        s.timestamp = t0 + Duration::seconds(offset_secs);
        s.attention = attention;
        s
    }

    #[test]
    fn raw_channel_spans_the_declared_rate() {
        let t0 = DateTime::<Local>::from(std::time::SystemTime::UNIX_EPOCH);
        let rows: Vec<Sample> = (0..10)
            .map(|i| {
                let mut s = sample_at(t0, i, 0);
                s.raw_wave = i as i16;
                s
            })
            .collect();
        let series = resample_raw(&rows, 512, 10.0);
        assert_eq!(series.len(), 5120);
    }

    #[test]
    fn one_hz_channel_averages_within_window() {
        let t0 = DateTime::<Local>::from(std::time::SystemTime::UNIX_EPOCH);
        let rows = vec![
            sample_at(t0, 0, 10),
            sample_at(t0, 0, 20), // both within ±0.5s of second 0
            sample_at(t0, 1, 100),
        ];
        let series = windowed_mean(&rows, t0, 2, |s| s.attention as f64);
        assert_eq!(series[0], 15.0);
        assert_eq!(series[1], 100.0);
    }

    #[test]
    fn empty_window_yields_zero() {
        let t0 = DateTime::<Local>::from(std::time::SystemTime::UNIX_EPOCH);
        let rows = vec![sample_at(t0, 0, 10)];
        let series = windowed_mean(&rows, t0, 5, |s| s.attention as f64);
        assert_eq!(series[4], 0.0);
    }

    #[test]
    fn empty_rows_yield_twelve_empty_series() {
        let series = resample(&[], 512);
        assert_eq!(series.len(), 12);
        assert!(series.iter().all(Vec::is_empty));
    }
}
