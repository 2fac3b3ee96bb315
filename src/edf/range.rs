//! Range analyser (`spec.md` §4.F): pure min/max aggregation over loaded rows,
//! with the spec's fixed defaults for channels with no data.

use crate::protocol::sample::Sample;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelRanges {
    pub raw: (f64, f64),
    pub attention: (f64, f64),
    pub meditation: (f64, f64),
    /// Delta, Theta, LowAlpha, HighAlpha, LowBeta, HighBeta, LowGamma, MidGamma.
    pub bands: [(f64, f64); 8],
}

const RAW_DEFAULT: (f64, f64) = (-500.0, 500.0);
const ESENSE_DEFAULT: (f64, f64) = (0.0, 100.0);
const BAND_DEFAULT: (f64, f64) = (0.0, 1000.0);

pub fn analyse(rows: &[Sample]) -> ChannelRanges {
    if rows.is_empty() {
        return ChannelRanges {
            raw: RAW_DEFAULT,
            attention: ESENSE_DEFAULT,
            meditation: ESENSE_DEFAULT,
            bands: [BAND_DEFAULT; 8],
        };
    }

    ChannelRanges {
        raw: min_max(rows.iter().map(|r| r.raw_wave as f64), RAW_DEFAULT),
        attention: min_max(rows.iter().map(|r| r.attention as f64), ESENSE_DEFAULT),
        meditation: min_max(rows.iter().map(|r| r.meditation as f64), ESENSE_DEFAULT),
        bands: [
            min_max(rows.iter().map(|r| r.delta as f64), BAND_DEFAULT),
            min_max(rows.iter().map(|r| r.theta as f64), BAND_DEFAULT),
            min_max(rows.iter().map(|r| r.low_alpha as f64), BAND_DEFAULT),
            min_max(rows.iter().map(|r| r.high_alpha as f64), BAND_DEFAULT),
            min_max(rows.iter().map(|r| r.low_beta as f64), BAND_DEFAULT),
            min_max(rows.iter().map(|r| r.high_beta as f64), BAND_DEFAULT),
            min_max(rows.iter().map(|r| r.low_gamma as f64), BAND_DEFAULT),
            min_max(rows.iter().map(|r| r.mid_gamma as f64), BAND_DEFAULT),
        ],
    }
}

fn min_max(values: impl Iterator<Item = f64>, default: (f64, f64)) -> (f64, f64) {
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), v| {
        (min.min(v), max.max(v))
    });
    if min.is_finite() && max.is_finite() {
        (min, max)
    } else {
        default
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_rows_use_defaults() {
        let ranges = analyse(&[]);
        assert_eq!(ranges.raw, RAW_DEFAULT);
        assert_eq!(ranges.attention, ESENSE_DEFAULT);
        assert_eq!(ranges.bands[0], BAND_DEFAULT);
    }

    #[test]
    fn computes_min_max_across_rows() {
        let mut a = Sample::default();
        a.raw_wave = -10;
        a.attention = 20;
        a.delta = 5;
        let mut b = Sample::default();
        b.raw_wave = 30;
        b.attention = 80;
        b.delta = 15;
        let ranges = analyse(&[a, b]);
        assert_eq!(ranges.raw, (-10.0, 30.0));
        assert_eq!(ranges.attention, (20.0, 80.0));
        assert_eq!(ranges.bands[0], (5.0, 15.0));
    }
}
