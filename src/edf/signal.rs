//! Signal builder (`spec.md` §4.G): produces the fixed 12-channel EdfSignal
//! list, grounded on the teacher's `SignalHeader` builder
//! (`with_label`/`with_physical_range`/`with_digital_range`/`with_prefilter`/
//! `with_samples_count`).

use crate::edf::range::ChannelRanges;

#[derive(Debug, Default, Clone, PartialEq)]
pub struct EdfSignal {
    pub label: String,
    pub transducer: String,
    pub physical_unit: String,
    pub phys_min: f64,
    pub phys_max: f64,
    pub dig_min: i32,
    pub dig_max: i32,
    pub prefilter: String,
    pub samples_per_record: usize,
    pub data: Vec<i16>,
}

impl EdfSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_label(&mut self, label: impl Into<String>) -> &mut Self {
        self.label = label.into();
        self
    }

    pub fn with_physical_unit(&mut self, unit: impl Into<String>) -> &mut Self {
        self.physical_unit = unit.into();
        self
    }

    pub fn with_physical_range(&mut self, min: f64, max: f64) -> &mut Self {
        self.phys_min = min;
        self.phys_max = max;
        self
    }

    pub fn with_digital_range(&mut self, min: i32, max: i32) -> &mut Self {
        self.dig_min = min;
        self.dig_max = max;
        self
    }

    pub fn with_prefilter(&mut self, prefilter: impl Into<String>) -> &mut Self {
        self.prefilter = prefilter.into();
        self
    }

    pub fn with_samples_per_record(&mut self, samples_per_record: usize) -> &mut Self {
        self.samples_per_record = samples_per_record;
        self
    }
}

/// Spectral band metadata in on-wire order, used both to label signals and to
/// read back band powers out of a [`crate::protocol::sample::Sample`].
const BANDS: [(&str, &str); 8] = [
    ("Delta", "BP:0.5-2.75Hz"),
    ("Theta", "BP:3.5-7.75Hz"),
    ("LowAlpha", "BP:7.5-9.25Hz"),
    ("HighAlpha", "BP:9.5-11.75Hz"),
    ("LowBeta", "BP:12-14.75Hz"),
    ("HighBeta", "BP:15-21.75Hz"),
    ("LowGamma", "BP:22-30.75Hz"),
    ("MidGamma", "BP:31-100Hz"),
];

/// Builds the fixed, ordered list of twelve signals per `spec.md` §4.G.
/// `raw_rate` and `duration` come from [`crate::config::Config`].
pub fn build(ranges: &ChannelRanges, raw_rate: u32, duration: f64) -> Vec<EdfSignal> {
    let mut signals = Vec::with_capacity(12);

    let (raw_min, raw_max) = ranges.raw;
    signals.push({
        let mut s = EdfSignal::new();
        s.with_label("EEG Fpz")
            .with_physical_unit("uV")
            .with_physical_range((raw_min * 1.1).floor(), (raw_max * 1.1).ceil())
            .with_digital_range(-32768, 32767)
            .with_prefilter("HP:0.5Hz LP:60Hz Notch:50Hz")
            .with_samples_per_record((raw_rate as f64 * duration) as usize);
        s
    });

    signals.push({
        let mut s = EdfSignal::new();
        s.with_label("Attention")
            .with_physical_unit("%")
            .with_physical_range(0.0, 100.0)
            .with_digital_range(0, 100)
            .with_prefilter("None")
            .with_samples_per_record(duration as usize);
        s
    });

    signals.push({
        let mut s = EdfSignal::new();
        s.with_label("Meditation")
            .with_physical_unit("%")
            .with_physical_range(0.0, 100.0)
            .with_digital_range(0, 100)
            .with_prefilter("None")
            .with_samples_per_record(duration as usize);
        s
    });

    signals.push({
        let mut s = EdfSignal::new();
        s.with_label("Signal Quality")
            .with_physical_unit("level")
            .with_physical_range(0.0, 255.0)
            .with_digital_range(0, 255)
            .with_prefilter("None")
            .with_samples_per_record(duration as usize);
        s
    });

    for (i, (name, prefilter)) in BANDS.iter().enumerate() {
        let (b_min, b_max) = ranges.bands[i];
        let mut s = EdfSignal::new();
        s.with_label(format!("EEG {name}"))
            .with_physical_unit("uV^2/Hz")
            .with_physical_range((b_min * 0.9).floor(), (b_max * 1.1).ceil())
            .with_digital_range(0, 32767)
            .with_prefilter(*prefilter)
            .with_samples_per_record(duration as usize);
        signals.push(s);
    }

    signals
}
