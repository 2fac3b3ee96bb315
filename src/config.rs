//! Enumerated configuration options (`spec.md` §6).
//!
//! `output_path` only carries a caller-chosen value through — this crate never
//! picks a path or creates a directory itself.

use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub baud_rate: u32,
    pub data_record_duration: f64,
    pub raw_rate: u32,
    pub output_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            baud_rate: 57_600,
            data_record_duration: 1.0,
            raw_rate: 512,
            output_path: None,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_baud_rate(mut self, baud_rate: u32) -> Self {
        self.baud_rate = baud_rate;
        self
    }

    pub fn with_data_record_duration(mut self, seconds: f64) -> Self {
        self.data_record_duration = seconds;
        self
    }

    pub fn with_raw_rate(mut self, hz: u32) -> Self {
        self.raw_rate = hz;
        self
    }

    pub fn with_output_path(mut self, path: PathBuf) -> Self {
        self.output_path = Some(path);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_spec() {
        let config = Config::default();
        assert_eq!(config.baud_rate, 57_600);
        assert_eq!(config.data_record_duration, 1.0);
        assert_eq!(config.raw_rate, 512);
        assert_eq!(config.output_path, None);
    }

    #[test]
    fn builders_chain() {
        let config = Config::new()
            .with_baud_rate(115_200)
            .with_data_record_duration(0.5)
            .with_raw_rate(256)
            .with_output_path(PathBuf::from("out.csv"));
        assert_eq!(config.baud_rate, 115_200);
        assert_eq!(config.data_record_duration, 0.5);
        assert_eq!(config.raw_rate, 256);
        assert_eq!(config.output_path, Some(PathBuf::from("out.csv")));
    }
}
