//! One-line verdict comparing a sample rate with the expected one

use std::fmt;

/// Sample rate read from a file, paired with the rate it was expected to have
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleRateReport {
    sample_rate: u32,
    expected_rate: u32,
}

impl SampleRateReport {
    pub fn new(sample_rate: u32, expected_rate: u32) -> Self {
        Self {
            sample_rate,
            expected_rate,
        }
    }

    /// Get the sample rate found in the file (Hz)
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Get the expected sample rate (Hz)
    pub fn expected_rate(&self) -> u32 {
        self.expected_rate
    }

    pub fn matches_expected(&self) -> bool {
        self.sample_rate == self.expected_rate
    }
}

impl fmt::Display for SampleRateReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.matches_expected() && self.expected_rate % 1000 == 0 {
            write!(f, "The sample rate is {} kHz.", self.expected_rate / 1000)
        } else {
            write!(f, "The sample rate is {} Hz.", self.sample_rate)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EXPECTED_SAMPLE_RATE;

    #[test]
    fn test_expected_rate_in_khz() {
        let report = SampleRateReport::new(16000, EXPECTED_SAMPLE_RATE);
        assert!(report.matches_expected());
        assert_eq!(report.to_string(), "The sample rate is 16 kHz.");
    }

    #[test]
    fn test_other_rates_in_hz() {
        for (rate, line) in [
            (44100, "The sample rate is 44100 Hz."),
            (8000, "The sample rate is 8000 Hz."),
            (1000000, "The sample rate is 1000000 Hz."),
            (1, "The sample rate is 1 Hz."),
        ] {
            let report = SampleRateReport::new(rate, EXPECTED_SAMPLE_RATE);
            assert!(!report.matches_expected());
            assert_eq!(report.to_string(), line);
        }
    }

    #[test]
    fn test_fractional_khz_expectation_stays_in_hz() {
        let report = SampleRateReport::new(22050, 22050);
        assert!(report.matches_expected());
        assert_eq!(report.to_string(), "The sample rate is 22050 Hz.");
    }

    #[test]
    fn test_custom_whole_khz_expectation() {
        let report = SampleRateReport::new(48000, 48000);
        assert_eq!(report.to_string(), "The sample rate is 48 kHz.");
    }
}
