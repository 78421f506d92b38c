//! Sample rate checker

use std::path::Path;

use crate::report::SampleRateReport;
use crate::{check_sample_rate, Result, EXPECTED_SAMPLE_RATE};

/// Checks WAV files against an expected sample rate
///
/// # Example
/// ```no_run
/// use samplerate_check::SampleRateChecker;
///
/// let report = SampleRateChecker::default().run("output.wav")?;
/// println!("{}", report);
/// # Ok::<(), samplerate_check::CheckError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleRateChecker {
    expected_rate: u32,
}

impl Default for SampleRateChecker {
    fn default() -> Self {
        Self::new(EXPECTED_SAMPLE_RATE)
    }
}

impl SampleRateChecker {
    pub fn new(expected_rate: u32) -> Self {
        Self { expected_rate }
    }

    /// Get the expected sample rate in Hz
    pub fn expected_rate(&self) -> u32 {
        self.expected_rate
    }

    /// Read the sample rate declared by the file at `path`
    pub fn check<P: AsRef<Path>>(&self, path: P) -> Result<u32> {
        check_sample_rate(path)
    }

    /// Build the verdict for an already known sample rate
    pub fn report(&self, sample_rate: u32) -> SampleRateReport {
        SampleRateReport::new(sample_rate, self.expected_rate)
    }

    /// Check `path` and build its verdict
    pub fn run<P: AsRef<Path>>(&self, path: P) -> Result<SampleRateReport> {
        let sample_rate = self.check(path)?;
        Ok(self.report(sample_rate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_expects_16_khz() {
        let checker = SampleRateChecker::default();
        assert_eq!(checker.expected_rate(), 16000);
        assert!(checker.report(16000).matches_expected());
        assert!(!checker.report(16001).matches_expected());
    }

    #[test]
    fn test_custom_expectation() {
        let checker = SampleRateChecker::new(44100);
        assert_eq!(
            checker.report(44100).to_string(),
            "The sample rate is 44100 Hz."
        );
        assert_eq!(
            checker.report(16000).to_string(),
            "The sample rate is 16000 Hz."
        );
    }
}
