//! samplerate-check: report the sample rate declared in a WAV file header
//!
//! The crate reads only the header region of a RIFF/WAVE file (the `RIFF`
//! signature, the `fmt ` chunk and the chunk headers leading up to the sample
//! data) and compares the declared sample rate with an expected value.
//!
//! # Core Types
//!
//! - [`AudioHeaderInfo`] - Format fields parsed from a WAV header
//! - [`SampleRateChecker`] - Reads a header and reports against an expected rate
//! - [`SampleRateReport`] - The one-line human readable verdict
//!
//! # Example
//!
//! ```no_run
//! use samplerate_check::{check_sample_rate, SampleRateChecker};
//!
//! let rate = check_sample_rate("output.wav")?;
//! println!("{}", SampleRateChecker::default().report(rate));
//! # Ok::<(), samplerate_check::CheckError>(())
//! ```

use std::io;
use std::path::{Path, PathBuf};

pub mod checker;
pub mod header;
pub mod report;

// Re-export main types at crate root
pub use checker::SampleRateChecker;
pub use header::{AudioHeaderInfo, SampleFormat};
pub use report::SampleRateReport;

use thiserror::Error;

/// Path checked when none is given on the command line
pub const DEFAULT_INPUT_PATH: &str = "output.wav";

/// Sample rate the recordings are expected to carry (Hz)
pub const EXPECTED_SAMPLE_RATE: u32 = 16_000;

/// Errors that can occur while checking a file's sample rate
#[derive(Error, Debug)]
pub enum CheckError {
    #[error("cannot open {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid WAV header: {0}")]
    Format(String),
}

pub type Result<T> = std::result::Result<T, CheckError>;

impl From<hound::Error> for CheckError {
    fn from(err: hound::Error) -> Self {
        // hound reports a header that ends early as a plain I/O error, the
        // same way it reports a failing read.
        match err {
            hound::Error::IoError(e) => CheckError::Format(format!("could not read header: {}", e)),
            other => CheckError::Format(other.to_string()),
        }
    }
}

impl CheckError {
    pub(crate) fn file_access(path: &Path, source: io::Error) -> Self {
        CheckError::FileAccess {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Read the sample rate (Hz) declared in the header of the WAV file at `path`
///
/// The file is opened, its header parsed and the handle closed again before
/// returning, on success and on failure alike.
///
/// # Errors
/// [`CheckError::FileAccess`] if the file cannot be opened,
/// [`CheckError::Format`] if it does not start with a valid WAV header.
pub fn check_sample_rate<P: AsRef<Path>>(path: P) -> Result<u32> {
    AudioHeaderInfo::from_file(path).map(|info| info.sample_rate())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hound_format_error_keeps_message() {
        let err: CheckError = hound::Error::FormatError("no RIFF tag found").into();
        assert!(matches!(err, CheckError::Format(ref msg) if msg.contains("no RIFF tag found")));
        assert!(err.to_string().starts_with("invalid WAV header:"));
    }

    #[test]
    fn test_file_access_display_names_path() {
        let err = CheckError::file_access(
            Path::new("missing.wav"),
            io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        );
        assert_eq!(
            err.to_string(),
            "cannot open missing.wav: No such file or directory"
        );
    }
}
