//! WAV header parsing
//!
//! Only the header region is read: hound walks the RIFF chunks up to the start
//! of the `data` chunk and stops there, so the sample data itself is never
//! touched. The file handle is owned by the reader and dropped when parsing
//! returns.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use crate::{CheckError, Result};

/// Encoding of the samples in the data chunk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleFormat {
    /// Integer PCM
    Int,
    /// IEEE float
    Float,
}

impl From<hound::SampleFormat> for SampleFormat {
    fn from(format: hound::SampleFormat) -> Self {
        match format {
            hound::SampleFormat::Int => SampleFormat::Int,
            hound::SampleFormat::Float => SampleFormat::Float,
        }
    }
}

/// Format fields declared in a WAV file header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioHeaderInfo {
    /// Sample rate in Hz
    sample_rate: u32,
    /// Number of interleaved channels
    channels: u16,
    /// Bits per sample
    bits_per_sample: u16,
    sample_format: SampleFormat,
    /// Frames declared by the data chunk length
    duration_frames: u32,
}

impl AudioHeaderInfo {
    /// Parse the header of the WAV file at `path`
    ///
    /// # Errors
    /// Returns [`CheckError::FileAccess`] if the file cannot be opened and
    /// [`CheckError::Format`] if the header is missing, truncated or malformed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("Reading WAV header from {}", path.display());

        let file = File::open(path).map_err(|e| CheckError::file_access(path, e))?;
        // Directories open fine on unix and only fail on the first read
        let metadata = file
            .metadata()
            .map_err(|e| CheckError::file_access(path, e))?;
        if metadata.is_dir() {
            return Err(CheckError::file_access(
                path,
                io::Error::new(io::ErrorKind::Other, "is a directory"),
            ));
        }

        let info = Self::from_reader(BufReader::new(file)).map_err(|e| {
            log::warn!("Rejected header of {}: {}", path.display(), e);
            e
        })?;

        log::debug!(
            "{}: {} Hz, {} channel(s), {}-bit {:?}, {} frames ({:.3} s)",
            path.display(),
            info.sample_rate,
            info.channels,
            info.bits_per_sample,
            info.sample_format,
            info.duration_frames,
            info.duration_seconds()
        );
        Ok(info)
    }

    /// Parse a WAV header from any byte source
    ///
    /// Reading stops at the start of the sample data.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let wav = hound::WavReader::new(reader)?;
        let spec = wav.spec();

        if spec.sample_rate == 0 {
            return Err(CheckError::Format("sample rate is zero".to_string()));
        }

        Ok(Self {
            sample_rate: spec.sample_rate,
            channels: spec.channels,
            bits_per_sample: spec.bits_per_sample,
            sample_format: spec.sample_format.into(),
            duration_frames: wav.duration(),
        })
    }

    /// Get the sample rate in Hz
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Get the number of channels
    pub fn channels(&self) -> u16 {
        self.channels
    }

    /// Get the bits per sample
    pub fn bits_per_sample(&self) -> u16 {
        self.bits_per_sample
    }

    /// Get the sample encoding
    pub fn sample_format(&self) -> SampleFormat {
        self.sample_format
    }

    /// Get the number of frames declared by the header
    pub fn duration_frames(&self) -> u32 {
        self.duration_frames
    }

    /// Get the declared duration in seconds
    pub fn duration_seconds(&self) -> f64 {
        self.duration_frames as f64 / self.sample_rate as f64
    }
}
