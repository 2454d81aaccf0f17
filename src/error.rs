//! Error type shared by the header builder, the sample buffer and the serializer.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SynthError {
    #[error("invalid duration {0}: must be finite and non-negative")]
    InvalidDuration(f64),

    #[error("duration {0}s does not fit in a 32-bit RIFF size field")]
    DurationTooLong(f64),

    #[error("data size {0} overflows the RIFF chunk size field")]
    DataSizeTooLarge(u32),

    #[error("header declares {header} data bytes but {payload} sample bytes were supplied")]
    DataSizeMismatch { header: u32, payload: usize },

    #[error("could not write WAV data")]
    Io(#[from] std::io::Error),
}

/// Checks the precondition shared by every duration-taking constructor.
pub fn check_duration(duration: f64) -> Result<f64, SynthError> {
    if duration.is_finite() && duration >= 0.0 {
        Ok(duration)
    } else {
        Err(SynthError::InvalidDuration(duration))
    }
}
