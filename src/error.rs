// src/error.rs
//
// Error type shared by configuration, construction and extraction.

use thiserror::Error;

/// Errors raised while configuring an extractor or extracting features
#[derive(Debug, Error)]
pub enum MfccError {
    #[error("invalid sample rate {sample_rate} Hz: {reason}")]
    InvalidSampleRate { sample_rate: u32, reason: &'static str },

    #[error("invalid FFT size {0}: must be a non-zero power of two")]
    InvalidFftSize(usize),

    #[error("invalid mel band count {0}: at least one band is required")]
    InvalidBandCount(usize),

    #[error("invalid coefficient count {coefficients}: must be in 1..{bands} for {bands} mel bands")]
    InvalidCoefficientCount { coefficients: usize, bands: usize },

    #[error("invalid pre-emphasis coefficient {0}: must be finite")]
    InvalidPreEmphasis(f64),

    #[error("degenerate mel filterbank ({bands} bands, FFT size {fft_size}): {reason}")]
    DegenerateFilterbank {
        bands: usize,
        fft_size: usize,
        reason: String,
    },

    #[error("signal of {len} samples is shorter than one frame ({frame_len} samples)")]
    SignalTooShort { len: usize, frame_len: usize },

    #[error("expected {expected} cepstral coefficients, got {actual}")]
    CoefficientCountMismatch { expected: usize, actual: usize },

    #[error("{len} interleaved samples cannot be split into {channels} channels")]
    InvalidChannelLayout { len: usize, channels: usize },

    #[error("FFT failed: {0}")]
    Fft(String),

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, MfccError>;
