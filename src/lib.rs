//! mfccr - Mel-frequency cepstral coefficients
//!
//! Computes MFCC features from an in-memory mono waveform: Hamming window,
//! pre-emphasis, FFT power spectrum, mel filterbank, log and DCT, with
//! optional mean/variance normalization across frames and optional
//! difference features.
//!
//! ## Module Structure
//!
//! - `core` - Extractor, extractor cache and DSP building blocks
//! - `config` - Extraction parameters
//! - `error` - Error type
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mfccr::{average_channels, Extractor, MfccConfigBuilder};
//!
//! # fn main() -> mfccr::Result<()> {
//! # let interleaved = vec![0.0f64; 32000];
//! // One-off extraction through the process-wide cache
//! let mono = average_channels(&interleaved, 2)?;
//! let features = mfccr::extract(&mono, 16000)?;
//! println!("{} frames x {} coefficients", features.num_frames(), features.width());
//!
//! // Custom parameters, with delta and delta-delta features
//! let config = MfccConfigBuilder::new(16000).num_bands(26).num_coefficients(12).build()?;
//! let extractor = Extractor::new(config)?;
//! let with_deltas = extractor.extract(&mono, true)?;
//! assert_eq!(with_deltas.width(), 12 + 11 + 10);
//! # Ok(())
//! # }
//! ```
//!
//! ## Defaults
//!
//! | Parameter    | Default                 |
//! |--------------|-------------------------|
//! | FFT size     | 2048                    |
//! | Mel bands    | 40                      |
//! | Coefficients | 13 (0th dropped)        |
//! | Pre-emphasis | 0.95                    |
//! | Frame        | 20 ms, 10 ms shift      |
//!
//! Signals shorter than one frame are rejected with
//! [`MfccError::SignalTooShort`]. Constant coefficient columns are only
//! mean-centred during normalization, so output is always finite.

// Extraction pipeline and DSP utilities
pub mod core;

// Extraction parameters
pub mod config;

pub mod error;

// Re-export commonly used types at crate root for convenience
pub use config::{MfccConfig, MfccConfigBuilder};
pub use crate::core::dsp::{average_channels, WindowType};
pub use crate::core::{extract, global_cache, Extractor, ExtractorCache, MfccFeatures};
pub use error::{MfccError, Result};
