// src/config/params.rs
//
// Extraction parameters and their validation

use serde::{Deserialize, Serialize};

use crate::core::dsp::WindowType;
use crate::error::{MfccError, Result};

/// Frame length in seconds
pub const FRAME_SECONDS: f64 = 0.02;
/// Frame shift in seconds
pub const SHIFT_SECONDS: f64 = 0.01;

/// Complete extractor configuration
///
/// Frame length and shift are not stored: they are always derived from the
/// sample rate (20 ms and 10 ms respectively, truncated to whole samples).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MfccConfig {
    /// Sample rate of the input signal in Hz
    pub sample_rate: u32,
    /// FFT size (power of two)
    pub fft_size: usize,
    /// Number of mel bands in the filterbank
    pub num_bands: usize,
    /// Number of cepstral coefficients kept per frame (the 0th is dropped)
    pub num_coefficients: usize,
    /// Pre-emphasis coefficient
    pub pre_emphasis: f64,
    /// Frame weighting window
    pub window: WindowType,
    /// Mean/variance normalization across frames
    pub normalize: bool,
    /// Raise construction diagnostics from debug to info level
    pub verbose: bool,
}

impl Default for MfccConfig {
    fn default() -> Self {
        Self {
            sample_rate: 16000,
            fft_size: 2048,
            num_bands: 40,
            num_coefficients: 13,
            pre_emphasis: 0.95,
            window: WindowType::Hamming,
            normalize: true,
            verbose: false,
        }
    }
}

impl MfccConfig {
    /// Default parameters for the given sample rate
    pub fn with_sample_rate(sample_rate: u32) -> Self {
        Self {
            sample_rate,
            ..Default::default()
        }
    }

    /// Parse a configuration from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Frame length in samples
    pub fn frame_len(&self) -> usize {
        (FRAME_SECONDS * self.sample_rate as f64) as usize
    }

    /// Frame shift in samples
    pub fn frame_shift(&self) -> usize {
        (SHIFT_SECONDS * self.sample_rate as f64) as usize
    }

    /// Check parameter ranges that do not need the filterbank to be built
    pub fn validate(&self) -> Result<()> {
        if self.sample_rate == 0 {
            return Err(MfccError::InvalidSampleRate {
                sample_rate: self.sample_rate,
                reason: "must be positive",
            });
        }
        if self.frame_shift() == 0 {
            return Err(MfccError::InvalidSampleRate {
                sample_rate: self.sample_rate,
                reason: "too low for a 10 ms frame shift of at least one sample",
            });
        }
        if self.fft_size == 0 || !self.fft_size.is_power_of_two() {
            return Err(MfccError::InvalidFftSize(self.fft_size));
        }
        if self.num_bands == 0 {
            return Err(MfccError::InvalidBandCount(self.num_bands));
        }
        if self.num_coefficients == 0 || self.num_coefficients >= self.num_bands {
            return Err(MfccError::InvalidCoefficientCount {
                coefficients: self.num_coefficients,
                bands: self.num_bands,
            });
        }
        if !self.pre_emphasis.is_finite() {
            return Err(MfccError::InvalidPreEmphasis(self.pre_emphasis));
        }
        Ok(())
    }
}

/// Builder for extractor configurations
pub struct MfccConfigBuilder {
    config: MfccConfig,
}

impl MfccConfigBuilder {
    pub fn new(sample_rate: u32) -> Self {
        Self {
            config: MfccConfig::with_sample_rate(sample_rate),
        }
    }

    pub fn fft_size(mut self, fft_size: usize) -> Self {
        self.config.fft_size = fft_size;
        self
    }

    pub fn num_bands(mut self, num_bands: usize) -> Self {
        self.config.num_bands = num_bands;
        self
    }

    pub fn num_coefficients(mut self, num_coefficients: usize) -> Self {
        self.config.num_coefficients = num_coefficients;
        self
    }

    pub fn pre_emphasis(mut self, coefficient: f64) -> Self {
        self.config.pre_emphasis = coefficient;
        self
    }

    pub fn window(mut self, window: WindowType) -> Self {
        self.config.window = window;
        self
    }

    pub fn normalize(mut self, normalize: bool) -> Self {
        self.config.normalize = normalize;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.config.verbose = verbose;
        self
    }

    pub fn build(self) -> Result<MfccConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_frame_sizes() {
        let config = MfccConfig::with_sample_rate(16000);
        assert_eq!(config.frame_len(), 320);
        assert_eq!(config.frame_shift(), 160);

        let config = MfccConfig::with_sample_rate(8000);
        assert_eq!(config.frame_len(), 160);
        assert_eq!(config.frame_shift(), 80);
    }

    #[test]
    fn test_builder_validates() {
        let config = MfccConfigBuilder::new(22050)
            .num_bands(26)
            .num_coefficients(12)
            .build()
            .unwrap();
        assert_eq!(config.num_bands, 26);
        assert_eq!(config.fft_size, 2048);

        assert!(matches!(
            MfccConfigBuilder::new(0).build(),
            Err(MfccError::InvalidSampleRate { .. })
        ));
        assert!(matches!(
            MfccConfigBuilder::new(50).build(),
            Err(MfccError::InvalidSampleRate { .. })
        ));
        assert!(matches!(
            MfccConfigBuilder::new(16000).fft_size(1000).build(),
            Err(MfccError::InvalidFftSize(1000))
        ));
        assert!(matches!(
            MfccConfigBuilder::new(16000).num_bands(0).build(),
            Err(MfccError::InvalidBandCount(0))
        ));
        assert!(matches!(
            MfccConfigBuilder::new(16000).num_bands(13).build(),
            Err(MfccError::InvalidCoefficientCount { coefficients: 13, bands: 13 })
        ));
        assert!(matches!(
            MfccConfigBuilder::new(16000).pre_emphasis(f64::NAN).build(),
            Err(MfccError::InvalidPreEmphasis(_))
        ));
    }

    #[test]
    fn test_json_defaults() {
        let config = MfccConfig::from_json(r#"{"sample_rate": 44100, "window": "hann"}"#).unwrap();
        assert_eq!(config.sample_rate, 44100);
        assert_eq!(config.window, WindowType::Hann);
        assert_eq!(config.num_coefficients, 13);
        assert!(config.normalize);

        assert!(matches!(
            MfccConfig::from_json("{\"fft_size\": "),
            Err(MfccError::Config(_))
        ));
        assert!(matches!(
            MfccConfig::from_json(r#"{"num_coefficients": 40}"#),
            Err(MfccError::InvalidCoefficientCount { .. })
        ));
    }
}
