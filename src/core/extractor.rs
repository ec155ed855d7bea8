// src/core/extractor.rs
//
// MFCC extractor: precomputed window, filterbank and DCT for one sample rate.

use ndarray::Array2;
use rayon::prelude::*;

use super::analysis::{with_differences, CepstralProjection, MelFilterbank};
use super::dsp::{
    create_window, normalize_columns, pre_emphasis_in_place, PowerSpectrum, SpectrumBuffers,
};
use super::features::MfccFeatures;
use crate::config::MfccConfig;
use crate::error::{MfccError, Result};

/// Extracts MFCC features from mono signals at a fixed sample rate
///
/// Construction precomputes everything that depends only on the
/// configuration; `extract` is read-only and can be called from any thread.
#[derive(Debug, Clone)]
pub struct Extractor {
    config: MfccConfig,
    frame_len: usize,
    frame_shift: usize,
    window: Vec<f64>,
    filterbank: MelFilterbank,
    projection: CepstralProjection,
    spectrum: PowerSpectrum,
}

/// Scratch space reused across the frames one worker processes
struct FrameWorkspace {
    frame: Vec<f64>,
    buffers: SpectrumBuffers,
    power: Vec<f64>,
    energies: Vec<f64>,
}

impl Extractor {
    pub fn new(config: MfccConfig) -> Result<Self> {
        config.validate()?;

        let frame_len = config.frame_len();
        let frame_shift = config.frame_shift();
        let window = create_window(frame_len, config.window);
        let filterbank = MelFilterbank::new(config.sample_rate, config.fft_size, config.num_bands)?;
        let projection = CepstralProjection::new(config.num_bands, config.num_coefficients);
        let spectrum = PowerSpectrum::new(config.fft_size);

        let level = if config.verbose {
            log::Level::Info
        } else {
            log::Level::Debug
        };
        log::log!(
            level,
            "MFCC extractor for {} Hz: frame {} / shift {} samples, FFT {}, {} bands, {} coefficients",
            config.sample_rate,
            frame_len,
            frame_shift,
            config.fft_size,
            config.num_bands,
            config.num_coefficients
        );

        Ok(Self {
            config,
            frame_len,
            frame_shift,
            window,
            filterbank,
            projection,
            spectrum,
        })
    }

    /// Extractor with default parameters for `sample_rate`
    pub fn with_sample_rate(sample_rate: u32) -> Result<Self> {
        Self::new(MfccConfig::with_sample_rate(sample_rate))
    }

    /// Number of complete frames in a signal of `len` samples
    pub fn num_frames(&self, len: usize) -> usize {
        if len < self.frame_len {
            0
        } else {
            (len - self.frame_len) / self.frame_shift + 1
        }
    }

    /// Extract MFCC features from a mono signal
    ///
    /// With `diff` set, each row is extended with first and second differences
    /// taken along the coefficient axis. Multi-channel input must be averaged
    /// first, see [`average_channels`](crate::core::dsp::average_channels).
    pub fn extract(&self, signal: &[f64], diff: bool) -> Result<MfccFeatures> {
        let num_coefficients = self.config.num_coefficients;
        let rows: Vec<Vec<f64>> = self.map_frames(signal, |ws| {
            let mut coefficients = vec![0.0; num_coefficients];
            self.projection.project_into(&ws.energies, &mut coefficients);
            coefficients
        })?;

        let mut cepstra =
            Array2::from_shape_fn((rows.len(), num_coefficients), |(i, j)| rows[i][j]);
        let normalized = self.config.normalize && cepstra.nrows() > 1;
        if normalized {
            normalize_columns(&mut cepstra);
        }

        let frames = cepstra
            .outer_iter()
            .map(|row| {
                if diff {
                    with_differences(&row.to_vec())
                } else {
                    row.to_vec()
                }
            })
            .collect();

        Ok(MfccFeatures::new(frames, num_coefficients, normalized, diff))
    }

    /// Natural log of the mel band energies of every frame
    pub fn log_band_energies(&self, signal: &[f64]) -> Result<Vec<Vec<f64>>> {
        self.map_frames(signal, |ws| ws.energies.clone())
    }

    /// Log band energies rebuilt from (unnormalized) cepstral coefficients
    ///
    /// The result is the projection of the frame's log energies onto the
    /// kept DCT basis vectors. `coefficients` must be exactly
    /// `num_coefficients` long; pass `MfccFeatures::coefficients` for rows
    /// that carry deltas.
    pub fn reconstruct_log_energies(&self, coefficients: &[f64]) -> Result<Vec<f64>> {
        let expected = self.projection.num_coefficients();
        if coefficients.len() != expected {
            return Err(MfccError::CoefficientCountMismatch {
                expected,
                actual: coefficients.len(),
            });
        }
        Ok(self.projection.reconstruct(coefficients).to_vec())
    }

    /// Run the per-frame front end on every frame and map the log energies
    fn map_frames<T, F>(&self, signal: &[f64], finish: F) -> Result<Vec<T>>
    where
        T: Send,
        F: Fn(&FrameWorkspace) -> T + Sync + Send,
    {
        let num_frames = self.num_frames(signal.len());
        if num_frames == 0 {
            return Err(MfccError::SignalTooShort {
                len: signal.len(),
                frame_len: self.frame_len,
            });
        }

        (0..num_frames)
            .into_par_iter()
            .map_init(
                || self.workspace(),
                |ws, index| -> Result<T> {
                    let start = index * self.frame_shift;
                    self.log_energies_into(&signal[start..start + self.frame_len], ws)?;
                    Ok(finish(&*ws))
                },
            )
            .collect()
    }

    fn workspace(&self) -> FrameWorkspace {
        FrameWorkspace {
            frame: vec![0.0; self.frame_len],
            buffers: self.spectrum.make_buffers(),
            power: vec![0.0; self.spectrum.num_bins()],
            energies: vec![0.0; self.config.num_bands],
        }
    }

    /// Window, pre-emphasis, power spectrum, mel filtering and log of one frame
    fn log_energies_into(&self, samples: &[f64], ws: &mut FrameWorkspace) -> Result<()> {
        for ((out, &s), &w) in ws.frame.iter_mut().zip(samples).zip(&self.window) {
            *out = s * w;
        }
        pre_emphasis_in_place(&mut ws.frame, self.config.pre_emphasis);

        self.spectrum
            .compute_into(&ws.frame, &mut ws.buffers, &mut ws.power)?;
        self.filterbank.apply_into(&ws.power, &mut ws.energies);
        ws.energies.iter_mut().for_each(|e| *e = e.ln());
        Ok(())
    }

    pub fn config(&self) -> &MfccConfig {
        &self.config
    }

    pub fn sample_rate(&self) -> u32 {
        self.config.sample_rate
    }

    pub fn frame_len(&self) -> usize {
        self.frame_len
    }

    pub fn frame_shift(&self) -> usize {
        self.frame_shift
    }

    pub fn window(&self) -> &[f64] {
        &self.window
    }

    /// Mel filterbank matrix, `num_bands x (fft_size / 2 + 1)`
    pub fn filterbank(&self) -> &Array2<f64> {
        self.filterbank.matrix()
    }

    pub fn center_frequencies(&self) -> &[f64] {
        self.filterbank.center_frequencies()
    }

    /// Forward cepstral projection, `num_coefficients x num_bands`
    pub fn dct(&self) -> &Array2<f64> {
        self.projection.forward()
    }

    /// Reconstruction basis, `num_bands x num_coefficients`
    pub fn inverse_dct(&self) -> &Array2<f64> {
        self.projection.inverse()
    }
}
