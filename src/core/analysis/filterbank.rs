// src/core/analysis/filterbank.rs
//
// Triangular mel filterbank mapping power spectrum bins to band energies.
// Bands are uniformly spaced on the mel scale `ln(1 + f / 700)`; every bin
// splits its energy between at most two adjacent bands.

use ndarray::linalg::general_mat_vec_mul;
use ndarray::{Array2, ArrayView1, ArrayViewMut1};

use crate::error::{MfccError, Result};

/// Mel filterbank matrix and band center frequencies
#[derive(Debug, Clone)]
pub struct MelFilterbank {
    weights: Array2<f64>,
    center_frequencies: Vec<f64>,
}

impl MelFilterbank {
    /// Build a `num_bands x (fft_size / 2 + 1)` filterbank
    pub fn new(sample_rate: u32, fft_size: usize, num_bands: usize) -> Result<Self> {
        let degenerate = |reason: String| MfccError::DegenerateFilterbank {
            bands: num_bands,
            fft_size,
            reason,
        };
        if sample_rate == 0 || fft_size < 2 || num_bands == 0 {
            return Err(degenerate("sample rate, FFT size and band count must be positive".into()));
        }

        let fs = sample_rate as f64;
        let n = fft_size as f64;
        let bands = num_bands as f64;
        let half = fft_size / 2;

        // 700 Hz knee as a fraction of the sample rate
        let f0 = 700.0 / fs;
        // Mel step between consecutive band edges, covering 0..fs/2
        let step = (1.0 + 0.5 / f0).ln() / (bands + 1.0);

        let center_frequencies = (1..=num_bands)
            .map(|k| fs * f0 * ((k as f64 * step).exp() - 1.0))
            .collect();

        // Band edges expressed in (fractional) FFT bins
        let edge = |k: f64| n * f0 * ((k * step).exp() - 1.0);
        let first_bin = edge(0.0).floor() as i64 + 1;
        let first_full = edge(1.0).ceil() as i64;
        let last_lower = edge(bands).floor() as i64;
        let last_bin = (half as i64).min(edge(bands + 1.0).ceil() as i64) - 1;

        if last_bin < first_bin || first_full < 1 || last_lower > last_bin - first_bin + 1 {
            return Err(degenerate(format!(
                "band edges map to an empty bin range ({}..={})",
                first_bin, last_bin
            )));
        }

        // Fractional band position of every bin in first_bin..=last_bin
        let positions: Vec<f64> = (first_bin..=last_bin)
            .map(|bin| (1.0 + bin as f64 / f0 / n).ln() / step)
            .collect();

        let mut weights = Array2::<f64>::zeros((num_bands, half + 1));
        let mut add = |band: i64, idx: usize, weight: f64| -> Result<()> {
            if band < 0 || band >= num_bands as i64 {
                return Err(degenerate(format!("bin {} maps outside the band range", idx)));
            }
            weights[[band as usize, first_bin as usize + idx]] += weight;
            Ok(())
        };

        // Falling edge: bin belongs to the upper half of band floor(p) - 1
        for idx in (first_full - 1) as usize..last_bin as usize {
            let p = positions[idx];
            add(p.floor() as i64 - 1, idx, 2.0 * (1.0 - p.fract()))?;
        }
        // Rising edge: bin belongs to the lower half of band floor(p)
        for idx in 0..last_lower as usize {
            let p = positions[idx];
            add(p.floor() as i64, idx, 2.0 * p.fract())?;
        }

        let empty = weights
            .outer_iter()
            .position(|band| band.iter().all(|&w| w == 0.0));
        if let Some(band) = empty {
            return Err(degenerate(format!(
                "band {} receives no FFT bins; use fewer bands or a larger FFT",
                band
            )));
        }

        Ok(Self {
            weights,
            center_frequencies,
        })
    }

    /// Band energies for one power spectrum
    pub fn apply_into(&self, power: &[f64], energies: &mut [f64]) {
        general_mat_vec_mul(
            1.0,
            &self.weights,
            &ArrayView1::from(power),
            0.0,
            &mut ArrayViewMut1::from(energies),
        );
    }

    pub fn matrix(&self) -> &Array2<f64> {
        &self.weights
    }

    /// Center frequency of each band in Hz
    pub fn center_frequencies(&self) -> &[f64] {
        &self.center_frequencies
    }
}
