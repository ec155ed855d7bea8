//! Real-input FFT power spectrum

use num_complex::Complex;
use realfft::{RealFftPlanner, RealToComplex};
use std::fmt;
use std::sync::Arc;

use crate::error::{MfccError, Result};

/// Smallest power value passed on to the logarithm
pub const POWER_SPECTRUM_FLOOR: f64 = 1e-100;

/// Power spectrum of real frames with a fixed FFT size
///
/// The plan is shared and immutable; callers own the working buffers so that
/// several threads can use one processor at once.
#[derive(Clone)]
pub struct PowerSpectrum {
    fft: Arc<dyn RealToComplex<f64>>,
    fft_size: usize,
}

/// Per-thread working memory for [`PowerSpectrum`]
pub struct SpectrumBuffers {
    input: Vec<f64>,
    output: Vec<Complex<f64>>,
    scratch: Vec<Complex<f64>>,
}

impl PowerSpectrum {
    pub fn new(fft_size: usize) -> Self {
        let mut planner = RealFftPlanner::<f64>::new();
        Self {
            fft: planner.plan_fft_forward(fft_size),
            fft_size,
        }
    }

    pub fn make_buffers(&self) -> SpectrumBuffers {
        SpectrumBuffers {
            input: self.fft.make_input_vec(),
            output: self.fft.make_output_vec(),
            scratch: self.fft.make_scratch_vec(),
        }
    }

    /// Number of bins produced per frame (`fft_size / 2 + 1`)
    pub fn num_bins(&self) -> usize {
        self.fft_size / 2 + 1
    }

    /// Compute floored `|X|^2` of `frame` into `power`
    ///
    /// The frame is zero-padded or truncated to the FFT size.
    pub fn compute_into(
        &self,
        frame: &[f64],
        buffers: &mut SpectrumBuffers,
        power: &mut [f64],
    ) -> Result<()> {
        let used = frame.len().min(self.fft_size);
        buffers.input[..used].copy_from_slice(&frame[..used]);
        buffers.input[used..].fill(0.0);

        self.fft
            .process_with_scratch(&mut buffers.input, &mut buffers.output, &mut buffers.scratch)
            .map_err(|e| MfccError::Fft(e.to_string()))?;

        for (p, c) in power.iter_mut().zip(buffers.output.iter()) {
            *p = c.norm_sqr().max(POWER_SPECTRUM_FLOOR);
        }
        Ok(())
    }
}

impl fmt::Debug for PowerSpectrum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PowerSpectrum")
            .field("fft_size", &self.fft_size)
            .finish()
    }
}
