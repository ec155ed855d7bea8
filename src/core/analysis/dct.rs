// src/core/analysis/dct.rs
//
// Orthonormal DCT-II basis and the cepstral projections cut from it

use std::f64::consts::PI;

use ndarray::linalg::general_mat_vec_mul;
use ndarray::{s, Array1, Array2, ArrayView1, ArrayViewMut1};

/// DCT-II matrix of order `n`, scaled to be orthonormal
pub fn dct_matrix(n: usize) -> Array2<f64> {
    let scale = (2.0 / n as f64).sqrt();
    let mut dct = Array2::from_shape_fn((n, n), |(i, j)| {
        scale * (PI * (2 * j + 1) as f64 * i as f64 / (2 * n) as f64).cos()
    });
    if n > 0 {
        dct.row_mut(0).mapv_inplace(|v| v / 2f64.sqrt());
    }
    dct
}

/// Forward and inverse cepstral projections
///
/// Row 0 (the DC term) is dropped: `forward` holds rows `1..=num_coefficients`
/// and `inverse` the matching columns of the inverse DCT.
#[derive(Debug, Clone)]
pub struct CepstralProjection {
    forward: Array2<f64>,
    inverse: Array2<f64>,
}

impl CepstralProjection {
    pub fn new(num_bands: usize, num_coefficients: usize) -> Self {
        let dct = dct_matrix(num_bands);
        // Orthonormal, so the inverse is the transpose
        let inverse = dct.t().slice(s![.., 1..=num_coefficients]).to_owned();
        Self {
            forward: dct.slice(s![1..=num_coefficients, ..]).to_owned(),
            inverse,
        }
    }

    /// Cepstral coefficients of a log band-energy vector
    pub fn project_into(&self, log_energies: &[f64], coefficients: &mut [f64]) {
        general_mat_vec_mul(
            1.0,
            &self.forward,
            &ArrayView1::from(log_energies),
            0.0,
            &mut ArrayViewMut1::from(coefficients),
        );
    }

    /// Rank-limited log band energies from cepstral coefficients
    ///
    /// `coefficients` must hold exactly `num_coefficients` values.
    pub fn reconstruct(&self, coefficients: &[f64]) -> Array1<f64> {
        self.inverse.dot(&ArrayView1::from(coefficients))
    }

    pub fn num_coefficients(&self) -> usize {
        self.forward.nrows()
    }

    pub fn forward(&self) -> &Array2<f64> {
        &self.forward
    }

    pub fn inverse(&self) -> &Array2<f64> {
        &self.inverse
    }
}
