//! Window function implementations

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Window function types
///
/// All windows are sampled at half-sample offsets, `w[i] = f(2*pi*(i + 0.5)/n)`,
/// which makes them exactly symmetric for every length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowType {
    #[default]
    Hamming,
    Hann,
    Rectangular,
}

/// Create window function
pub fn create_window(size: usize, window_type: WindowType) -> Vec<f64> {
    match window_type {
        WindowType::Hamming => hamming(size),
        WindowType::Hann => raised_cosine(size, 0.5, 0.5),
        WindowType::Rectangular => vec![1.0; size],
    }
}

/// Hamming window of `n` points
pub fn hamming(n: usize) -> Vec<f64> {
    raised_cosine(n, 0.54, 0.46)
}

fn raised_cosine(n: usize, a0: f64, a1: f64) -> Vec<f64> {
    let step = 2.0 * PI / n as f64;
    (0..n)
        .map(|i| a0 - a1 * (step * (i as f64 + 0.5)).cos())
        .collect()
}
