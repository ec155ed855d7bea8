// tests/test_utils/mod.rs
//
// Synthetic signals and numeric helpers shared by the integration tests

#![allow(dead_code)]

use std::f64::consts::PI;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Sine wave of `freq` Hz lasting `len` samples
pub fn sine(freq: f64, sample_rate: u32, len: usize) -> Vec<f64> {
    (0..len)
        .map(|i| (2.0 * PI * freq * i as f64 / sample_rate as f64).sin())
        .collect()
}

/// One second of a sine wave
pub fn sine_second(freq: f64, sample_rate: u32) -> Vec<f64> {
    sine(freq, sample_rate, sample_rate as usize)
}

pub fn silence(len: usize) -> Vec<f64> {
    vec![0.0; len]
}

/// Deterministic white noise in [-amplitude, amplitude) from a 64-bit LCG
pub fn white_noise(len: usize, amplitude: f64, seed: u64) -> Vec<f64> {
    let mut state = seed;
    (0..len)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            let unit = (state >> 11) as f64 / (1u64 << 53) as f64;
            amplitude * (2.0 * unit - 1.0)
        })
        .collect()
}

/// Frequency sweep from `start_hz` to `end_hz`
pub fn chirp(start_hz: f64, end_hz: f64, sample_rate: u32, len: usize) -> Vec<f64> {
    let duration = len as f64 / sample_rate as f64;
    let rate = (end_hz - start_hz) / duration;
    (0..len)
        .map(|i| {
            let t = i as f64 / sample_rate as f64;
            (2.0 * PI * (start_hz * t + 0.5 * rate * t * t)).sin()
        })
        .collect()
}

/// Interleave mono channels into `[l0, r0, l1, r1, ...]`
pub fn interleave(channels: &[Vec<f64>]) -> Vec<f64> {
    let len = channels.iter().map(Vec::len).min().unwrap_or(0);
    (0..len)
        .flat_map(|i| channels.iter().map(move |ch| ch[i]))
        .collect()
}

pub fn assert_close(actual: &[f64], expected: &[f64], tolerance: f64) {
    assert_eq!(actual.len(), expected.len(), "length mismatch");
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!(
            (a - e).abs() <= tolerance,
            "index {}: {} vs {} (tolerance {})",
            i,
            a,
            e,
            tolerance
        );
    }
}
