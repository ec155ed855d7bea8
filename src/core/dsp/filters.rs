//! Signal filtering and channel utilities

use crate::error::{MfccError, Result};

/// Apply pre-emphasis filter (boosts high frequencies) in place
///
/// `y[0] = x[0]`, `y[i] = x[i] - coefficient * x[i - 1]`. Every output sample
/// uses the unfiltered previous input, never the already-filtered one.
pub fn pre_emphasis_in_place(samples: &mut [f64], coefficient: f64) {
    // Walk backwards so samples[i - 1] is still the unfiltered value
    for i in (1..samples.len()).rev() {
        samples[i] -= coefficient * samples[i - 1];
    }
}

/// Average interleaved multi-channel samples into a mono signal
///
/// `interleaved` is laid out `[frame0_ch0, frame0_ch1, ..., frame1_ch0, ...]`.
pub fn average_channels(interleaved: &[f64], channels: usize) -> Result<Vec<f64>> {
    if channels == 0 || interleaved.len() % channels != 0 {
        return Err(MfccError::InvalidChannelLayout {
            len: interleaved.len(),
            channels,
        });
    }
    if channels == 1 {
        return Ok(interleaved.to_vec());
    }

    log::info!(
        "input signal has {} channels; the channels will be averaged",
        channels
    );
    Ok(interleaved
        .chunks_exact(channels)
        .map(|frame| frame.iter().sum::<f64>() / channels as f64)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pre_emphasis(samples: &[f64], coefficient: f64) -> Vec<f64> {
        let mut output = samples.to_vec();
        pre_emphasis_in_place(&mut output, coefficient);
        output
    }

    #[test]
    fn test_pre_emphasis_uses_unfiltered_history() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let y = pre_emphasis(&x, 0.5);
        assert_eq!(y, vec![1.0, 1.5, 2.0, 2.5]);
    }

    #[test]
    fn test_pre_emphasis_edge_cases() {
        assert!(pre_emphasis(&[], 0.95).is_empty());
        assert_eq!(pre_emphasis(&[0.25], 0.95), vec![0.25]);

        let mut frame = vec![1.0; 6];
        pre_emphasis_in_place(&mut frame, 0.95);
        assert_eq!(frame[0], 1.0);
        assert!(frame[1..].iter().all(|&v| (v - 0.05).abs() < 1e-12));
    }

    #[test]
    fn test_average_channels() {
        let stereo = [1.0, 3.0, -2.0, 2.0, 0.5, 0.5];
        assert_eq!(average_channels(&stereo, 2).unwrap(), vec![2.0, 0.0, 0.5]);
        assert_eq!(average_channels(&stereo, 1).unwrap(), stereo.to_vec());
        assert!(matches!(
            average_channels(&stereo, 4),
            Err(MfccError::InvalidChannelLayout { len: 6, channels: 4 })
        ));
        assert!(average_channels(&stereo, 0).is_err());
    }
}
