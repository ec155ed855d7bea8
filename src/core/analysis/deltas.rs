// src/core/analysis/deltas.rs
//
// Difference features taken along the coefficient axis of each frame

/// First difference: `d[i] = x[i + 1] - x[i]`, one element shorter than `x`
pub fn first_difference(x: &[f64]) -> Vec<f64> {
    x.windows(2).map(|w| w[1] - w[0]).collect()
}

/// Concatenate `[c, diff(c), diff(diff(c))]`
pub fn with_differences(coefficients: &[f64]) -> Vec<f64> {
    let d1 = first_difference(coefficients);
    let d2 = first_difference(&d1);

    let mut row = Vec::with_capacity(coefficients.len() + d1.len() + d2.len());
    row.extend_from_slice(coefficients);
    row.extend(d1);
    row.extend(d2);
    row
}

/// Width of a row produced by [`with_differences`]
pub fn extended_width(num_coefficients: usize) -> usize {
    num_coefficients
        + num_coefficients.saturating_sub(1)
        + num_coefficients.saturating_sub(2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_differences() {
        assert_eq!(first_difference(&[1.0, 4.0, 9.0, 16.0]), vec![3.0, 5.0, 7.0]);
        assert!(first_difference(&[2.0]).is_empty());
        assert!(first_difference(&[]).is_empty());

        let row = with_differences(&[1.0, 4.0, 9.0, 16.0]);
        assert_eq!(row, vec![1.0, 4.0, 9.0, 16.0, 3.0, 5.0, 7.0, 2.0, 2.0]);
    }

    #[test]
    fn test_extended_width() {
        assert_eq!(extended_width(13), 36);
        assert_eq!(with_differences(&[0.5; 13]).len(), 36);
        assert_eq!(extended_width(2), 3);
        assert_eq!(extended_width(1), 1);
    }
}
