//! Statistical functions over frame-by-coefficient feature matrices

use ndarray::{Array1, Array2, ArrayView2, Axis};

/// Standard deviations below this are treated as zero when normalizing
pub const MIN_STD_DEV: f64 = 1e-12;

/// Per-column mean and population standard deviation
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnStats {
    pub mean: Array1<f64>,
    pub std_dev: Array1<f64>,
}

/// Mean and population standard deviation of every column
pub fn column_stats(features: ArrayView2<'_, f64>) -> ColumnStats {
    let width = features.ncols();
    match features.mean_axis(Axis(0)) {
        Some(mean) => ColumnStats {
            mean,
            std_dev: features.std_axis(Axis(0), 0.0),
        },
        None => ColumnStats {
            mean: Array1::zeros(width),
            std_dev: Array1::zeros(width),
        },
    }
}

/// Mean/variance normalize columns in place
///
/// Columns whose standard deviation is below [`MIN_STD_DEV`] are only
/// mean-centred, so the output stays finite.
pub fn normalize_columns(features: &mut Array2<f64>) {
    if features.nrows() == 0 {
        return;
    }
    let stats = column_stats(features.view());
    let degenerate = stats.std_dev.iter().filter(|&&s| s < MIN_STD_DEV).count();
    if degenerate > 0 {
        log::debug!(
            "{} of {} columns have zero variance; centring without scaling",
            degenerate,
            features.ncols()
        );
    }

    let scale = stats
        .std_dev
        .mapv(|s| if s < MIN_STD_DEV { 1.0 } else { s });
    *features -= &stats.mean;
    *features /= &scale;
}
