// src/core/features.rs
//
// Feature matrix returned by extraction

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use super::analysis::extended_width;
use super::dsp::{column_stats, ColumnStats};

/// MFCC features, one row per frame
///
/// Without deltas every row holds `num_coefficients` values. With deltas a row
/// is laid out `[coefficients, first differences, second differences]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "FeatureRows")]
pub struct MfccFeatures {
    frames: Vec<Vec<f64>>,
    num_coefficients: usize,
    normalized: bool,
    has_deltas: bool,
}

impl MfccFeatures {
    pub(crate) fn new(
        frames: Vec<Vec<f64>>,
        num_coefficients: usize,
        normalized: bool,
        has_deltas: bool,
    ) -> Self {
        Self {
            frames,
            num_coefficients,
            normalized,
            has_deltas,
        }
    }

    pub fn num_frames(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn num_coefficients(&self) -> usize {
        self.num_coefficients
    }

    /// Values per row
    pub fn width(&self) -> usize {
        if self.has_deltas {
            extended_width(self.num_coefficients)
        } else {
            self.num_coefficients
        }
    }

    /// Whether mean/variance normalization was applied across frames
    pub fn is_normalized(&self) -> bool {
        self.normalized
    }

    pub fn has_deltas(&self) -> bool {
        self.has_deltas
    }

    pub fn frames(&self) -> &[Vec<f64>] {
        &self.frames
    }

    pub fn frame(&self, index: usize) -> Option<&[f64]> {
        self.frames.get(index).map(Vec::as_slice)
    }

    /// Cepstral coefficients of one frame, without any delta values
    pub fn coefficients(&self, index: usize) -> Option<&[f64]> {
        self.frame(index)?.get(..self.num_coefficients)
    }

    /// First differences of one frame, if deltas were requested
    pub fn deltas(&self, index: usize) -> Option<&[f64]> {
        if !self.has_deltas {
            return None;
        }
        let start = self.num_coefficients;
        let end = start + self.num_coefficients.saturating_sub(1);
        self.frame(index)?.get(start..end)
    }

    /// Second differences of one frame, if deltas were requested
    pub fn delta_deltas(&self, index: usize) -> Option<&[f64]> {
        if !self.has_deltas {
            return None;
        }
        let start = self.num_coefficients + self.num_coefficients.saturating_sub(1);
        self.frame(index)?.get(start..self.width())
    }

    /// Per-column mean and population standard deviation over all frames
    pub fn column_stats(&self) -> ColumnStats {
        let matrix = Array2::from_shape_fn((self.frames.len(), self.width()), |(i, j)| {
            self.frames[i][j]
        });
        column_stats(matrix.view())
    }
}

/// Unchecked serialized form; rows are validated before becoming features
#[derive(Deserialize)]
struct FeatureRows {
    frames: Vec<Vec<f64>>,
    num_coefficients: usize,
    normalized: bool,
    has_deltas: bool,
}

impl TryFrom<FeatureRows> for MfccFeatures {
    type Error = String;

    fn try_from(raw: FeatureRows) -> std::result::Result<Self, Self::Error> {
        let features = MfccFeatures::new(
            raw.frames,
            raw.num_coefficients,
            raw.normalized,
            raw.has_deltas,
        );
        let width = features.width();
        if let Some((index, row)) = features
            .frames
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != width)
        {
            return Err(format!(
                "frame {} has {} values, expected {}",
                index,
                row.len(),
                width
            ));
        }
        Ok(features)
    }
}
