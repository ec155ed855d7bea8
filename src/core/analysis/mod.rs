//! Cepstral analysis building blocks
//!
//! - Mel filterbank construction
//! - DCT-II basis and cepstral projection
//! - Difference (delta) features

mod dct;
mod deltas;
mod filterbank;

pub use dct::{dct_matrix, CepstralProjection};
pub use deltas::{extended_width, first_difference, with_differences};
pub use filterbank::MelFilterbank;
