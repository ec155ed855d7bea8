//! Digital Signal Processing utilities

pub mod fft;
pub mod filters;
pub mod stats;
pub mod windows;

pub use fft::{PowerSpectrum, SpectrumBuffers, POWER_SPECTRUM_FLOOR};
pub use filters::{average_channels, pre_emphasis_in_place};
pub use stats::{column_stats, normalize_columns, ColumnStats};
pub use windows::{create_window, hamming, WindowType};
