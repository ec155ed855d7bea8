//! Configuration module for mfccr

mod params;

pub use params::{MfccConfig, MfccConfigBuilder, FRAME_SECONDS, SHIFT_SECONDS};
