//! Core extraction modules

pub mod analysis;
pub mod cache;
pub mod dsp;
pub mod extractor;
pub mod features;

pub use cache::{extract, global_cache, ExtractorCache};
pub use extractor::Extractor;
pub use features::MfccFeatures;
