// src/core/cache.rs
//
// Per-sample-rate extractor cache and the process-wide convenience entry point

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use super::extractor::Extractor;
use super::features::MfccFeatures;
use crate::config::MfccConfig;
use crate::error::Result;

/// Maps sample rates to shared extractors built from one template config
///
/// Entries are never evicted. A missing rate is built under the write lock,
/// so concurrent first use of the same rate constructs exactly one extractor.
#[derive(Debug)]
pub struct ExtractorCache {
    template: MfccConfig,
    extractors: RwLock<HashMap<u32, Arc<Extractor>>>,
}

impl ExtractorCache {
    /// Cache producing extractors with default parameters
    pub fn new() -> Self {
        Self::with_template(MfccConfig::default())
    }

    /// Cache producing extractors from `template`; its sample rate is ignored
    pub fn with_template(template: MfccConfig) -> Self {
        Self {
            template,
            extractors: RwLock::new(HashMap::new()),
        }
    }

    /// Shared extractor for `sample_rate`, built on first use
    pub fn get(&self, sample_rate: u32) -> Result<Arc<Extractor>> {
        {
            let extractors = self.extractors.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(extractor) = extractors.get(&sample_rate) {
                return Ok(Arc::clone(extractor));
            }
        }

        let mut extractors = self.extractors.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(extractor) = extractors.get(&sample_rate) {
            return Ok(Arc::clone(extractor));
        }

        let config = MfccConfig {
            sample_rate,
            ..self.template.clone()
        };
        let extractor = Arc::new(Extractor::new(config)?);
        extractors.insert(sample_rate, Arc::clone(&extractor));
        log::debug!(
            "new extractor for {} Hz ({} cached)",
            sample_rate,
            extractors.len()
        );
        Ok(extractor)
    }

    pub fn contains(&self, sample_rate: u32) -> bool {
        self.extractors
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(&sample_rate)
    }

    pub fn len(&self) -> usize {
        self.extractors
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ExtractorCache {
    fn default() -> Self {
        Self::new()
    }
}

static GLOBAL_CACHE: Lazy<ExtractorCache> = Lazy::new(ExtractorCache::new);

/// Process-wide cache with default parameters
pub fn global_cache() -> &'static ExtractorCache {
    &GLOBAL_CACHE
}

/// Extract normalized MFCCs (no deltas) using the process-wide cache
pub fn extract(signal: &[f64], sample_rate: u32) -> Result<MfccFeatures> {
    global_cache().get(sample_rate)?.extract(signal, false)
}
