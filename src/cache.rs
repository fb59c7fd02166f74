// WHY: editors re-analyze on every keystroke; memoization belongs to the caller,
// the analyzer itself stays stateless

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::num::NonZeroUsize;
use std::sync::Arc;

use lru::LruCache;
use tracing::debug;

use crate::analyzer::{AnalysisOptions, Analyzer, ReadabilityScores};
use crate::error::InsufficientInputError;

const DEFAULT_CAPACITY: usize = 64;

struct CacheEntry {
    text: String,
    options: AnalysisOptions,
    scores: Arc<ReadabilityScores>,
}

/// Caller-owned LRU of analyses keyed by a hash of the input
pub struct AnalysisCache {
    entries: LruCache<u64, CacheEntry>,
    hits: u64,
    misses: u64,
}

impl AnalysisCache {
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            entries: LruCache::new(capacity),
            hits: 0,
            misses: 0,
        }
    }

    /// Return the cached analysis of `text` or compute and store it
    ///
    /// Insufficient-input results are returned but never stored.
    pub fn get_or_analyze(
        &mut self,
        analyzer: &Analyzer,
        text: &str,
        options: &AnalysisOptions,
    ) -> Result<Arc<ReadabilityScores>, InsufficientInputError> {
        let key = cache_key(text, options);

        if let Some(entry) = self.entries.get(&key) {
            // a colliding hash falls through to recomputation
            if entry.text == text && entry.options == *options {
                self.hits += 1;
                return Ok(Arc::clone(&entry.scores));
            }
        }

        self.misses += 1;
        debug!(key, "Analysis cache miss");
        let scores = Arc::new(analyzer.analyze(text, options)?);
        self.entries.put(
            key,
            CacheEntry {
                text: text.to_string(),
                options: *options,
                scores: Arc::clone(&scores),
            },
        );
        Ok(scores)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// (hits, misses) since creation
    pub fn hit_stats(&self) -> (u64, u64) {
        (self.hits, self.misses)
    }
}

impl Default for AnalysisCache {
    fn default() -> Self {
        Self::new(NonZeroUsize::new(DEFAULT_CAPACITY).unwrap_or(NonZeroUsize::MIN))
    }
}

fn cache_key(text: &str, options: &AnalysisOptions) -> u64 {
    let mut hasher = DefaultHasher::new();
    text.hash(&mut hasher);
    options.hash(&mut hasher);
    hasher.finish()
}
