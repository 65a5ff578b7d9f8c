use std::sync::Arc;

use super::{derive, EnrichedNote};
use crate::note::Note;

/// Hit/miss counters for the derivation cache
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
}

impl CacheStats {
    /// Cache hit rate as a percentage (0.0-100.0)
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            (self.hits as f64 / total as f64) * 100.0
        }
    }
}

/// Memoizes [`derive`] keyed by the owner's mutation generation.
///
/// The caller must bump the generation whenever the collection changes.
/// Only the most recent derivation is kept.
#[derive(Debug, Default)]
pub struct DerivationCache {
    entry: Option<(u64, Arc<Vec<EnrichedNote>>)>,
    stats: CacheStats,
}

impl DerivationCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_derive(&mut self, generation: u64, notes: &[Note]) -> Arc<Vec<EnrichedNote>> {
        if let Some((cached, view)) = &self.entry {
            if *cached == generation {
                self.stats.hits += 1;
                tracing::trace!(hit_rate = self.stats.hit_rate(), "derivation cache hit");
                return Arc::clone(view);
            }
        }

        self.stats.misses += 1;
        let view = Arc::new(derive(notes));
        self.entry = Some((generation, Arc::clone(&view)));
        view
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }
}
