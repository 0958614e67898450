//! Caller-owned memoization for the filter pipeline.
//!
//! The engine is recomputed whenever any of its five inputs changes.
//! Recomputation is never incorrect (every stage is pure), just
//! wasted, so the cache is a single-entry map from a structural
//! fingerprint of the inputs to the last computed page.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use tracing::debug;

use crate::error::ConfigurationError;
use crate::filter::engine::FilterEngine;
use crate::models::{FavoriteSet, FilterCriteria, RankedPage, Signal};

/// Structural hash over all engine inputs. Floats are hashed through
/// their bit patterns and timestamps through epoch milliseconds;
/// favorites iterate in BTreeSet order, so equal inputs always
/// fingerprint equally.
pub fn fingerprint(
    signals: &[Signal],
    criteria: &FilterCriteria,
    favorites: &FavoriteSet,
    page_index: usize,
    page_size: usize,
) -> u64 {
    let mut hasher = DefaultHasher::new();

    signals.len().hash(&mut hasher);
    for signal in signals {
        hash_signal(signal, &mut hasher);
    }

    criteria.ticker_query.hash(&mut hasher);
    criteria.model_selection.hash(&mut hasher);
    criteria.combinators.hash(&mut hasher);

    favorites.len().hash(&mut hasher);
    for ticker in favorites {
        ticker.hash(&mut hasher);
    }

    page_index.hash(&mut hasher);
    page_size.hash(&mut hasher);

    hasher.finish()
}

fn hash_signal(signal: &Signal, hasher: &mut impl Hasher) {
    signal.ticker.hash(hasher);
    signal.ai_model.hash(hasher);
    signal.action.hash(hasher);
    hash_opt_f64(signal.probability, hasher);
    hash_opt_f64(signal.entry_price, hasher);
    hash_opt_f64(signal.stop_loss, hasher);
    hash_opt_f64(signal.take_profit, hasher);
    signal.timestamp.timestamp_millis().hash(hasher);
}

fn hash_opt_f64(value: Option<f64>, hasher: &mut impl Hasher) {
    match value {
        Some(v) => {
            1u8.hash(hasher);
            v.to_bits().hash(hasher);
        }
        None => 0u8.hash(hasher),
    }
}

/// Single-entry memoization cache. The dashboard renders one view at a
/// time, so one slot is all invalidation ever needs.
#[derive(Debug, Default)]
pub struct FilterCache {
    entry: Option<(u64, RankedPage)>,
}

impl FilterCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached page when the input fingerprint is unchanged,
    /// otherwise run the pipeline and cache the result. Errors are
    /// never cached.
    pub fn get_or_compute(
        &mut self,
        signals: &[Signal],
        criteria: &FilterCriteria,
        favorites: &FavoriteSet,
        page_index: usize,
        page_size: usize,
    ) -> Result<RankedPage, ConfigurationError> {
        let key = fingerprint(signals, criteria, favorites, page_index, page_size);

        if let Some((cached_key, page)) = &self.entry {
            if *cached_key == key {
                debug!(key, "filter cache hit");
                return Ok(page.clone());
            }
        }

        debug!(key, "filter cache miss, recomputing");
        let page = FilterEngine::apply(signals, criteria, favorites, page_index, page_size)?;
        self.entry = Some((key, page.clone()));
        Ok(page)
    }

    pub fn invalidate(&mut self) {
        self.entry = None;
    }

    pub fn is_empty(&self) -> bool {
        self.entry.is_none()
    }
}
