//! Favorite-first ordering.

use std::cmp::Ordering;

use crate::models::AnnotatedSignal;

pub struct Ranker;

impl Ranker {
    /// Sort favorites before non-favorites, then tickers ascending
    /// with case-folded comparison. The sort is stable, so rows tying
    /// on both keys (same ticker and favorite status, multiple models)
    /// keep their relative input order.
    pub fn rank(mut rows: Vec<AnnotatedSignal>) -> Vec<AnnotatedSignal> {
        rows.sort_by(Self::compare);
        rows
    }

    fn compare(a: &AnnotatedSignal, b: &AnnotatedSignal) -> Ordering {
        b.favorite
            .cmp(&a.favorite)
            .then_with(|| {
                a.signal
                    .ticker
                    .to_lowercase()
                    .cmp(&b.signal.ticker.to_lowercase())
            })
    }
}
