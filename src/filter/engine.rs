//! Orchestration of the filter pipeline.

use crate::error::ConfigurationError;
use crate::filter::annotator::FavoriteAnnotator;
use crate::filter::combinator::ModelCombinator;
use crate::filter::matcher::TickerMatcher;
use crate::filter::paginator::Paginator;
use crate::filter::ranker::Ranker;
use crate::models::{FavoriteSet, FilterCriteria, RankedPage, Signal};

pub struct FilterEngine;

impl FilterEngine {
    /// Run the full pipeline: ticker match, model combination,
    /// favorite annotation, ranking, pagination.
    ///
    /// Validation happens up front, so a [`ConfigurationError`] is
    /// returned before any stage runs and never alongside partial
    /// output. The call is pure: inputs are never mutated and
    /// identical inputs produce structurally equal pages.
    pub fn apply(
        signals: &[Signal],
        criteria: &FilterCriteria,
        favorites: &FavoriteSet,
        page_index: usize,
        page_size: usize,
    ) -> Result<RankedPage, ConfigurationError> {
        if page_size == 0 {
            return Err(ConfigurationError::InvalidPageSize(page_size));
        }
        criteria.validate()?;

        let matched = TickerMatcher::filter(signals, &criteria.ticker_query);
        let combined = ModelCombinator::filter(&matched, criteria);
        let annotated = FavoriteAnnotator::annotate(combined, favorites);
        let ranked = Ranker::rank(annotated);
        Paginator::paginate(ranked, page_index, page_size)
    }
}
