//! User-composed filter criteria.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::error::ConfigurationError;

/// Per-adjacent-pair operator chaining model-presence checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Combinator {
    And,
    Or,
}

/// Set of favorited ticker symbols, owned and mutated outside the
/// engine. BTreeSet so iteration (and the cache fingerprint built from
/// it) is deterministic.
pub type FavoriteSet = BTreeSet<String>;

/// The filter state a user has composed in the dashboard.
///
/// `model_selection` is a sequence, not a set: combinator evaluation is
/// positional, so order matters and duplicates are rejected at the
/// boundary. `combinators` should hold one entry per adjacent pair of
/// selected models; missing entries fall back to [`Combinator::Or`]
/// and excess entries are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    #[serde(default)]
    pub ticker_query: Vec<String>,
    #[serde(default)]
    pub model_selection: Vec<String>,
    #[serde(default)]
    pub combinators: Vec<Combinator>,
}

impl FilterCriteria {
    /// Criteria that let every signal through.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_ticker_query(mut self, terms: Vec<String>) -> Self {
        self.ticker_query = terms;
        self
    }

    pub fn with_models(mut self, selection: Vec<String>, combinators: Vec<Combinator>) -> Self {
        self.model_selection = selection;
        self.combinators = combinators;
        self
    }

    /// Combinator for the pair ending at selection position `i`
    /// (`i >= 1`), defaulting to OR when the chain is short.
    pub fn combinator_at(&self, i: usize) -> Combinator {
        debug_assert!(i >= 1);
        self.combinators.get(i - 1).copied().unwrap_or(Combinator::Or)
    }

    /// Reject criteria the pipeline cannot evaluate meaningfully.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let mut seen = BTreeSet::new();
        for model in &self.model_selection {
            if !seen.insert(model.as_str()) {
                return Err(ConfigurationError::DuplicateModel(model.clone()));
            }
        }
        Ok(())
    }
}
