//! Multi-model AND/OR filtering.

use std::collections::{HashMap, HashSet};

use crate::models::{Combinator, FilterCriteria, Signal};

pub struct ModelCombinator;

impl ModelCombinator {
    /// Keep signals for tickers whose model set satisfies the
    /// combinator chain over the ordered model selection.
    ///
    /// Presence checks are reduced strictly left-to-right: with
    /// selection `[A, B, C]` and combinators `[AND, OR]`, a ticker
    /// qualifies iff `(has(A) && has(B)) || has(C)`. There is no
    /// parenthesization beyond that accumulation. A missing combinator
    /// defaults to OR; excess combinators are ignored.
    ///
    /// Of a qualifying ticker's signals, only those produced by a
    /// selected model are surfaced. Input order is preserved.
    pub fn filter(signals: &[Signal], criteria: &FilterCriteria) -> Vec<Signal> {
        let selection = &criteria.model_selection;
        if selection.is_empty() {
            return signals.to_vec();
        }

        let models_by_ticker = Self::group_models(signals);

        let qualifying: HashSet<&str> = models_by_ticker
            .iter()
            .filter(|(_, models)| Self::qualifies(models, criteria))
            .map(|(ticker, _)| *ticker)
            .collect();

        let selected: HashSet<&str> = selection.iter().map(String::as_str).collect();

        signals
            .iter()
            .filter(|signal| {
                qualifying.contains(signal.ticker.as_str())
                    && signal
                        .ai_model
                        .as_deref()
                        .is_some_and(|model| selected.contains(model))
            })
            .cloned()
            .collect()
    }

    /// Models seen per ticker. Records without a ticker are skipped;
    /// records without a model still register their ticker but
    /// contribute nothing to its model set.
    fn group_models(signals: &[Signal]) -> HashMap<&str, HashSet<&str>> {
        let mut grouped: HashMap<&str, HashSet<&str>> = HashMap::new();
        for signal in signals {
            if !signal.has_ticker() {
                continue;
            }
            let models = grouped.entry(signal.ticker.as_str()).or_default();
            if let Some(model) = signal.ai_model.as_deref() {
                models.insert(model);
            }
        }
        grouped
    }

    /// Left-to-right reduction of the presence chain for one ticker.
    fn qualifies(models: &HashSet<&str>, criteria: &FilterCriteria) -> bool {
        let selection = &criteria.model_selection;
        let mut acc = models.contains(selection[0].as_str());
        for (i, model) in selection.iter().enumerate().skip(1) {
            let present = models.contains(model.as_str());
            acc = match criteria.combinator_at(i) {
                Combinator::And => acc && present,
                Combinator::Or => acc || present,
            };
        }
        acc
    }
}
