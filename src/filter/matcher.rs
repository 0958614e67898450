//! Ticker substring matching.

use crate::models::Signal;

pub struct TickerMatcher;

impl TickerMatcher {
    /// Keep signals whose ticker contains at least one query term,
    /// case-folded on both sides. An empty query is the identity
    /// filter. Records without a ticker can never match, so they only
    /// survive when no query is active.
    pub fn filter(signals: &[Signal], ticker_query: &[String]) -> Vec<Signal> {
        if ticker_query.is_empty() {
            return signals.to_vec();
        }

        let terms: Vec<String> = ticker_query.iter().map(|t| t.to_lowercase()).collect();

        signals
            .iter()
            .filter(|signal| {
                if !signal.has_ticker() {
                    return false;
                }
                let ticker = signal.ticker.to_lowercase();
                terms.iter().any(|term| ticker.contains(term.as_str()))
            })
            .cloned()
            .collect()
    }
}
