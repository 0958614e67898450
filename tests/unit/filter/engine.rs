//! Unit tests for the pipeline orchestrator

use chrono::Utc;
use signalboard::{
    Combinator, ConfigurationError, FavoriteSet, FilterCriteria, FilterEngine, Signal,
};

fn sig(ticker: &str, model: &str) -> Signal {
    Signal::new(ticker, Utc::now()).with_model(model)
}

fn report() -> Vec<Signal> {
    vec![sig("AAPL", "A"), sig("AAPL", "B"), sig("MSFT", "A")]
}

fn pairs(page: &signalboard::RankedPage) -> Vec<(String, String)> {
    page.rows
        .iter()
        .map(|r| {
            (
                r.signal.ticker.clone(),
                r.signal.ai_model.clone().unwrap_or_default(),
            )
        })
        .collect()
}

#[test]
fn test_and_scenario_keeps_only_fully_covered_ticker() {
    let criteria = FilterCriteria::empty().with_models(
        vec!["A".to_string(), "B".to_string()],
        vec![Combinator::And],
    );
    let page =
        FilterEngine::apply(&report(), &criteria, &FavoriteSet::new(), 0, 10).unwrap();

    assert_eq!(
        pairs(&page),
        vec![
            ("AAPL".to_string(), "A".to_string()),
            ("AAPL".to_string(), "B".to_string())
        ]
    );
    assert_eq!(page.total_count, 2);
    assert!(!page.has_next);
    assert!(!page.has_previous);
}

#[test]
fn test_singleton_selection_scenario() {
    let criteria =
        FilterCriteria::empty().with_models(vec!["A".to_string()], vec![]);
    let page =
        FilterEngine::apply(&report(), &criteria, &FavoriteSet::new(), 0, 10).unwrap();

    assert_eq!(
        pairs(&page),
        vec![
            ("AAPL".to_string(), "A".to_string()),
            ("MSFT".to_string(), "A".to_string())
        ]
    );
}

#[test]
fn test_zero_page_size_fails_before_pipeline() {
    let result = FilterEngine::apply(
        &report(),
        &FilterCriteria::empty(),
        &FavoriteSet::new(),
        0,
        0,
    );
    assert_eq!(result, Err(ConfigurationError::InvalidPageSize(0)));
}

#[test]
fn test_duplicate_model_selection_is_rejected() {
    let criteria = FilterCriteria::empty()
        .with_models(vec!["A".to_string(), "A".to_string()], vec![Combinator::And]);
    let result = FilterEngine::apply(&report(), &criteria, &FavoriteSet::new(), 0, 10);
    assert_eq!(
        result,
        Err(ConfigurationError::DuplicateModel("A".to_string()))
    );
}

#[test]
fn test_favorites_rank_ahead_of_alphabetical_order() {
    let favorites: FavoriteSet = ["MSFT".to_string()].into_iter().collect();
    let page = FilterEngine::apply(&report(), &FilterCriteria::empty(), &favorites, 0, 10)
        .unwrap();

    assert_eq!(
        pairs(&page),
        vec![
            ("MSFT".to_string(), "A".to_string()),
            ("AAPL".to_string(), "A".to_string()),
            ("AAPL".to_string(), "B".to_string())
        ]
    );
    assert!(page.rows[0].favorite);
}

#[test]
fn test_ticker_query_and_model_selection_compose() {
    let criteria = FilterCriteria::empty()
        .with_ticker_query(vec!["aa".to_string()])
        .with_models(vec!["A".to_string()], vec![]);
    let page =
        FilterEngine::apply(&report(), &criteria, &FavoriteSet::new(), 0, 10).unwrap();
    assert_eq!(pairs(&page), vec![("AAPL".to_string(), "A".to_string())]);
}

#[test]
fn test_apply_is_idempotent() {
    let signals = report();
    let criteria = FilterCriteria::empty().with_models(
        vec!["A".to_string(), "B".to_string()],
        vec![Combinator::Or],
    );
    let favorites: FavoriteSet = ["AAPL".to_string()].into_iter().collect();

    let first = FilterEngine::apply(&signals, &criteria, &favorites, 0, 2).unwrap();
    let second = FilterEngine::apply(&signals, &criteria, &favorites, 0, 2).unwrap();
    assert_eq!(first, second);
}
