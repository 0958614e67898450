//! Collaborator seam tests: reports, favorites, page state

use chrono::NaiveDate;
use signalboard::config::DEFAULT_PAGE_SIZE;
use signalboard::services::{
    FavoriteStore, InMemoryFavoriteStore, InMemoryPageState, PageRequest, PageStateStore,
    SignalReportProvider, StaticReportProvider,
};
use signalboard::{FavoriteSet, FilterCriteria, FilterEngine};

fn date(s: &str) -> NaiveDate {
    s.parse().expect("valid test date")
}

#[test]
fn test_report_provider_keys_by_date() {
    let mut provider = StaticReportProvider::new();
    let raw = r#"[
        { "ticker": "AAPL", "aiModel": "atlas-v2", "action": "buy",
          "probability": 0.7, "timestamp": "2026-08-28T13:30:00Z" },
        { "ticker": "MSFT", "aiModel": "oracle-7", "action": "sell",
          "probability": 0.6, "timestamp": "2026-08-28T13:30:00Z" }
    ]"#;
    let count = provider.load_json(date("2026-08-28"), raw).unwrap();
    assert_eq!(count, 2);

    let signals = provider.signals_for(date("2026-08-28")).unwrap();
    assert_eq!(signals.len(), 2);
    assert!(provider.signals_for(date("2026-08-27")).unwrap().is_empty());
    assert_eq!(provider.available_dates().unwrap(), vec![date("2026-08-28")]);
}

#[test]
fn test_loaded_report_flows_through_engine() {
    let mut provider = StaticReportProvider::new();
    let raw = r#"[
        { "ticker": "NVDA", "aiModel": "oracle-7", "action": "buy",
          "probability": 0.82, "timestamp": "2026-08-28T13:30:00Z" },
        { "ticker": "AAPL", "aiModel": "atlas-v2", "action": "hold",
          "probability": 0.55, "timestamp": "2026-08-28T13:30:00Z" }
    ]"#;
    provider.load_json(date("2026-08-28"), raw).unwrap();

    let mut favorites = InMemoryFavoriteStore::new();
    favorites.add("NVDA").unwrap();

    let signals = provider.signals_for(date("2026-08-28")).unwrap();
    let page = FilterEngine::apply(
        &signals,
        &FilterCriteria::empty(),
        &favorites.snapshot().unwrap(),
        0,
        DEFAULT_PAGE_SIZE,
    )
    .unwrap();

    assert_eq!(page.rows[0].signal.ticker, "NVDA");
    assert!(page.rows[0].favorite);
    assert_eq!(page.rows[1].signal.ticker, "AAPL");
}

#[test]
fn test_favorite_toggle_round_trips() {
    let mut store = InMemoryFavoriteStore::new();
    assert!(store.toggle("TSLA").unwrap());
    assert_eq!(
        store.snapshot().unwrap(),
        FavoriteSet::from(["TSLA".to_string()])
    );
    assert!(!store.toggle("TSLA").unwrap());
    assert!(store.snapshot().unwrap().is_empty());
}

#[test]
fn test_favorite_add_remove() {
    let mut store = InMemoryFavoriteStore::new();
    store.add("AAPL").unwrap();
    store.add("AAPL").unwrap();
    store.add("MSFT").unwrap();
    store.remove("AAPL").unwrap();
    assert_eq!(
        store.snapshot().unwrap(),
        FavoriteSet::from(["MSFT".to_string()])
    );
}

#[test]
fn test_page_state_defaults_when_empty() {
    let state = InMemoryPageState::new();
    let request = state.load().unwrap();
    assert_eq!(request.page_index, 0);
    assert_eq!(request.page_size, DEFAULT_PAGE_SIZE);
}

#[test]
fn test_page_state_survives_save_and_load() {
    let mut state = InMemoryPageState::new();
    state
        .save(PageRequest {
            page_index: 3,
            page_size: 25,
        })
        .unwrap();
    let request = state.load().unwrap();
    assert_eq!(request.page_index, 3);
    assert_eq!(request.page_size, 25);
}

#[test]
fn test_corrupted_page_size_is_repaired_on_load() {
    let mut state = InMemoryPageState::new();
    state
        .save(PageRequest {
            page_index: 0,
            page_size: 0,
        })
        .unwrap();
    assert_eq!(state.load().unwrap().page_size, DEFAULT_PAGE_SIZE);

    state
        .save(PageRequest {
            page_index: 0,
            page_size: 10_000,
        })
        .unwrap();
    assert_eq!(
        state.load().unwrap().page_size,
        signalboard::config::MAX_PAGE_SIZE
    );
}
