use chrono::{NaiveDate, Utc};
use signalboard::filter::FilterCache;
use signalboard::services::{
    FavoriteStore, InMemoryFavoriteStore, InMemoryPageState, PageStateStore, SignalReportProvider,
    StaticReportProvider,
};
use signalboard::{Action, Combinator, FilterCriteria, RankedPage, Signal};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    signalboard::logging::init_logging();

    let date = NaiveDate::from_ymd_opt(2026, 8, 28).ok_or("bad demo date")?;
    let provider = StaticReportProvider::new().with_report(date, sample_report());

    let mut favorites = InMemoryFavoriteStore::new();
    favorites.toggle("NVDA")?;

    let page_state = InMemoryPageState::new();
    let request = page_state.load()?;

    let criteria = FilterCriteria::empty().with_models(
        vec!["atlas-v2".to_string(), "oracle-7".to_string()],
        vec![Combinator::Or],
    );

    let signals = provider.signals_for(date)?;
    let mut cache = FilterCache::new();
    let page = cache.get_or_compute(
        &signals,
        &criteria,
        &favorites.snapshot()?,
        request.page_index,
        request.page_size,
    )?;

    println!("Signals for {} (models: atlas-v2 OR oracle-7)", date);
    print_page(&page);

    Ok(())
}

fn print_page(page: &RankedPage) {
    println!(
        "  Page {}/{} ({} signals total)",
        page.page_index + 1,
        page.total_pages(),
        page.total_count
    );
    for row in &page.rows {
        let star = if row.favorite { "*" } else { " " };
        println!(
            "  {} {:<6} {:<10} {:?} p={:.2}",
            star,
            row.signal.ticker,
            row.signal.ai_model.as_deref().unwrap_or("-"),
            row.signal.action,
            row.signal.probability.unwrap_or(0.0),
        );
    }
}

fn sample_report() -> Vec<Signal> {
    let ts = Utc::now();
    vec![
        Signal::new("AAPL", ts)
            .with_model("atlas-v2")
            .with_action(Action::Buy)
            .with_probability(0.71)
            .with_prices(232.10, 225.00, 245.00),
        Signal::new("AAPL", ts)
            .with_model("oracle-7")
            .with_action(Action::Hold)
            .with_probability(0.55),
        Signal::new("MSFT", ts)
            .with_model("atlas-v2")
            .with_action(Action::Sell)
            .with_probability(0.63)
            .with_prices(508.40, 520.00, 480.00),
        Signal::new("NVDA", ts)
            .with_model("oracle-7")
            .with_action(Action::Buy)
            .with_probability(0.82)
            .with_prices(178.90, 170.00, 195.00),
    ]
}
