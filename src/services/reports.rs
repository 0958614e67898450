//! Signal report provider interface for the daily report source.

use std::collections::HashMap;
use std::error::Error;

use chrono::NaiveDate;
use tracing::debug;

use crate::models::Signal;

/// Supplies the raw signal list for a reporting date. The engine never
/// fetches; it assumes the report has already been retrieved and
/// individual malformed records are tolerated downstream.
pub trait SignalReportProvider {
    fn signals_for(&self, date: NaiveDate) -> Result<Vec<Signal>, Box<dyn Error>>;

    /// Dates a report exists for, ascending.
    fn available_dates(&self) -> Result<Vec<NaiveDate>, Box<dyn Error>>;
}

/// In-memory provider serving preloaded per-date reports. Doubles as
/// the JSON loader for the demo binary and tests.
#[derive(Debug, Default)]
pub struct StaticReportProvider {
    reports: HashMap<NaiveDate, Vec<Signal>>,
}

impl StaticReportProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_report(mut self, date: NaiveDate, signals: Vec<Signal>) -> Self {
        self.reports.insert(date, signals);
        self
    }

    /// Parse a raw JSON report (an array of signal records) for a date.
    pub fn load_json(&mut self, date: NaiveDate, raw: &str) -> Result<usize, Box<dyn Error>> {
        let signals: Vec<Signal> = serde_json::from_str(raw)?;
        let count = signals.len();
        debug!(%date, count, "loaded signal report");
        self.reports.insert(date, signals);
        Ok(count)
    }
}

impl SignalReportProvider for StaticReportProvider {
    fn signals_for(&self, date: NaiveDate) -> Result<Vec<Signal>, Box<dyn Error>> {
        Ok(self.reports.get(&date).cloned().unwrap_or_default())
    }

    fn available_dates(&self) -> Result<Vec<NaiveDate>, Box<dyn Error>> {
        let mut dates: Vec<NaiveDate> = self.reports.keys().copied().collect();
        dates.sort();
        Ok(dates)
    }
}
