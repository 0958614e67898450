//! Ranked page output types.

use serde::{Deserialize, Serialize};

use crate::models::signal::Signal;

/// A signal plus its derived favorite flag.
///
/// The flag exists only for ranking and display; it is computed from
/// the favorite set on every call and never persisted with the signal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedSignal {
    #[serde(flatten)]
    pub signal: Signal,
    pub favorite: bool,
}

impl AnnotatedSignal {
    pub fn new(signal: Signal, favorite: bool) -> Self {
        Self { signal, favorite }
    }
}

/// The final, paginated, sorted slice of filtered signals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedPage {
    pub rows: Vec<AnnotatedSignal>,
    pub page_index: usize,
    pub page_size: usize,
    pub total_count: usize,
    pub has_next: bool,
    pub has_previous: bool,
}

impl RankedPage {
    /// Number of pages the full ranked list spans at this page size.
    pub fn total_pages(&self) -> usize {
        self.total_count.div_ceil(self.page_size.max(1))
    }
}
