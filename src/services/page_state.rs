//! Pagination state persistence interface.

use std::error::Error;

use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

/// The page request a user last left the dashboard on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    pub page_index: usize,
    pub page_size: usize,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    /// Repair a persisted request so it is always usable by the
    /// engine: a zero page size falls back to the default, an
    /// oversized one is capped.
    pub fn sanitized(self) -> Self {
        let page_size = if self.page_size == 0 {
            DEFAULT_PAGE_SIZE
        } else {
            self.page_size.min(MAX_PAGE_SIZE)
        };
        Self {
            page_index: self.page_index,
            page_size,
        }
    }
}

/// Persists the page request across dashboard reloads.
pub trait PageStateStore {
    fn load(&self) -> Result<PageRequest, Box<dyn Error>>;

    fn save(&mut self, request: PageRequest) -> Result<(), Box<dyn Error>>;
}

#[derive(Debug, Default)]
pub struct InMemoryPageState {
    request: Option<PageRequest>,
}

impl InMemoryPageState {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PageStateStore for InMemoryPageState {
    fn load(&self) -> Result<PageRequest, Box<dyn Error>> {
        Ok(self.request.unwrap_or_default().sanitized())
    }

    fn save(&mut self, request: PageRequest) -> Result<(), Box<dyn Error>> {
        self.request = Some(request);
        Ok(())
    }
}
