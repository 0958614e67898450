//! Favorite ticker persistence interface.

use std::collections::BTreeSet;
use std::error::Error;

use tracing::debug;

use crate::models::FavoriteSet;

/// Owns the set of favorited tickers. The engine only ever reads a
/// snapshot; all mutation goes through this collaborator.
pub trait FavoriteStore {
    fn add(&mut self, ticker: &str) -> Result<(), Box<dyn Error>>;

    fn remove(&mut self, ticker: &str) -> Result<(), Box<dyn Error>>;

    /// Flip a ticker's favorite status; returns the new status.
    fn toggle(&mut self, ticker: &str) -> Result<bool, Box<dyn Error>>;

    fn snapshot(&self) -> Result<FavoriteSet, Box<dyn Error>>;
}

/// BTreeSet-backed store, the non-persistent stand-in for the
/// dashboard's key-value storage.
#[derive(Debug, Default)]
pub struct InMemoryFavoriteStore {
    favorites: BTreeSet<String>,
}

impl InMemoryFavoriteStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FavoriteStore for InMemoryFavoriteStore {
    fn add(&mut self, ticker: &str) -> Result<(), Box<dyn Error>> {
        self.favorites.insert(ticker.to_string());
        Ok(())
    }

    fn remove(&mut self, ticker: &str) -> Result<(), Box<dyn Error>> {
        self.favorites.remove(ticker);
        Ok(())
    }

    fn toggle(&mut self, ticker: &str) -> Result<bool, Box<dyn Error>> {
        let now_favorite = if self.favorites.remove(ticker) {
            false
        } else {
            self.favorites.insert(ticker.to_string());
            true
        };
        debug!(ticker, now_favorite, "toggled favorite");
        Ok(now_favorite)
    }

    fn snapshot(&self) -> Result<FavoriteSet, Box<dyn Error>> {
        Ok(self.favorites.clone())
    }
}
