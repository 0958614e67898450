//! Collaborator seams around the engine: report fetch, favorite
//! persistence, page-state persistence. Each trait has an in-memory
//! implementation so the crate runs end to end without any external
//! system.

pub mod favorites;
pub mod page_state;
pub mod reports;

pub use favorites::{FavoriteStore, InMemoryFavoriteStore};
pub use page_state::{InMemoryPageState, PageRequest, PageStateStore};
pub use reports::{SignalReportProvider, StaticReportProvider};
