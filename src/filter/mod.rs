//! Filter & ranking pipeline stages.
//!
//! Each stage is a pure function; [`engine::FilterEngine`] composes
//! them and [`cache::FilterCache`] memoizes the composition for
//! callers that re-invoke on every state change.

pub mod annotator;
pub mod cache;
pub mod combinator;
pub mod engine;
pub mod matcher;
pub mod paginator;
pub mod ranker;

pub use annotator::FavoriteAnnotator;
pub use cache::{fingerprint, FilterCache};
pub use combinator::ModelCombinator;
pub use engine::FilterEngine;
pub use matcher::TickerMatcher;
pub use paginator::Paginator;
pub use ranker::Ranker;
