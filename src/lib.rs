//! Signal filter & ranking engine for the daily signals dashboard.
//!
//! Takes the raw list of signals for a reporting date plus the user's
//! filter criteria (ticker substrings, multi-model selection with
//! AND/OR combinators) and favorite markers, and produces a
//! deterministic, paginated, favorite-first ranked view.
//!
//! The pipeline is pure: every stage is a total function over its
//! inputs, nothing is mutated, and identical inputs always yield
//! structurally identical pages. Report fetching, favorite persistence
//! and page-state persistence live behind the seams in [`services`].

pub mod config;
pub mod error;
pub mod filter;
pub mod logging;
pub mod models;
pub mod services;

pub use error::ConfigurationError;
pub use filter::engine::FilterEngine;
pub use models::{
    Action, AnnotatedSignal, Combinator, FavoriteSet, FilterCriteria, RankedPage, Signal,
};
