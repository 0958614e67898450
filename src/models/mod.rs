//! Shared data models spanning the engine layers.

pub mod criteria;
pub mod page;
pub mod signal;

pub use criteria::{Combinator, FavoriteSet, FilterCriteria};
pub use page::{AnnotatedSignal, RankedPage};
pub use signal::{Action, Signal};
