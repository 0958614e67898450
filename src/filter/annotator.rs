//! Favorite flag derivation.

use crate::models::{AnnotatedSignal, FavoriteSet, Signal};

pub struct FavoriteAnnotator;

impl FavoriteAnnotator {
    /// Wrap each signal with whether its ticker is favorited. The
    /// favorite set is read-only here; toggling lives with the
    /// [`crate::services::FavoriteStore`] collaborator.
    pub fn annotate(signals: Vec<Signal>, favorites: &FavoriteSet) -> Vec<AnnotatedSignal> {
        signals
            .into_iter()
            .map(|signal| {
                let favorite = favorites.contains(&signal.ticker);
                AnnotatedSignal::new(signal, favorite)
            })
            .collect()
    }
}
