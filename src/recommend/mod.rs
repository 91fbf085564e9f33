//! Random, duplicate-free sampling of tracks for a mood.

use crate::catalog::{CatalogIndex, RecommendedTrack};
use crate::mood::MoodBucket;
use rand::rngs::StdRng;
use rand::seq::index;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

pub const DEFAULT_RECOMMENDATION_COUNT: usize = 5;

/// Tracks sampled for a mood, ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub mood: MoodBucket,
    pub tracks: Vec<RecommendedTrack>,
}

impl Recommendation {
    /// True when no track in the catalog matches the mood.
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }
}

/// Samples from a [`CatalogIndex`] with an injectable random source.
pub struct Recommender<R = StdRng> {
    rng: R,
}

impl Recommender<StdRng> {
    pub fn from_os_rng() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Deterministic recommender, the same seed gives the same samples.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Recommender<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Draws up to `n` distinct tracks labelled `mood`.
    ///
    /// When fewer than `n` tracks match, all of them are returned (in random
    /// order). An empty partition gives an empty recommendation.
    pub fn recommend(&mut self, catalog: &CatalogIndex, mood: MoodBucket, n: usize) -> Recommendation {
        Recommendation {
            mood,
            tracks: sample_tracks(&mut self.rng, catalog, mood, n),
        }
    }
}

/// One-off recommendation using the thread-local generator.
pub fn recommend(catalog: &CatalogIndex, mood: MoodBucket, n: usize) -> Vec<RecommendedTrack> {
    sample_tracks(&mut rand::rng(), catalog, mood, n)
}

fn sample_tracks<R: Rng + ?Sized>(
    rng: &mut R,
    catalog: &CatalogIndex,
    mood: MoodBucket,
    n: usize,
) -> Vec<RecommendedTrack> {
    let candidates = catalog.by_mood(mood);
    let amount = n.min(candidates.len());
    index::sample(rng, candidates.len(), amount)
        .into_iter()
        .map(|i| RecommendedTrack::from(candidates[i]))
        .collect()
}
