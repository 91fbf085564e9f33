//! Mood derivation from a track's valence and energy.

use super::MoodBucket;

/// Labels a track from its audio features.
///
/// Rules are evaluated in order and the first match wins. All comparisons
/// are strict, so a value sitting exactly on a threshold falls through to
/// the next rule. The regions overlap in raw coordinates; order decides.
pub fn classify(valence: f64, energy: f64) -> MoodBucket {
    if valence > 0.6 && energy > 0.6 {
        MoodBucket::Happy
    } else if valence < 0.4 && energy < 0.5 {
        MoodBucket::Sad
    } else if energy > 0.7 && valence < 0.6 {
        MoodBucket::Energetic
    } else {
        MoodBucket::Chill
    }
}
