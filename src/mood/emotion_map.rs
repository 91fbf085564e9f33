//! Emotion label to mood bucket lookup.

use super::MoodBucket;

/// Bucket returned for any label outside [`EMOTION_TO_MOOD`].
pub const DEFAULT_MOOD: MoodBucket = MoodBucket::Chill;

/// The fixed vocabulary of emotion labels understood by the mapper.
pub const EMOTION_TO_MOOD: [(&str, MoodBucket); 25] = [
    ("admiration", MoodBucket::Happy),
    ("amusement", MoodBucket::Happy),
    ("approval", MoodBucket::Happy),
    ("caring", MoodBucket::Chill),
    ("desire", MoodBucket::Chill),
    ("excitement", MoodBucket::Energetic),
    ("gratitude", MoodBucket::Happy),
    ("joy", MoodBucket::Happy),
    ("love", MoodBucket::Chill),
    ("optimism", MoodBucket::Happy),
    ("pride", MoodBucket::Happy),
    ("relief", MoodBucket::Chill),
    ("surprise", MoodBucket::Energetic),
    ("anger", MoodBucket::Energetic),
    ("disapproval", MoodBucket::Sad),
    ("disgust", MoodBucket::Sad),
    ("embarrassment", MoodBucket::Sad),
    ("fear", MoodBucket::Sad),
    ("grief", MoodBucket::Sad),
    ("nervousness", MoodBucket::Sad),
    ("remorse", MoodBucket::Sad),
    ("sadness", MoodBucket::Sad),
    ("confusion", MoodBucket::Chill),
    ("curiosity", MoodBucket::Chill),
    ("neutral", MoodBucket::Chill),
];

/// Maps an emotion label to its mood bucket.
///
/// Matching is exact after lower-casing. Labels that are not in the table
/// fall back to [`DEFAULT_MOOD`].
pub fn map_emotion_to_mood(emotion: &str) -> MoodBucket {
    let emotion = emotion.to_lowercase();
    EMOTION_TO_MOOD
        .iter()
        .find(|(label, _)| *label == emotion)
        .map(|(_, mood)| *mood)
        .unwrap_or(DEFAULT_MOOD)
}

pub fn known_emotions() -> impl Iterator<Item = (&'static str, MoodBucket)> {
    EMOTION_TO_MOOD.iter().copied()
}
