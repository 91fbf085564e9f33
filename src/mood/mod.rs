//! Mood buckets and the two classifiers that produce them.
//!
//! Emotion labels coming from the text model are mapped with
//! [`map_emotion_to_mood`], catalog tracks are labelled from their audio
//! features with [`classify`].

mod emotion_map;
mod track_classifier;

pub use emotion_map::{known_emotions, map_emotion_to_mood, DEFAULT_MOOD, EMOTION_TO_MOOD};
pub use track_classifier::classify;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Coarse mood category driving recommendations.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodBucket {
    Happy,
    Sad,
    Energetic,
    Chill,
}

impl MoodBucket {
    pub const ALL: [MoodBucket; 4] = [
        MoodBucket::Happy,
        MoodBucket::Sad,
        MoodBucket::Energetic,
        MoodBucket::Chill,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MoodBucket::Happy => "happy",
            MoodBucket::Sad => "sad",
            MoodBucket::Energetic => "energetic",
            MoodBucket::Chill => "chill",
        }
    }
}

impl fmt::Display for MoodBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown mood \"{0}\", expected one of happy, sad, energetic, chill")]
pub struct ParseMoodError(pub String);

impl FromStr for MoodBucket {
    type Err = ParseMoodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "happy" => Ok(MoodBucket::Happy),
            "sad" => Ok(MoodBucket::Sad),
            "energetic" => Ok(MoodBucket::Energetic),
            "chill" => Ok(MoodBucket::Chill),
            _ => Err(ParseMoodError(s.to_owned())),
        }
    }
}
