use crate::mood::MoodBucket;
use serde::{Deserialize, Serialize};

/// A catalog row that survived loading, annotated with its mood.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub track_name: String,
    pub artist_name: String,
    pub valence: f64,
    pub energy: f64,
    pub artwork_url: String,
    pub track_url: String,
    pub mood: MoodBucket,
}

/// The display fields handed to callers of the recommender.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecommendedTrack {
    pub track_name: String,
    pub artist_name: String,
    pub valence: f64,
    pub energy: f64,
    pub artwork_url: String,
    pub track_url: String,
}

impl From<&Track> for RecommendedTrack {
    fn from(track: &Track) -> Self {
        RecommendedTrack {
            track_name: track.track_name.clone(),
            artist_name: track.artist_name.clone(),
            valence: track.valence,
            energy: track.energy,
            artwork_url: track.artwork_url.clone(),
            track_url: track.track_url.clone(),
        }
    }
}
