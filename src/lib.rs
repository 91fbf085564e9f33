//! MoodTune Library
//!
//! Emotion to mood mapping, mood annotated track catalogs and random
//! recommendations, shared by the server and the command line tools.

pub mod catalog;
pub mod config;
pub mod emotion;
pub mod mood;
pub mod recommend;
pub mod server;
pub mod service;

// Re-export commonly used types for convenience
pub use catalog::{load_catalog, CatalogCache, CatalogIndex, DataSourceError, RecommendedTrack, Track};
pub use mood::{classify, map_emotion_to_mood, MoodBucket};
pub use recommend::{recommend, Recommendation, Recommender};
pub use server::{run_server, RequestsLoggingLevel};
pub use service::{RecommendationService, ServiceError};
