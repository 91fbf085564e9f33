//! The text to playlist pipeline.
//!
//! text -> [`EmotionDetector`] -> emotion label -> [`map_emotion_to_mood`]
//! -> mood -> cached [`CatalogIndex`] -> [`Recommender`].

use crate::catalog::{CatalogCache, DataSourceError, GuardedCatalog, RecommendedTrack};
use crate::emotion::{DetectedEmotion, DetectorError, EmotionDetector};
use crate::mood::{map_emotion_to_mood, MoodBucket};
use crate::recommend::{Recommendation, Recommender};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("No emotion detector is configured")]
    DetectorUnavailable,

    #[error("Emotion detection failed: {0}")]
    Detector(#[from] DetectorError),

    #[error(transparent)]
    DataSource(#[from] DataSourceError),
}

/// Outcome of a full pipeline run, the detected emotion included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextRecommendation {
    pub emotion: DetectedEmotion,
    pub mood: MoodBucket,
    pub tracks: Vec<RecommendedTrack>,
}

pub struct RecommendationService {
    detector: Option<Arc<dyn EmotionDetector>>,
    catalog_path: PathBuf,
    catalog_cache: Arc<CatalogCache>,
    recommender: Mutex<Recommender>,
    default_count: usize,
}

impl RecommendationService {
    pub fn new(
        catalog_path: impl Into<PathBuf>,
        catalog_cache: Arc<CatalogCache>,
        detector: Option<Arc<dyn EmotionDetector>>,
        default_count: usize,
    ) -> Self {
        Self::with_recommender(
            catalog_path,
            catalog_cache,
            detector,
            default_count,
            Recommender::from_os_rng(),
        )
    }

    pub fn with_recommender(
        catalog_path: impl Into<PathBuf>,
        catalog_cache: Arc<CatalogCache>,
        detector: Option<Arc<dyn EmotionDetector>>,
        default_count: usize,
        recommender: Recommender,
    ) -> Self {
        Self {
            detector,
            catalog_path: catalog_path.into(),
            catalog_cache,
            recommender: Mutex::new(recommender),
            default_count,
        }
    }

    pub fn catalog_path(&self) -> &Path {
        &self.catalog_path
    }

    pub fn default_count(&self) -> usize {
        self.default_count
    }

    pub fn has_detector(&self) -> bool {
        self.detector.is_some()
    }

    /// The catalog, loaded on first use and shared afterwards.
    pub fn catalog(&self) -> Result<GuardedCatalog, DataSourceError> {
        self.catalog_cache.get_or_load(&self.catalog_path)
    }

    pub fn recommend_for_mood(
        &self,
        mood: MoodBucket,
        count: Option<usize>,
    ) -> Result<Recommendation, ServiceError> {
        let catalog = self.catalog()?;
        let count = count.unwrap_or(self.default_count);
        let recommendation = self
            .recommender
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .recommend(&catalog, mood, count);
        info!(
            "Recommended {}/{} {} tracks",
            recommendation.len(),
            count,
            mood
        );
        Ok(recommendation)
    }

    pub fn recommend_for_emotion(
        &self,
        emotion: &str,
        count: Option<usize>,
    ) -> Result<Recommendation, ServiceError> {
        let mood = map_emotion_to_mood(emotion);
        self.recommend_for_mood(mood, count)
    }

    pub async fn recommend_for_text(
        &self,
        text: &str,
        count: Option<usize>,
    ) -> Result<TextRecommendation, ServiceError> {
        let detector = self
            .detector
            .as_ref()
            .ok_or(ServiceError::DetectorUnavailable)?;
        let emotion = detector.detect(text).await?;
        let mood = map_emotion_to_mood(&emotion.label);
        info!("Detected emotion {} -> mood {}", emotion.label, mood);

        let recommendation = self.recommend_for_mood(mood, count)?;
        Ok(TextRecommendation {
            emotion,
            mood,
            tracks: recommendation.tracks,
        })
    }
}
