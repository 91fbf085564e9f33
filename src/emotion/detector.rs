//! Emotion detector trait definition.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Best-guess emotion for a piece of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedEmotion {
    /// Lower-cased label, as fed to the mood mapper.
    pub label: String,
    /// Model confidence for the label (0.0 to 1.0).
    pub score: f32,
}

impl DetectedEmotion {
    pub fn new(label: &str, score: f32) -> Self {
        Self {
            label: label.to_lowercase(),
            score,
        }
    }
}

/// Errors that can occur when asking a model for an emotion.
#[derive(Debug, Error)]
pub enum DetectorError {
    #[error("Input text is empty")]
    EmptyInput,

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Request timeout")]
    Timeout,

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Trait for emotion classifiers.
///
/// Only the top label is consumed downstream; scores for the other labels
/// are not part of the contract.
#[async_trait]
pub trait EmotionDetector: Send + Sync {
    /// Name of the backend (e.g., "huggingface").
    fn name(&self) -> &str;

    /// Classify `text` and return its most likely emotion.
    async fn detect(&self, text: &str) -> Result<DetectedEmotion, DetectorError>;
}
