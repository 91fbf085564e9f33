//! Emotion detection from free text.
//!
//! The classifier itself is an external model. This module only defines the
//! contract the rest of the crate relies on and an HTTP client for a hosted
//! text-classification endpoint.

mod detector;
mod huggingface;

pub use detector::{DetectedEmotion, DetectorError, EmotionDetector};
pub use huggingface::{HuggingFaceEmotionDetector, DEFAULT_DETECTOR_MODEL};
