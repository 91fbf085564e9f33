//! Hosted text-classification client.
//!
//! Talks to a Hugging Face style inference endpoint:
//! `POST {base_url}/models/{model}` with `{"inputs": "..."}`, answering with
//! a list of `{label, score}` pairs (optionally nested once per input).

use super::detector::{DetectedEmotion, DetectorError, EmotionDetector};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

pub const DEFAULT_DETECTOR_MODEL: &str = "j-hartmann/emotion-english-distilroberta-base";

pub struct HuggingFaceEmotionDetector {
    client: Client,
    base_url: String,
    model: String,
    api_token: Option<String>,
    timeout: Duration,
}

#[derive(Debug, Serialize)]
struct ClassificationRequest<'a> {
    inputs: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
struct LabelScore {
    label: String,
    score: f32,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ClassificationResponse {
    Nested(Vec<Vec<LabelScore>>),
    Flat(Vec<LabelScore>),
}

impl ClassificationResponse {
    fn top_label(self) -> Option<LabelScore> {
        let scores = match self {
            ClassificationResponse::Nested(mut outer) => {
                if outer.is_empty() {
                    return None;
                }
                outer.swap_remove(0)
            }
            ClassificationResponse::Flat(scores) => scores,
        };
        scores
            .into_iter()
            .max_by(|a, b| a.score.partial_cmp(&b.score).unwrap_or(std::cmp::Ordering::Equal))
    }
}

impl HuggingFaceEmotionDetector {
    /// Create a new detector.
    ///
    /// # Arguments
    /// * `base_url` - Base URL of the inference service (e.g., "https://api-inference.huggingface.co").
    /// * `model` - Model id, see [`DEFAULT_DETECTOR_MODEL`].
    /// * `api_token` - Optional bearer token.
    /// * `timeout_sec` - Request timeout in seconds.
    pub fn new(
        base_url: impl Into<String>,
        model: impl Into<String>,
        api_token: Option<String>,
        timeout_sec: u64,
    ) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.into(),
            api_token,
            timeout: Duration::from_secs(timeout_sec),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}", self.base_url, self.model)
    }
}

#[async_trait]
impl EmotionDetector for HuggingFaceEmotionDetector {
    fn name(&self) -> &str {
        "huggingface"
    }

    async fn detect(&self, text: &str) -> Result<DetectedEmotion, DetectorError> {
        if text.trim().is_empty() {
            return Err(DetectorError::EmptyInput);
        }

        debug!(
            model = %self.model,
            text_len = text.len(),
            "Sending classification request"
        );

        let mut request = self
            .client
            .post(self.endpoint())
            .json(&ClassificationRequest { inputs: text })
            .timeout(self.timeout);
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                DetectorError::Timeout
            } else {
                DetectorError::Connection(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Emotion model answered {}: {}", status, body);
            return Err(DetectorError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let parsed: ClassificationResponse = response.json().await.map_err(|e| {
            DetectorError::InvalidResponse(format!("Failed to parse classification: {}", e))
        })?;

        let top = parsed
            .top_label()
            .ok_or_else(|| DetectorError::InvalidResponse("No labels returned".to_string()))?;
        debug!(label = %top.label, score = top.score, "Detected emotion");
        Ok(DetectedEmotion::new(&top.label, top.score))
    }
}
