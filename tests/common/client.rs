//! HTTP client for end-to-end tests
//!
//! This module provides a high-level HTTP client that wraps reqwest
//! and provides methods for all moodtune endpoints.
//!
//! When API routes or request formats change, update only this file.

use super::constants::*;
use reqwest::Response;
use serde_json::json;
use std::time::Duration;

pub struct TestClient {
    /// The underlying reqwest client (public for custom requests in tests)
    pub client: reqwest::Client,
    /// The base URL of the test server
    pub base_url: String,
}

impl TestClient {
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to build reqwest client");

        Self { client, base_url }
    }

    async fn get(&self, path: &str) -> Response {
        self.client
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await
            .unwrap_or_else(|e| panic!("GET {} failed: {}", path, e))
    }

    /// GET /
    pub async fn get_stats(&self) -> Response {
        self.get("/").await
    }

    /// GET /v1/emotions
    pub async fn get_emotions(&self) -> Response {
        self.get("/v1/emotions").await
    }

    /// GET /v1/moods
    pub async fn get_moods(&self) -> Response {
        self.get("/v1/moods").await
    }

    /// GET /v1/moods/{mood}/tracks
    pub async fn get_mood_tracks(&self, mood: &str, count: Option<usize>) -> Response {
        match count {
            Some(count) => {
                self.get(&format!("/v1/moods/{}/tracks?count={}", mood, count))
                    .await
            }
            None => self.get(&format!("/v1/moods/{}/tracks", mood)).await,
        }
    }

    /// GET /v1/emotions/{emotion}/tracks
    pub async fn get_emotion_tracks(&self, emotion: &str, count: Option<usize>) -> Response {
        match count {
            Some(count) => {
                self.get(&format!("/v1/emotions/{}/tracks?count={}", emotion, count))
                    .await
            }
            None => self.get(&format!("/v1/emotions/{}/tracks", emotion)).await,
        }
    }

    /// POST /v1/recommend
    pub async fn recommend(&self, text: &str, count: Option<usize>) -> Response {
        let body = match count {
            Some(count) => json!({ "text": text, "count": count }),
            None => json!({ "text": text }),
        };
        self.client
            .post(format!("{}/v1/recommend", self.base_url))
            .json(&body)
            .send()
            .await
            .expect("Recommend request failed")
    }
}
