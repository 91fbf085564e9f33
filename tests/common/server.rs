//! Test server lifecycle management
//!
//! This module manages spawning and shutting down test HTTP servers.
//! Each test gets an isolated server with its own catalog file and cache.

use super::constants::*;
use super::fixtures::create_test_catalog;
use async_trait::async_trait;
use moodtune::catalog::CatalogCache;
use moodtune::emotion::{DetectedEmotion, DetectorError, EmotionDetector};
use moodtune::server::{make_app, RequestsLoggingLevel, ServerConfig};
use moodtune::service::RecommendationService;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use tokio::net::TcpListener;

/// Keyword based detector, no model involved
struct KeywordEmotionDetector;

#[async_trait]
impl EmotionDetector for KeywordEmotionDetector {
    fn name(&self) -> &str {
        "keyword"
    }

    async fn detect(&self, text: &str) -> Result<DetectedEmotion, DetectorError> {
        if text.contains(FAILURE_KEYWORD) {
            return Err(DetectorError::Api {
                status: 500,
                message: "model crashed".to_string(),
            });
        }
        let label = if text.contains(JOY_KEYWORD) {
            "joy"
        } else if text.contains(SADNESS_KEYWORD) {
            "sadness"
        } else {
            "neutral"
        };
        Ok(DetectedEmotion::new(label, 0.99))
    }
}

/// Test server instance with an isolated catalog
///
/// When dropped, the server gracefully shuts down and temp resources are cleaned up.
pub struct TestServer {
    /// Base URL for making requests (e.g., "http://127.0.0.1:12345")
    pub base_url: String,

    /// The port the server is listening on
    pub port: u16,

    /// Path of the CSV catalog backing this server
    pub catalog_path: PathBuf,

    // Private fields - keep resources alive until drop
    _temp_catalog_dir: TempDir,
    _shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl TestServer {
    /// Spawns a new test server on a random port, with a keyword detector
    ///
    /// # Panics
    ///
    /// Panics if:
    /// - Catalog creation fails
    /// - Port binding fails
    /// - Server doesn't become ready within timeout
    pub async fn spawn() -> Self {
        Self::spawn_with_detector(Some(Arc::new(KeywordEmotionDetector))).await
    }

    /// Spawns a test server that has no emotion detector configured
    pub async fn spawn_without_detector() -> Self {
        Self::spawn_with_detector(None).await
    }

    async fn spawn_with_detector(detector: Option<Arc<dyn EmotionDetector>>) -> Self {
        let (temp_catalog_dir, catalog_path) =
            create_test_catalog().expect("Failed to create test catalog");

        let service = Arc::new(RecommendationService::new(
            catalog_path.clone(),
            Arc::new(CatalogCache::new()),
            detector,
            5,
        ));

        // Bind to random port
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");

        let port = listener
            .local_addr()
            .expect("Failed to get local address")
            .port();

        let base_url = format!("http://127.0.0.1:{}", port);

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

        let config = ServerConfig {
            port,
            requests_logging_level: RequestsLoggingLevel::None,
            frontend_dir_path: None,
        };
        let app = make_app(config, service);

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    shutdown_rx.await.ok();
                })
                .await
                .expect("Server failed");
        });

        let server = Self {
            base_url,
            port,
            catalog_path,
            _temp_catalog_dir: temp_catalog_dir,
            _shutdown_tx: Some(shutdown_tx),
        };

        server.wait_for_ready().await;

        server
    }

    /// Waits for the server to become ready by polling the / endpoint
    async fn wait_for_ready(&self) {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(100))
            .build()
            .expect("Failed to build reqwest client");

        let start = std::time::Instant::now();
        let timeout = Duration::from_millis(SERVER_READY_TIMEOUT_MS);

        loop {
            if start.elapsed() > timeout {
                panic!(
                    "Server did not become ready within {}ms",
                    SERVER_READY_TIMEOUT_MS
                );
            }

            match client.get(format!("{}/", self.base_url)).send().await {
                Ok(response) if response.status().is_success() => return,
                _ => {
                    tokio::time::sleep(Duration::from_millis(SERVER_READY_POLL_INTERVAL_MS)).await;
                }
            }
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self._shutdown_tx.take() {
            let _ = tx.send(());
        }
        // TempDir will be cleaned up automatically
    }
}
