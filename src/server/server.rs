use anyhow::{Context, Result};
use std::time::Duration;

use tracing::{error, info};

use crate::catalog::RecommendedTrack;
use crate::emotion::DetectorError;
use crate::mood::{known_emotions, MoodBucket, DEFAULT_MOOD};
use crate::recommend::Recommendation;
use crate::service::{ServiceError, TextRecommendation};
use tower_http::services::ServeDir;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use super::{log_requests, state::*, ServerConfig};

#[derive(Serialize)]
struct ServerStats {
    pub uptime: String,
    pub version: &'static str,
    pub catalog_tracks: usize,
    pub detector_enabled: bool,
}

fn format_uptime(duration: Duration) -> String {
    let total_seconds = duration.as_secs();

    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}d {:02}:{:02}:{:02}", days, hours, minutes, seconds)
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(Serialize)]
struct EmotionEntry {
    emotion: &'static str,
    mood: MoodBucket,
}

#[derive(Serialize)]
struct EmotionsResponse {
    emotions: Vec<EmotionEntry>,
    default_mood: MoodBucket,
}

#[derive(Serialize)]
struct MoodEntry {
    mood: MoodBucket,
    tracks: usize,
}

#[derive(Deserialize, Debug, Default)]
struct CountQuery {
    pub count: Option<usize>,
}

#[derive(Deserialize, Debug)]
struct RecommendBody {
    pub text: String,
    pub count: Option<usize>,
}

#[derive(Serialize)]
struct RecommendationResponse {
    mood: MoodBucket,
    #[serde(skip_serializing_if = "Option::is_none")]
    emotion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    confidence: Option<f32>,
    empty: bool,
    tracks: Vec<RecommendedTrack>,
}

impl From<Recommendation> for RecommendationResponse {
    fn from(value: Recommendation) -> Self {
        RecommendationResponse {
            mood: value.mood,
            emotion: None,
            confidence: None,
            empty: value.tracks.is_empty(),
            tracks: value.tracks,
        }
    }
}

impl From<TextRecommendation> for RecommendationResponse {
    fn from(value: TextRecommendation) -> Self {
        RecommendationResponse {
            mood: value.mood,
            emotion: Some(value.emotion.label),
            confidence: Some(value.emotion.score),
            empty: value.tracks.is_empty(),
            tracks: value.tracks,
        }
    }
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorBody {
            error: message.into(),
        }),
    )
        .into_response()
}

fn service_error_response(err: ServiceError) -> Response {
    let status = match &err {
        ServiceError::DetectorUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ServiceError::Detector(DetectorError::EmptyInput) => StatusCode::BAD_REQUEST,
        ServiceError::Detector(_) => StatusCode::BAD_GATEWAY,
        ServiceError::DataSource(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    if status.is_server_error() {
        error!("Recommendation failed: {}", err);
    }
    error_response(status, err.to_string())
}

fn check_count(count: Option<usize>) -> Result<Option<usize>, Response> {
    match count {
        Some(0) => Err(error_response(
            StatusCode::BAD_REQUEST,
            "count must be at least 1",
        )),
        other => Ok(other),
    }
}

async fn home(State(state): State<ServerState>) -> Response {
    let catalog = match state.service.catalog() {
        Ok(catalog) => catalog,
        Err(err) => return service_error_response(err.into()),
    };
    let stats = ServerStats {
        uptime: format_uptime(state.start_time.elapsed()),
        version: env!("CARGO_PKG_VERSION"),
        catalog_tracks: catalog.len(),
        detector_enabled: state.service.has_detector(),
    };
    Json(stats).into_response()
}

async fn get_emotions() -> impl IntoResponse {
    Json(EmotionsResponse {
        emotions: known_emotions()
            .map(|(emotion, mood)| EmotionEntry { emotion, mood })
            .collect(),
        default_mood: DEFAULT_MOOD,
    })
}

async fn get_moods(State(service): State<GuardedRecommendationService>) -> Response {
    match service.catalog() {
        Ok(catalog) => {
            let moods: Vec<MoodEntry> = MoodBucket::ALL
                .iter()
                .map(|mood| MoodEntry {
                    mood: *mood,
                    tracks: catalog.mood_count(*mood),
                })
                .collect();
            Json(moods).into_response()
        }
        Err(err) => service_error_response(err.into()),
    }
}

async fn get_mood_tracks(
    State(service): State<GuardedRecommendationService>,
    Path(mood): Path<String>,
    Query(query): Query<CountQuery>,
) -> Response {
    let mood: MoodBucket = match mood.parse() {
        Ok(mood) => mood,
        Err(err) => return error_response(StatusCode::BAD_REQUEST, format!("{}", err)),
    };
    let count = match check_count(query.count) {
        Ok(count) => count,
        Err(response) => return response,
    };

    match service.recommend_for_mood(mood, count) {
        Ok(recommendation) => Json(RecommendationResponse::from(recommendation)).into_response(),
        Err(err) => service_error_response(err),
    }
}

async fn get_emotion_tracks(
    State(service): State<GuardedRecommendationService>,
    Path(emotion): Path<String>,
    Query(query): Query<CountQuery>,
) -> Response {
    let count = match check_count(query.count) {
        Ok(count) => count,
        Err(response) => return response,
    };

    match service.recommend_for_emotion(&emotion, count) {
        Ok(recommendation) => {
            let mut response = RecommendationResponse::from(recommendation);
            response.emotion = Some(emotion.to_lowercase());
            Json(response).into_response()
        }
        Err(err) => service_error_response(err),
    }
}

async fn post_recommend(
    State(service): State<GuardedRecommendationService>,
    Json(body): Json<RecommendBody>,
) -> Response {
    if body.text.trim().is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "text must not be empty");
    }
    let count = match check_count(body.count) {
        Ok(count) => count,
        Err(response) => return response,
    };

    match service.recommend_for_text(&body.text, count).await {
        Ok(result) => Json(RecommendationResponse::from(result)).into_response(),
        Err(err) => service_error_response(err),
    }
}

pub fn make_app(config: ServerConfig, service: GuardedRecommendationService) -> Router {
    let state = ServerState::new(config.clone(), service);

    let api_routes: Router = Router::new()
        .route("/emotions", get(get_emotions))
        .route("/emotions/{emotion}/tracks", get(get_emotion_tracks))
        .route("/moods", get(get_moods))
        .route("/moods/{mood}/tracks", get(get_mood_tracks))
        .route("/recommend", post(post_recommend))
        .with_state(state.clone());

    let home_router: Router = match config.frontend_dir_path {
        Some(frontend_path) => {
            let static_files_service =
                ServeDir::new(frontend_path).append_index_html_on_directories(true);
            Router::new().fallback_service(static_files_service)
        }
        None => Router::new()
            .route("/", get(home))
            .with_state(state.clone()),
    };

    home_router
        .nest("/v1", api_routes)
        .layer(middleware::from_fn_with_state(state, log_requests))
}

pub async fn run_server(config: ServerConfig, service: GuardedRecommendationService) -> Result<()> {
    let port = config.port;
    let app = make_app(config, service);

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port))
        .await
        .with_context(|| format!("Failed to bind port {}", port))?;
    info!("Listening on {}", listener.local_addr()?);

    Ok(axum::serve(listener, app).await?)
}
