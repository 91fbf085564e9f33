//! Request logging middleware

use super::super::state::ServerState;
use axum::extract::State;
use axum::{
    body::{Body, Bytes},
    http::{header::HeaderMap, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::time::Instant;
use tracing::{error, info};

#[derive(PartialEq, PartialOrd, Clone, Debug, Default, clap::ValueEnum)]
pub enum RequestsLoggingLevel {
    None,
    #[default]
    Path,
    Headers,
    Body,
}

impl std::fmt::Display for RequestsLoggingLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

const MAX_LOGGABLE_BODY_LENGTH: usize = 1024;

enum ContentLengthParseResult {
    Ok(usize),
    No(&'static str),
}

fn parse_content_length(headers: &HeaderMap) -> ContentLengthParseResult {
    let value = match headers.get("content-length") {
        Some(x) => x,
        None => return ContentLengthParseResult::No("Content-length not set."),
    };

    let str_value = match value.to_str() {
        Ok(x) => x,
        Err(_) => {
            return ContentLengthParseResult::No("Could not get Content-length string value.")
        }
    };

    match str_value.parse::<usize>() {
        Ok(x) => ContentLengthParseResult::Ok(x),
        Err(_) => ContentLengthParseResult::No("Could not parse Content-length numeric value."),
    }
}

fn log_headers(label: &str, headers: &HeaderMap) {
    info!("  {} Headers:", label);
    for (name, value) in headers.iter() {
        info!("    {:?}: {:?}", name, value);
    }
}

/// Logs a body small enough to buffer. The returned body replaces the
/// consumed one when the message is rebuilt.
async fn log_body(label: &str, headers: &HeaderMap, body: Body) -> Result<Body, String> {
    match parse_content_length(headers) {
        ContentLengthParseResult::No(reason) => {
            info!("  {} Body: {}", label, reason);
            Ok(body)
        }
        ContentLengthParseResult::Ok(size) if size < MAX_LOGGABLE_BODY_LENGTH => {
            let bytes: Bytes = axum::body::to_bytes(body, size)
                .await
                .map_err(|err| format!("Failed to read {} body: {:?}", label, err))?;
            info!("  {} Body:\n{}", label, String::from_utf8_lossy(&bytes));
            Ok(Body::from(bytes))
        }
        ContentLengthParseResult::Ok(size) => {
            info!(
                "  {} Body: Too big to log ({:#})",
                label,
                byte_unit::Byte::from(size)
            );
            Ok(body)
        }
    }
}

pub async fn log_requests(
    State(state): State<ServerState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let level = state.config.requests_logging_level.clone();
    if level == RequestsLoggingLevel::None {
        return next.run(request).await;
    }

    let start = Instant::now();
    info!(">>> {} {}", request.method(), request.uri());

    if level >= RequestsLoggingLevel::Headers {
        log_headers("Req", request.headers());
    }

    if level >= RequestsLoggingLevel::Body {
        let (parts, body) = request.into_parts();
        match log_body("Req", &parts.headers, body).await {
            Ok(body) => request = Request::from_parts(parts, body),
            Err(err) => {
                error!("{}", err);
                return StatusCode::INTERNAL_SERVER_ERROR.into_response();
            }
        }
    }

    let mut response = next.run(request).await;

    if level >= RequestsLoggingLevel::Headers {
        log_headers("Resp", response.headers());
    }

    if level >= RequestsLoggingLevel::Body {
        let (parts, body) = response.into_parts();
        match log_body("Resp", &parts.headers, body).await {
            Ok(body) => response = Response::from_parts(parts, body),
            Err(err) => {
                error!("{}", err);
                return StatusCode::INTERNAL_SERVER_ERROR.into_response();
            }
        }
    }

    info!(
        "<<< {} ({}ms)",
        response.status().as_u16(),
        start.elapsed().as_millis()
    );

    response
}
