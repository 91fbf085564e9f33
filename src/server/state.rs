use axum::extract::FromRef;

use crate::service::RecommendationService;
use std::sync::Arc;
use std::time::Instant;

use super::ServerConfig;

pub type GuardedRecommendationService = Arc<RecommendationService>;

#[derive(Clone)]
pub struct ServerState {
    pub config: ServerConfig,
    pub start_time: Instant,
    pub service: GuardedRecommendationService,
}

impl ServerState {
    pub fn new(config: ServerConfig, service: GuardedRecommendationService) -> ServerState {
        ServerState {
            config,
            start_time: Instant::now(),
            service,
        }
    }
}

impl FromRef<ServerState> for GuardedRecommendationService {
    fn from_ref(input: &ServerState) -> Self {
        input.service.clone()
    }
}

impl FromRef<ServerState> for ServerConfig {
    fn from_ref(input: &ServerState) -> Self {
        input.config.clone()
    }
}
