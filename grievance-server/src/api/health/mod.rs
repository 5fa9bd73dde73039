//! Health API

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::core::ServerState;

#[derive(Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
    pub environment: String,
    pub chatbot_configured: bool,
}

pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health))
}

async fn health(State(state): State<ServerState>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        environment: state.config.environment.clone(),
        chatbot_configured: state.config.chatbot_configured(),
    })
}
