//! Chat API 模块

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/chat", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", post(handler::start))
        .route("/{id}", get(handler::get_by_id))
        .route("/{id}/messages", post(handler::send))
        .route("/{id}/preferences", get(handler::preferences))
}
