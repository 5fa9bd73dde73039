//! Hot Topic API

use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use shared::models::{HotTopicQuery, TrendingTopic};

use crate::core::ServerState;
use crate::utils::{ApiResponse, AppResult};

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/hot-topics", get(list))
}

/// GET /api/hot-topics?min_engagement=High
async fn list(
    State(state): State<ServerState>,
    Query(query): Query<HotTopicQuery>,
) -> AppResult<Json<ApiResponse<Vec<TrendingTopic>>>> {
    Ok(Json(ApiResponse::success(
        state.hot_topics.list(query.min_engagement),
    )))
}
