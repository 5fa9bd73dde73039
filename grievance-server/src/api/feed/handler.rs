//! Feed API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::{FeedPost, FeedPostId};

use crate::core::ServerState;
use crate::utils::{ApiResponse, AppResult};

/// GET /api/feed
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<ApiResponse<Vec<FeedPost>>>> {
    Ok(Json(ApiResponse::success(state.feed.list())))
}

/// POST /api/feed/{id}/like
pub async fn like(
    State(state): State<ServerState>,
    Path(id): Path<FeedPostId>,
) -> AppResult<Json<ApiResponse<FeedPost>>> {
    Ok(Json(ApiResponse::success(state.feed.like(id)?)))
}

/// POST /api/feed/{id}/dislike
pub async fn dislike(
    State(state): State<ServerState>,
    Path(id): Path<FeedPostId>,
) -> AppResult<Json<ApiResponse<FeedPost>>> {
    Ok(Json(ApiResponse::success(state.feed.dislike(id)?)))
}
