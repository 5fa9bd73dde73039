//! Appeal API Handlers

use axum::{Json, extract::State, http::StatusCode};
use shared::models::{Appeal, AppealCreate};

use crate::core::ServerState;
use crate::utils::{ApiResponse, AppResult};

/// GET /api/appeals
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<ApiResponse<Vec<Appeal>>>> {
    Ok(Json(ApiResponse::success(state.appeals.list())))
}

/// POST /api/appeals - 提交上诉 (仅记录)
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<AppealCreate>,
) -> AppResult<(StatusCode, Json<ApiResponse<Appeal>>)> {
    let appeal = state.appeals.file(payload)?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success_with_message("Appeal submitted", appeal)),
    ))
}
