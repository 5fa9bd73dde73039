//! Selection API Handlers

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use shared::models::ComplaintId;

use crate::api::parse_track;
use crate::complaints::DetailPane;
use crate::core::ServerState;
use crate::utils::{ApiResponse, AppResult};

#[derive(Debug, Deserialize)]
pub struct SelectRequest {
    pub id: ComplaintId,
}

#[derive(Debug, Deserialize)]
pub struct PaneQuery {
    pub track: Option<String>,
}

fn pane(state: &ServerState, track: Option<&str>) -> AppResult<DetailPane> {
    let track = parse_track(track)?;
    Ok(state.selection.detail(state.complaints.as_ref(), track))
}

/// GET /api/selection - 当前详情面板
pub async fn current(
    State(state): State<ServerState>,
    Query(query): Query<PaneQuery>,
) -> AppResult<Json<ApiResponse<DetailPane>>> {
    Ok(Json(ApiResponse::success(pane(&state, query.track.as_deref())?)))
}

/// PUT /api/selection - 选中申诉 (不存在的 id 也允许，面板保持加载中)
pub async fn select(
    State(state): State<ServerState>,
    Query(query): Query<PaneQuery>,
    Json(payload): Json<SelectRequest>,
) -> AppResult<Json<ApiResponse<DetailPane>>> {
    let track = parse_track(query.track.as_deref())?;
    state.selection.select(payload.id);
    tracing::debug!(complaint_id = payload.id, "Complaint selected");
    Ok(Json(ApiResponse::success(
        state.selection.detail(state.complaints.as_ref(), track),
    )))
}

/// DELETE /api/selection - 取消选中
pub async fn clear(State(state): State<ServerState>) -> AppResult<Json<ApiResponse<DetailPane>>> {
    state.selection.clear();
    Ok(Json(ApiResponse::success(DetailPane::prompt())))
}
