//! Complaint API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use shared::models::{Complaint, ComplaintCreate, ComplaintId, Roadmap};

use crate::api::parse_track;
use crate::core::ServerState;
use crate::utils::{ApiResponse, AppError, AppResult};

#[derive(Debug, Deserialize)]
pub struct RoadmapQuery {
    pub track: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ComplaintRoadmap {
    pub complaint: Complaint,
    pub roadmap: Roadmap,
}

fn find(state: &ServerState, id: ComplaintId) -> AppResult<Complaint> {
    state
        .complaints
        .find(id)
        .ok_or_else(|| AppError::complaint_not_found(id))
}

/// GET /api/complaints - 全部申诉 (按提交顺序)
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<ApiResponse<Vec<Complaint>>>> {
    Ok(Json(ApiResponse::success(state.complaints.list())))
}

/// GET /api/complaints/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<ComplaintId>,
) -> AppResult<Json<ApiResponse<Complaint>>> {
    Ok(Json(ApiResponse::success(find(&state, id)?)))
}

/// POST /api/complaints - 提交新申诉
///
/// 标题和描述都不能为空，校验失败不会写入存储。
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ComplaintCreate>,
) -> AppResult<(StatusCode, Json<ApiResponse<Complaint>>)> {
    let new_complaint = payload.into_new_complaint()?;
    let id = state.complaints.add(new_complaint);
    let complaint = state.complaints.find(id).ok_or_else(|| {
        AppError::internal(format!("Complaint {id} missing right after insert"))
    })?;

    tracing::info!(complaint_id = id, title = %complaint.title, "Complaint submitted");

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success_with_message("Complaint submitted", complaint)),
    ))
}

/// GET /api/complaints/{id}/roadmap?track=full|standard
pub async fn roadmap(
    State(state): State<ServerState>,
    Path(id): Path<ComplaintId>,
    Query(query): Query<RoadmapQuery>,
) -> AppResult<Json<ApiResponse<ComplaintRoadmap>>> {
    let track = parse_track(query.track.as_deref())?;
    let complaint = find(&state, id)?;
    let roadmap = Roadmap::project(&complaint.status, track);
    Ok(Json(ApiResponse::success(ComplaintRoadmap { complaint, roadmap })))
}
