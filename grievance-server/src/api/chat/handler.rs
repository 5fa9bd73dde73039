//! Chat API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use shared::models::{ChatMessageCreate, ChatReply, ConversationView, TopicPreference};
use uuid::Uuid;

use crate::core::ServerState;
use crate::utils::{ApiResponse, AppResult};

/// POST /api/chat - 开始新会话
pub async fn start(
    State(state): State<ServerState>,
) -> AppResult<(StatusCode, Json<ApiResponse<ConversationView>>)> {
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(state.chat.start())),
    ))
}

/// GET /api/chat/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<ConversationView>>> {
    Ok(Json(ApiResponse::success(state.chat.get(id)?)))
}

/// POST /api/chat/{id}/messages
///
/// 生成失败时仍返回 200，回复内容为失败提示。
pub async fn send(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ChatMessageCreate>,
) -> AppResult<Json<ApiResponse<ChatReply>>> {
    let reply = state.chat.send(id, &payload.content).await?;
    Ok(Json(ApiResponse::success(reply)))
}

/// GET /api/chat/{id}/preferences
pub async fn preferences(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<Vec<TopicPreference>>>> {
    Ok(Json(ApiResponse::success(state.chat.preferences(id)?)))
}
