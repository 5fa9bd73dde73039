//! HTTP API 路由
//!
//! 每个资源一个子模块，`router()` 在 [`crate::core::build_app`] 中合并。

pub mod appeals;
pub mod chat;
pub mod complaints;
pub mod feed;
pub mod health;
pub mod hot_topics;
pub mod selection;

use shared::models::StageTrack;

use crate::utils::{AppError, AppResult, ErrorCode};

/// Parse an optional `track` query value, defaulting to the full track
pub(crate) fn parse_track(track: Option<&str>) -> AppResult<StageTrack> {
    match track {
        None => Ok(StageTrack::default()),
        Some(value) => StageTrack::parse(value).ok_or_else(|| {
            AppError::with_message(
                ErrorCode::UnknownStageTrack,
                format!("Unknown track '{value}', expected 'full' or 'standard'"),
            )
        }),
    }
}
