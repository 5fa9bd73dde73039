//! Selection API 模块
//!
//! 详情面板：当前选中的申诉及其进度。

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route(
        "/api/selection",
        get(handler::current)
            .put(handler::select)
            .delete(handler::clear),
    )
}
