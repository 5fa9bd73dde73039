//! Appeal desk
//!
//! Appeals are recorded and logged only. Nothing is forwarded to the
//! named authority.

use std::sync::Arc;

use chrono::Utc;
use parking_lot::RwLock;
use shared::models::{Appeal, AppealCreate};
use uuid::Uuid;

use crate::utils::{AppError, AppResult, ErrorCode};

#[derive(Debug, Clone, Default)]
pub struct AppealDesk {
    appeals: Arc<RwLock<Vec<Appeal>>>,
}

impl AppealDesk {
    pub fn new() -> Self {
        Self::default()
    }

    /// File an appeal. The reason must not be blank.
    pub fn file(&self, payload: AppealCreate) -> AppResult<Appeal> {
        if payload.reason.trim().is_empty() {
            return Err(AppError::new(ErrorCode::AppealReasonRequired));
        }

        let appeal = Appeal {
            id: Uuid::new_v4(),
            authority: payload.authority,
            authority_name: payload.authority.display_name().to_string(),
            reason: payload.reason,
            complaint_id: payload.complaint_id,
            filed_at: Utc::now(),
        };

        tracing::info!(
            appeal_id = %appeal.id,
            authority = %appeal.authority_name,
            complaint_id = ?appeal.complaint_id,
            "Appeal filed"
        );

        self.appeals.write().push(appeal.clone());
        Ok(appeal)
    }

    pub fn list(&self) -> Vec<Appeal> {
        self.appeals.read().clone()
    }
}
