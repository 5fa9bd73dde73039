//! Appeal Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::complaint::ComplaintId;

/// Authority an appeal is addressed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppealAuthority {
    Inspector,
    Commissioner,
    Court,
}

impl AppealAuthority {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Inspector => "District Inspector",
            Self::Commissioner => "Police Commissioner",
            Self::Court => "Local Court",
        }
    }
}

/// Appeal form payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppealCreate {
    pub authority: AppealAuthority,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub complaint_id: Option<ComplaintId>,
}

/// Filed appeal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appeal {
    pub id: Uuid,
    pub authority: AppealAuthority,
    pub authority_name: String,
    pub reason: String,
    pub complaint_id: Option<ComplaintId>,
    pub filed_at: DateTime<Utc>,
}
