//! Shared types for the grievance service
//!
//! Complaint records, the status enumeration and its roadmap projection,
//! engagement and chat DTOs, and the unified error/response types used by
//! grievance-server and its clients.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCode};
