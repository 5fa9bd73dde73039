//! Unified error system for the grievance service
//!
//! This module provides:
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Rich error type with codes, messages, and details
//! - [`ApiResponse`]: Unified API response format
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 4xxx: Complaint errors
//! - 5xxx: Engagement errors (feed, appeals)
//! - 6xxx: Chat errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode, ApiResponse};
//!
//! // Create a simple error
//! let err = AppError::new(ErrorCode::EmptyMessage);
//!
//! // Create an error with custom message
//! let err = AppError::with_message(ErrorCode::ValidationFailed, "Title is required");
//!
//! // Create an error with details
//! let err = AppError::validation("Missing required field")
//!     .with_detail("field", "title");
//!
//! // Convert to API response
//! let response = ApiResponse::<()>::error(&err);
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{ApiResponse, AppError, AppResult};
