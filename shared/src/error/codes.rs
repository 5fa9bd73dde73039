//! Unified error codes for the grievance service
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 4xxx: Complaint errors
//! - 5xxx: Engagement errors
//! - 6xxx: Chat errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so the web client can
/// switch on them without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Validation failed
    ValidationFailed = 2,
    /// Required field missing
    RequiredField = 7,

    // ==================== 4xxx: Complaint ====================
    /// Complaint not found
    ComplaintNotFound = 4001,
    /// Unknown roadmap track
    UnknownStageTrack = 4002,

    // ==================== 5xxx: Engagement ====================
    /// Feed post not found
    FeedPostNotFound = 5001,
    /// Appeal reason missing
    AppealReasonRequired = 5101,

    // ==================== 6xxx: Chat ====================
    /// Conversation not found
    ConversationNotFound = 6001,
    /// Chat message is empty
    EmptyMessage = 6002,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the default message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            Self::Success => "Operation completed successfully",
            Self::ValidationFailed => "Validation failed",
            Self::RequiredField => "Required field is missing",

            // Complaint
            Self::ComplaintNotFound => "Complaint not found",
            Self::UnknownStageTrack => "Unknown roadmap track",

            // Engagement
            Self::FeedPostNotFound => "Feed post not found",
            Self::AppealReasonRequired => "Appeal reason is required",

            // Chat
            Self::ConversationNotFound => "Conversation not found",
            Self::EmptyMessage => "Message must not be empty",

            // System
            Self::InternalError => "Internal server error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error returned when a u16 does not name a known [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Success),
            2 => Ok(Self::ValidationFailed),
            7 => Ok(Self::RequiredField),

            4001 => Ok(Self::ComplaintNotFound),
            4002 => Ok(Self::UnknownStageTrack),

            5001 => Ok(Self::FeedPostNotFound),
            5101 => Ok(Self::AppealReasonRequired),

            6001 => Ok(Self::ConversationNotFound),
            6002 => Ok(Self::EmptyMessage),

            9001 => Ok(Self::InternalError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
