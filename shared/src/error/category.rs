//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// - 0xxx: General errors
/// - 4xxx: Complaint errors
/// - 5xxx: Engagement errors
/// - 6xxx: Chat errors
/// - 9xxx: System errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Complaint errors (4xxx)
    Complaint,
    /// Engagement errors (5xxx)
    Engagement,
    /// Chat errors (6xxx)
    Chat,
    /// System errors (9xxx and anything unassigned)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            4000..5000 => Self::Complaint,
            5000..6000 => Self::Engagement,
            6000..7000 => Self::Chat,
            _ => Self::System,
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_code() {
        assert_eq!(ErrorCategory::from_code(0), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(7), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(4001), ErrorCategory::Complaint);
        assert_eq!(ErrorCategory::from_code(5101), ErrorCategory::Engagement);
        assert_eq!(ErrorCategory::from_code(6002), ErrorCategory::Chat);
        assert_eq!(ErrorCategory::from_code(9001), ErrorCategory::System);
        assert_eq!(ErrorCategory::from_code(2500), ErrorCategory::System);
    }

    #[test]
    fn test_error_code_category() {
        assert_eq!(ErrorCode::RequiredField.category(), ErrorCategory::General);
        assert_eq!(ErrorCode::ComplaintNotFound.category(), ErrorCategory::Complaint);
        assert_eq!(ErrorCode::FeedPostNotFound.category(), ErrorCategory::Engagement);
        assert_eq!(ErrorCode::EmptyMessage.category(), ErrorCategory::Chat);
        assert_eq!(ErrorCode::InternalError.category(), ErrorCategory::System);
    }
}
