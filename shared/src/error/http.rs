//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            // Success
            Self::Success => StatusCode::OK,

            // 404 Not Found
            Self::ComplaintNotFound | Self::FeedPostNotFound | Self::ConversationNotFound => {
                StatusCode::NOT_FOUND
            }

            // 500 Internal Server Error
            Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,

            // 400 Bad Request
            Self::ValidationFailed
            | Self::RequiredField
            | Self::UnknownStageTrack
            | Self::AppealReasonRequired
            | Self::EmptyMessage => StatusCode::BAD_REQUEST,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_status() {
        assert_eq!(ErrorCode::Success.http_status(), StatusCode::OK);
    }

    #[test]
    fn test_not_found_status() {
        assert_eq!(
            ErrorCode::FeedPostNotFound.http_status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ErrorCode::ComplaintNotFound.http_status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ErrorCode::ConversationNotFound.http_status(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_bad_request_status() {
        assert_eq!(
            ErrorCode::RequiredField.http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ErrorCode::EmptyMessage.http_status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ErrorCode::UnknownStageTrack.http_status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_system_status() {
        assert_eq!(
            ErrorCode::InternalError.http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
