//! Complaint Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::status::ComplaintStatus;
use crate::error::{AppError, AppResult, ErrorCode};

pub type ComplaintId = i64;

/// Message returned when the new-complaint form is missing a field
pub const MISSING_FIELDS_MESSAGE: &str =
    "Please enter a title and description for your complaint.";

/// Complaint entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Complaint {
    pub id: ComplaintId,
    pub title: String,
    pub status: ComplaintStatus,
    /// Calendar date of creation, serialized as `YYYY-MM-DD`
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Store input. Trusted as-is: the store does not validate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComplaint {
    pub title: String,
    pub description: Option<String>,
}

/// New-complaint form payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ComplaintCreate {
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "title is required"))]
    pub title: String,
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "description is required"))]
    pub description: String,
}

impl ComplaintCreate {
    /// Check the form and turn it into a store input.
    ///
    /// Both fields must be non-blank; the text itself is passed through
    /// untrimmed.
    pub fn into_new_complaint(self) -> AppResult<NewComplaint> {
        if let Err(errors) = self.validate() {
            let mut err = AppError::from(errors);
            err.code = ErrorCode::RequiredField;
            err.message = MISSING_FIELDS_MESSAGE.to_string();
            return Err(err);
        }
        Ok(NewComplaint {
            title: self.title,
            description: Some(self.description),
        })
    }
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(title: &str, description: &str) -> ComplaintCreate {
        ComplaintCreate {
            title: title.into(),
            description: description.into(),
        }
    }

    #[test]
    fn test_valid_form_becomes_new_complaint() {
        let new = form("X", "Y").into_new_complaint().unwrap();
        assert_eq!(new.title, "X");
        assert_eq!(new.description.as_deref(), Some("Y"));
    }

    #[test]
    fn test_blank_fields_are_rejected() {
        for (title, description) in [("", "Y"), ("X", ""), ("   ", "Y"), ("X", "\n\t")] {
            let err = form(title, description).into_new_complaint().unwrap_err();
            assert_eq!(err.code, ErrorCode::RequiredField);
            assert_eq!(err.message, MISSING_FIELDS_MESSAGE);
        }
    }

    #[test]
    fn test_rejection_names_the_missing_field() {
        let err = form("X", " ").into_new_complaint().unwrap_err();
        let details = err.details.unwrap();
        assert!(details.contains_key("description"));
        assert!(!details.contains_key("title"));
    }

    #[test]
    fn test_missing_json_fields_default_to_empty() {
        let payload: ComplaintCreate = serde_json::from_str(r#"{"title":"X"}"#).unwrap();
        assert!(payload.into_new_complaint().is_err());
    }

    #[test]
    fn test_complaint_date_serializes_as_iso() {
        let complaint = Complaint {
            id: 1,
            title: "Noise complaint".into(),
            status: ComplaintStatus::Submitted,
            date: NaiveDate::from_ymd_opt(2026, 10, 18).unwrap(),
            description: None,
        };
        let json = serde_json::to_value(&complaint).unwrap();
        assert_eq!(json["date"], "2026-10-18");
        assert_eq!(json["status"], "Submitted");
        assert!(json.get("description").is_none());
    }
}
