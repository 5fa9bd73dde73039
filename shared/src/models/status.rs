//! Complaint status enumeration and stage tracks

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Status of a complaint along its pipeline
///
/// The known stages form a closed set. A value that does not name a known
/// stage is kept verbatim in [`ComplaintStatus::Unrecognized`] instead of
/// being rejected, so a stray value reaching the roadmap degrades to an
/// empty projection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum ComplaintStatus {
    #[default]
    Submitted,
    Assigned,
    UnderReview,
    Forwarded,
    Resolved,
    /// Out-of-band terminal stage, only present on the full track
    Rejected,
    Unrecognized(String),
}

impl ComplaintStatus {
    /// Display label, also used on the wire
    pub fn label(&self) -> &str {
        match self {
            Self::Submitted => "Submitted",
            Self::Assigned => "Assigned",
            Self::UnderReview => "Under Review",
            Self::Forwarded => "Forwarded",
            Self::Resolved => "Resolved",
            Self::Rejected => "Rejected",
            Self::Unrecognized(raw) => raw,
        }
    }

    /// Parse a wire label. Never fails: unknown labels become `Unrecognized`.
    pub fn from_label(label: &str) -> Self {
        match label {
            "Submitted" => Self::Submitted,
            "Assigned" => Self::Assigned,
            "Under Review" | "Review" => Self::UnderReview,
            "Forwarded" => Self::Forwarded,
            "Resolved" => Self::Resolved,
            "Rejected" => Self::Rejected,
            other => Self::Unrecognized(other.to_string()),
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }

    /// Linear step along the standard track.
    ///
    /// Assignment of arbitrary statuses is not guarded anywhere; this only
    /// answers "what comes after this stage" for display.
    pub fn next(&self) -> Option<ComplaintStatus> {
        match self {
            Self::Submitted => Some(Self::Assigned),
            Self::Assigned => Some(Self::UnderReview),
            Self::UnderReview => Some(Self::Forwarded),
            Self::Forwarded => Some(Self::Resolved),
            Self::Resolved | Self::Rejected | Self::Unrecognized(_) => None,
        }
    }
}

impl fmt::Display for ComplaintStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for ComplaintStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for ComplaintStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(Self::from_label(&label))
    }
}

/// Ordered stage list a roadmap is projected against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageTrack {
    /// Submitted → Assigned → Under Review → Forwarded → Resolved
    Standard,
    /// Standard track followed by the terminal Rejected stage
    #[default]
    Full,
}

static STANDARD_STAGES: [ComplaintStatus; 5] = [
    ComplaintStatus::Submitted,
    ComplaintStatus::Assigned,
    ComplaintStatus::UnderReview,
    ComplaintStatus::Forwarded,
    ComplaintStatus::Resolved,
];

static FULL_STAGES: [ComplaintStatus; 6] = [
    ComplaintStatus::Submitted,
    ComplaintStatus::Assigned,
    ComplaintStatus::UnderReview,
    ComplaintStatus::Forwarded,
    ComplaintStatus::Resolved,
    ComplaintStatus::Rejected,
];

impl StageTrack {
    pub fn stages(&self) -> &'static [ComplaintStatus] {
        match self {
            Self::Standard => &STANDARD_STAGES,
            Self::Full => &FULL_STAGES,
        }
    }

    /// Position of `status` on this track, `None` if it is not a stage of it
    pub fn index_of(&self, status: &ComplaintStatus) -> Option<usize> {
        self.stages().iter().position(|stage| stage == status)
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "standard" => Some(Self::Standard),
            "full" => Some(Self::Full),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_roundtrip_for_known_stages() {
        for stage in StageTrack::Full.stages() {
            assert_eq!(&ComplaintStatus::from_label(stage.label()), stage);
        }
    }

    #[test]
    fn test_review_alias() {
        assert_eq!(
            ComplaintStatus::from_label("Review"),
            ComplaintStatus::UnderReview
        );
        assert_eq!(ComplaintStatus::UnderReview.label(), "Under Review");
    }

    #[test]
    fn test_stray_value_is_preserved() {
        let status = ComplaintStatus::from_label("On Hold");
        assert_eq!(status, ComplaintStatus::Unrecognized("On Hold".into()));
        assert!(!status.is_recognized());
        assert_eq!(status.label(), "On Hold");
    }

    #[test]
    fn test_labels_are_case_sensitive() {
        assert!(!ComplaintStatus::from_label("submitted").is_recognized());
    }

    #[test]
    fn test_serde_uses_labels() {
        let json = serde_json::to_string(&ComplaintStatus::UnderReview).unwrap();
        assert_eq!(json, "\"Under Review\"");

        let status: ComplaintStatus = serde_json::from_str("\"Forwarded\"").unwrap();
        assert_eq!(status, ComplaintStatus::Forwarded);

        let stray: ComplaintStatus = serde_json::from_str("\"Escalated\"").unwrap();
        assert_eq!(stray, ComplaintStatus::Unrecognized("Escalated".into()));
        assert_eq!(serde_json::to_string(&stray).unwrap(), "\"Escalated\"");
    }

    #[test]
    fn test_next_steps_linearly() {
        assert_eq!(
            ComplaintStatus::Submitted.next(),
            Some(ComplaintStatus::Assigned)
        );
        assert_eq!(
            ComplaintStatus::Forwarded.next(),
            Some(ComplaintStatus::Resolved)
        );
        assert_eq!(ComplaintStatus::Resolved.next(), None);
        assert_eq!(ComplaintStatus::Rejected.next(), None);
        assert_eq!(ComplaintStatus::Unrecognized("x".into()).next(), None);
    }

    #[test]
    fn test_track_indexes() {
        assert_eq!(StageTrack::Standard.stages().len(), 5);
        assert_eq!(StageTrack::Full.stages().len(), 6);
        assert_eq!(StageTrack::Standard.index_of(&ComplaintStatus::Rejected), None);
        assert_eq!(StageTrack::Full.index_of(&ComplaintStatus::Rejected), Some(5));
        assert_eq!(
            StageTrack::Standard.index_of(&ComplaintStatus::UnderReview),
            Some(2)
        );
    }

    #[test]
    fn test_track_parse() {
        assert_eq!(StageTrack::parse("standard"), Some(StageTrack::Standard));
        assert_eq!(StageTrack::parse("full"), Some(StageTrack::Full));
        assert_eq!(StageTrack::parse("Full"), None);
        assert_eq!(StageTrack::default(), StageTrack::Full);
    }
}
