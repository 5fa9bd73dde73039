//! Hot Topic Model

use serde::{Deserialize, Serialize};

/// Engagement level of a trending topic, ordered low to high
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Engagement {
    Medium,
    High,
    #[serde(rename = "Very High", alias = "very_high")]
    VeryHigh,
}

/// Trending complaint topic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendingTopic {
    pub id: i64,
    pub summary: String,
    pub engagement: Engagement,
    pub discussion_count: u32,
    pub image_url: Option<String>,
}

/// Hot topic list filter
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HotTopicQuery {
    #[serde(default)]
    pub min_engagement: Option<Engagement>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engagement_order() {
        assert!(Engagement::Medium < Engagement::High);
        assert!(Engagement::High < Engagement::VeryHigh);
    }

    #[test]
    fn test_engagement_labels() {
        assert_eq!(
            serde_json::to_string(&Engagement::VeryHigh).unwrap(),
            "\"Very High\""
        );
        let parsed: Engagement = serde_json::from_str("\"very_high\"").unwrap();
        assert_eq!(parsed, Engagement::VeryHigh);
    }
}
