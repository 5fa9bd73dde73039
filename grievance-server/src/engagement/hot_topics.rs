//! Trending topics

use std::sync::Arc;

use shared::models::{Engagement, TrendingTopic};

/// Read-only trending topic list
#[derive(Debug, Clone)]
pub struct HotTopicCatalogue {
    topics: Arc<Vec<TrendingTopic>>,
}

impl HotTopicCatalogue {
    pub fn new(topics: Vec<TrendingTopic>) -> Self {
        Self {
            topics: Arc::new(topics),
        }
    }

    pub fn seeded() -> Self {
        Self::new(vec![
            topic(
                101,
                "Increased reports of chain snatching in the downtown area.",
                Engagement::High,
                150,
                "/chain-snatching.jpg",
            ),
            topic(
                102,
                "Water contamination concerns in Sector 12.",
                Engagement::VeryHigh,
                220,
                "/water-contamination.jpg",
            ),
            topic(
                103,
                "Frequent power outages disrupting businesses.",
                Engagement::Medium,
                80,
                "/power-outage.jpg",
            ),
        ])
    }

    /// Topics at or above `min_engagement`, in catalogue order
    pub fn list(&self, min_engagement: Option<Engagement>) -> Vec<TrendingTopic> {
        self.topics
            .iter()
            .filter(|t| min_engagement.is_none_or(|min| t.engagement >= min))
            .cloned()
            .collect()
    }
}

impl Default for HotTopicCatalogue {
    fn default() -> Self {
        Self::seeded()
    }
}

fn topic(
    id: i64,
    summary: &str,
    engagement: Engagement,
    discussion_count: u32,
    image: &str,
) -> TrendingTopic {
    TrendingTopic {
        id,
        summary: summary.to_string(),
        engagement,
        discussion_count,
        image_url: Some(image.to_string()),
    }
}
