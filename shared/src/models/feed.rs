//! Feed Model

use serde::{Deserialize, Serialize};

pub type FeedPostId = i64;

/// Community feed post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedPost {
    pub id: FeedPostId,
    pub summary: String,
    /// Whether the report carries media proof
    pub has_proof: bool,
    pub image_url: Option<String>,
    pub likes: u32,
    pub dislikes: u32,
    pub shares: u32,
    pub comments: u32,
    /// Relative posting time as shown to users ("2 hours ago")
    pub posted: String,
    pub location: String,
    pub witnesses: u32,
    pub original_complaint_url: String,
}

/// Reaction applied to a feed post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reaction {
    Like,
    Dislike,
}
