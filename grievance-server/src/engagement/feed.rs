//! Community feed

use std::sync::Arc;

use parking_lot::RwLock;
use shared::models::{FeedPost, FeedPostId, Reaction};

use crate::utils::{AppError, AppResult, ErrorCode};

/// Feed posts with reaction counters
#[derive(Debug, Clone, Default)]
pub struct FeedBoard {
    posts: Arc<RwLock<Vec<FeedPost>>>,
}

impl FeedBoard {
    pub fn new(posts: Vec<FeedPost>) -> Self {
        Self {
            posts: Arc::new(RwLock::new(posts)),
        }
    }

    pub fn seeded() -> Self {
        Self::new(seed_posts())
    }

    pub fn list(&self) -> Vec<FeedPost> {
        self.posts.read().clone()
    }

    pub fn like(&self, id: FeedPostId) -> AppResult<FeedPost> {
        self.react(id, Reaction::Like)
    }

    pub fn dislike(&self, id: FeedPostId) -> AppResult<FeedPost> {
        self.react(id, Reaction::Dislike)
    }

    /// Apply one reaction and return the updated post
    pub fn react(&self, id: FeedPostId, reaction: Reaction) -> AppResult<FeedPost> {
        let mut posts = self.posts.write();
        let post = posts.iter_mut().find(|p| p.id == id).ok_or_else(|| {
            AppError::with_message(ErrorCode::FeedPostNotFound, format!("Post {id} not found"))
                .with_detail("post_id", id)
        })?;

        match reaction {
            Reaction::Like => post.likes = post.likes.saturating_add(1),
            Reaction::Dislike => post.dislikes = post.dislikes.saturating_add(1),
        }
        Ok(post.clone())
    }
}

#[allow(clippy::too_many_arguments)]
fn post(
    id: FeedPostId,
    summary: &str,
    has_proof: bool,
    image: &str,
    (likes, dislikes, shares, comments): (u32, u32, u32, u32),
    posted: &str,
    location: &str,
    witnesses: u32,
) -> FeedPost {
    FeedPost {
        id,
        summary: summary.to_string(),
        has_proof,
        image_url: Some(image.to_string()),
        likes,
        dislikes,
        shares,
        comments,
        posted: posted.to_string(),
        location: location.to_string(),
        witnesses,
        original_complaint_url: format!("/complaints/{id}"),
    }
}

fn seed_posts() -> Vec<FeedPost> {
    vec![
        post(
            1,
            "Theft reported near the market. Seeking witnesses. Possible suspect identified.",
            true,
            "/theft.jpg",
            (120, 15, 30, 5),
            "1 hour ago",
            "Central Market",
            3,
        ),
        post(
            2,
            "Issue with water supply in Sector 5. Urgent action needed. Low pressure reported.",
            false,
            "/water.jpg",
            (85, 5, 10, 2),
            "2 hours ago",
            "Sector 5",
            0,
        ),
        post(
            3,
            "Road accident on Highway 42. Traffic disruption. Multiple vehicles involved.",
            true,
            "/road.jpg",
            (250, 20, 55, 12),
            "3 hours ago",
            "Highway 42",
            5,
        ),
        post(
            4,
            "Noise complaint in residential area. Late night disturbance. Loud music.",
            false,
            "/noise.jpg",
            (40, 10, 5, 1),
            "5 hours ago",
            "Oakwood Apartments",
            1,
        ),
        post(
            5,
            "Vandalism at the park. Damage to property. Graffiti reported.",
            true,
            "/vandalism.jpg",
            (180, 18, 40, 8),
            "8 hours ago",
            "Central Park",
            2,
        ),
        post(
            6,
            "Illegal dumping reported near the river. Environmental hazard. Chemical waste.",
            false,
            "/dump.jpg",
            (60, 7, 12, 3),
            "12 hours ago",
            "Riverbank Area",
            0,
        ),
        post(
            7,
            "Suspicious activity reported outside the bank. Possible robbery attempt.",
            true,
            "/bank.jpg",
            (110, 10, 25, 7),
            "1 day ago",
            "First National Bank",
            4,
        ),
        post(
            8,
            "Public gathering without permission. Violation of regulations.",
            false,
            "/gathering.jpg",
            (30, 5, 3, 0),
            "2 days ago",
            "Town Square",
            0,
        ),
    ]
}
