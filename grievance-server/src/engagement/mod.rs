//! 社区互动 - 动态、热点话题和申诉上诉

pub mod appeals;
pub mod feed;
pub mod hot_topics;

pub use appeals::AppealDesk;
pub use feed::FeedBoard;
pub use hot_topics::HotTopicCatalogue;
