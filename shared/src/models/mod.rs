//! Data models
//!
//! Shared between grievance-server and the web client (via API).
//! Complaint ids are `i64`; conversations and appeals use UUIDs.

pub mod appeal;
pub mod chat;
pub mod complaint;
pub mod feed;
pub mod hot_topic;
pub mod roadmap;
pub mod status;

// Re-exports
pub use appeal::*;
pub use chat::*;
pub use complaint::*;
pub use feed::*;
pub use hot_topic::*;
pub use roadmap::*;
pub use status::*;
