//! 聊天机器人 - 会话状态、话题偏好、提示词组装与生成式 AI 调用
//!
//! 生成失败不会让请求失败：失败被归类为三种提示之一，作为机器人回复追加到会话。

pub mod client;
pub mod conversation;
pub mod preferences;
pub mod prompt;
pub mod service;

pub use client::{GeminiClient, GenerationError, GenerativeClient};
pub use conversation::{Conversation, GREETING};
pub use preferences::topic_preferences;
pub use prompt::PromptBuilder;
pub use service::ChatService;
