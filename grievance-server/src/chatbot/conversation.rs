//! Conversation state

use chrono::{DateTime, Utc};
use shared::models::{ChatMessage, ConversationView};
use uuid::Uuid;

pub const GREETING: &str =
    "Hello! I'm your Digital Gov Drishti assistant. How can I help you today?";

#[derive(Debug, Clone)]
pub struct Conversation {
    pub id: Uuid,
    pub messages: Vec<ChatMessage>,
    /// Set by a not-configured failure, cleared by the next successful reply
    pub needs_configuration: bool,
    pub created_at: DateTime<Utc>,
}

impl Conversation {
    /// New conversation opened with the bot greeting
    pub fn start() -> Self {
        Self {
            id: Uuid::new_v4(),
            messages: vec![ChatMessage::bot(GREETING)],
            needs_configuration: false,
            created_at: Utc::now(),
        }
    }

    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    /// Last `window` messages, oldest first
    pub fn recent(&self, window: usize) -> &[ChatMessage] {
        let start = self.messages.len().saturating_sub(window);
        &self.messages[start..]
    }

    pub fn view(&self) -> ConversationView {
        ConversationView {
            id: self.id,
            messages: self.messages.clone(),
            needs_configuration: self.needs_configuration,
            created_at: self.created_at,
        }
    }
}
