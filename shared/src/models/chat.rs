//! Chat Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Author of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub content: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            sender: Sender::User,
            timestamp: Utc::now(),
        }
    }

    pub fn bot(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            sender: Sender::Bot,
            timestamp: Utc::now(),
        }
    }

    pub fn is_user(&self) -> bool {
        self.sender == Sender::User
    }
}

/// Why a bot reply is a failure notice instead of a completion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatFailureKind {
    NotConfigured,
    ModelNotFound,
    Generic,
}

impl ChatFailureKind {
    /// Text shown to the user in place of a reply
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::NotConfigured => {
                "The chatbot is not properly configured. Please add your Gemini API key to the environment variables."
            }
            Self::ModelNotFound => {
                "The Gemini model could not be found. The API may have been updated or the model name changed."
            }
            Self::Generic => "Sorry, I encountered an error. Please try again later.",
        }
    }
}

/// Complaint topic inferred from what the user talks about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    Sanitation,
    Roads,
    Water,
    Electricity,
    Education,
    Safety,
    Health,
    Parks,
}

impl Topic {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Sanitation => "sanitation",
            Self::Roads => "roads and public works",
            Self::Water => "water supply",
            Self::Electricity => "electricity",
            Self::Education => "education",
            Self::Safety => "police and public safety",
            Self::Health => "health",
            Self::Parks => "parks and recreation",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicPreference {
    pub topic: Topic,
    pub mentions: u32,
}

/// Conversation snapshot returned by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationView {
    pub id: Uuid,
    pub messages: Vec<ChatMessage>,
    /// Set after a send failed because no API key is configured
    pub needs_configuration: bool,
    pub created_at: DateTime<Utc>,
}

/// Message send payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessageCreate {
    #[serde(default)]
    pub content: String,
}

/// Result of one send
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatReply {
    pub conversation_id: Uuid,
    pub reply: ChatMessage,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<ChatFailureKind>,
    pub needs_configuration: bool,
}
