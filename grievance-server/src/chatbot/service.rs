//! Chat service

use std::sync::Arc;

use dashmap::DashMap;
use shared::models::{
    ChatFailureKind, ChatMessage, ChatReply, ConversationView, TopicPreference,
};
use uuid::Uuid;

use super::client::GenerativeClient;
use super::conversation::Conversation;
use super::preferences::topic_preferences;
use super::prompt::PromptBuilder;
use crate::complaints::ComplaintRepository;
use crate::utils::{AppError, AppResult, ErrorCode};

/// Conversations keyed by id, plus the backend that answers them
#[derive(Clone)]
pub struct ChatService {
    conversations: Arc<DashMap<Uuid, Conversation>>,
    client: Arc<dyn GenerativeClient>,
    complaints: Arc<dyn ComplaintRepository>,
    history_window: usize,
}

impl std::fmt::Debug for ChatService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatService")
            .field("conversations", &self.conversations.len())
            .field("history_window", &self.history_window)
            .finish()
    }
}

fn conversation_not_found(id: Uuid) -> AppError {
    AppError::with_message(
        ErrorCode::ConversationNotFound,
        format!("Conversation {id} not found"),
    )
    .with_detail("conversation_id", id.to_string())
}

impl ChatService {
    pub fn new(
        client: Arc<dyn GenerativeClient>,
        complaints: Arc<dyn ComplaintRepository>,
        history_window: usize,
    ) -> Self {
        Self {
            conversations: Arc::new(DashMap::new()),
            client,
            complaints,
            history_window,
        }
    }

    pub fn start(&self) -> ConversationView {
        let conversation = Conversation::start();
        let view = conversation.view();
        self.conversations.insert(conversation.id, conversation);
        tracing::debug!(conversation_id = %view.id, "Conversation started");
        view
    }

    pub fn get(&self, id: Uuid) -> AppResult<ConversationView> {
        self.conversations
            .get(&id)
            .map(|c| c.view())
            .ok_or_else(|| conversation_not_found(id))
    }

    pub fn preferences(&self, id: Uuid) -> AppResult<Vec<TopicPreference>> {
        self.conversations
            .get(&id)
            .map(|c| topic_preferences(&c.messages))
            .ok_or_else(|| conversation_not_found(id))
    }

    /// Send one user message and append the bot's reply
    ///
    /// Generation failures become a bot message and never an `Err`. Only a
    /// blank message or an unknown conversation fail.
    pub async fn send(&self, id: Uuid, content: &str) -> AppResult<ChatReply> {
        if content.trim().is_empty() {
            return Err(AppError::new(ErrorCode::EmptyMessage));
        }

        // Guard is released before awaiting the backend
        let prompt = {
            let mut conversation = self
                .conversations
                .get_mut(&id)
                .ok_or_else(|| conversation_not_found(id))?;

            let history = conversation.recent(self.history_window).to_vec();
            conversation.push(ChatMessage::user(content));
            let preferences = topic_preferences(&conversation.messages);
            let complaints = self.complaints.list();

            PromptBuilder::new()
                .preferences(&preferences)
                .complaints(&complaints)
                .history(&history)
                .build(content)
        };

        let (reply, failure) = match self.client.generate(&prompt).await {
            Ok(text) => (ChatMessage::bot(text), None),
            Err(e) => {
                let kind = e.kind();
                tracing::warn!(conversation_id = %id, kind = ?kind, "Chat generation failed: {e}");
                (ChatMessage::bot(kind.user_message()), Some(kind))
            }
        };

        let mut conversation = self
            .conversations
            .get_mut(&id)
            .ok_or_else(|| conversation_not_found(id))?;
        // Only a success clears the flag; other failures leave it as is
        match failure {
            None => conversation.needs_configuration = false,
            Some(ChatFailureKind::NotConfigured) => conversation.needs_configuration = true,
            Some(_) => {}
        }
        conversation.push(reply.clone());

        Ok(ChatReply {
            conversation_id: id,
            reply,
            failure,
            needs_configuration: conversation.needs_configuration,
        })
    }
}
