//! Prompt assembly
//!
//! A prompt is plain text in fixed sections: preamble, preferred topics,
//! the user's complaints, recent history, then the new input.

use std::fmt::Write;

use shared::models::{ChatMessage, Complaint, Sender, TopicPreference};

const PREAMBLE: &str = "You are the Digital Gov Drishti assistant, helping citizens file and \
track grievances with their local government. Answer briefly and point users to the \
relevant complaint or department when you can.";

#[derive(Debug, Default)]
pub struct PromptBuilder<'a> {
    preferences: &'a [TopicPreference],
    complaints: &'a [Complaint],
    history: &'a [ChatMessage],
}

impl<'a> PromptBuilder<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn preferences(mut self, preferences: &'a [TopicPreference]) -> Self {
        self.preferences = preferences;
        self
    }

    pub fn complaints(mut self, complaints: &'a [Complaint]) -> Self {
        self.complaints = complaints;
        self
    }

    /// Recent messages, already cut to the history window
    pub fn history(mut self, history: &'a [ChatMessage]) -> Self {
        self.history = history;
        self
    }

    pub fn build(&self, input: &str) -> String {
        let mut prompt = String::from(PREAMBLE);

        if !self.preferences.is_empty() {
            let topics: Vec<&str> = self.preferences.iter().map(|p| p.topic.label()).collect();
            let _ = write!(prompt, "\n\nThe user often asks about: {}.", topics.join(", "));
        }

        if !self.complaints.is_empty() {
            prompt.push_str("\n\nThe user's complaints:");
            for complaint in self.complaints {
                let _ = write!(
                    prompt,
                    "\n- #{} {} ({})",
                    complaint.id, complaint.title, complaint.status
                );
            }
        }

        if !self.history.is_empty() {
            prompt.push_str("\n\nConversation so far:");
            for message in self.history {
                let speaker = match message.sender {
                    Sender::User => "User",
                    Sender::Bot => "Assistant",
                };
                let _ = write!(prompt, "\n{speaker}: {}", message.content);
            }
        }

        let _ = write!(prompt, "\n\nUser: {input}\nAssistant:");
        prompt
    }
}
