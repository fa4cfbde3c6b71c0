//! Shopping-assistant conversation state.
//!
//! DESIGN
//! ======
//! The assistant reply that is currently being streamed carries an explicit
//! `streaming` flag. Stream updates only ever touch the flagged message, and
//! closing the stream clears the flag, so at most one message is in flight.
//! The seeded greeting is created closed and is never rewritten.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use serde::{Deserialize, Serialize};

use crate::net::types::WireMessage;

pub const GREETING: &str =
    "Hey! 👋 I'm your Nike shopping assistant. How can I help you find the perfect pair today?";

pub const APOLOGY: &str = "Sorry, I'm having trouble connecting right now. Please try again in a moment!";

/// Who authored a chat message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// A single chat message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: String,
    pub role: ChatRole,
    pub content: String,
    /// Set while the assistant reply is still being streamed into `content`.
    pub streaming: bool,
}

impl ChatMessage {
    fn new(role: ChatRole, content: impl Into<String>, streaming: bool) -> Self {
        Self { id: uuid::Uuid::new_v4().to_string(), role, content: content.into(), streaming }
    }
}

/// What a stream update did to the conversation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssistantUpdate {
    /// A new in-flight assistant message was appended.
    Appended,
    /// The in-flight assistant message was rewritten in place.
    Updated,
}

/// Conversation shown in the chat overlay.
///
/// Provided once from `App` as `RwSignal<ChatState>`.
#[derive(Clone, Debug)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    /// True from submit until the stream ends or fails.
    pub loading: bool,
}

impl Default for ChatState {
    fn default() -> Self {
        Self { messages: vec![ChatMessage::new(ChatRole::Assistant, GREETING, false)], loading: false }
    }
}

impl ChatState {
    /// Append the shopper's message.
    pub fn push_user(&mut self, content: impl Into<String>) {
        self.messages.push(ChatMessage::new(ChatRole::User, content, false));
    }

    /// Messages to send upstream: everything except the seeded greeting.
    #[must_use]
    pub fn request_history(&self) -> Vec<WireMessage> {
        self.messages
            .iter()
            .skip(1)
            .map(|m| WireMessage { role: m.role, content: m.content.clone() })
            .collect()
    }

    /// The message currently being streamed, if any.
    #[must_use]
    pub fn in_flight(&self) -> Option<&ChatMessage> {
        self.messages.last().filter(|m| m.streaming)
    }

    /// Show `text` as the full assistant reply so far.
    ///
    /// Rewrites the in-flight message when there is one, otherwise opens a new
    /// in-flight assistant message.
    pub fn apply_assistant_text(&mut self, text: &str) -> AssistantUpdate {
        if let Some(last) = self
            .messages
            .last_mut()
            .filter(|m| m.streaming && m.role == ChatRole::Assistant)
        {
            last.content.clear();
            last.content.push_str(text);
            return AssistantUpdate::Updated;
        }
        self.messages.push(ChatMessage::new(ChatRole::Assistant, text, true));
        AssistantUpdate::Appended
    }

    /// Mark the in-flight message (if any) as complete.
    ///
    /// Returns whether a message was open.
    pub fn close_stream(&mut self) -> bool {
        let mut closed = false;
        for message in self.messages.iter_mut().filter(|m| m.streaming) {
            message.streaming = false;
            closed = true;
        }
        closed
    }

    /// Start a turn from raw input.
    ///
    /// Returns the history to send upstream, or `None` when the trimmed input
    /// is empty or a reply is still loading.
    pub fn begin_turn(&mut self, input: &str) -> Option<Vec<WireMessage>> {
        let text = input.trim();
        if text.is_empty() || self.loading {
            return None;
        }
        self.push_user(text);
        self.loading = true;
        Some(self.request_history())
    }

    /// End the current turn. A failed turn gets the apology appended; a
    /// successful or cancelled one keeps whatever text arrived.
    pub fn finish_turn(&mut self, failed: bool) {
        if failed {
            self.push_apology();
        } else {
            self.close_stream();
        }
        self.loading = false;
    }

    /// Close any open reply and append the fixed apology.
    pub fn push_apology(&mut self) {
        self.close_stream();
        self.messages.push(ChatMessage::new(ChatRole::Assistant, APOLOGY, false));
    }
}
