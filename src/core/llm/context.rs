//! Conversation chain: turns the memory window and a new question into API messages.

use serde::Serialize;

use crate::core::memory::MemoryWindow;

/// Errors when assembling the conversation chain.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChainError {
    #[error("system prompt is empty (check GROQ_SYSTEM_PROMPT)")]
    EmptyPreamble,
}

/// Role of a chat completion message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// One message in the chat completion request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiMessage {
    pub role: Role,
    pub content: String,
}

impl ApiMessage {
    fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

/// Preamble plus windowed history, ready to accept the next question.
#[derive(Debug)]
pub struct Conversation<'a> {
    preamble: &'a str,
    window: &'a MemoryWindow,
}

impl<'a> Conversation<'a> {
    pub fn new(preamble: &'a str, window: &'a MemoryWindow) -> Result<Self, ChainError> {
        if preamble.trim().is_empty() {
            return Err(ChainError::EmptyPreamble);
        }
        Ok(Self { preamble, window })
    }

    /// System message, then one user/assistant message per windowed pair, then the question.
    pub fn messages(&self, question: &str) -> Vec<ApiMessage> {
        let mut messages = Vec::with_capacity(self.window.len() * 2 + 2);
        messages.push(ApiMessage::new(Role::System, self.preamble));
        for pair in self.window.render() {
            messages.push(ApiMessage::new(Role::User, pair.human()));
            messages.push(ApiMessage::new(Role::Assistant, pair.ai()));
        }
        messages.push(ApiMessage::new(Role::User, question));
        messages
    }
}
