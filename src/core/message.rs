//! Conversation message pair: one user utterance and the model reply.

use serde::Serialize;

/// One human/AI exchange. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessagePair {
    human: String,
    #[serde(rename = "AI")]
    ai: String,
}

impl MessagePair {
    pub fn new(human: impl Into<String>, ai: impl Into<String>) -> Self {
        Self {
            human: human.into(),
            ai: ai.into(),
        }
    }

    pub fn human(&self) -> &str {
        &self.human
    }

    pub fn ai(&self) -> &str {
        &self.ai
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_original_field_names() {
        let pair = MessagePair::new("hello", "hi there");
        let v = serde_json::to_value(&pair).unwrap();
        assert_eq!(v, serde_json::json!({"human": "hello", "AI": "hi there"}));
    }
}
