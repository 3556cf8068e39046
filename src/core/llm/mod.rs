//! Model client: one request/response call to the Groq chat completions endpoint.

pub(crate) mod context;
mod error;

use std::future::Future;

use async_openai::Client;
use async_openai::config::OpenAIConfig;
use serde_json::{Value, json};

use crate::core::config::Config;
use crate::core::models::Model;

pub use context::{ApiMessage, ChainError, Conversation};
pub use error::{ChatError, map_api_error};

/// Stateless request/response wrapper around a chat model.
pub trait ChatModel {
    /// Send `messages` to `model` and return the generated text.
    fn complete(
        &self,
        model: Model,
        messages: &[ApiMessage],
    ) -> impl Future<Output = Result<String, ChatError>>;
}

/// Groq client over the OpenAI-compatible API.
#[derive(Clone)]
pub struct GroqClient {
    client: Client<OpenAIConfig>,
}

impl GroqClient {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::with_config(config.openai_config.clone()),
        }
    }
}

impl ChatModel for GroqClient {
    async fn complete(&self, model: Model, messages: &[ApiMessage]) -> Result<String, ChatError> {
        log::debug!("Calling {} with {} messages", model, messages.len());
        let response: Value = self
            .client
            .chat()
            .create_byot(json!({
                "model": model.id(),
                "messages": messages,
            }))
            .await
            .map_err(map_api_error)?;

        if let Some(err) = response.get("error") {
            let msg = err
                .get("message")
                .and_then(|v| v.as_str())
                .unwrap_or("Unknown error");
            return Err(ChatError::ApiMessage(msg.to_string()));
        }

        extract_reply(&response).ok_or(ChatError::EmptyReply)
    }
}

/// Text of the first choice (`choices[0].message.content`), if any.
fn extract_reply(response: &Value) -> Option<String> {
    let content = response
        .get("choices")?
        .as_array()?
        .first()?
        .get("message")?
        .get("content")?
        .as_str()?;
    if content.trim().is_empty() {
        None
    } else {
        Some(content.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_reply_reads_first_choice() {
        let response = json!({
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "hi there"}},
                {"index": 1, "message": {"role": "assistant", "content": "ignored"}}
            ]
        });
        assert_eq!(extract_reply(&response), Some("hi there".to_string()));
    }

    #[test]
    fn extract_reply_missing_choices() {
        assert_eq!(extract_reply(&json!({"id": "x"})), None);
        assert_eq!(extract_reply(&json!({"choices": []})), None);
    }

    #[test]
    fn extract_reply_blank_content_is_none() {
        let response = json!({"choices": [{"message": {"content": "  "}}]});
        assert_eq!(extract_reply(&response), None);
    }
}
