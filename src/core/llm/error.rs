//! Model client error types.

use serde_json::Value;

use crate::core::models::UnknownModel;

/// Errors from building or invoking the model client.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error(transparent)]
    UnknownModel(#[from] UnknownModel),
    #[error("{0}")]
    ApiAuth(String),
    #[error("API error: {0}")]
    ApiMessage(String),
    /// The API answered without any text content.
    #[error("The model returned an empty response")]
    EmptyReply,
    #[error(transparent)]
    Other(Box<dyn std::error::Error + Send + Sync + 'static>),
}

/// Map async-openai or API errors into ChatError.
pub fn map_api_error<E>(e: E) -> ChatError
where
    E: std::fmt::Display + Into<Box<dyn std::error::Error + Send + Sync + 'static>>,
{
    let s = e.to_string();
    let lower = s.to_lowercase();
    if lower.contains("invalid api key")
        || lower.contains("invalid_api_key")
        || lower.contains("unauthorized")
    {
        return ChatError::ApiAuth(
            "API error (401): Invalid API key. Check GROQ_API_KEY in .env.".to_string(),
        );
    }
    if let Some(msg) = json_error_message(&s) {
        return ChatError::ApiMessage(msg);
    }
    ChatError::Other(e.into())
}

/// `error.message` from a JSON body embedded in the error text.
fn json_error_message(s: &str) -> Option<String> {
    let start = s.find('{')?;
    let body: Value = serde_json::from_str(&s[start..]).ok()?;
    body.get("error")?
        .get("message")?
        .as_str()
        .map(str::to_string)
}
