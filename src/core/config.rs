//! Configuration from the environment (optionally populated from `.env` at startup).

use std::env;

use async_openai::config::OpenAIConfig;

use crate::core::memory::{MemoryError, MemoryLength};
use crate::core::models::{Model, UnknownModel};

pub const API_KEY_VAR: &str = "GROQ_API_KEY";
pub const BASE_URL_VAR: &str = "GROQ_BASE_URL";
pub const MODEL_VAR: &str = "GROQ_MODEL";
pub const MEMORY_LENGTH_VAR: &str = "GROQ_MEMORY_LENGTH";
pub const SYSTEM_PROMPT_VAR: &str = "GROQ_SYSTEM_PROMPT";

pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Conversation preamble sent as the system message on every turn.
pub const DEFAULT_SYSTEM_PROMPT: &str = "The following is a friendly conversation between a human and an AI. \
The AI is talkative and provides lots of specific details from its context. \
If the AI does not know the answer to a question, it truthfully says it does not know.";

/// Fatal configuration errors. Startup stops on these.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("GROQ_API_KEY not found in environment variables. Please set it in your .env file.")]
    MissingApiKey,
}

/// Invalid initial UI settings. Recovered by falling back to the default.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("GROQ_MODEL: {0}; using {default}", default = Model::default())]
    UnknownModel(#[from] UnknownModel),
    #[error("GROQ_MEMORY_LENGTH: {0}; using {default}", default = MemoryLength::default())]
    InvalidMemoryLength(#[from] MemoryError),
    #[error("GROQ_MEMORY_LENGTH: '{0}' is not a number; using {default}", default = MemoryLength::default())]
    NotANumber(String),
}

/// Initial selections for the model selector and memory slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Settings {
    pub model: Model,
    pub memory_length: MemoryLength,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub openai_config: OpenAIConfig,
    pub base_url: String,
    pub settings: Settings,
    pub system_prompt: String,
    /// Recoverable problems found while reading settings (shown inline).
    pub warnings: Vec<SettingsError>,
}

/// Load configuration from the process environment. Returns an error if the API key is missing.
pub fn load() -> Result<Config, ConfigError> {
    from_lookup(|key| env::var(key).ok())
}

/// Build configuration from a variable lookup. Blank values count as unset, except
/// for the system prompt, which is kept as given.
pub fn from_lookup<F>(lookup: F) -> Result<Config, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    let api_key = get(API_KEY_VAR).ok_or(ConfigError::MissingApiKey)?;
    let base_url = get(BASE_URL_VAR).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    let system_prompt =
        lookup(SYSTEM_PROMPT_VAR).unwrap_or_else(|| DEFAULT_SYSTEM_PROMPT.to_string());
    let (settings, warnings) = settings_from_lookup(&get);

    let openai_config = OpenAIConfig::new()
        .with_api_base(base_url.clone())
        .with_api_key(api_key.trim());

    Ok(Config {
        openai_config,
        base_url,
        settings,
        system_prompt,
        warnings,
    })
}

/// Read the initial model and memory length, collecting recoverable errors.
pub fn settings_from_lookup<F>(get: F) -> (Settings, Vec<SettingsError>)
where
    F: Fn(&str) -> Option<String>,
{
    let mut settings = Settings::default();
    let mut warnings = Vec::new();

    if let Some(id) = get(MODEL_VAR) {
        match id.parse::<Model>() {
            Ok(model) => settings.model = model,
            Err(e) => warnings.push(e.into()),
        }
    }

    if let Some(raw) = get(MEMORY_LENGTH_VAR) {
        match raw.trim().parse::<i64>() {
            Ok(k) => match MemoryLength::new(k) {
                Ok(len) => settings.memory_length = len,
                Err(e) => warnings.push(e.into()),
            },
            Err(_) => warnings.push(SettingsError::NotANumber(raw)),
        }
    }

    (settings, warnings)
}

/// Whether the API key is present, without building a full config.
pub fn api_key_present() -> bool {
    env::var(API_KEY_VAR)
        .ok()
        .is_some_and(|v| !v.trim().is_empty())
}
