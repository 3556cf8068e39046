//! One conversation turn: replay the session into the memory window, call the model,
//! record the exchange.
//!
//! Every step returns a typed error tagged with the step that failed. The session is
//! only touched after the model answered, so a failed turn leaves it unchanged.

use std::fmt;

use crate::core::llm::{ChainError, ChatError, ChatModel, Conversation};
use crate::core::memory::{MemoryError, MemoryLength, MemoryWindow};
use crate::core::message::MessagePair;
use crate::core::models::Model;
use crate::core::session::Session;

/// Front-end state: waiting for input, or handling a submitted question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TurnState {
    #[default]
    Idle,
    Processing,
}

impl TurnState {
    /// Non-blank input starts processing; anything else stays idle.
    pub fn for_input(input: &str) -> Self {
        if input.trim().is_empty() {
            TurnState::Idle
        } else {
            TurnState::Processing
        }
    }
}

/// Step of a turn, used to describe where it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnStep {
    Memory,
    ModelClient,
    Chain,
    Invoke,
}

impl fmt::Display for TurnStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TurnStep::Memory => "Error initializing conversation memory",
            TurnStep::ModelClient => "Error initializing Groq Chat object",
            TurnStep::Chain => "Error initializing conversation chain",
            TurnStep::Invoke => "Error processing user question or conversation",
        };
        f.write_str(s)
    }
}

/// Cause of a failed turn.
#[derive(Debug, thiserror::Error)]
pub enum TurnErrorKind {
    #[error(transparent)]
    Memory(#[from] MemoryError),
    #[error(transparent)]
    Chat(#[from] ChatError),
    #[error(transparent)]
    Chain(#[from] ChainError),
}

/// A failed turn: which step failed and why.
#[derive(Debug, thiserror::Error)]
#[error("{step}: {kind}")]
pub struct TurnError {
    pub step: TurnStep,
    #[source]
    pub kind: TurnErrorKind,
}

impl TurnError {
    fn at(step: TurnStep) -> impl FnOnce(TurnErrorKind) -> Self {
        move |kind| Self { step, kind }
    }
}

/// Selections in effect for one turn.
#[derive(Debug, Clone, Copy)]
pub struct TurnRequest<'a> {
    /// Model identifier as selected; validated when the turn runs.
    pub model_id: &'a str,
    /// Raw slider value; validated when the turn runs.
    pub memory_length: i64,
    pub system_prompt: &'a str,
    pub question: &'a str,
}

/// Outcome of handling one submitted input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Blank input; nothing was sent.
    Idle,
    Replied(String),
}

/// Handle one user submission against `session`.
///
/// `window` is rebuilt from the full session history before the call, so a changed
/// memory length applies to the whole history. On success the new pair is appended
/// to both the window and the session.
pub async fn run_turn<M: ChatModel>(
    client: &M,
    session: &mut Session,
    window: &mut MemoryWindow,
    request: TurnRequest<'_>,
) -> Result<TurnOutcome, TurnError> {
    if TurnState::for_input(request.question) == TurnState::Idle {
        return Ok(TurnOutcome::Idle);
    }

    let memory_length = MemoryLength::new(request.memory_length)
        .map_err(|e| TurnError::at(TurnStep::Memory)(e.into()))?;
    window.replay(memory_length, session.all());

    let model = request
        .model_id
        .parse::<Model>()
        .map_err(|e| TurnError::at(TurnStep::ModelClient)(ChatError::from(e).into()))?;

    let conversation = Conversation::new(request.system_prompt, window)
        .map_err(|e| TurnError::at(TurnStep::Chain)(e.into()))?;
    let messages = conversation.messages(request.question);

    log::debug!(
        "Turn: model={} k={} window={} session={}",
        model,
        window.capacity(),
        window.len(),
        session.len()
    );

    let reply = client
        .complete(model, &messages)
        .await
        .map_err(|e| TurnError::at(TurnStep::Invoke)(e.into()))?;

    let pair = MessagePair::new(request.question, reply.clone());
    window.append(pair.clone());
    session.append(pair);
    Ok(TurnOutcome::Replied(reply))
}
