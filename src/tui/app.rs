//! TUI application state: selections, input, latest reply, session.

use crate::core::config::{Settings, SettingsError};
use crate::core::memory::{MemoryLength, MemoryWindow};
use crate::core::models::Model;
use crate::core::session::Session;
use crate::core::turn::{TurnError, TurnOutcome, TurnState};

/// Which control receives plain keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Input,
    Model,
    Memory,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Input => Focus::Model,
            Focus::Model => Focus::Memory,
            Focus::Memory => Focus::Input,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Input => Focus::Memory,
            Focus::Model => Focus::Input,
            Focus::Memory => Focus::Model,
        }
    }
}

pub struct App {
    /// Model selected in the sidebar; used for the next request.
    pub(crate) model: Model,
    /// Slider value K for the next request.
    pub(crate) memory_length: MemoryLength,
    pub(crate) focus: Focus,
    /// Text in the question box.
    pub(crate) input: String,
    pub(crate) state: TurnState,
    /// Question that produced `response` (or is being processed).
    pub(crate) last_question: Option<String>,
    /// Latest generated text.
    pub(crate) response: Option<String>,
    /// Inline error from the last turn. Cleared on the next submission or with Esc.
    pub(crate) error: Option<String>,
    /// Problems with the initial settings, shown in the sidebar.
    pub(crate) notices: Vec<String>,
    /// First visible line of the response.
    pub(crate) response_scroll: usize,
    /// Max scroll for the response from the last draw.
    pub(crate) last_max_scroll: usize,
    pub(crate) session: Session,
    pub(crate) window: MemoryWindow,
}

impl App {
    pub fn new(settings: Settings, warnings: &[SettingsError]) -> Self {
        Self {
            model: settings.model,
            memory_length: settings.memory_length,
            focus: Focus::default(),
            input: String::new(),
            state: TurnState::Idle,
            last_question: None,
            response: None,
            error: None,
            notices: warnings
                .iter()
                .map(|w| format!("Error in sidebar customization: {}", w))
                .collect(),
            response_scroll: 0,
            last_max_scroll: 0,
            session: Session::new(),
            window: MemoryWindow::new(settings.memory_length),
        }
    }

    pub(crate) fn select_next_model(&mut self) {
        self.model = self.model.next();
    }

    pub(crate) fn select_prev_model(&mut self) {
        self.model = self.model.prev();
    }

    pub(crate) fn increase_memory(&mut self) {
        self.memory_length = self.memory_length.increment();
    }

    pub(crate) fn decrease_memory(&mut self) {
        self.memory_length = self.memory_length.decrement();
    }

    /// Move to Processing if the input holds a question; returns it as typed and clears the box.
    pub(crate) fn take_question(&mut self) -> Option<String> {
        if self.state == TurnState::Processing {
            return None;
        }
        self.state = TurnState::for_input(&self.input);
        if self.state == TurnState::Idle {
            return None;
        }
        let question = std::mem::take(&mut self.input);
        self.error = None;
        self.response_scroll = 0;
        self.last_question = Some(question.clone());
        Some(question)
    }

    /// Record the result of a turn and return to Idle.
    pub(crate) fn finish_turn(&mut self, result: Result<TurnOutcome, TurnError>) {
        self.state = TurnState::Idle;
        match result {
            Ok(TurnOutcome::Replied(reply)) => {
                self.response = Some(reply);
                self.error = None;
            }
            Ok(TurnOutcome::Idle) => {}
            Err(e) => {
                log::warn!("Turn failed: {}", e);
                self.response = None;
                self.error = Some(e.to_string());
            }
        }
    }

    /// Start a new session: history, window, and displayed reply are dropped.
    pub(crate) fn new_session(&mut self) {
        self.session.clear();
        self.window.reset(self.memory_length);
        self.last_question = None;
        self.response = None;
        self.error = None;
        self.response_scroll = 0;
    }

    pub(crate) fn scroll_up(&mut self, lines: usize) {
        self.response_scroll = self.response_scroll.saturating_sub(lines);
    }

    pub(crate) fn scroll_down(&mut self, lines: usize) {
        self.response_scroll = (self.response_scroll + lines).min(self.last_max_scroll);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::llm::ChatError;
    use crate::core::message::MessagePair;
    use crate::core::turn::{TurnErrorKind, TurnStep};

    fn app() -> App {
        App::new(Settings::default(), &[])
    }

    #[test]
    fn focus_cycles_both_ways() {
        assert_eq!(Focus::Input.next().next().next(), Focus::Input);
        assert_eq!(Focus::Input.prev(), Focus::Memory);
        assert_eq!(Focus::Model.prev(), Focus::Input);
    }

    #[test]
    fn memory_slider_stays_in_range() {
        let mut app = app();
        for _ in 0..20 {
            app.increase_memory();
        }
        assert_eq!(app.memory_length.get(), 10);
        for _ in 0..20 {
            app.decrease_memory();
        }
        assert_eq!(app.memory_length.get(), 1);
    }

    #[test]
    fn blank_input_stays_idle() {
        let mut app = app();
        app.input = "   ".to_string();
        assert_eq!(app.take_question(), None);
        assert_eq!(app.state, TurnState::Idle);
        assert_eq!(app.input, "   ");
    }

    #[test]
    fn question_moves_to_processing_and_back() {
        let mut app = app();
        app.input = " hello \n".to_string();
        assert_eq!(app.take_question().as_deref(), Some(" hello \n"));
        assert_eq!(app.state, TurnState::Processing);
        assert!(app.input.is_empty());
        assert_eq!(app.take_question(), None);

        app.finish_turn(Ok(TurnOutcome::Replied("hi there".to_string())));
        assert_eq!(app.state, TurnState::Idle);
        assert_eq!(app.response.as_deref(), Some("hi there"));
        assert!(app.error.is_none());
    }

    #[test]
    fn failed_turn_shows_inline_error() {
        let mut app = app();
        app.input = "q".to_string();
        app.take_question();
        app.finish_turn(Err(TurnError {
            step: TurnStep::Invoke,
            kind: TurnErrorKind::Chat(ChatError::EmptyReply),
        }));
        assert_eq!(app.state, TurnState::Idle);
        let err = app.error.as_deref().unwrap();
        assert!(err.starts_with("Error processing user question or conversation"));
        assert!(app.response.is_none());
    }

    #[test]
    fn new_session_drops_history() {
        let mut app = app();
        app.session.append(MessagePair::new("a", "b"));
        app.response = Some("b".to_string());
        app.new_session();
        assert!(app.session.is_empty());
        assert_eq!(app.window.len(), 0);
        assert!(app.response.is_none());
    }

    #[test]
    fn settings_warnings_become_notices() {
        let warnings = vec![SettingsError::NotANumber("x".to_string())];
        let app = App::new(Settings::default(), &warnings);
        assert_eq!(app.notices.len(), 1);
        assert!(app.notices[0].starts_with("Error in sidebar customization"));
    }

    #[test]
    fn scroll_is_clamped() {
        let mut app = app();
        app.last_max_scroll = 4;
        app.scroll_down(10);
        assert_eq!(app.response_scroll, 4);
        app.scroll_up(10);
        assert_eq!(app.response_scroll, 0);
    }
}
