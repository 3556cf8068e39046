//! Event handlers for the TUI: keyboard and mouse.

mod input;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseEvent, MouseEventKind};

use crate::core::turn::TurnState;

use super::app::{App, Focus};
use super::constants;
use super::shortcuts::Shortcut;

/// Result of handling an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandleResult {
    Continue,
    /// A question was submitted; the caller runs the turn.
    Submit(String),
    Break,
}

/// Handle a mouse event (wheel scrolls the reply).
pub fn handle_mouse(mouse: MouseEvent, app: &mut App) {
    match mouse.kind {
        MouseEventKind::ScrollUp => app.scroll_up(constants::SCROLL_LINES_SMALL),
        MouseEventKind::ScrollDown => app.scroll_down(constants::SCROLL_LINES_SMALL),
        _ => {}
    }
}

/// Handle a key event.
pub fn handle_key(key: KeyEvent, app: &mut App) -> HandleResult {
    if key.kind != KeyEventKind::Press {
        return HandleResult::Continue;
    }

    if let Some(shortcut) = Shortcut::match_key(&key) {
        if shortcut == Shortcut::Quit {
            return HandleResult::Break;
        }
        if app.state == TurnState::Idle {
            handle_shortcut(shortcut, app);
        }
        return HandleResult::Continue;
    }

    if app.state == TurnState::Processing {
        return HandleResult::Continue;
    }

    match app.focus {
        Focus::Input => input::handle_main_input(key.code, key.modifiers, app),
        Focus::Model => {
            match key.code {
                KeyCode::Up | KeyCode::Char('k') => app.select_prev_model(),
                KeyCode::Down | KeyCode::Char('j') => app.select_next_model(),
                KeyCode::Enter => app.focus = Focus::Input,
                _ => {}
            }
            HandleResult::Continue
        }
        Focus::Memory => {
            match key.code {
                KeyCode::Right | KeyCode::Up | KeyCode::Char('+') => app.increase_memory(),
                KeyCode::Left | KeyCode::Down | KeyCode::Char('-') => app.decrease_memory(),
                KeyCode::Enter => app.focus = Focus::Input,
                _ => {}
            }
            HandleResult::Continue
        }
    }
}

fn handle_shortcut(shortcut: Shortcut, app: &mut App) {
    match shortcut {
        Shortcut::NewSession => {
            if !app.session.is_empty() {
                log::info!("New session ({} pairs dropped)", app.session.len());
            }
            app.new_session();
        }
        Shortcut::NextModel => app.select_next_model(),
        Shortcut::PrevModel => app.select_prev_model(),
        Shortcut::MemoryUp => app.increase_memory(),
        Shortcut::MemoryDown => app.decrease_memory(),
        Shortcut::FocusNext => app.focus = app.focus.next(),
        Shortcut::FocusPrev => app.focus = app.focus.prev(),
        Shortcut::ScrollUp => app.scroll_up(constants::SCROLL_LINES_PAGE),
        Shortcut::ScrollDown => app.scroll_down(constants::SCROLL_LINES_PAGE),
        Shortcut::DismissError => app.error = None,
        Shortcut::Quit => {}
    }
}
