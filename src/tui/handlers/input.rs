//! Handler for the question box.

use crossterm::event::{KeyCode, KeyModifiers};

use super::super::app::App;
use super::HandleResult;

/// Handle keys when the question box has focus.
pub(crate) fn handle_main_input(
    key_code: KeyCode,
    key_modifiers: KeyModifiers,
    app: &mut App,
) -> HandleResult {
    match key_code {
        KeyCode::Enter
            if key_modifiers.intersects(KeyModifiers::ALT | KeyModifiers::SHIFT) =>
        {
            app.input.push('\n');
            HandleResult::Continue
        }
        KeyCode::Enter => match app.take_question() {
            Some(question) => HandleResult::Submit(question),
            None => HandleResult::Continue,
        },
        KeyCode::Backspace => {
            app.input.pop();
            HandleResult::Continue
        }
        KeyCode::Char(c) => {
            // Ignore Ctrl/Alt+key: user likely intended a shortcut
            if !key_modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
                app.input.push(c);
            }
            HandleResult::Continue
        }
        _ => HandleResult::Continue,
    }
}
