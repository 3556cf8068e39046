//! Centralized keyboard shortcuts.
//!
//! Complete reference:
//!
//! | Action          | Keys                                  |
//! |-----------------|---------------------------------------|
//! | Send            | Enter                                 |
//! | Newline         | Alt+Enter, Shift+Enter                |
//! | Focus           | Tab / Shift+Tab                       |
//! | Model           | Alt+M, Alt+↑ Alt+↓, µ (Option+M Mac)  |
//! | Memory length   | Alt+← Alt+→                           |
//! | Scroll reply    | PageUp PageDown                       |
//! | New session     | Ctrl+N                                |
//! | Dismiss error   | Esc                                   |
//! | Quit            | Ctrl+C                                |

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Detected shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    Quit,
    NewSession,
    NextModel,
    PrevModel,
    MemoryUp,
    MemoryDown,
    FocusNext,
    FocusPrev,
    ScrollUp,
    ScrollDown,
    DismissError,
}

/// Character produced by Option+M on Mac when Option is not configured as Meta.
const MAC_OPTION_M: char = '\u{00B5}'; // µ

impl Shortcut {
    /// Returns the shortcut if the key matches one, regardless of focus.
    pub fn match_key(key: &KeyEvent) -> Option<Shortcut> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);

        match key.code {
            KeyCode::Char('c') if ctrl => Some(Shortcut::Quit),
            KeyCode::Char('n') if ctrl => Some(Shortcut::NewSession),
            KeyCode::Char('m') if alt => Some(Shortcut::NextModel),
            KeyCode::Char(MAC_OPTION_M) => Some(Shortcut::NextModel),
            KeyCode::Down if alt => Some(Shortcut::NextModel),
            KeyCode::Up if alt => Some(Shortcut::PrevModel),
            KeyCode::Right if alt => Some(Shortcut::MemoryUp),
            KeyCode::Left if alt => Some(Shortcut::MemoryDown),
            KeyCode::BackTab => Some(Shortcut::FocusPrev),
            KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => {
                Some(Shortcut::FocusPrev)
            }
            KeyCode::Tab => Some(Shortcut::FocusNext),
            KeyCode::PageUp => Some(Shortcut::ScrollUp),
            KeyCode::PageDown => Some(Shortcut::ScrollDown),
            KeyCode::Esc => Some(Shortcut::DismissError),
            _ => None,
        }
    }
}

/// Shortcut labels for the bottom bar.
pub mod labels {
    use ratatui::style::{Color, Style};
    use ratatui::text::{Line, Span};

    fn key(k: &str) -> Span<'_> {
        Span::styled(k, Style::default().fg(Color::DarkGray))
    }

    pub fn bottom_bar(processing: bool) -> Line<'static> {
        if processing {
            return Line::from(vec![Span::styled(
                "Waiting for the model… ",
                Style::default().fg(Color::DarkGray),
            )]);
        }
        Line::from(vec![
            key("Enter "),
            Span::raw("send  "),
            key("Tab "),
            Span::raw("focus  "),
            key("Alt+M "),
            Span::raw("model  "),
            key("Alt+←→ "),
            Span::raw("memory  "),
            key("Ctrl+N "),
            Span::raw("new session  "),
            key("Ctrl+C "),
            Span::raw("quit "),
        ])
    }
}
