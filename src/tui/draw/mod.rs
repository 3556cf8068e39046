//! TUI rendering: layout and widgets for the chat interface.

mod bar;
mod chat;
mod header;
mod sidebar;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders};

use super::app::App;
use super::constants::{ACCENT, SIDEBAR_WIDTH};

pub(super) fn draw(f: &mut Frame, app: &mut App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(8),
            Constraint::Length(1),
        ])
        .split(area);
    header::draw_header(f, app, rows[0], ACCENT);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(20)])
        .split(rows[1]);
    sidebar::draw_sidebar(f, app, columns[0]);
    chat::draw_chat(f, app, columns[1]);

    bar::draw(f, app, rows[2]);
}

/// Bordered block; accent border when the control has focus.
pub(super) fn focus_block(title: &str, focused: bool) -> Block<'_> {
    let color = if focused { ACCENT } else { Color::DarkGray };
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title(title)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Settings;
    use crate::core::turn::TurnOutcome;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(app: &mut App) -> String {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw(f, app, f.area())).unwrap();
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn renders_title_controls_and_reply() {
        let mut app = App::new(Settings::default(), &[]);
        app.input = "hello".to_string();
        app.take_question();
        app.finish_turn(Ok(TurnOutcome::Replied("hi there".to_string())));
        let screen = render(&mut app);
        assert!(screen.contains("Groq Chat App"));
        assert!(screen.contains("Select an LLM"));
        assert!(screen.contains("Mixtral 8x7B"));
        assert!(screen.contains("Conversational memory length"));
        assert!(screen.contains("Ask a question"));
        assert!(screen.contains("Chatbot"));
        assert!(screen.contains("hi there"));
    }

    #[test]
    fn renders_inline_error() {
        let mut app = App::new(Settings::default(), &[]);
        app.error = Some("Error initializing conversation chain: boom".to_string());
        let screen = render(&mut app);
        assert!(screen.contains("Error initializing conversation chain"));
    }
}
