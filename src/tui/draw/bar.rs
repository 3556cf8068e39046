//! Bottom bar: focused control on the left, shortcuts on the right.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::turn::TurnState;

use super::super::app::{App, Focus};
use super::super::shortcuts::labels;

pub(crate) fn draw(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Min(80)])
        .split(area);

    let hint = match app.focus {
        Focus::Input => "question",
        Focus::Model => "model: ↑↓ to choose",
        Focus::Memory => "memory: ←→ to adjust",
    };
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            hint,
            Style::default().fg(Color::DarkGray),
        ))),
        chunks[0],
    );

    let shortcuts = labels::bottom_bar(app.state == TurnState::Processing);
    f.render_widget(
        Paragraph::new(shortcuts).alignment(Alignment::Right),
        chunks[1],
    );
}
