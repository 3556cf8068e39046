//! Main column: inline error, question box, latest reply.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::core::turn::TurnState;

use super::super::app::{App, Focus};
use super::super::constants::{ACCENT, INPUT_LINES};
use super::super::text::wrap_message;
use super::focus_block;

/// Error box height including borders.
const ERROR_LINES: u16 = 4;

pub(crate) fn draw_chat(f: &mut Frame, app: &mut App, area: Rect) {
    let error_height = if app.error.is_some() { ERROR_LINES } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(error_height),
            Constraint::Length(INPUT_LINES),
            Constraint::Min(3),
        ])
        .split(area);

    if let Some(ref err) = app.error {
        draw_error(f, err, chunks[0]);
    }
    draw_input(f, app, chunks[1]);
    draw_response(f, app, chunks[2]);
}

fn draw_error(f: &mut Frame, err: &str, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .title(" Error (Esc to dismiss) ");
    let para = Paragraph::new(Span::styled(err, Style::default().fg(Color::Red)))
        .block(block)
        .wrap(Wrap { trim: true });
    f.render_widget(para, area);
}

fn draw_input(f: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Input;
    let block = focus_block(" Ask a question: ", focused);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let width = inner.width as usize;
    let height = inner.height as usize;
    let lines = wrap_message(&app.input, width.saturating_sub(1));
    // Keep the end of the text (where the cursor is) visible.
    let skip = lines.len().saturating_sub(height);
    let visible: Vec<Line> = lines[skip..]
        .iter()
        .map(|l| Line::from(l.as_str()))
        .collect();
    f.render_widget(Paragraph::new(visible), inner);

    if focused && app.state == TurnState::Idle && height > 0 {
        let last = lines.last().map(|l| l.chars().count()).unwrap_or(0);
        let row = lines.len().saturating_sub(1 + skip).min(height - 1);
        let cx = inner.x + (last.min(width.saturating_sub(1))) as u16;
        let cy = inner.y + row as u16;
        f.set_cursor_position(Position::new(cx, cy));
    }
}

fn draw_response(f: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Chatbot: ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();
    if let Some(ref q) = app.last_question {
        let first = q.lines().next().unwrap_or("");
        lines.push(Line::from(vec![
            Span::styled("You: ", Style::default().fg(Color::DarkGray)),
            Span::styled(first.to_string(), Style::default().fg(Color::DarkGray)),
        ]));
        lines.push(Line::from(""));
    }

    match (app.state, app.response.as_deref()) {
        (TurnState::Processing, _) => {
            lines.push(Line::from(Span::styled(
                "Thinking…",
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )));
        }
        (TurnState::Idle, Some(reply)) => {
            for l in wrap_message(reply, inner.width as usize) {
                lines.push(Line::from(Span::styled(l, Style::default().fg(ACCENT))));
            }
        }
        (TurnState::Idle, None) => {}
    }

    app.last_max_scroll = lines.len().saturating_sub(inner.height as usize);
    app.response_scroll = app.response_scroll.min(app.last_max_scroll);
    let para = Paragraph::new(lines).scroll((app.response_scroll as u16, 0));
    f.render_widget(para, inner);
}
