//! Header: logo, title, model name, context window usage.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::app::TITLE;
use crate::core::turn::TurnState;

use super::super::app::App;
use super::super::constants::{LOGO_IDLE, LOGO_THINKING};
use super::super::text::truncate_with_ellipsis;

/// Max width for the model label in the header.
const MODEL_HEADER_WIDTH: u16 = 24;
/// Width for the context display (e.g. "ctx 3/5 · 12 msgs").
const CONTEXT_HEADER_WIDTH: u16 = 22;

/// Pairs the next request will carry versus K, and the session length.
pub(crate) fn context_text(app: &App) -> String {
    let in_window = if app.session.is_empty() {
        "—".to_string()
    } else {
        app.session
            .len()
            .min(app.memory_length.get())
            .to_string()
    };
    format!(
        "ctx {}/{} · {} msgs",
        in_window,
        app.memory_length,
        app.session.len()
    )
}

pub(crate) fn draw_header(f: &mut Frame, app: &App, area: Rect, accent: Color) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(0),
            Constraint::Length(MODEL_HEADER_WIDTH),
            Constraint::Length(CONTEXT_HEADER_WIDTH),
        ])
        .split(area);

    let logo = if app.state == TurnState::Processing {
        LOGO_THINKING
    } else {
        LOGO_IDLE
    };
    f.render_widget(
        Paragraph::new(Span::styled(format!("{} ", logo), Style::default().fg(accent))),
        chunks[0],
    );

    let title = Line::from(Span::styled(
        TITLE,
        Style::default().fg(accent).add_modifier(Modifier::BOLD),
    ));
    f.render_widget(Paragraph::new(title).alignment(Alignment::Center), chunks[1]);

    let model = truncate_with_ellipsis(app.model.label(), MODEL_HEADER_WIDTH as usize - 1);
    f.render_widget(
        Paragraph::new(Span::styled(model, Style::default().fg(Color::DarkGray)))
            .alignment(Alignment::Right),
        chunks[2],
    );

    f.render_widget(
        Paragraph::new(Span::styled(
            context_text(app),
            Style::default().fg(Color::DarkGray),
        ))
        .alignment(Alignment::Right),
        chunks[3],
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Settings;
    use crate::core::message::MessagePair;

    #[test]
    fn context_text_before_and_after_a_turn() {
        let mut app = App::new(Settings::default(), &[]);
        assert_eq!(context_text(&app), "ctx —/5 · 0 msgs");
        let pair = MessagePair::new("q", "a");
        app.session.append(pair.clone());
        app.window.append(pair);
        assert_eq!(context_text(&app), "ctx 1/5 · 1 msgs");
    }

    #[test]
    fn context_text_follows_slider_between_turns() {
        let mut app = App::new(Settings::default(), &[]);
        for i in 0..5 {
            let pair = MessagePair::new(format!("q{i}"), format!("a{i}"));
            app.session.append(pair.clone());
            app.window.append(pair);
        }
        assert_eq!(context_text(&app), "ctx 5/5 · 5 msgs");
        for _ in 0..3 {
            app.decrease_memory();
        }
        assert_eq!(context_text(&app), "ctx 2/2 · 5 msgs");
    }
}
