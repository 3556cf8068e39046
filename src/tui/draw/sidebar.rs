//! Sidebar: model selector, memory length slider, settings notices.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{LineGauge, List, ListItem, Paragraph, Wrap};

use crate::core::memory::MAX_MEMORY_LENGTH;
use crate::core::models::Model;

use super::super::app::{App, Focus};
use super::super::constants::{ACCENT, ACCENT_SECONDARY};
use super::focus_block;

pub(crate) fn draw_sidebar(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(Model::ALL.len() as u16 + 2),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

    draw_model_list(f, app, chunks[0]);
    draw_memory_slider(f, app, chunks[1]);
    draw_notices(f, app, chunks[2]);
}

fn draw_model_list(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = Model::ALL
        .iter()
        .map(|m| {
            if *m == app.model {
                ListItem::new(format!("● {}", m.label()))
                    .style(Style::default().fg(Color::Black).bg(ACCENT))
            } else {
                ListItem::new(format!("  {}", m.label()))
            }
        })
        .collect();
    let block = focus_block(" Select an LLM ", app.focus == Focus::Model);
    f.render_widget(List::new(items).block(block), area);
}

fn draw_memory_slider(f: &mut Frame, app: &App, area: Rect) {
    let k = app.memory_length.get();
    let gauge = LineGauge::default()
        .block(focus_block(
            " Conversational memory length ",
            app.focus == Focus::Memory,
        ))
        .filled_style(Style::default().fg(ACCENT_SECONDARY))
        .unfilled_style(Style::default().fg(Color::DarkGray))
        .line_set(symbols::line::THICK)
        .label(Span::styled(
            format!("{:>2} ", k),
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .ratio(k as f64 / MAX_MEMORY_LENGTH as f64);
    f.render_widget(gauge, area);
}

fn draw_notices(f: &mut Frame, app: &App, area: Rect) {
    if app.notices.is_empty() {
        return;
    }
    let lines: Vec<Line> = app
        .notices
        .iter()
        .map(|n| Line::from(Span::styled(n.as_str(), Style::default().fg(Color::Yellow))))
        .collect();
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}
