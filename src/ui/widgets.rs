//! Field, button, and status rendering helpers

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::state::{StatusKind, StatusMessage};

/// Draw a single-line input box with its error line underneath.
/// The area is expected to be 4 rows: 3 for the box, 1 for the error.
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    error: &str,
    is_active: bool,
    is_secured: bool,
) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let shown = if is_secured {
        "*".repeat(value.chars().count())
    } else {
        value.to_string()
    };
    let cursor = if is_active { "▌" } else { "" };

    let input_area = Rect {
        height: area.height.min(3),
        ..area
    };
    let content = Paragraph::new(Line::from(vec![
        Span::styled(shown, style),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]))
    .block(
        Block::default()
            .title(format!(" {label} "))
            .borders(Borders::ALL)
            .border_style(style),
    );
    frame.render_widget(content, input_area);

    if area.height > 3 && !error.is_empty() {
        let error_area = Rect {
            y: area.y + 3,
            height: 1,
            ..area
        };
        let error_line = Paragraph::new(Line::from(Span::styled(
            error.to_string(),
            Style::default().fg(Color::Red),
        )))
        .alignment(Alignment::Right);
        frame.render_widget(error_line, error_area);
    }
}

/// Draw the submit button; disabled and active states get their own styles
pub fn draw_submit_button(frame: &mut Frame, area: Rect, enabled: bool, is_active: bool) {
    let style = if !enabled {
        Style::default().fg(Color::DarkGray)
    } else if is_active {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };

    let button = Paragraph::new(Line::from("Sign Up"))
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(style));
    frame.render_widget(button, area);
}

/// Draw the submit status line, colored by outcome kind
pub fn draw_status_line(frame: &mut Frame, area: Rect, status: &StatusMessage) {
    let color = match status.kind {
        StatusKind::Neutral => Color::White,
        StatusKind::Success => Color::Green,
        StatusKind::Failure => Color::Red,
    };

    let line = Paragraph::new(Line::from(Span::styled(
        status.text.clone(),
        Style::default().fg(color),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(line, area);
}
