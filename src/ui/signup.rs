//! Sign-up screen rendering

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, Focus};
use crate::state::{FormSnapshot, SignUpField};

use super::widgets;

/// Draw the sign-up screen into the given area
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let snapshot = app.snapshot();

    // Centered column, capped so the form does not stretch on wide terminals
    let width = area.width.min(64);
    let column = Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // title
            Constraint::Length(4), // username
            Constraint::Length(4), // email
            Constraint::Length(4), // password
            Constraint::Length(4), // confirm password
            Constraint::Length(3), // submit button
            Constraint::Length(1), // status line
            Constraint::Min(0),
        ])
        .split(column);

    let title = Paragraph::new("Green Grocery Sign Up")
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    for (i, field) in SignUpField::ALL.iter().enumerate() {
        widgets::draw_field(
            frame,
            chunks[i + 1],
            field.label(),
            value_for(&snapshot, *field),
            error_for(&snapshot, *field),
            app.focus() == Focus::Field(*field),
            field.is_secured(),
        );
    }

    widgets::draw_submit_button(
        frame,
        chunks[5],
        snapshot.submit_enabled,
        app.focus() == Focus::SubmitButton,
    );
    widgets::draw_status_line(frame, chunks[6], &snapshot.status);
}

fn value_for(snapshot: &FormSnapshot, field: SignUpField) -> &str {
    match field {
        SignUpField::Username => &snapshot.username,
        SignUpField::Email => &snapshot.email,
        SignUpField::Password => &snapshot.password,
        SignUpField::ConfirmPassword => &snapshot.confirm_password,
    }
}

fn error_for(snapshot: &FormSnapshot, field: SignUpField) -> &str {
    match field {
        SignUpField::Username => &snapshot.username_error,
        SignUpField::Email => &snapshot.email_error,
        SignUpField::Password => &snapshot.password_error,
        SignUpField::ConfirmPassword => &snapshot.confirm_password_error,
    }
}
