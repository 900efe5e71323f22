//! Login and register screens: a two-field credential form.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::{App, FormField, Screen};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let registering = app.screen == Screen::Register;

    let chunks = Layout::vertical([
        Constraint::Percentage(30),
        Constraint::Length(13),
        Constraint::Percentage(30),
    ])
    .split(area);

    let title = if registering { "REGISTER" } else { "LOG IN" };
    let submit_label = if registering {
        "[Enter] register  ·  [Ctrl+R] log in  ·  [Esc] quit"
    } else {
        "[Enter] log in  ·  [Ctrl+R] register  ·  [Esc] quit"
    };

    let mut content = vec![
        Line::from(""),
        Line::from(Span::styled(title, Style::default().fg(Color::Cyan).bold())),
        Line::from(""),
        field_line(
            "Email:    ",
            app.form.email.clone(),
            app.form.focus == FormField::Email,
        ),
        Line::from(""),
        field_line(
            "Password: ",
            "*".repeat(app.form.password.chars().count()),
            app.form.focus == FormField::Password,
        ),
        Line::from(""),
    ];

    if let Some(err) = &app.form.error {
        content.push(Line::from(Span::styled(
            err.clone(),
            Style::default().fg(Color::Red),
        )));
    } else {
        content.push(Line::from(""));
    }

    content.push(Line::from(""));
    content.push(Line::from(Span::styled(
        submit_label,
        Style::default().fg(Color::DarkGray),
    )));

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, chunks[1]);
}

fn field_line(label: &'static str, value: String, focused: bool) -> Line<'static> {
    let value_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::Gray)
    };
    let cursor = if focused { "_" } else { " " };

    Line::from(vec![
        Span::styled(label, Style::default().fg(Color::White)),
        Span::styled(value, value_style),
        Span::styled(cursor, value_style),
    ])
}
