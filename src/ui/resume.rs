//! The summary screen: every visible question with its chosen response,
//! the save control, and the post-save notification.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::app::App;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(session) = app.session() else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(2),
        Constraint::Length(2),
    ])
    .margin(1)
    .split(area);

    render_header(frame, chunks[1], session.quiz().title.as_str());
    render_entries(frame, chunks[2], app);
    render_notification(frame, chunks[3], app);
    render_controls(frame, chunks[4], app);
}

fn render_header(frame: &mut Frame, area: Rect, title: &str) {
    let content = vec![
        Line::from(Span::styled(
            "YOUR RESPONSES",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("Quiz of the day: {}", title),
            Style::default().fg(Color::Gray),
        )),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_entries(frame: &mut Frame, area: Rect, app: &App) {
    let Some(session) = app.session() else {
        return;
    };

    let mut lines: Vec<Line> = Vec::new();
    for entry in session.summary() {
        lines.push(Line::from(Span::styled(
            entry.question.question_label.clone(),
            Style::default().fg(Color::White),
        )));
        let (answer, style) = match entry.response_label {
            Some(label) => (label.to_string(), Style::default().fg(Color::Green)),
            None => ("(no response)".to_string(), Style::default().fg(Color::DarkGray)),
        };
        lines.push(Line::from(vec![
            Span::styled("   → ", Style::default().fg(Color::DarkGray)),
            Span::styled(answer, style),
        ]));
        lines.push(Line::from(""));
    }

    let widget = Paragraph::new(lines)
        .block(Block::default().padding(Padding::horizontal(1)))
        .scroll((app.summary_scroll() as u16, 0));
    frame.render_widget(widget, area);
}

fn render_notification(frame: &mut Frame, area: Rect, app: &App) {
    let Some(session) = app.session() else {
        return;
    };

    let line = if session.saved() {
        Line::from(Span::styled(
            "Responses saved. Thank you for your participation.",
            Style::default().fg(Color::Green).bold(),
        ))
    } else if session.already_submitted() {
        Line::from(Span::styled(
            "You already responded to this quiz.",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from("")
    };

    let widget = Paragraph::new(line).alignment(Alignment::Center);
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect, app: &App) {
    let Some(session) = app.session() else {
        return;
    };

    let mut controls = String::from("j/k scroll");
    if session.can_save() {
        controls.push_str("  ·  s save");
    }
    if session.can_go_previous() {
        controls.push_str("  ·  p previous");
    }
    controls.push_str("  ·  ctrl+l logout  ·  q quit");

    let widget = Paragraph::new(controls)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
