mod login;
mod quiz;
mod resume;

use ratatui::{prelude::*, widgets::Block, widgets::Paragraph};

use crate::app::{App, Screen};

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match app.screen {
        Screen::Login | Screen::Register => login::render(frame, area, app),
        Screen::Loading => render_loading(frame, area),
        Screen::Quiz => match app.session() {
            Some(session) if session.at_summary() => resume::render(frame, area, app),
            Some(_) => quiz::render(frame, area, app),
            None => render_loading(frame, area),
        },
    }
}

fn render_loading(frame: &mut Frame, area: Rect) {
    let chunks = Layout::vertical([
        Constraint::Percentage(40),
        Constraint::Length(5),
        Constraint::Percentage(40),
    ])
    .split(area);

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Loading quiz...",
            Style::default().fg(Color::Yellow),
        )),
        Line::from(""),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center);
    frame.render_widget(widget, chunks[1]);
}
