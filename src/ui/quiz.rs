//! The question screen: one question, its possible responses, and the
//! navigation controls the session currently allows.

use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};

use crate::app::App;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(session) = app.session() else {
        return;
    };
    let Some(question) = session.current_question() else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    render_title(frame, chunks[0], session.quiz().title.as_str());
    render_progress(frame, chunks[1], app);
    render_question_label(frame, chunks[2], &question.question_label);
    render_responses(frame, chunks[3], app);
    render_controls(frame, chunks[4], app);
}

fn render_title(frame: &mut Frame, area: Rect, title: &str) {
    let widget = Paragraph::new(format!("Quiz of the day: {}", title))
        .alignment(Alignment::Center)
        .fg(Color::Cyan)
        .bold();
    frame.render_widget(widget, area);
}

fn render_progress(frame: &mut Frame, area: Rect, app: &App) {
    let Some(session) = app.session() else {
        return;
    };
    let progress = format!(
        "{}/{}",
        session.position() + 1,
        session.quiz().questions.len()
    );
    let widget = Paragraph::new(progress)
        .alignment(Alignment::Right)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

fn render_question_label(frame: &mut Frame, area: Rect, label: &str) {
    let widget = Paragraph::new(label)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn render_responses(frame: &mut Frame, area: Rect, app: &App) {
    let Some(session) = app.session() else {
        return;
    };
    let Some(question) = session.current_question() else {
        return;
    };
    let recorded = session.current_response_id();

    let mut lines: Vec<Line> = Vec::with_capacity(question.possible_responses.len() * 2);
    for (index, response) in question.possible_responses.iter().enumerate() {
        let is_highlighted = index == app.selected_response();
        let is_recorded = recorded == Some(response.response_id);

        let style = if is_highlighted {
            Style::default().fg(Color::Cyan).bold()
        } else if is_recorded {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if is_highlighted { ">" } else { " " };
        let record_mark = if is_recorded { "●" } else { " " };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{} ", record_mark), style),
            Span::styled(format!("{}. ", option_letter(index)), style),
            Span::styled(response.response_label.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn option_letter(index: usize) -> char {
    if index < 26 {
        char::from(b'A' + index as u8)
    } else {
        '?'
    }
}

fn render_controls(frame: &mut Frame, area: Rect, app: &App) {
    let Some(session) = app.session() else {
        return;
    };

    let mut controls = String::from("j/k move  ·  enter choose");
    if session.can_go_previous() {
        controls.push_str("  ·  p previous");
    }
    if session.can_go_next() {
        controls.push_str("  ·  n next");
    }
    controls.push_str("  ·  ctrl+l logout  ·  q quit");

    let widget = Paragraph::new(controls)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
