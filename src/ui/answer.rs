use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};

use crate::app::App;
use crate::models::OptionLabel;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    render_verdict(frame, chunks[0], app);
    render_question_text(frame, chunks[1], &app.question().question_text);
    render_options(frame, chunks[2], app);
    render_controls(frame, chunks[3]);
}

fn render_verdict(frame: &mut Frame, area: Rect, app: &App) {
    let line = match app.question().correct_answer {
        None => Line::from("Respuesta correcta no detectada".fg(Color::Yellow)),
        Some(answer) if app.question().options.is_empty() => {
            Line::from(format!("Respuesta correcta: {}", answer).fg(Color::Cyan))
        }
        Some(answer) => {
            let (verdict, color) = if app.is_selected_correct() == Some(true) {
                ("CORRECTO", Color::Green)
            } else {
                ("INCORRECTO", Color::Red)
            };
            Line::from(vec![
                Span::styled(verdict, Style::default().fg(color).bold()),
                Span::styled(
                    format!("  ·  Respuesta correcta: {}", answer),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        }
    };

    frame.render_widget(Paragraph::new(line), area);
}

fn render_question_text(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn render_options(frame: &mut Frame, area: Rect, app: &App) {
    let answer = app.question().correct_answer;
    let options = &app.question().options;

    let mut lines: Vec<Line> = Vec::with_capacity(options.len() * 2);
    for (index, option) in options.iter().enumerate() {
        let is_selected = index == app.selected_option();
        let style = option_style(option.label, is_selected, answer);
        let marker = if is_selected { ">" } else { " " };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{}) ", option.label), style),
            Span::styled(option.text.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn option_style(label: OptionLabel, is_selected: bool, answer: Option<OptionLabel>) -> Style {
    if answer == Some(label) {
        Style::default().fg(Color::Green).bold()
    } else if is_selected {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("r back  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
