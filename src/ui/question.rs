use ratatui::{
    prelude::*,
    widgets::{Block, Padding, Paragraph, Wrap},
};

use crate::app::App;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    render_status(frame, chunks[0], app);
    render_question_text(frame, chunks[1], &app.question().question_text);
    render_options(frame, chunks[2], app);
    render_controls(frame, chunks[3]);
}

fn render_status(frame: &mut Frame, area: Rect, app: &App) {
    let status = if app.question().correct_answer.is_some() {
        "respuesta disponible"
    } else {
        "respuesta no detectada"
    };
    let widget = Paragraph::new(status)
        .alignment(Alignment::Right)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

fn render_question_text(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn render_options(frame: &mut Frame, area: Rect, app: &App) {
    let options = &app.question().options;
    if options.is_empty() {
        render_raw_response(frame, area, app);
        return;
    }

    let mut lines: Vec<Line> = Vec::with_capacity(options.len() * 2);
    for (index, option) in options.iter().enumerate() {
        let is_selected = index == app.selected_option();
        let style = if is_selected {
            Style::default().fg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
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

/// No options were recovered; show the raw response so the user still sees
/// what the model sent.
fn render_raw_response(frame: &mut Frame, area: Rect, app: &App) {
    let widget = Paragraph::new(app.question().raw_text.as_str())
        .wrap(Wrap { trim: true })
        .fg(Color::DarkGray)
        .block(Block::default().padding(Padding::horizontal(1)));
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k navigate  ·  enter reveal  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
