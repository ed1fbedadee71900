use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::App;
use crate::models::{EvaluationResult, Outcome};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let question = app.question();
    let chunks = Layout::vertical([
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(4),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    render_prompt(frame, chunks[0], question.prompt());
    render_choices(
        frame,
        chunks[1],
        question.choices(),
        app.highlighted(),
        app.checked(),
    );

    if let Some(result) = app.result() {
        render_result(frame, chunks[2], result, question.feedback());
    }

    render_controls(frame, chunks[3]);
}

fn render_prompt(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn render_choices(
    frame: &mut Frame,
    area: Rect,
    choices: &[String],
    highlighted: usize,
    checked: Option<usize>,
) {
    let mut lines: Vec<Line> = Vec::with_capacity(choices.len() * 2);

    for (index, choice) in choices.iter().enumerate() {
        let is_highlighted = index == highlighted;
        let style = if is_highlighted {
            Style::default().fg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if is_highlighted { ">" } else { " " };
        let radio = if checked == Some(index) { "(•)" } else { "( )" };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{} ", radio), style),
            Span::styled(choice.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

fn render_result(
    frame: &mut Frame,
    area: Rect,
    result: &EvaluationResult,
    feedback: Option<&str>,
) {
    let color = match result.outcome {
        Outcome::Correct => Color::Green,
        Outcome::Incorrect => Color::Red,
        Outcome::NoSelection => Color::Yellow,
    };

    let mut lines = vec![Line::from(Span::styled(
        result.message.as_str(),
        Style::default().fg(color).bold(),
    ))];
    if let Some(feedback) = feedback {
        lines.push(Line::from(feedback.fg(Color::Gray)));
    }

    let widget = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k navigate  ·  space choose  ·  enter submit  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
