use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph},
};

const NOTICE_HEIGHT: u16 = 3;
const NOTICE_BOTTOM_MARGIN: u16 = 3;

/// Draw a toast-style box near the bottom of `area`.
pub fn render(frame: &mut Frame, area: Rect, message: &str) {
    let width = (message.chars().count() as u16 + 4).min(area.width);
    let popup = notice_area(area, width);

    let widget = Paragraph::new(message)
        .alignment(Alignment::Center)
        .fg(Color::White)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Color::Yellow),
        );

    frame.render_widget(Clear, popup);
    frame.render_widget(widget, popup);
}

fn notice_area(area: Rect, width: u16) -> Rect {
    let height = NOTICE_HEIGHT.min(area.height);
    let bottom = area.bottom().saturating_sub(NOTICE_BOTTOM_MARGIN);
    let y = bottom.saturating_sub(height).max(area.y);
    let x = area.x + (area.width - width) / 2;
    Rect::new(x, y, width, height)
}
