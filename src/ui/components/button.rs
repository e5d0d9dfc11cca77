//! Button component for TUI

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Render a bordered button filling `area`
pub fn render_button(
    buf: &mut Buffer,
    area: Rect,
    content: &str,
    is_selected: bool,
    is_enabled: bool,
) {
    let border_style = if is_selected {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let text_style = if !is_enabled {
        Style::default().fg(Color::DarkGray)
    } else if is_selected {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let paragraph = Paragraph::new(format!(" {content} "))
        .style(text_style)
        .alignment(Alignment::Center);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    paragraph.block(block).render(area, buf);
}

/// Render a button sized to its label, centered horizontally in `area`
pub fn render_centered_button(buf: &mut Buffer, area: Rect, content: &str, is_selected: bool) {
    let width = (content.chars().count() as u16 + 4).min(area.width);
    let button_area = Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y,
        width,
        height: BUTTON_HEIGHT.min(area.height),
    };
    render_button(buf, button_area, content, is_selected, true);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .filter_map(|x| buf.cell((x, y)).map(|c| c.symbol().to_string()))
            .collect()
    }

    #[test]
    fn test_button_label_is_centered() {
        let area = Rect::new(0, 0, 20, BUTTON_HEIGHT);
        let mut buf = Buffer::empty(area);
        render_button(&mut buf, area, "Send", false, true);
        assert!(row(&buf, 1).contains(" Send "));
        assert!(row(&buf, 0).starts_with('┌'));
    }

    #[test]
    fn test_centered_button_fits_label() {
        let area = Rect::new(0, 0, 30, BUTTON_HEIGHT);
        let mut buf = Buffer::empty(area);
        render_centered_button(&mut buf, area, "Book", true);
        let top = row(&buf, 0);
        assert_eq!(top.trim().chars().count(), 8);
        assert_eq!(
            buf.cell((15, 1)).map(|c| c.fg),
            Some(Color::Yellow),
            "selected label is highlighted"
        );
    }
}
