//! Mobile navigation menu overlay

use crate::state::{MenuItem, MobileMenu};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

/// Render the open menu as a dropdown anchored under the header
pub fn render_mobile_menu(buf: &mut Buffer, anchor: Rect, menu: &MobileMenu) {
    let items = MenuItem::all();
    let width = items
        .iter()
        .map(|item| item.label().chars().count() as u16)
        .max()
        .unwrap_or(0)
        + 6; // marker + padding + borders
    let height = items.len() as u16 + 2;

    let menu_area = Rect {
        x: anchor.x + anchor.width.saturating_sub(width),
        y: anchor.y,
        width: width.min(anchor.width),
        height: height.min(anchor.height),
    };

    // Clear the area behind the menu
    Clear.render(menu_area, buf);

    let lines: Vec<Line> = items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let is_selected = i == menu.selected;
            let style = match (is_selected, item) {
                (true, _) => Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
                (false, MenuItem::BookAppointment) => Style::default().fg(Color::Yellow),
                (false, MenuItem::Link(_)) => Style::default(),
            };
            let marker = if is_selected { "▸ " } else { "  " };
            Line::from(Span::styled(format!("{marker}{}", item.label()), style))
        })
        .collect();

    Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Menu ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow))
                .style(Style::default().bg(Color::Black)),
        )
        .style(Style::default().bg(Color::Black))
        .render(menu_area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_lists_links_and_booking() {
        let area = Rect::new(0, 0, 40, 12);
        let mut buf = Buffer::empty(area);
        let menu = MobileMenu {
            is_open: true,
            selected: 1,
        };
        render_mobile_menu(&mut buf, area, &menu);
        let rendered: String = buf.content.iter().map(|c| c.symbol()).collect();
        assert!(rendered.contains("Services"));
        assert!(rendered.contains("▸ About"));
        assert!(rendered.contains("Book Appointment"));
    }
}
