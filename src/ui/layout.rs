//! Page chrome: sticky header and status bar

use crate::app::App;
use crate::content;
use crate::platform::SUBMIT_SHORTCUT;
use crate::state::{Breakpoint, Focus, PageLayout, HEADER_HEIGHT, NAV_LINKS, STATUS_BAR_HEIGHT};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Split the screen into header, page viewport, and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = HEADER_HEIGHT.min(area.height);
    let status_height = STATUS_BAR_HEIGHT.min(area.height.saturating_sub(header_height));
    let header = Rect {
        height: header_height,
        ..area
    };
    let status = Rect {
        y: area.bottom().saturating_sub(status_height),
        height: status_height,
        ..area
    };
    let viewport = Rect {
        y: area.y + header_height,
        height: area.height.saturating_sub(header_height + status_height),
        ..area
    };
    (header, viewport, status)
}

fn nav_spans(layout: &PageLayout, offset: u16) -> Vec<Span<'static>> {
    let current = layout.section_at(offset);
    let mut spans = Vec::new();
    for (i, section) in NAV_LINKS.iter().enumerate() {
        let style = if *section == current {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default()
        };
        spans.push(Span::styled(
            format!("{}", i + 1),
            Style::default().fg(Color::DarkGray),
        ));
        spans.push(Span::styled(format!(" {}", section.title()), style));
        spans.push(Span::raw("  "));
    }
    spans
}

/// Draw the sticky header; it gains a border and background once the page scrolls
pub fn draw_header(buf: &mut Buffer, area: Rect, app: &App) {
    let layout = app.page_layout();
    let offset = app.state.scroll.offset;

    let block = if app.state.scroll.is_header_solid() {
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::Yellow))
            .style(Style::default().bg(Color::Black))
    } else {
        Block::default()
    };
    let inner = block.inner(area);
    block.render(area, buf);

    let content_row = Rect {
        y: inner.y + inner.height.saturating_sub(1).min(1),
        height: 1.min(inner.height),
        ..inner
    };

    let brand = Line::from(vec![
        Span::styled(" ✂ ", Style::default().fg(Color::Yellow)),
        Span::styled(
            content::BUSINESS_NAME,
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]);
    Paragraph::new(brand).render(content_row, buf);

    let mut right = match layout.breakpoint {
        Breakpoint::Mobile => {
            let label = if app.state.mobile_menu.is_open {
                "✕ Close (m) "
            } else {
                "☰ Menu (m) "
            };
            vec![Span::styled(label, Style::default().fg(Color::Yellow))]
        }
        Breakpoint::Tablet | Breakpoint::Desktop => nav_spans(&layout, offset),
    };
    if layout.breakpoint.shows_book_button() {
        right.push(Span::styled(
            format!(" {} (b) ", content::BOOK_CTA),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));
        right.push(Span::raw(" "));
    }
    Paragraph::new(Line::from(right))
        .alignment(Alignment::Right)
        .render(content_row, buf);
}

/// Keyboard hints for the current focus
fn get_hints(app: &App) -> String {
    if app.state.mobile_menu.is_open {
        return "j/k:nav  Enter:go  Esc:close".to_string();
    }
    match app.state.focus {
        Focus::Page => {
            let menu = if app.page_layout().breakpoint.uses_mobile_menu() {
                "m:menu  "
            } else {
                ""
            };
            format!("j/k:scroll  1-4:sections  {menu}t:top  c:contact  b:book  q:quit")
        }
        Focus::ContactForm => {
            if app.contact.status().banner_message().is_some() {
                format!("Tab:next  {SUBMIT_SHORTCUT}:send  Esc:dismiss")
            } else {
                format!("Tab:next  {SUBMIT_SHORTCUT}:send  Esc:back")
            }
        }
    }
}

pub fn draw_status_bar(buf: &mut Buffer, area: Rect, app: &App) {
    let mut spans = vec![Span::raw(" ")];

    spans.push(Span::styled(get_hints(app), Style::default().fg(Color::Gray)));

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Yellow)));
    }

    Paragraph::new(Line::from(spans))
        .style(Style::default().bg(Color::DarkGray))
        .render(area, buf);

    // Quit hint on the right
    let quit_hint = " ^C:quit ";
    let quit_width = (quit_hint.len() as u16).min(area.width);
    let quit_area = Rect {
        x: area.right().saturating_sub(quit_width),
        width: quit_width,
        ..area
    };
    Paragraph::new(quit_hint)
        .style(Style::default().bg(Color::DarkGray).fg(Color::Gray))
        .render(quit_area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_reserves_chrome() {
        let (header, viewport, status) = create_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(header, Rect::new(0, 0, 80, HEADER_HEIGHT));
        assert_eq!(status, Rect::new(0, 23, 80, 1));
        assert_eq!(viewport, Rect::new(0, 3, 80, 20));
    }

    #[test]
    fn test_layout_on_tiny_terminal() {
        let (header, viewport, status) = create_layout(Rect::new(0, 0, 80, 2));
        assert_eq!(header.height, 2);
        assert_eq!(viewport.height, 0);
        assert_eq!(status.height, 0);
    }
}
