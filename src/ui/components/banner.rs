//! Status banner shown above the contact form

use crate::contact::SubmissionStatus;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// Render the banner for `status`; returns false when the status has none
pub fn render_status_banner(buf: &mut Buffer, area: Rect, status: SubmissionStatus) -> bool {
    let Some(message) = status.banner_message() else {
        return false;
    };

    let (color, title) = match status {
        SubmissionStatus::Success => (Color::Green, " Sent "),
        _ => (Color::Red, " Error "),
    };

    let hint = Line::from(vec![
        Span::styled(
            "Esc",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" to dismiss "),
    ])
    .right_aligned();

    let block = Block::default()
        .title(Span::styled(
            title,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))
        .title_bottom(hint)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    Paragraph::new(message)
        .style(Style::default().fg(color))
        .wrap(Wrap { trim: true })
        .block(block)
        .render(area, buf);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(buf: &Buffer) -> String {
        buf.content.iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_no_banner_while_idle_or_submitting() {
        let area = Rect::new(0, 0, 60, 3);
        let mut buf = Buffer::empty(area);
        assert!(!render_status_banner(&mut buf, area, SubmissionStatus::Idle));
        assert!(!render_status_banner(
            &mut buf,
            area,
            SubmissionStatus::Submitting
        ));
        assert!(text(&buf).trim().is_empty());
    }

    #[test]
    fn test_error_banner_shows_fallback_phone() {
        let area = Rect::new(0, 0, 70, 3);
        let mut buf = Buffer::empty(area);
        assert!(render_status_banner(&mut buf, area, SubmissionStatus::Error));
        let rendered = text(&buf);
        assert!(rendered.contains("Please call 813-874-1508"));
        assert!(rendered.contains("Esc to dismiss"));
    }

    #[test]
    fn test_success_banner() {
        let area = Rect::new(0, 0, 60, 3);
        let mut buf = Buffer::empty(area);
        render_status_banner(&mut buf, area, SubmissionStatus::Success);
        assert!(text(&buf).contains("Thank you! We'll contact you soon."));
    }
}
