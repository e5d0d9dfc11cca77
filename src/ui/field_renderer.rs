//! Field rendering for the contact form

use crate::contact::{FieldConstraint, FieldName, FormField, ValidationResult};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// Draw one input with its label, value or placeholder, and inline error
pub fn draw_field(
    buf: &mut Buffer,
    area: Rect,
    name: FieldName,
    field: &FormField,
    constraint: &FieldConstraint,
    is_active: bool,
) {
    let error = field.error();

    let border_style = match (error.is_some(), is_active) {
        (true, _) => Style::default().fg(Color::Red),
        (false, true) => Style::default().fg(Color::Cyan),
        (false, false) => Style::default().fg(Color::DarkGray),
    };

    let cursor = if is_active { "▌" } else { "" };
    let cursor_span = Span::styled(cursor, Style::default().fg(Color::Cyan));

    let inner_width = usize::from(area.width.saturating_sub(2)).max(1);
    let inner_height = usize::from(area.height.saturating_sub(2)).max(1);

    let content = if field.value.is_empty() {
        let placeholder = Span::styled(
            name.placeholder(),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        );
        // Cursor sits before the placeholder so the hint stays readable
        Paragraph::new(Line::from(vec![cursor_span, placeholder])).wrap(Wrap { trim: false })
    } else {
        let rows = visible_rows(&field.value, cursor.chars().count(), inner_width, inner_height);
        let last = rows.len().saturating_sub(1);
        let lines: Vec<Line> = rows
            .into_iter()
            .enumerate()
            .map(|(i, row)| {
                if i == last {
                    Line::from(vec![Span::raw(row), cursor_span.clone()])
                } else {
                    Line::from(row)
                }
            })
            .collect();
        Paragraph::new(lines)
    };

    let required = if constraint.required { " *" } else { "" };
    let mut title = vec![Span::raw(format!(" {}{required} ", name.label()))];
    if field.validation == Some(ValidationResult::Valid) && !field.value.is_empty() {
        title.push(Span::styled("✓ ", Style::default().fg(Color::Green)));
    }
    let mut block = Block::default()
        .title(Line::from(title))
        .borders(Borders::ALL)
        .border_style(border_style);

    if let Some(max) = constraint.max_chars {
        let count = field.value.chars().count();
        let count_style = if count > max {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        block = block.title(Line::styled(format!(" {count}/{max} "), count_style).right_aligned());
    }

    if let Some(message) = error {
        block = block.title_bottom(Line::styled(
            format!(" {message} "),
            Style::default().fg(Color::Red),
        ));
    }

    content.block(block).render(area, buf);
}

/// Break `value` into rows of at most `width` chars and keep the last
/// `height` of them, so the end of the text and the cursor stay in view.
/// `reserve` chars are left free on the final row for the cursor.
fn visible_rows(value: &str, reserve: usize, width: usize, height: usize) -> Vec<String> {
    let mut rows = Vec::new();
    for line in value.split('\n') {
        let chars: Vec<char> = line.chars().collect();
        if chars.is_empty() {
            rows.push(String::new());
            continue;
        }
        rows.extend(chars.chunks(width).map(|chunk| chunk.iter().collect::<String>()));
    }

    if reserve > 0 {
        if let Some(last) = rows.last() {
            if last.chars().count() + reserve > width {
                rows.push(String::new());
            }
        }
    }

    let skip = rows.len().saturating_sub(height);
    rows.split_off(skip)
}
