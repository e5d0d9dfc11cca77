//! Static page sections: hero, services, about, location

use super::components::{render_centered_button, BUTTON_HEIGHT};
use crate::content::{self, ServiceOffering};
use crate::state::{wrapped_height, Breakpoint, LOCATION_BLOCK_HEIGHT};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Widget, Wrap},
};

fn heading_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

/// Bordered, padded frame shared by every section; returns the inner area
pub fn section_block(buf: &mut Buffer, area: Rect, title: &str) -> Rect {
    let block = Block::default()
        .title(Span::styled(format!(" {title} "), heading_style()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    block.render(area, buf);
    inner
}

/// Row `offset` of `area`, `height` rows tall, clipped to the area
fn rows(area: Rect, offset: u16, height: u16) -> Rect {
    let y = area.y.saturating_add(offset).min(area.bottom());
    Rect {
        x: area.x,
        y,
        width: area.width,
        height: height.min(area.bottom().saturating_sub(y)),
    }
}

pub fn draw_hero(buf: &mut Buffer, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(area);
    block.render(area, buf);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            content::BUSINESS_NAME.to_uppercase(),
            heading_style(),
        )),
        Line::from(Span::styled(
            content::TAGLINE,
            Style::default().add_modifier(Modifier::ITALIC),
        )),
        Line::from(""),
        Line::from(content::HEADLINE),
    ];
    let text_height = lines.len() as u16;
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .render(rows(inner, 0, text_height), buf);

    render_centered_button(
        buf,
        rows(inner, text_height, BUTTON_HEIGHT),
        &format!("{} (b)", content::BOOK_CTA),
        true,
    );
}

fn draw_service_card(buf: &mut Buffer, area: Rect, service: &ServiceOffering, spaced: bool) {
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", service.name),
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let mut lines = vec![Line::from(Span::styled(
        service.price_label(),
        Style::default().fg(Color::Yellow),
    ))];
    if spaced {
        lines.push(Line::from(""));
    }
    lines.push(Line::from(service.description));

    Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(block)
        .render(area, buf);
}

pub fn draw_services(buf: &mut Buffer, area: Rect, breakpoint: Breakpoint) {
    let inner = section_block(buf, area, "Services");
    Paragraph::new("Premium grooming, served with a cold one.")
        .style(Style::default().fg(Color::Gray))
        .render(rows(inner, 0, 1), buf);

    let cards_area = rows(inner, 2, inner.height.saturating_sub(2));
    match breakpoint {
        Breakpoint::Desktop => {
            let columns = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(cards_area);
            for (service, column) in content::SERVICES.iter().zip(columns.iter()) {
                draw_service_card(buf, *column, service, true);
            }
        }
        Breakpoint::Tablet | Breakpoint::Mobile => {
            let mut offset = 0;
            for service in content::SERVICES {
                let height = 3 + wrapped_height(service.description, cards_area.width.saturating_sub(2));
                draw_service_card(buf, rows(cards_area, offset, height), service, false);
                offset += height;
            }
        }
    }
}

pub fn draw_about(buf: &mut Buffer, area: Rect) {
    let inner = section_block(buf, area, "About");

    let mut lines = vec![
        Line::from(Span::styled(content::ABOUT_TITLE, heading_style())),
        Line::from(""),
    ];
    for paragraph in content::ABOUT_PARAGRAPHS {
        lines.push(Line::from(*paragraph));
        lines.push(Line::from(""));
    }

    Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .render(inner, buf);
}

fn address_lines() -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled("Address", heading_style()))];
    lines.extend(content::ADDRESS_LINES.iter().map(|l| Line::from(*l)));
    lines
}

fn hours_lines() -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled("Hours", heading_style()))];
    lines.extend(content::HOURS.iter().map(|(label, hours)| {
        Line::from(vec![
            Span::styled(format!("{label}: "), Style::default().fg(Color::Gray)),
            Span::raw(*hours),
        ])
    }));
    lines
}

fn contact_lines() -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled("Contact", heading_style())),
        Line::from(format!("Phone: {}", content::PHONE)),
        Line::from(format!("Email: {}", content::EMAIL)),
    ]
}

pub fn draw_location(buf: &mut Buffer, area: Rect, breakpoint: Breakpoint) {
    let inner = section_block(buf, area, "Location");
    let blocks = [address_lines(), hours_lines(), contact_lines()];

    let blocks_height = match breakpoint {
        Breakpoint::Desktop => {
            let columns = Layout::horizontal([
                Constraint::Percentage(25),
                Constraint::Percentage(50),
                Constraint::Percentage(25),
            ])
            .split(rows(inner, 0, LOCATION_BLOCK_HEIGHT));
            for (lines, column) in blocks.into_iter().zip(columns.iter()) {
                Paragraph::new(lines).render(*column, buf);
            }
            LOCATION_BLOCK_HEIGHT
        }
        Breakpoint::Tablet | Breakpoint::Mobile => {
            let mut offset = 0;
            for lines in blocks {
                let height = lines.len() as u16;
                Paragraph::new(lines).render(rows(inner, offset, height), buf);
                offset += height + 1;
            }
            offset.saturating_sub(1)
        }
    };

    let parking_top = blocks_height + 1;
    Paragraph::new(Line::from(Span::styled("Parking", heading_style())))
        .render(rows(inner, parking_top, 1), buf);
    Paragraph::new(content::PARKING)
        .wrap(Wrap { trim: true })
        .render(
            rows(inner, parking_top + 1, inner.height.saturating_sub(parking_top + 1)),
            buf,
        );
}
