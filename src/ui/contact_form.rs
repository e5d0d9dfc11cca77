//! Contact section: status banner, inputs, submit button

use super::components::{render_button, render_status_banner};
use super::field_renderer::draw_field;
use super::sections::section_block;
use crate::contact::{ContactForm, FieldName, SubmissionStatus};
use crate::platform::SUBMIT_SHORTCUT;
use crate::state::{form_rows, Breakpoint, FormRow, BANNER_HEIGHT, HELP_HEIGHT, SUBMIT_HEIGHT};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

const SPINNER: [&str; 4] = ["⠋", "⠙", "⠹", "⠸"];

/// Submit button label for the current status
pub fn submit_label(status: SubmissionStatus, tick: u64) -> String {
    if status == SubmissionStatus::Submitting {
        let frame = SPINNER[(tick / 4) as usize % SPINNER.len()];
        format!("{frame} Sending...")
    } else {
        "Send Message".to_string()
    }
}

fn draw_input(buf: &mut Buffer, area: Rect, form: &ContactForm, name: FieldName, has_focus: bool) {
    let state = form.state();
    let (Some(field), Some(constraint)) = (state.field(name), state.schema().constraint(name)) else {
        return;
    };
    let is_active = has_focus && state.active_field_name() == Some(name);
    draw_field(buf, area, name, field, constraint, is_active);
}

/// Draw the contact section into `area`; `has_focus` marks the active input
pub fn draw_contact(
    buf: &mut Buffer,
    area: Rect,
    form: &ContactForm,
    breakpoint: Breakpoint,
    has_focus: bool,
    tick: u64,
) {
    let inner = section_block(buf, area, "Contact");
    let rows = form_rows(form.state().schema(), breakpoint);

    let mut constraints = vec![Constraint::Length(BANNER_HEIGHT)];
    constraints.extend(rows.iter().map(|row| Constraint::Length(row.height())));
    constraints.push(Constraint::Length(SUBMIT_HEIGHT));
    constraints.push(Constraint::Length(HELP_HEIGHT));
    let areas = Layout::vertical(constraints).split(inner);

    let banner_area = areas[0];
    if !render_status_banner(buf, banner_area, form.status()) {
        let intro = if has_focus {
            "Fill in the form below and we'll get back to you."
        } else {
            "Questions, bookings, or private events? Press c to write to us."
        };
        Paragraph::new(intro)
            .style(Style::default().fg(Color::Gray))
            .render(Rect { height: 1, ..banner_area }, buf);
    }

    for (row, row_area) in rows.iter().zip(areas[1..].iter()) {
        match row {
            FormRow::Single(name) => draw_input(buf, *row_area, form, *name, has_focus),
            FormRow::Pair(left, right) => {
                let halves = Layout::horizontal([Constraint::Ratio(1, 2); 2]).split(*row_area);
                draw_input(buf, halves[0], form, *left, has_focus);
                draw_input(buf, halves[1], form, *right, has_focus);
            }
        }
    }

    let submit_area = areas[rows.len() + 1];
    let button_width = submit_area.width.min(24);
    let button_area = Rect {
        width: button_width,
        ..submit_area
    };
    render_button(
        buf,
        button_area,
        &submit_label(form.status(), tick),
        has_focus && form.state().is_submit_row_active(),
        !form.is_submitting(),
    );

    let help = Line::from(vec![
        Span::styled("* required", Style::default().fg(Color::DarkGray)),
        Span::raw("  "),
        Span::styled(
            format!("{SUBMIT_SHORTCUT} to send"),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    Paragraph::new(help).render(areas[rows.len() + 2], buf);
}
