//! Scrollable page body
//!
//! Every section is rendered into an offscreen buffer as tall as the whole
//! page, then the rows under the scroll offset are copied into the frame.

use super::contact_form::draw_contact;
use super::sections::{draw_about, draw_hero, draw_location, draw_services};
use crate::app::App;
use crate::state::{Focus, PageLayout, Section};
use ratatui::{buffer::Buffer, layout::Rect};

/// Render the full page for `layout`
pub fn render_page(app: &App, layout: &PageLayout) -> Buffer {
    let mut page = Buffer::empty(Rect::new(0, 0, layout.width, layout.total_height()));
    let has_focus = app.state.focus == Focus::ContactForm;

    for band in &layout.bands {
        let area = Rect::new(0, band.start, layout.width, band.height);
        match band.section {
            Section::Hero => draw_hero(&mut page, area),
            Section::Services => draw_services(&mut page, area, layout.breakpoint),
            Section::About => draw_about(&mut page, area),
            Section::Contact => draw_contact(
                &mut page,
                area,
                &app.contact,
                layout.breakpoint,
                has_focus,
                app.state.tick,
            ),
            Section::Location => draw_location(&mut page, area, layout.breakpoint),
        }
    }
    page
}

/// Copy the rows of `page` starting at `offset` into `viewport` of `buf`
pub fn blit(page: &Buffer, buf: &mut Buffer, viewport: Rect, offset: u16) {
    for row in 0..viewport.height {
        let Some(src_y) = offset.checked_add(row) else {
            break;
        };
        if src_y >= page.area.bottom() {
            break;
        }
        for col in 0..viewport.width.min(page.area.width) {
            if let (Some(src), Some(dst)) = (
                page.cell((col, src_y)),
                buf.cell_mut((viewport.x + col, viewport.y + row)),
            ) {
                *dst = src.clone();
            }
        }
    }
}

pub fn draw_page(buf: &mut Buffer, viewport: Rect, app: &App) {
    let layout = app.page_layout();
    let page = render_page(app, &layout);
    blit(&page, buf, viewport, app.state.scroll.offset);
}
