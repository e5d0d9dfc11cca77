//! UI module for rendering the TUI

mod components;
mod contact_form;
mod field_renderer;
mod layout;
mod page;
mod sections;

use crate::app::App;
use components::{render_button, render_mobile_menu, BUTTON_HEIGHT};
use ratatui::{layout::Rect, Frame};

const SCROLL_TOP_LABEL: &str = "↑ Top (t)";

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let (header_area, viewport, status_area) = layout::create_layout(area);
    let buf = frame.buffer_mut();

    page::draw_page(buf, viewport, app);
    layout::draw_header(buf, header_area, app);

    if app.state.scroll.show_scroll_to_top() {
        if let Some(button_area) = scroll_top_button_area(viewport) {
            render_button(buf, button_area, SCROLL_TOP_LABEL, false, true);
        }
    }

    if app.state.mobile_menu.is_open {
        render_mobile_menu(buf, viewport, &app.state.mobile_menu);
    }

    layout::draw_status_bar(buf, status_area, app);
}

/// Where the scroll-to-top button sits: bottom-right corner of the viewport
pub fn scroll_top_button_area(viewport: Rect) -> Option<Rect> {
    if viewport.height < BUTTON_HEIGHT {
        return None;
    }
    let width = SCROLL_TOP_LABEL.chars().count() as u16 + 4;
    Some(Rect {
        x: viewport.right().saturating_sub(width + 1),
        y: viewport.bottom().saturating_sub(BUTTON_HEIGHT),
        width: width.min(viewport.width),
        height: BUTTON_HEIGHT,
    })
}
