//! Reusable UI components

mod banner;
mod button;
mod menu;

pub use banner::render_status_banner;
pub use button::{render_button, render_centered_button, BUTTON_HEIGHT};
pub use menu::render_mobile_menu;
