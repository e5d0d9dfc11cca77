//! Application state definitions

use super::page::{Section, NAV_LINKS};
use super::scroll_state::ScrollState;

/// Where key presses are routed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Scrolling and navigating the page
    #[default]
    Page,
    /// Typing into the contact form
    ContactForm,
}

/// Entries of the mobile menu overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Link(Section),
    BookAppointment,
}

impl MenuItem {
    pub fn all() -> Vec<MenuItem> {
        NAV_LINKS
            .iter()
            .map(|s| MenuItem::Link(*s))
            .chain(std::iter::once(MenuItem::BookAppointment))
            .collect()
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuItem::Link(section) => section.title(),
            MenuItem::BookAppointment => crate::content::BOOK_CTA,
        }
    }
}

/// Mobile menu overlay state
#[derive(Debug, Clone, Default)]
pub struct MobileMenu {
    pub is_open: bool,
    pub selected: usize,
}

impl MobileMenu {
    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
        self.selected = 0;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    pub fn next(&mut self) {
        let count = MenuItem::all().len();
        self.selected = (self.selected + 1) % count;
    }

    pub fn prev(&mut self) {
        let count = MenuItem::all().len();
        if self.selected == 0 {
            self.selected = count - 1;
        } else {
            self.selected -= 1;
        }
    }

    pub fn selected_item(&self) -> MenuItem {
        MenuItem::all()
            .get(self.selected)
            .copied()
            .unwrap_or(MenuItem::BookAppointment)
    }
}

/// Main application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub focus: Focus,
    pub scroll: ScrollState,
    pub mobile_menu: MobileMenu,
    /// Transient message shown in the status bar
    pub status_message: Option<String>,
    /// Frames drawn so far; drives the busy spinner
    pub tick: u64,
}
