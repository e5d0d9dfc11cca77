//! Application state and core logic

use crate::config::SiteConfig;
use crate::contact::{
    accepts_phone_key, attributes, ContactForm, FieldName, Form, FormSchema, FormSubmitter,
    SimulatedSubmitter, SubmissionError, SubmissionStatus, Telemetry, TracingTelemetry,
};
use crate::content;
use crate::state::{
    AppState, Focus, MenuItem, PageLayout, Section, HEADER_HEIGHT, NAV_LINKS, STATUS_BAR_HEIGHT,
};
use crate::ui;
use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Rows moved per mouse wheel notch
const WHEEL_STEP: i32 = 3;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Contact form and its submission lifecycle
    pub contact: ContactForm,
    pub config: SiteConfig,
    telemetry: Arc<dyn Telemetry>,
    submission_tx: mpsc::UnboundedSender<Result<(), SubmissionError>>,
    submission_rx: mpsc::UnboundedReceiver<Result<(), SubmissionError>>,
    /// Terminal size for layout calculations (height, width)
    pub terminal_size: Option<(u16, u16)>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App with the simulated backend and log-based analytics
    pub fn new(config: SiteConfig) -> Self {
        let submitter: Arc<dyn FormSubmitter> = if config.simulate_submit_failure() {
            Arc::new(SimulatedSubmitter::failing(config.submit_delay()))
        } else {
            Arc::new(SimulatedSubmitter::new(config.submit_delay()))
        };
        Self::with_capabilities(config, submitter, Arc::new(TracingTelemetry))
    }

    pub fn with_capabilities(
        config: SiteConfig,
        submitter: Arc<dyn FormSubmitter>,
        telemetry: Arc<dyn Telemetry>,
    ) -> Self {
        let schema = FormSchema::for_variant(config.form_variant());
        let contact = ContactForm::new(
            schema,
            config.validate_on_change(),
            submitter,
            Arc::clone(&telemetry),
        );
        let (submission_tx, submission_rx) = mpsc::unbounded_channel();

        Self {
            state: AppState::default(),
            contact,
            config,
            telemetry,
            submission_tx,
            submission_rx,
            terminal_size: None,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Page layout for the current terminal width
    pub fn page_layout(&self) -> PageLayout {
        let width = self.terminal_size.map(|(_, w)| w).unwrap_or(80);
        PageLayout::compute(width, self.contact.state().schema())
    }

    /// Rows available to the page between header and status bar
    pub fn viewport_height(&self) -> u16 {
        let height = self.terminal_size.map(|(h, _)| h).unwrap_or(24);
        height.saturating_sub(HEADER_HEIGHT + STATUS_BAR_HEIGHT)
    }

    /// Screen area the page scrolls in
    pub fn viewport_area(&self) -> Rect {
        let width = self.terminal_size.map(|(_, w)| w).unwrap_or(80);
        Rect::new(0, HEADER_HEIGHT, width, self.viewport_height())
    }

    fn max_offset(&self) -> u16 {
        self.page_layout().max_offset(self.viewport_height())
    }

    /// Advance animations and collect finished submissions. Called once per frame.
    pub fn tick(&mut self) {
        self.state.tick = self.state.tick.wrapping_add(1);
        self.state.scroll.update();
        let max = self.max_offset();
        self.state.scroll.clamp(max);
        self.poll_submissions();
    }

    /// Whether the next frame should come quickly (animation or spinner)
    pub fn needs_fast_redraw(&self) -> bool {
        self.state.scroll.is_animating() || self.contact.is_submitting()
    }

    /// Apply any submission results delivered by background tasks
    pub fn poll_submissions(&mut self) {
        while let Ok(result) = self.submission_rx.try_recv() {
            self.contact.complete_submit(result);
        }
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.state.mobile_menu.is_open {
            self.handle_menu_key(key);
            return;
        }
        match self.state.focus {
            Focus::Page => self.handle_page_key(key),
            Focus::ContactForm => self.handle_form_key(key),
        }
    }

    /// Handle bracketed paste
    pub fn handle_paste(&mut self, text: &str) {
        if self.state.focus != Focus::ContactForm {
            return;
        }
        let Some(field) = self.contact.state().active_field_name() else {
            return;
        };
        let pasted = if field.is_multiline() {
            text.to_string()
        } else {
            text.replace(['\r', '\n'], " ")
        };
        let value = format!("{}{}", self.contact.state().value(field), pasted);
        self.contact.on_field_change(field, value);
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let max = self.max_offset();
        match mouse.kind {
            MouseEventKind::ScrollDown => self.state.scroll.scroll_by(WHEEL_STEP, max),
            MouseEventKind::ScrollUp => self.state.scroll.scroll_by(-WHEEL_STEP, max),
            MouseEventKind::Down(MouseButton::Left) => {
                if self.state.mobile_menu.is_open || !self.state.scroll.show_scroll_to_top() {
                    return;
                }
                let clicked = Position::new(mouse.column, mouse.row);
                if ui::scroll_top_button_area(self.viewport_area())
                    .is_some_and(|button| button.contains(clicked))
                {
                    self.scroll_to_top();
                }
            }
            _ => {}
        }
    }

    fn handle_page_key(&mut self, key: KeyEvent) {
        let max = self.max_offset();
        let page = (self.viewport_height().saturating_sub(1)).max(1) as i32;
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Up | KeyCode::Char('k') => self.state.scroll.scroll_by(-1, max),
            KeyCode::Down | KeyCode::Char('j') => self.state.scroll.scroll_by(1, max),
            KeyCode::PageUp => self.state.scroll.scroll_by(-page, max),
            KeyCode::PageDown | KeyCode::Char(' ') => self.state.scroll.scroll_by(page, max),
            KeyCode::Home | KeyCode::Char('t') => self.scroll_to_top(),
            KeyCode::End => self.state.scroll.scroll_to(max, self.config.reduced_motion()),
            KeyCode::Char(c @ '1'..='4') => {
                let index = (c as u8 - b'1') as usize;
                self.navigate_to(NAV_LINKS[index]);
            }
            KeyCode::Char('m') if self.page_layout().breakpoint.uses_mobile_menu() => {
                self.state.mobile_menu.toggle();
            }
            KeyCode::Char('b') => self.book_appointment(),
            KeyCode::Char('c') | KeyCode::Enter => self.focus_contact_form(),
            KeyCode::Esc => self.state.status_message = None,
            _ => {}
        }
    }

    fn handle_menu_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('m') => self.state.mobile_menu.close(),
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => self.state.mobile_menu.next(),
            KeyCode::Up | KeyCode::Char('k') | KeyCode::BackTab => self.state.mobile_menu.prev(),
            KeyCode::Enter => {
                let item = self.state.mobile_menu.selected_item();
                self.state.mobile_menu.close();
                match item {
                    MenuItem::Link(section) => self.navigate_to(section),
                    MenuItem::BookAppointment => self.book_appointment(),
                }
            }
            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        let active = self.contact.state().active_field_name();
        match key.code {
            KeyCode::Esc => {
                if matches!(
                    self.contact.status(),
                    SubmissionStatus::Success | SubmissionStatus::Error
                ) {
                    self.contact.on_dismiss_status();
                } else {
                    self.leave_contact_form();
                }
            }
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit_contact();
            }
            KeyCode::Tab => self.move_focus(true),
            KeyCode::BackTab => self.move_focus(false),
            KeyCode::Enter => match active {
                None => self.submit_contact(),
                Some(field) if self.contact.state().is_active_field_multiline() => {
                    self.contact.state_mut().push_char(field, '\n');
                }
                Some(_) => self.move_focus(true),
            },
            KeyCode::Backspace => {
                if let Some(field) = active {
                    self.contact.state_mut().pop_char(field);
                }
            }
            KeyCode::Char(c) => {
                let Some(field) = active else {
                    return;
                };
                if key.modifiers.contains(KeyModifiers::CONTROL) {
                    return;
                }
                if field == FieldName::Phone && !accepts_phone_key(&key) {
                    tracing::trace!(?c, "Dropped phone keystroke");
                    return;
                }
                self.contact.state_mut().push_char(field, c);
            }
            _ => {}
        }
    }

    /// Move focus to the next/previous form row; leaving a field validates it
    fn move_focus(&mut self, forward: bool) {
        if let Some(field) = self.contact.state().active_field_name() {
            self.contact.on_field_blur(field);
        }
        let state = self.contact.state_mut();
        if forward {
            state.next_field();
        } else {
            state.prev_field();
        }
    }

    /// Start a submission; the collaborator runs on a background task
    fn submit_contact(&mut self) {
        if let Some(field) = self.contact.state().active_field_name() {
            self.contact.on_field_blur(field);
        }

        if let Some(payload) = self.contact.begin_submit() {
            let submitter = self.contact.submitter();
            let tx = self.submission_tx.clone();
            tokio::spawn(async move {
                let result = submitter.submit(payload).await;
                if tx.send(result).is_err() {
                    tracing::debug!("Submission finished after the form was dropped");
                }
            });
            return;
        }

        if !self.contact.is_submitting() {
            // Jump to the first field that needs attention
            let first_invalid = self
                .contact
                .fields()
                .position(|(_, f)| f.error().is_some());
            if let Some(index) = first_invalid {
                self.contact.state_mut().set_active_field(index);
            }
        }
    }

    pub fn focus_contact_form(&mut self) {
        self.state.focus = Focus::ContactForm;
        self.navigate_to(Section::Contact);
    }

    fn leave_contact_form(&mut self) {
        if let Some(field) = self.contact.state().active_field_name() {
            self.contact.on_field_blur(field);
        }
        self.state.focus = Focus::Page;
    }

    /// Smooth-scroll so `section` sits under the header
    pub fn navigate_to(&mut self, section: Section) {
        let target = self
            .page_layout()
            .offset_for(section, self.viewport_height());
        self.state
            .scroll
            .scroll_to(target, self.config.reduced_motion());
    }

    pub fn scroll_to_top(&mut self) {
        self.state.scroll.scroll_to(0, self.config.reduced_motion());
    }

    /// Booking CTA: no booking widget exists yet, so record intent and point to the phone
    pub fn book_appointment(&mut self) {
        self.telemetry.track(
            "booking_initiated",
            attributes([
                ("eventCategory", "conversion"),
                ("eventLabel", "Hero CTA clicked"),
            ]),
        );
        self.state.status_message = Some(format!(
            "Online booking is coming soon. Call {} to book.",
            content::PHONE
        ));
    }
}
