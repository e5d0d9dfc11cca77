//! Page sections, responsive breakpoints, and row layout
//!
//! The landing page is one tall virtual canvas; each section occupies a
//! fixed band of rows that depends on the terminal width.

use crate::contact::{FieldName, FormSchema};
use crate::content;

/// Rows taken by the sticky header
pub const HEADER_HEIGHT: u16 = 3;
/// Rows taken by the status bar
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Width class of the terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    Mobile,
    Tablet,
    Desktop,
}

impl Breakpoint {
    pub fn from_width(width: u16) -> Self {
        if width < 60 {
            Self::Mobile
        } else if width < 100 {
            Self::Tablet
        } else {
            Self::Desktop
        }
    }

    /// Nav links are collapsed behind the menu toggle
    pub fn uses_mobile_menu(&self) -> bool {
        matches!(self, Self::Mobile)
    }

    pub fn shows_book_button(&self) -> bool {
        matches!(self, Self::Desktop)
    }
}

/// Page sections in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Hero,
    Services,
    About,
    Contact,
    Location,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Hero,
        Section::Services,
        Section::About,
        Section::Contact,
        Section::Location,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Self::Hero => content::BUSINESS_NAME,
            Self::Services => "Services",
            Self::About => "About",
            Self::Contact => "Contact",
            Self::Location => "Location",
        }
    }
}

/// Header navigation targets
pub const NAV_LINKS: [Section; 4] = [
    Section::Services,
    Section::About,
    Section::Contact,
    Section::Location,
];

/// One row of the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormRow {
    Single(FieldName),
    /// Two short fields side by side
    Pair(FieldName, FieldName),
}

impl FormRow {
    pub fn height(&self) -> u16 {
        match self {
            FormRow::Single(f) if f.is_multiline() => MESSAGE_FIELD_HEIGHT,
            _ => FIELD_HEIGHT,
        }
    }
}

pub const FIELD_HEIGHT: u16 = 3;
pub const MESSAGE_FIELD_HEIGHT: u16 = 6;
pub const BANNER_HEIGHT: u16 = 3;
pub const SUBMIT_HEIGHT: u16 = 3;
pub const HELP_HEIGHT: u16 = 1;
/// Address, hours, and contact blocks are each at most this tall
pub const LOCATION_BLOCK_HEIGHT: u16 = 4;
/// The three location blocks stacked with a blank row between each
pub const LOCATION_STACKED_HEIGHT: u16 = 4 + 1 + 4 + 1 + 3;

/// Group fields into display rows; first/last name share a row unless on mobile
pub fn form_rows(schema: &FormSchema, breakpoint: Breakpoint) -> Vec<FormRow> {
    let fields: Vec<FieldName> = schema.fields().collect();
    let mut rows = Vec::with_capacity(fields.len());
    let mut i = 0;
    while i < fields.len() {
        let current = fields[i];
        let next = fields.get(i + 1).copied();
        if breakpoint != Breakpoint::Mobile
            && current == FieldName::FirstName
            && next == Some(FieldName::LastName)
        {
            rows.push(FormRow::Pair(current, FieldName::LastName));
            i += 2;
        } else {
            rows.push(FormRow::Single(current));
            i += 1;
        }
    }
    rows
}

/// Number of lines `text` occupies when word-wrapped to `width`
pub fn wrapped_height(text: &str, width: u16) -> u16 {
    let width = width.max(1) as usize;
    let mut lines = 1u16;
    let mut current = 0usize;
    for word in text.split_whitespace() {
        let len = word.chars().count();
        if current == 0 {
            current = len;
        } else if current + 1 + len <= width {
            current += 1 + len;
        } else {
            lines += 1;
            current = len;
        }
        // Words longer than a line spill over
        while current > width {
            lines += 1;
            current -= width;
        }
    }
    lines
}

/// Row band of one section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionBand {
    pub section: Section,
    pub start: u16,
    pub height: u16,
}

/// Vertical layout of the whole page for a given width
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLayout {
    pub width: u16,
    pub breakpoint: Breakpoint,
    pub bands: Vec<SectionBand>,
}

impl PageLayout {
    pub fn compute(width: u16, schema: &FormSchema) -> Self {
        let breakpoint = Breakpoint::from_width(width);
        let mut bands = Vec::with_capacity(Section::ALL.len());
        let mut start = 0u16;
        for section in Section::ALL {
            let height = section_height(section, width, breakpoint, schema);
            bands.push(SectionBand {
                section,
                start,
                height,
            });
            start = start.saturating_add(height);
        }
        Self {
            width,
            breakpoint,
            bands,
        }
    }

    pub fn total_height(&self) -> u16 {
        self.bands
            .last()
            .map(|b| b.start.saturating_add(b.height))
            .unwrap_or(0)
    }

    pub fn band(&self, section: Section) -> Option<&SectionBand> {
        self.bands.iter().find(|b| b.section == section)
    }

    /// Largest scroll offset that still fills the viewport
    pub fn max_offset(&self, viewport_height: u16) -> u16 {
        self.total_height().saturating_sub(viewport_height)
    }

    /// Offset that puts `section` at the top of the viewport
    pub fn offset_for(&self, section: Section, viewport_height: u16) -> u16 {
        self.band(section)
            .map(|b| b.start)
            .unwrap_or(0)
            .min(self.max_offset(viewport_height))
    }

    /// Section whose band contains the top viewport row
    pub fn section_at(&self, offset: u16) -> Section {
        self.bands
            .iter()
            .rev()
            .find(|b| b.start <= offset)
            .map(|b| b.section)
            .unwrap_or(Section::Hero)
    }
}

/// Inner width of a bordered section with one column of padding each side
fn inner_width(width: u16) -> u16 {
    width.saturating_sub(4).max(1)
}

fn section_height(section: Section, width: u16, breakpoint: Breakpoint, schema: &FormSchema) -> u16 {
    match section {
        // border + blank + tagline + blank + headline + blank + button
        Section::Hero => 2 + 5 + 3,
        Section::Services => {
            let cards = match breakpoint {
                Breakpoint::Desktop => services_card_height(width / 3),
                _ => content::SERVICES
                    .iter()
                    .map(|s| 3 + wrapped_height(s.description, inner_width(width).saturating_sub(2)))
                    .sum(),
            };
            2 + 2 + cards
        }
        Section::About => {
            let paragraphs: u16 = content::ABOUT_PARAGRAPHS
                .iter()
                .map(|p| wrapped_height(p, inner_width(width)) + 1)
                .sum();
            2 + 2 + paragraphs
        }
        Section::Contact => contact_height(schema, breakpoint),
        Section::Location => {
            // Three columns on desktop, stacked blocks elsewhere
            let columns = match breakpoint {
                Breakpoint::Desktop => LOCATION_BLOCK_HEIGHT,
                Breakpoint::Tablet | Breakpoint::Mobile => LOCATION_STACKED_HEIGHT,
            };
            2 + columns + 1 + 1 + wrapped_height(content::PARKING, inner_width(width))
        }
    }
}

/// Tallest desktop service card for the given column width
fn services_card_height(column_width: u16) -> u16 {
    let text_width = column_width.saturating_sub(4);
    let tallest = content::SERVICES
        .iter()
        .map(|s| wrapped_height(s.description, text_width))
        .max()
        .unwrap_or(1);
    // border + name + price + description
    2 + 2 + tallest
}

pub fn contact_height(schema: &FormSchema, breakpoint: Breakpoint) -> u16 {
    let rows: u16 = form_rows(schema, breakpoint).iter().map(FormRow::height).sum();
    2 + BANNER_HEIGHT + rows + SUBMIT_HEIGHT + HELP_HEIGHT
}
