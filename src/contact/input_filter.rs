//! Live keystroke filtering for the phone input

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Characters a phone number may contain
pub fn is_phone_char(c: char) -> bool {
    c.is_ascii_digit() || c.is_ascii_whitespace() || matches!(c, '-' | '(' | ')' | '+')
}

/// Whether a key press should reach the phone field at all.
///
/// Navigation and editing keys always pass, as do shortcut chords
/// (copy/paste/select-all), so only stray printable characters are dropped.
pub fn accepts_phone_key(key: &KeyEvent) -> bool {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | crate::platform::COPY_MODIFIER)
    {
        return true;
    }
    match key.code {
        KeyCode::Backspace
        | KeyCode::Delete
        | KeyCode::Tab
        | KeyCode::BackTab
        | KeyCode::Esc
        | KeyCode::Enter
        | KeyCode::Left
        | KeyCode::Right
        | KeyCode::Up
        | KeyCode::Down
        | KeyCode::Home
        | KeyCode::End => true,
        KeyCode::Char(c) => is_phone_char(c),
        _ => false,
    }
}

/// Strip every character a phone number may not contain (pasted input)
pub fn sanitize_phone(raw: &str) -> String {
    raw.chars().filter(|c| is_phone_char(*c)).collect()
}
