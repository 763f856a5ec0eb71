//! Watch-face theme tokens — dark surface with a teal accent.
//!
//! Style helpers used across the screens so every widget pulls from the
//! same small palette.

use ratatui::style::{Color, Modifier, Style};

const ACCENT: Color = Color::Rgb(0, 206, 201);
const POSITIVE: Color = Color::Rgb(85, 239, 196);
const NEGATIVE: Color = Color::Rgb(255, 99, 132);
const WARNING: Color = Color::Rgb(253, 203, 110);
const NEUTRAL: Color = Color::Rgb(162, 155, 254);
const MUTED: Color = Color::Rgb(110, 120, 140);

/// Accent for focus and primary actions.
pub fn accent() -> Style {
    Style::default().fg(ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

/// Success messages and the download-started notice.
pub fn positive() -> Style {
    Style::default().fg(POSITIVE)
}

/// Faults and the failed-download notice.
pub fn negative() -> Style {
    Style::default().fg(NEGATIVE)
}

pub fn warning() -> Style {
    Style::default().fg(WARNING)
}

pub fn neutral() -> Style {
    Style::default().fg(NEUTRAL)
}

/// Secondary text, hints, disabled rows.
pub fn muted() -> Style {
    Style::default().fg(MUTED)
}

/// Border of the screen frame.
pub fn screen_border() -> Style {
    accent()
}

pub fn screen_title() -> Style {
    accent_bold()
}

/// Highlight for the card under the cursor.
pub fn card_selected() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD | Modifier::REVERSED)
}
