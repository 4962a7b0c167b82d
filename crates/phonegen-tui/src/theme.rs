//! Palette and named styles for every widget the TUI draws.

use ratatui::style::{Color, Modifier, Style};

use crate::action::NotificationLevel;

// ── Palette ───────────────────────────────────────────────────────────

pub const TEXT: Color = Color::Rgb(205, 214, 244); // #cdd6f4
pub const OVERLAY: Color = Color::Rgb(108, 112, 134); // #6c7086
pub const SURFACE: Color = Color::Rgb(30, 30, 46); // #1e1e2e
pub const SURFACE_RAISED: Color = Color::Rgb(49, 50, 68); // #313244

pub const TEAL: Color = Color::Rgb(148, 226, 213); // #94e2d5
pub const MAUVE: Color = Color::Rgb(203, 166, 247); // #cba6f7
pub const PEACH: Color = Color::Rgb(250, 179, 135); // #fab387
pub const GREEN: Color = Color::Rgb(166, 227, 161); // #a6e3a1
pub const RED: Color = Color::Rgb(243, 139, 168); // #f38ba8

// ── Panels ────────────────────────────────────────────────────────────

pub fn panel_title() -> Style {
    Style::default().fg(TEAL).add_modifier(Modifier::BOLD)
}

/// The panel that receives keys gets the accent border.
pub fn panel_border(focused: bool) -> Style {
    Style::default().fg(if focused { MAUVE } else { OVERLAY })
}

/// Backdrop under overlays and toasts.
pub fn overlay_fill() -> Style {
    Style::default().bg(SURFACE)
}

// ── Tables ────────────────────────────────────────────────────────────

pub fn column_header() -> Style {
    Style::default()
        .fg(TEAL)
        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
}

pub fn row() -> Style {
    Style::default().fg(TEXT)
}

pub fn row_selected() -> Style {
    Style::default()
        .fg(MAUVE)
        .bg(SURFACE_RAISED)
        .add_modifier(Modifier::BOLD)
}

// ── Domain values ─────────────────────────────────────────────────────

/// A generated phone number.
pub fn number() -> Style {
    Style::default().fg(TEAL)
}

/// The country in use, wherever it appears.
pub fn current_country() -> Style {
    Style::default().fg(PEACH).add_modifier(Modifier::BOLD)
}

pub fn copied_mark() -> Style {
    Style::default().fg(GREEN)
}

/// Counts and other figures called out in a sentence.
pub fn figure() -> Style {
    Style::default().fg(MAUVE).add_modifier(Modifier::BOLD)
}

// ── Inputs ────────────────────────────────────────────────────────────

pub fn input_text() -> Style {
    Style::default().fg(TEAL)
}

/// Invalid content always shows red, whatever the focus.
pub fn input_border(valid: bool, active: bool) -> Style {
    match (valid, active) {
        (false, _) => Style::default().fg(RED),
        (true, focused) => panel_border(focused),
    }
}

pub fn input_label(active: bool) -> Style {
    Style::default().fg(if active { TEAL } else { TEXT })
}

// ── Hints and toasts ──────────────────────────────────────────────────

pub fn hint() -> Style {
    Style::default().fg(OVERLAY)
}

pub fn hint_key() -> Style {
    Style::default().fg(TEAL).add_modifier(Modifier::BOLD)
}

/// Accent color and icon for a toast.
pub fn toast(level: NotificationLevel) -> (Color, &'static str) {
    match level {
        NotificationLevel::Success => (GREEN, "✓"),
        NotificationLevel::Error => (RED, "✗"),
        NotificationLevel::Info => (TEAL, "·"),
    }
}
