//! "‹ prev · Page 2 / 5 · next ›" footer line.

use ratatui::text::{Line, Span};

use phonegen_core::Page;

use crate::theme;

pub fn page_line<T>(page: &Page<'_, T>) -> Line<'static> {
    let arrow = |enabled: bool, text: &'static str| {
        if enabled {
            Span::styled(text, theme::hint_key())
        } else {
            Span::styled(text, theme::hint())
        }
    };

    Line::from(vec![
        Span::raw("  "),
        arrow(page.has_prev(), "‹ prev"),
        Span::styled(format!("  Page {}  ", page.label()), theme::row()),
        arrow(page.has_next(), "next ›"),
    ])
}
