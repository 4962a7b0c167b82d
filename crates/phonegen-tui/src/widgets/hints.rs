//! Footer line of key hints.

use ratatui::text::{Line, Span};

use crate::component::KeyHints;
use crate::theme;

pub fn hint_line(hints: KeyHints) -> Line<'static> {
    let mut spans = Vec::with_capacity(hints.len() * 2 + 1);
    spans.push(Span::raw(" "));
    for (keys, label) in hints {
        spans.push(Span::styled(format!(" {keys} "), theme::hint_key()));
        spans.push(Span::styled(*label, theme::hint()));
    }
    Line::from(spans)
}
