//! Single-line text field backed by `tui_input::Input`.
//!
//! Key handling goes through `InputRequest` so the field does not depend
//! on tui-input's own crossterm backend version.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use tui_input::{Input, InputRequest};

use crate::theme;

/// Translate an editing key into an input request.
pub fn input_request(key: KeyEvent) -> Option<InputRequest> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('u') if ctrl => Some(InputRequest::DeleteLine),
        KeyCode::Char('w') if ctrl => Some(InputRequest::DeletePrevWord),
        KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
            Some(InputRequest::InsertChar(c))
        }
        KeyCode::Backspace => Some(InputRequest::DeletePrevChar),
        KeyCode::Delete => Some(InputRequest::DeleteNextChar),
        KeyCode::Left => Some(InputRequest::GoToPrevChar),
        KeyCode::Right => Some(InputRequest::GoToNextChar),
        KeyCode::Home => Some(InputRequest::GoToStart),
        KeyCode::End => Some(InputRequest::GoToEnd),
        _ => None,
    }
}

/// Apply a request; true when the text (not just the cursor) changed.
pub fn apply(input: &mut Input, request: InputRequest) -> bool {
    input.handle(request).is_some_and(|changed| changed.value)
}

/// Label row plus a bordered box. The character under the cursor is
/// drawn reversed (a block at end of line) since the terminal cursor
/// stays hidden.
pub fn render_input_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    input: &Input,
    active: bool,
    valid: bool,
) {
    if area.height < 3 {
        return;
    }

    frame.render_widget(
        Paragraph::new(Span::styled(label, theme::input_label(active))),
        Rect::new(area.x, area.y, area.width, 1),
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::input_border(valid, active));

    let block_area = Rect::new(area.x, area.y + 1, area.width, 3.min(area.height - 1));
    let inner = block.inner(block_area);
    frame.render_widget(block, block_area);

    let width = usize::from(inner.width.saturating_sub(1)).max(1);
    let scroll = input.visual_scroll(width);
    let text_style = theme::input_text();

    let chars: Vec<char> = input.value().chars().skip(scroll).collect();
    let cursor = input.cursor().saturating_sub(scroll);
    let before: String = chars.iter().take(cursor).collect();
    let under = chars.get(cursor).copied();
    let after: String = chars.iter().skip(cursor + 1).collect();

    let mut spans = vec![Span::styled(before, text_style)];
    if active {
        match under {
            Some(c) => spans.push(Span::styled(
                c.to_string(),
                text_style.add_modifier(Modifier::REVERSED),
            )),
            None => spans.push(Span::styled("\u{2588}", text_style)),
        }
    } else if let Some(c) = under {
        spans.push(Span::styled(c.to_string(), text_style));
    }
    spans.push(Span::styled(after, text_style));

    frame.render_widget(Paragraph::new(Line::from(spans)), inner);
}
