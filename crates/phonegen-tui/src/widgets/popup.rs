//! Placement and chrome for floating panels.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, BorderType, Borders, Clear};

use crate::theme;

/// A `width` x `height` rect centered in `area`, shrunk to fit.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Anchored one cell in from the bottom-right corner of `area`.
pub fn bottom_right(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + area.width.saturating_sub(width + 1),
        area.y + area.height.saturating_sub(height + 1),
        width,
        height,
    )
}

/// Blank `area`, paint the backdrop, draw a rounded border and return
/// the inner rect.
pub fn open(frame: &mut Frame, area: Rect, title: Option<&str>, border: Style) -> Rect {
    frame.render_widget(Clear, area);
    let mut block = Block::default()
        .style(theme::overlay_fill())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border);
    if let Some(title) = title {
        block = block.title(format!(" {title} ")).title_style(theme::panel_title());
    }
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_fits_inside_small_areas() {
        let area = Rect::new(2, 1, 30, 10);
        assert_eq!(centered(area, 20, 4), Rect::new(7, 4, 20, 4));
        assert_eq!(centered(area, 80, 40), area);
    }

    #[test]
    fn bottom_right_leaves_a_margin() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(bottom_right(area, 30, 3), Rect::new(69, 36, 30, 3));
    }
}
