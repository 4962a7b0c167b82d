//! Shared surface of the generator screen and the country selector.

use color_eyre::eyre::Result;
use crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect};

use crate::action::Action;

/// `(keys, label)` pairs shown in a footer.
pub type KeyHints = &'static [(&'static str, &'static str)];

/// A screen that owns a region of the terminal.
///
/// The app loop feeds it keys while it has focus, broadcasts every
/// dispatched [`Action`] to it, and redraws it each render tick.
pub trait Component: Send {
    /// Translate a key into an action. Keys the screen ignores yield `None`.
    fn handle_key_event(&mut self, _key: KeyEvent) -> Result<Option<Action>> {
        Ok(None)
    }

    /// React to a dispatched action, optionally chaining another.
    fn update(&mut self, _action: &Action) -> Result<Option<Action>> {
        Ok(None)
    }

    /// Footer hints for the keys this screen handles.
    fn key_hints(&self) -> KeyHints {
        &[]
    }

    fn render(&self, frame: &mut Frame, area: Rect);
}
