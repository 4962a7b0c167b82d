//! Messages between the event loop and the screens.

use phonegen_core::CountryRecord;

/// Keys become actions; screens mutate state only in response to one.
#[derive(Debug, Clone)]
pub enum Action {
    // ── Lifecycle ──
    Quit,
    Tick,
    Render,
    Resize(u16, u16),

    // ── Overlays ──
    ToggleHelp,
    OpenSelector,
    CloseSelector,

    // ── Selection ──
    /// A country was picked in the selector.
    SelectCountry(&'static CountryRecord),
    /// Generate a fresh batch with the current country and count.
    Generate,

    // ── Batch side effects ──
    /// Copy the number at an absolute batch index.
    CopyNumber(usize),
    CopyAll,
    Export,

    // ── Notifications ──
    Notify(Notification),
    DismissNotification,
}

/// Picks the toast's accent color and icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Error,
}

/// Text shown in the bottom-right toast until it expires or Esc.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
}

impl Notification {
    fn new(level: NotificationLevel, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Error, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Info, message)
    }
}
