//! Top-level state: which overlay owns the keyboard, the action queue,
//! and the frame layout.

use std::time::{Duration, Instant};

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};
use tokio::sync::mpsc;
use tracing::{debug, info};

use phonegen_core::Catalog;

use crate::action::{Action, Notification};
use crate::component::Component;
use crate::event::{Cadence, Event, EventReader};
use crate::screens::country_selector::CountrySelector;
use crate::screens::generator::GeneratorScreen;
use crate::theme;
use crate::tui::Tui;
use crate::widgets::popup;

/// How long a toast stays up.
pub const NOTIFICATION_TTL: Duration = Duration::from_secs(3);

const HELP: &[(&str, &[(&str, &str)])] = &[
    (
        "Generator",
        &[
            ("0-9 ⌫", "Edit count (1-10000)"),
            ("g Enter", "Generate numbers"),
            ("j/k ↑/↓", "Move up/down"),
            ("[/] ←/→", "Previous / next page"),
            ("y", "Copy selected number"),
            ("Y", "Copy all numbers"),
            ("d", "Export to a text file"),
            ("c", "Choose country"),
        ],
    ),
    (
        "Country selector",
        &[
            ("type", "Search name, code or id"),
            ("PgUp/PgDn", "Previous / next page"),
            ("Enter Esc", "Select / close"),
        ],
    ),
];

/// Which layer receives keys. The selector sits above help.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Generator,
    Selector,
    Help,
}

pub struct App {
    running: bool,
    focus: Focus,
    generator: GeneratorScreen,
    selector: CountrySelector,
    /// Size of the catalog, shown in the status bar.
    supported: usize,
    /// Key-derived and follow-up actions, drained after every event.
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
    /// The toast and when it was raised.
    notification: Option<(Notification, Instant)>,
}

impl App {
    pub fn new(generator: GeneratorScreen, catalog: Catalog) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        Self {
            running: true,
            focus: Focus::Generator,
            generator,
            selector: CountrySelector::new(catalog),
            supported: catalog.len(),
            action_tx,
            action_rx,
            notification: None,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        let mut tui = Tui::new()?;
        tui.enter()?;
        let mut events = EventReader::spawn(Cadence::default());
        info!(country = self.generator.selection().country().id, "ui ready");

        while self.running {
            let Some(event) = events.next().await else {
                break;
            };
            let redraw = event == Event::Render;

            if let Some(action) = self.action_for(event)? {
                self.action_tx.send(action)?;
            }
            self.drain_actions()?;

            if redraw && self.running {
                tui.draw(|frame| self.render(frame))?;
            }
        }

        events.stop();
        tui.leave();
        info!("ui closed");
        Ok(())
    }

    fn action_for(&mut self, event: Event) -> Result<Option<Action>> {
        Ok(match event {
            Event::Key(key) => self.handle_key_event(key)?,
            Event::Resize(cols, rows) => Some(Action::Resize(cols, rows)),
            Event::Tick => Some(Action::Tick),
            Event::Render => Some(Action::Render),
        })
    }

    fn drain_actions(&mut self) -> Result<()> {
        while let Ok(action) = self.action_rx.try_recv() {
            self.process_action(&action)?;
        }
        Ok(())
    }

    /// Ctrl+C always quits. Otherwise the focused layer decides, and the
    /// generator only sees keys the global bindings leave alone.
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.modifiers == KeyModifiers::CONTROL && key.code == KeyCode::Char('c') {
            return Ok(Some(Action::Quit));
        }

        match self.focus {
            // The search box takes every printable key, `q` included
            Focus::Selector => self.selector.handle_key_event(key),
            Focus::Help => Ok(matches!(key.code, KeyCode::Esc | KeyCode::Char('?'))
                .then_some(Action::ToggleHelp)),
            Focus::Generator => {
                let plain = matches!(key.modifiers, KeyModifiers::NONE | KeyModifiers::SHIFT);
                match key.code {
                    KeyCode::Char('q') if key.modifiers == KeyModifiers::NONE => {
                        Ok(Some(Action::Quit))
                    }
                    KeyCode::Char('?') if plain => Ok(Some(Action::ToggleHelp)),
                    KeyCode::Esc if self.notification.is_some() => {
                        Ok(Some(Action::DismissNotification))
                    }
                    _ => self.generator.handle_key_event(key),
                }
            }
        }
    }

    fn process_action(&mut self, action: &Action) -> Result<()> {
        match action {
            Action::Quit => self.running = false,
            Action::Resize(cols, rows) => debug!(cols, rows, "terminal resized"),
            Action::ToggleHelp => {
                self.focus = match self.focus {
                    Focus::Help => Focus::Generator,
                    _ => Focus::Help,
                };
            }
            Action::OpenSelector => {
                self.selector.open(self.generator.selection().country());
                self.focus = Focus::Selector;
            }
            Action::CloseSelector => {
                self.selector.update(action)?;
                self.focus = Focus::Generator;
            }
            Action::SelectCountry(_) => {
                self.selector.update(action)?;
                self.focus = Focus::Generator;
                self.forward_to_generator(action)?;
            }
            Action::Generate | Action::CopyNumber(_) | Action::CopyAll | Action::Export => {
                self.forward_to_generator(action)?;
            }
            Action::Notify(notification) => {
                debug!(message = %notification.message, level = ?notification.level, "toast");
                self.notification = Some((notification.clone(), Instant::now()));
            }
            Action::DismissNotification => self.notification = None,
            Action::Tick => {
                self.expire_notification(Instant::now());
                self.forward_to_generator(action)?;
                if self.focus == Focus::Selector {
                    self.selector.update(action)?;
                }
            }
            Action::Render => {}
        }
        Ok(())
    }

    fn forward_to_generator(&mut self, action: &Action) -> Result<()> {
        if let Some(follow_up) = self.generator.update(action)? {
            self.action_tx.send(follow_up)?;
        }
        Ok(())
    }

    fn expire_notification(&mut self, now: Instant) {
        let expired = self
            .notification
            .as_ref()
            .is_some_and(|(_, raised)| now.duration_since(*raised) >= NOTIFICATION_TTL);
        if expired {
            self.notification = None;
        }
    }

    // ── Rendering ───────────────────────────────────────────────

    /// Generator and status bar, then the selector, the toast and help
    /// stacked on top in that order.
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let [body, status] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(area);

        self.generator.render(frame, body);
        self.render_status_bar(frame, status);

        if self.focus == Focus::Selector {
            self.selector.render(frame, body);
        }
        if let Some((notification, _)) = &self.notification {
            render_toast(frame, body, notification);
        }
        if self.focus == Focus::Help {
            render_help(frame, area);
        }
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let selection = self.generator.selection();
        let country = selection.country();
        let line = Line::from(vec![
            Span::styled(
                format!(" ● {} {}", country.name, country.dial_code),
                theme::current_country(),
            ),
            Span::styled(format!(" │ count {}", selection.count()), theme::hint()),
            Span::styled(format!(" │ {} countries supported", self.supported), theme::hint()),
            Span::styled(" │ ? help  c country  q quit", theme::hint()),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }
}

fn render_help(frame: &mut Frame, area: Rect) {
    let width = 56u16.min(area.width.saturating_sub(4));
    let height = 20u16.min(area.height.saturating_sub(4));
    let inner = popup::open(
        frame,
        popup::centered(area, width, height),
        Some("Keyboard Shortcuts"),
        theme::panel_border(true),
    );

    let mut lines = Vec::new();
    for (section, entries) in HELP {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(format!("  {section}"), theme::panel_title())));
        lines.push(Line::from(Span::styled(
            format!("  {}", "─".repeat(section.chars().count())),
            theme::hint(),
        )));
        for (keys, text) in *entries {
            lines.push(Line::from(vec![
                Span::styled(format!("  {keys:<10}"), theme::hint_key()),
                Span::styled(*text, theme::hint()),
            ]));
        }
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled("  Esc or ? to close", theme::hint())).right_aligned());

    frame.render_widget(Paragraph::new(lines), inner);
}

/// A one-line toast in the bottom-right corner of the body.
fn render_toast(frame: &mut Frame, area: Rect, notification: &Notification) {
    let (accent, icon) = theme::toast(notification.level);
    let text_width = u16::try_from(notification.message.chars().count()).unwrap_or(u16::MAX);
    let width = text_width.saturating_add(6).clamp(20, 72);

    let inner = popup::open(
        frame,
        popup::bottom_right(area, width, 3),
        None,
        Style::default().fg(accent),
    );
    let line = Line::from(vec![
        Span::styled(format!(" {icon} "), Style::default().fg(accent)),
        Span::styled(notification.message.as_str(), theme::row()),
    ]);
    frame.render_widget(Paragraph::new(line), inner);
}
