//! Generator screen: country card, count input, paged result table.
//!
//! Owns the [`Selection`] and everything that acts on its batch: saving
//! the selection, clipboard writes and export to disk.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use chrono::Utc;
use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table, TableState};
use tracing::{debug, info};
use tui_input::{Input, InputRequest};

use phonegen_config::StateStore;
use phonegen_core::clipboard::{self, Clipboard};
use phonegen_core::{BatchSize, Selection, export};

use crate::action::{Action, Notification};
use crate::component::{Component, KeyHints};
use crate::theme;
use crate::widgets::{hints, input, pager};

/// How long a copied row keeps its check mark.
pub const COPY_FEEDBACK: Duration = Duration::from_millis(1500);

/// `10000` is the longest count that can be valid.
const MAX_COUNT_DIGITS: usize = 5;

pub struct GeneratorScreen {
    selection: Selection,
    store: StateStore,
    clipboard: Box<dyn Clipboard + Send>,
    export_dir: PathBuf,
    count_input: Input,
    table_state: TableState,
    /// Absolute batch index of the last copied number.
    copied: Option<(usize, Instant)>,
}

impl GeneratorScreen {
    pub fn new(
        selection: Selection,
        store: StateStore,
        clipboard: Box<dyn Clipboard + Send>,
        export_dir: PathBuf,
    ) -> Self {
        let count_input = Input::new(selection.count().to_string());
        Self {
            selection,
            store,
            clipboard,
            export_dir,
            count_input,
            table_state: TableState::default(),
            copied: None,
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn count_text(&self) -> &str {
        self.count_input.value()
    }

    fn count_text_valid(&self) -> bool {
        BatchSize::parse(self.count_text()).is_some()
    }

    /// Edit the count field. The selection only takes the new value when
    /// it is a valid count; otherwise the previous count stays in effect.
    fn edit_count(&mut self, request: InputRequest) {
        if !input::apply(&mut self.count_input, request) {
            return;
        }
        if let Some(count) = BatchSize::parse(self.count_input.value()) {
            self.selection.set_count(i64::from(count.get()));
        }
    }

    // ── Table cursor ────────────────────────────────────────────

    fn selected_row(&self) -> usize {
        self.table_state.selected().unwrap_or(0)
    }

    /// Absolute batch index of the highlighted row.
    pub fn selected_index(&self) -> Option<usize> {
        let page = self.selection.page();
        let row = self.selected_row();
        (row < page.items.len()).then_some(page.offset + row)
    }

    fn reset_cursor(&mut self) {
        let rows = self.selection.page().items.len();
        self.table_state.select((rows > 0).then_some(0));
    }

    fn move_selection(&mut self, delta: isize) {
        let rows = self.selection.page().items.len();
        if rows == 0 {
            return;
        }
        let next = self
            .selected_row()
            .saturating_add_signed(delta)
            .min(rows - 1);
        self.table_state.select(Some(next));
    }

    fn turn_page(&mut self, delta: isize) {
        self.selection.turn_page(delta);
        self.reset_cursor();
    }

    // ── Side effects ────────────────────────────────────────────

    /// Save the selection; a failure becomes an error toast.
    fn persist(&self) -> Option<Action> {
        if self.store.save(self.selection.saved()) {
            None
        } else {
            Some(Action::Notify(Notification::error("Could not save selection")))
        }
    }

    fn generate(&mut self) -> Option<Action> {
        let batch = self.selection.generate();
        info!(country = batch.country_id, count = batch.len(), "batch generated");
        let message = format!("Generated {} numbers for {}", batch.len(), batch.country_name);

        self.copied = None;
        self.reset_cursor();
        Some(
            self.persist()
                .unwrap_or_else(|| Action::Notify(Notification::success(message))),
        )
    }

    fn copy_number(&mut self, index: usize) -> Option<Action> {
        let number = self.selection.number(index)?.to_owned();
        if clipboard::copy_logged(self.clipboard.as_mut(), &number, "number") {
            self.copied = Some((index, Instant::now()));
            Some(Action::Notify(Notification::success(format!("Copied {number}"))))
        } else {
            Some(Action::Notify(Notification::error("Clipboard write failed")))
        }
    }

    fn copy_all(&mut self) -> Action {
        let Some(batch) = self.selection.batch() else {
            return Action::Notify(Notification::info("Nothing to copy yet"));
        };
        let (text, len) = (batch.to_text(), batch.len());
        if clipboard::copy_logged(self.clipboard.as_mut(), &text, "batch") {
            Action::Notify(Notification::success(format!("Copied {len} numbers")))
        } else {
            Action::Notify(Notification::error("Clipboard write failed"))
        }
    }

    fn export(&self) -> Action {
        let Some(batch) = self.selection.batch().filter(|b| !b.is_empty()) else {
            return Action::Notify(Notification::error("Generate numbers before exporting"));
        };
        match export::write_batch(&self.export_dir, batch, Utc::now()) {
            Ok(path) => Action::Notify(Notification::success(format!(
                "Exported {} numbers to {}",
                batch.len(),
                path.display()
            ))),
            Err(err) => Action::Notify(Notification::error(err.to_string())),
        }
    }

    /// Drop the copied-row mark once it has been shown long enough.
    pub fn expire_marks(&mut self, now: Instant) {
        if self
            .copied
            .is_some_and(|(_, at)| now.duration_since(at) >= COPY_FEEDBACK)
        {
            self.copied = None;
        }
    }

    pub fn copied_index(&self) -> Option<usize> {
        self.copied.map(|(index, _)| index)
    }

    // ── Rendering ───────────────────────────────────────────────

    fn render_country_card(&self, frame: &mut Frame, area: Rect) {
        let country = self.selection.country();
        let block = Block::default()
            .title(" Country ")
            .title_style(theme::panel_title())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::panel_border(false));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let lines = vec![
            Line::from(vec![
                Span::styled(country.name, theme::current_country()),
                Span::styled(format!("  {}", country.dial_code), theme::row()),
                Span::styled("   c ", theme::hint_key()),
                Span::styled("change", theme::hint()),
            ]),
            Line::from(vec![
                Span::styled("Format  ", theme::hint()),
                Span::styled(
                    format!("{} {}", country.dial_code, country.pattern),
                    theme::row(),
                ),
            ]),
        ];
        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn render_numbers(&self, frame: &mut Frame, area: Rect) {
        let title = match self.selection.batch() {
            Some(batch) => format!(" Numbers ({}) ", batch.len()),
            None => " Numbers ".to_owned(),
        };
        let block = Block::default()
            .title(title)
            .title_style(theme::panel_title())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::panel_border(true));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let layout = Layout::vertical([
            Constraint::Min(1),    // table
            Constraint::Length(1), // pager
            Constraint::Length(1), // hints
        ])
        .split(inner);

        let page = self.selection.page();
        if page.items.is_empty() {
            let hint = Line::from(vec![
                Span::styled("  Press ", theme::hint()),
                Span::styled("g", theme::hint_key()),
                Span::styled(
                    format!(" to generate {} numbers", self.selection.count()),
                    theme::hint(),
                ),
            ]);
            frame.render_widget(Paragraph::new(hint), layout[0]);
        } else {
            let header = Row::new(vec![
                Cell::from("#").style(theme::column_header()),
                Cell::from("Number").style(theme::column_header()),
                Cell::from(""),
            ]);

            let selected = self.selected_row();
            let copied = self.copied_index();
            let rows: Vec<Row> = page
                .items
                .iter()
                .enumerate()
                .map(|(i, number)| {
                    let index = page.offset + i;
                    let prefix = if i == selected { "▸" } else { " " };
                    let mark = if copied == Some(index) {
                        Span::styled("✓ copied", theme::copied_mark())
                    } else {
                        Span::raw("")
                    };
                    Row::new(vec![
                        Cell::from(format!("{prefix}{}", index + 1)),
                        Cell::from(number.as_str()).style(theme::number()),
                        Cell::from(mark),
                    ])
                    .style(theme::row())
                })
                .collect();

            let widths = [
                Constraint::Length(7),
                Constraint::Min(20),
                Constraint::Length(10),
            ];
            let table = Table::new(rows, widths)
                .header(header)
                .row_highlight_style(theme::row_selected());

            let mut state = self.table_state;
            frame.render_stateful_widget(table, layout[0], &mut state);
        }

        frame.render_widget(Paragraph::new(pager::page_line(&page)), layout[1]);

        frame.render_widget(Paragraph::new(hints::hint_line(self.key_hints())), layout[2]);
    }
}

impl Component for GeneratorScreen {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
            return Ok(None);
        }

        match key.code {
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if self.count_input.value().len() < MAX_COUNT_DIGITS {
                    self.edit_count(InputRequest::InsertChar(c));
                }
            }
            KeyCode::Backspace => self.edit_count(InputRequest::DeletePrevChar),
            KeyCode::Char('g') | KeyCode::Enter => return Ok(Some(Action::Generate)),
            KeyCode::Char('c') => return Ok(Some(Action::OpenSelector)),
            KeyCode::Char('j') | KeyCode::Down => self.move_selection(1),
            KeyCode::Char('k') | KeyCode::Up => self.move_selection(-1),
            KeyCode::Char(']') | KeyCode::Right | KeyCode::PageDown => self.turn_page(1),
            KeyCode::Char('[') | KeyCode::Left | KeyCode::PageUp => self.turn_page(-1),
            KeyCode::Char('y') => {
                return Ok(Some(self.selected_index().map_or_else(
                    || Action::Notify(Notification::info("Nothing to copy yet")),
                    Action::CopyNumber,
                )));
            }
            KeyCode::Char('Y') => return Ok(Some(Action::CopyAll)),
            KeyCode::Char('d') => return Ok(Some(Action::Export)),
            _ => {}
        }
        Ok(None)
    }

    fn update(&mut self, action: &Action) -> Result<Option<Action>> {
        let follow_up = match action {
            Action::SelectCountry(country) => {
                debug!(country = country.id, "country selected");
                self.selection.select(*country);
                self.copied = None;
                self.reset_cursor();
                self.persist()
            }
            Action::Generate => self.generate(),
            Action::CopyNumber(index) => self.copy_number(*index),
            Action::CopyAll => Some(self.copy_all()),
            Action::Export => Some(self.export()),
            Action::Tick => {
                self.expire_marks(Instant::now());
                None
            }
            _ => None,
        };
        Ok(follow_up)
    }

    fn key_hints(&self) -> KeyHints {
        &[
            ("g", "generate"),
            ("[/]", "page"),
            ("y", "copy"),
            ("Y", "copy all"),
            ("d", "export"),
        ]
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let layout = Layout::vertical([
            Constraint::Length(4), // country card + count input
            Constraint::Min(6),    // numbers
        ])
        .split(area);

        let top =
            Layout::horizontal([Constraint::Min(30), Constraint::Length(24)]).split(layout[0]);
        self.render_country_card(frame, top[0]);
        input::render_input_field(
            frame,
            top[1],
            &format!(" Count (using {})", self.selection.count()),
            &self.count_input,
            true,
            self.count_text_valid(),
        );

        self.render_numbers(frame, layout[1]);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use phonegen_core::{Catalog, SavedSelection};

    use super::*;

    /// Records every copy; can be told to fail.
    #[derive(Clone, Default)]
    struct FakeClipboard {
        copies: Arc<Mutex<Vec<String>>>,
        broken: bool,
    }

    impl Clipboard for FakeClipboard {
        fn copy(&mut self, text: &str) -> io::Result<()> {
            if self.broken {
                return Err(io::Error::other("no terminal"));
            }
            self.copies.lock().unwrap().push(text.to_owned());
            Ok(())
        }
    }

    struct Fixture {
        dir: TempDir,
        clip: FakeClipboard,
        screen: GeneratorScreen,
    }

    fn fixture_with(clip: FakeClipboard) -> Fixture {
        let dir = tempfile::tempdir().unwrap();
        let selection = Selection::restore(
            &Catalog::builtin(),
            &SavedSelection::default(),
            BatchSize::DEFAULT,
        );
        let screen = GeneratorScreen::new(
            selection,
            StateStore::new(dir.path().join("state.toml")),
            Box::new(clip.clone()),
            dir.path().join("exports"),
        );
        Fixture { dir, clip, screen }
    }

    fn fixture() -> Fixture {
        fixture_with(FakeClipboard::default())
    }

    fn press(screen: &mut GeneratorScreen, code: KeyCode) -> Option<Action> {
        screen
            .handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
            .unwrap()
    }

    fn type_count(screen: &mut GeneratorScreen, text: &str) {
        for _ in 0..MAX_COUNT_DIGITS {
            press(screen, KeyCode::Backspace);
        }
        for c in text.chars() {
            press(screen, KeyCode::Char(c));
        }
    }

    fn notification(action: Option<Action>) -> Notification {
        match action {
            Some(Action::Notify(n)) => n,
            other => panic!("expected a notification, got {other:?}"),
        }
    }

    #[test]
    fn count_input_accepts_only_valid_counts() {
        let mut f = fixture();
        type_count(&mut f.screen, "45");
        assert_eq!(f.screen.selection().count().get(), 45);

        // Every edit that leaves a valid number applies it.
        for _ in 0..3 {
            press(&mut f.screen, KeyCode::Char('0'));
        }
        assert_eq!(f.screen.count_text(), "45000");
        assert_eq!(f.screen.selection().count().get(), 4500);

        type_count(&mut f.screen, "0");
        assert_eq!(f.screen.count_text(), "0");
        assert_eq!(f.screen.selection().count().get(), 4);

        type_count(&mut f.screen, "10000");
        assert_eq!(f.screen.selection().count().get(), 10_000);
    }

    #[test]
    fn count_input_caps_length_and_ignores_letters() {
        let mut f = fixture();
        type_count(&mut f.screen, "100000");
        assert_eq!(f.screen.count_text(), "10000");

        // Letters are commands, not count input.
        assert!(matches!(press(&mut f.screen, KeyCode::Char('g')), Some(Action::Generate)));
        assert_eq!(f.screen.count_text(), "10000");
    }

    #[test]
    fn generate_persists_and_pages() {
        let mut f = fixture();
        type_count(&mut f.screen, "45");
        let n = notification(f.screen.update(&Action::Generate).unwrap());
        assert_eq!(n.message, "Generated 45 numbers for China");

        let page = f.screen.selection().page();
        assert_eq!(page.items.len(), 20);
        assert_eq!(page.total_pages, 3);

        press(&mut f.screen, KeyCode::Char(']'));
        press(&mut f.screen, KeyCode::Char(']'));
        press(&mut f.screen, KeyCode::Char(']'));
        assert_eq!(f.screen.selection().page().index, 2);
        assert_eq!(f.screen.selected_index(), Some(40));

        let saved = StateStore::new(f.dir.path().join("state.toml")).load();
        assert_eq!(saved.count, Some(45));
    }

    #[test]
    fn select_country_clears_batch_and_saves() {
        let mut f = fixture();
        f.screen.update(&Action::Generate).unwrap();
        let jp = Catalog::builtin().get("jp").unwrap();

        let follow_up = f.screen.update(&Action::SelectCountry(jp)).unwrap();
        assert!(follow_up.is_none());
        assert!(f.screen.selection().batch().is_none());

        let saved = StateStore::new(f.dir.path().join("state.toml")).load();
        assert_eq!(saved.country.as_deref(), Some("jp"));
    }

    #[test]
    fn copy_selected_number() {
        let mut f = fixture();
        f.screen.update(&Action::Generate).unwrap();
        press(&mut f.screen, KeyCode::Char('j'));

        let action = press(&mut f.screen, KeyCode::Char('y'));
        assert!(matches!(action, Some(Action::CopyNumber(1))));
        let n = notification(f.screen.update(&action.unwrap()).unwrap());

        let expected = f.screen.selection().number(1).unwrap().to_owned();
        assert_eq!(n.message, format!("Copied {expected}"));
        assert_eq!(*f.clip.copies.lock().unwrap(), vec![expected]);
        assert_eq!(f.screen.copied_index(), Some(1));
    }

    #[test]
    fn copied_mark_expires() {
        let mut f = fixture();
        f.screen.update(&Action::Generate).unwrap();
        f.screen.update(&Action::CopyNumber(0)).unwrap();

        f.screen.expire_marks(Instant::now());
        assert_eq!(f.screen.copied_index(), Some(0));

        f.screen.expire_marks(Instant::now() + COPY_FEEDBACK);
        assert_eq!(f.screen.copied_index(), None);
    }

    #[test]
    fn copy_all_joins_batch() {
        let mut f = fixture();
        type_count(&mut f.screen, "3");
        f.screen.update(&Action::Generate).unwrap();

        let n = notification(f.screen.update(&Action::CopyAll).unwrap());
        assert_eq!(n.message, "Copied 3 numbers");

        let copies = f.clip.copies.lock().unwrap();
        assert_eq!(copies.len(), 1);
        assert_eq!(copies[0].split('\n').count(), 3);
    }

    #[test]
    fn copy_failure_is_reported() {
        let mut f = fixture_with(FakeClipboard {
            broken: true,
            ..FakeClipboard::default()
        });
        f.screen.update(&Action::Generate).unwrap();

        let n = notification(f.screen.update(&Action::CopyAll).unwrap());
        assert_eq!(n.level, crate::action::NotificationLevel::Error);
        assert_eq!(f.screen.copied_index(), None);
    }

    #[test]
    fn nothing_to_copy_before_generating() {
        let mut f = fixture();
        let n = notification(press(&mut f.screen, KeyCode::Char('y')));
        assert_eq!(n.message, "Nothing to copy yet");
    }

    #[test]
    fn export_requires_batch() {
        let mut f = fixture();
        let n = notification(f.screen.update(&Action::Export).unwrap());
        assert_eq!(n.level, crate::action::NotificationLevel::Error);
        assert!(!f.dir.path().join("exports").exists());
    }

    #[test]
    fn export_writes_file() {
        let mut f = fixture();
        type_count(&mut f.screen, "7");
        f.screen.update(&Action::Generate).unwrap();

        let n = notification(f.screen.update(&Action::Export).unwrap());
        assert!(n.message.starts_with("Exported 7 numbers to "), "{}", n.message);

        let files: Vec<_> = std::fs::read_dir(f.dir.path().join("exports"))
            .unwrap()
            .map(|e| e.unwrap().path())
            .collect();
        assert_eq!(files.len(), 1);
        assert_eq!(export::read_batch(&files[0]).unwrap().len(), 7);
    }

    #[test]
    fn cursor_clamps_to_page() {
        let mut f = fixture();
        type_count(&mut f.screen, "3");
        f.screen.update(&Action::Generate).unwrap();
        for _ in 0..10 {
            press(&mut f.screen, KeyCode::Down);
        }
        assert_eq!(f.screen.selected_index(), Some(2));
        press(&mut f.screen, KeyCode::Up);
        assert_eq!(f.screen.selected_index(), Some(1));
    }
}
