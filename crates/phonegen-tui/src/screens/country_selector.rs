//! Country selector overlay: debounced search over the catalog, 50 per page.

use std::time::Instant;

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Cell, Paragraph, Row, Table, TableState};
use tracing::debug;
use tui_input::Input;

use phonegen_core::paginate::{self, COUNTRY_PAGE_SIZE};
use phonegen_core::{Catalog, CountryRecord, Page};

use crate::action::Action;
use crate::component::{Component, KeyHints};
use crate::debounce::Debouncer;
use crate::theme;
use crate::widgets::{hints, input, pager, popup};

pub struct CountrySelector {
    catalog: Catalog,
    input: Input,
    /// Query the list is currently filtered by; trails `input` by the
    /// debounce delay.
    query: String,
    debounce: Debouncer,
    page: usize,
    table_state: TableState,
    /// Id of the country in use, highlighted in the list.
    current: &'static str,
}

impl CountrySelector {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            input: Input::default(),
            query: String::new(),
            debounce: Debouncer::default(),
            page: 0,
            table_state: TableState::default().with_selected(Some(0)),
            current: catalog.first().id,
        }
    }

    /// Prepare for display with `current` highlighted and under the cursor.
    pub fn open(&mut self, current: &'static CountryRecord) {
        self.reset();
        self.current = current.id;
        let size = COUNTRY_PAGE_SIZE.get();
        if let Some(pos) = self.matches().iter().position(|c| c.id == current.id) {
            self.page = pos / size;
            self.table_state.select(Some(pos % size));
        }
    }

    /// Forget the query and paging.
    pub fn reset(&mut self) {
        self.input.reset();
        self.query.clear();
        self.debounce.cancel();
        self.page = 0;
        self.table_state.select(Some(0));
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    #[cfg(test)]
    pub fn typed(&self) -> &str {
        self.input.value()
    }

    pub fn page_index(&self) -> usize {
        paginate::clamp_page(self.page, self.matches().len(), COUNTRY_PAGE_SIZE)
    }

    pub fn matches(&self) -> Vec<&'static CountryRecord> {
        self.catalog.search(self.query())
    }

    /// Apply the typed query once the debounce delay has passed.
    pub fn poll_debounce(&mut self, now: Instant) {
        if self.debounce.fire(now) {
            self.query = self.input.value().to_owned();
            self.page = 0;
            self.table_state.select(Some(0));
            debug!(query = %self.query, "country search applied");
        }
    }

    /// Country under the cursor on the current page.
    pub fn highlighted(&self) -> Option<&'static CountryRecord> {
        let matches = self.matches();
        let page = paginate::paginate(&matches, self.page, COUNTRY_PAGE_SIZE);
        page.items
            .get(self.table_state.selected().unwrap_or(0))
            .copied()
    }

    fn rows_on_page(&self) -> usize {
        let matches = self.matches();
        paginate::paginate(&matches, self.page, COUNTRY_PAGE_SIZE)
            .items
            .len()
    }

    fn move_selection(&mut self, delta: isize) {
        let rows = self.rows_on_page();
        if rows == 0 {
            return;
        }
        let next = self
            .table_state
            .selected()
            .unwrap_or(0)
            .saturating_add_signed(delta)
            .min(rows - 1);
        self.table_state.select(Some(next));
    }

    fn turn_page(&mut self, delta: isize) {
        let len = self.matches().len();
        let target = self.page_index().saturating_add_signed(delta);
        self.page = paginate::clamp_page(target, len, COUNTRY_PAGE_SIZE);
        self.table_state.select(Some(0));
    }

    // ── Rendering ───────────────────────────────────────────────

    fn render_table(
        &self,
        frame: &mut Frame,
        area: Rect,
        page: &Page<'_, &'static CountryRecord>,
    ) {
        if page.items.is_empty() {
            frame.render_widget(
                Paragraph::new(Span::styled("  No matching countries", theme::hint())),
                area,
            );
            return;
        }

        let header = Row::new(vec![
            Cell::from(" Country").style(theme::column_header()),
            Cell::from("Code").style(theme::column_header()),
            Cell::from("Format").style(theme::column_header()),
        ]);

        let rows: Vec<Row> = page
            .items
            .iter()
            .map(|country| {
                let is_current = country.id == self.current;
                let (marker, name_style) = if is_current {
                    ("●", theme::current_country())
                } else {
                    (" ", theme::row())
                };
                Row::new(vec![
                    Cell::from(format!("{marker}{}", country.name)).style(name_style),
                    Cell::from(country.dial_code),
                    Cell::from(country.pattern).style(theme::row()),
                ])
                .style(theme::row())
            })
            .collect();

        let widths = [
            Constraint::Min(22),
            Constraint::Length(7),
            Constraint::Min(16),
        ];
        let table = Table::new(rows, widths)
            .header(header)
            .row_highlight_style(theme::row_selected());

        let mut state = self.table_state;
        frame.render_stateful_widget(table, area, &mut state);
    }
}

impl Component for CountrySelector {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match key.code {
            KeyCode::Esc => return Ok(Some(Action::CloseSelector)),
            KeyCode::Enter => return Ok(self.highlighted().map(Action::SelectCountry)),
            KeyCode::Down => self.move_selection(1),
            KeyCode::Up => self.move_selection(-1),
            KeyCode::PageDown => self.turn_page(1),
            KeyCode::PageUp => self.turn_page(-1),
            _ => {
                if let Some(request) = input::input_request(key) {
                    if input::apply(&mut self.input, request) {
                        self.debounce.schedule(Instant::now());
                    }
                }
            }
        }
        Ok(None)
    }

    fn update(&mut self, action: &Action) -> Result<Option<Action>> {
        match action {
            Action::Tick => self.poll_debounce(Instant::now()),
            Action::CloseSelector | Action::SelectCountry(_) => self.reset(),
            _ => {}
        }
        Ok(None)
    }

    fn key_hints(&self) -> KeyHints {
        &[
            ("↑/↓", "move"),
            ("PgUp/PgDn", "page"),
            ("Enter", "select"),
            ("Esc", "close"),
        ]
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let overlay = popup::centered(
            area,
            (area.width / 5 * 4).max(40),
            (area.height / 5 * 4).max(12),
        );
        let inner = popup::open(frame, overlay, Some("Select Country"), theme::panel_border(true));

        let layout = Layout::vertical([
            Constraint::Length(4), // search
            Constraint::Length(1), // match count
            Constraint::Min(1),    // table
            Constraint::Length(1), // pager
            Constraint::Length(1), // hints
        ])
        .split(inner);

        input::render_input_field(frame, layout[0], " Search", &self.input, true, true);

        let matches = self.matches();
        let page = paginate::paginate(&matches, self.page, COUNTRY_PAGE_SIZE);

        let found = if self.debounce.is_pending() {
            Line::from(Span::styled("  searching…", theme::hint()))
        } else {
            Line::from(vec![
                Span::styled("  found ", theme::hint()),
                Span::styled(matches.len().to_string(), theme::figure()),
                Span::styled(" countries", theme::hint()),
            ])
        };
        frame.render_widget(Paragraph::new(found), layout[1]);

        self.render_table(frame, layout[2], &page);
        frame.render_widget(Paragraph::new(pager::page_line(&page)), layout[3]);

        frame.render_widget(Paragraph::new(hints::hint_line(self.key_hints())), layout[4]);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crossterm::event::KeyModifiers;
    use pretty_assertions::assert_eq;

    use crate::debounce::SEARCH_DEBOUNCE;

    use super::*;

    fn selector() -> CountrySelector {
        CountrySelector::new(Catalog::builtin())
    }

    fn press(s: &mut CountrySelector, code: KeyCode) -> Option<Action> {
        s.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
            .unwrap()
    }

    fn type_text(s: &mut CountrySelector, text: &str) {
        for c in text.chars() {
            press(s, KeyCode::Char(c));
        }
    }

    fn settle(s: &mut CountrySelector) {
        s.poll_debounce(Instant::now() + SEARCH_DEBOUNCE);
    }

    #[test]
    fn query_applies_only_after_debounce() {
        let mut s = selector();
        type_text(&mut s, "japan");
        assert_eq!(s.typed(), "japan");
        assert_eq!(s.query(), "");
        assert_eq!(s.matches().len(), 100);

        s.poll_debounce(Instant::now());
        assert_eq!(s.query(), "");

        settle(&mut s);
        assert_eq!(s.query(), "japan");
        let ids: Vec<_> = s.matches().iter().map(|c| c.id).collect();
        assert_eq!(ids, ["jp"]);
    }

    #[test]
    fn applying_query_resets_page() {
        let mut s = selector();
        press(&mut s, KeyCode::PageDown);
        assert_eq!(s.page_index(), 1);

        type_text(&mut s, "a");
        assert_eq!(s.page_index(), 1);
        settle(&mut s);
        assert_eq!(s.page_index(), 0);
    }

    #[test]
    fn pages_clamp_to_matches() {
        let mut s = selector();
        for _ in 0..5 {
            press(&mut s, KeyCode::PageDown);
        }
        assert_eq!(s.page_index(), 1);
        for _ in 0..5 {
            press(&mut s, KeyCode::PageUp);
        }
        assert_eq!(s.page_index(), 0);
    }

    #[test]
    fn enter_selects_highlighted_country() {
        let mut s = selector();
        type_text(&mut s, "+81");
        settle(&mut s);

        match press(&mut s, KeyCode::Enter) {
            Some(Action::SelectCountry(c)) => assert_eq!(c.id, "jp"),
            other => panic!("expected SelectCountry, got {other:?}"),
        }
    }

    #[test]
    fn enter_with_no_matches_does_nothing() {
        let mut s = selector();
        type_text(&mut s, "atlantis");
        settle(&mut s);
        assert!(s.matches().is_empty());
        assert!(press(&mut s, KeyCode::Enter).is_none());
    }

    #[test]
    fn arrows_move_within_page() {
        let second = Catalog::builtin().all()[1].id;
        let mut s = selector();
        press(&mut s, KeyCode::Down);
        assert_eq!(s.highlighted().unwrap().id, second);
        press(&mut s, KeyCode::Up);
        press(&mut s, KeyCode::Up);
        assert_eq!(s.highlighted().unwrap().id, "cn");
    }

    #[test]
    fn escape_closes_and_close_resets() {
        let mut s = selector();
        type_text(&mut s, "ger");
        settle(&mut s);

        let action = press(&mut s, KeyCode::Esc);
        assert!(matches!(action, Some(Action::CloseSelector)));
        s.update(&Action::CloseSelector).unwrap();

        assert_eq!(s.typed(), "");
        assert_eq!(s.query(), "");
        assert_eq!(s.page_index(), 0);
    }

    #[test]
    fn open_moves_cursor_to_current_country() {
        let catalog = Catalog::builtin();
        let last = catalog.all().last().unwrap();

        let mut s = selector();
        s.open(last);
        assert_eq!(s.page_index(), 1);
        assert_eq!(s.highlighted().unwrap().id, last.id);
    }

    #[test]
    fn letters_are_search_input_not_commands() {
        let mut s = selector();
        assert!(press(&mut s, KeyCode::Char('q')).is_none());
        assert!(press(&mut s, KeyCode::Char('j')).is_none());
        assert_eq!(s.typed(), "qj");
    }
}
