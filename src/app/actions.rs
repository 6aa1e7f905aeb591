use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::App;
use crate::types::BrowseOutcome;

impl App {
    /// Handle one key press. Returns an outcome when the session ends.
    pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Option<BrowseOutcome> {
        if self.modal.is_some() {
            return self.handle_modal_key(key);
        }

        match key.code {
            KeyCode::Esc => Some(self.cancelled()),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(self.cancelled())
            }
            KeyCode::Enter => {
                if let Some(question) = self.selected_question().cloned() {
                    self.modal = Some(question);
                }
                None
            }
            KeyCode::Up => {
                self.move_selection_up();
                None
            }
            KeyCode::Down => {
                self.move_selection_down();
                None
            }
            KeyCode::PageUp => {
                if self.query.has_prev() {
                    self.query.prev_page();
                    self.request_fetch();
                }
                None
            }
            KeyCode::PageDown => {
                if self.query.has_next(self.results.len()) {
                    self.query.next_page();
                    self.request_fetch();
                }
                None
            }
            _ => {
                // Everything else belongs to the search input: typing,
                // backspace, cursor movement.
                if self.search_input.input(key) {
                    self.query.set_text(self.search_input.text());
                    self.request_fetch();
                }
                None
            }
        }
    }

    fn handle_modal_key(&mut self, key: KeyEvent) -> Option<BrowseOutcome> {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => {
                self.modal = None;
                None
            }
            KeyCode::Char('a') => {
                let selection = self.modal.take();
                Some(BrowseOutcome {
                    accepted: true,
                    query: self.query.text().to_string(),
                    selection,
                })
            }
            _ => None,
        }
    }

    fn cancelled(&self) -> BrowseOutcome {
        BrowseOutcome {
            accepted: false,
            query: self.query.text().to_string(),
            selection: None,
        }
    }

    fn move_selection_up(&mut self) {
        if let Some(selected) = self.table_state.selected()
            && selected > 0
        {
            self.table_state.select(Some(selected - 1));
        }
    }

    fn move_selection_down(&mut self) {
        if let Some(selected) = self.table_state.selected() {
            if selected + 1 < self.results.len() {
                self.table_state.select(Some(selected + 1));
            }
        }
    }
}
