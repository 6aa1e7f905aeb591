use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::theme::Theme;

/// Single-line editable search input with a visible cursor.
pub struct SearchInput {
    text: String,
    /// Byte offset into `text`, always on a char boundary.
    cursor: usize,
}

impl SearchInput {
    pub fn new(initial: impl Into<String>) -> Self {
        let text = initial.into();
        let cursor = text.len();
        Self { text, cursor }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Apply a key event. Returns true when the text changed.
    pub fn input(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                let changed = !self.text.is_empty();
                self.text.clear();
                self.cursor = 0;
                changed
            }
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.text.insert(self.cursor, ch);
                self.cursor += ch.len_utf8();
                true
            }
            KeyCode::Backspace => match self.prev_boundary() {
                Some(prev) => {
                    self.text.remove(prev);
                    self.cursor = prev;
                    true
                }
                None => false,
            },
            KeyCode::Delete => {
                if self.cursor < self.text.len() {
                    self.text.remove(self.cursor);
                    true
                } else {
                    false
                }
            }
            KeyCode::Left => {
                if let Some(prev) = self.prev_boundary() {
                    self.cursor = prev;
                }
                false
            }
            KeyCode::Right => {
                if let Some(next) = self.next_boundary() {
                    self.cursor = next;
                }
                false
            }
            KeyCode::Home => {
                self.cursor = 0;
                false
            }
            KeyCode::End => {
                self.cursor = self.text.len();
                false
            }
            _ => false,
        }
    }

    /// Render the text and place the terminal cursor at the edit position.
    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let widget = Paragraph::new(self.text.as_str()).style(theme.empty_style());
        frame.render_widget(widget, area);

        let cursor_x = area.x + UnicodeWidthStr::width(&self.text[..self.cursor]) as u16;
        if cursor_x < area.right() {
            frame.set_cursor_position((cursor_x, area.y));
        }
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.text[..self.cursor]
            .chars()
            .next_back()
            .map(|ch| self.cursor - ch.len_utf8())
    }

    fn next_boundary(&self) -> Option<usize> {
        self.text[self.cursor..]
            .chars()
            .next()
            .map(|ch| self.cursor + ch.len_utf8())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn typing_appends_at_the_cursor() {
        let mut input = SearchInput::new("");
        assert!(input.input(key(KeyCode::Char('a'))));
        assert!(input.input(key(KeyCode::Char('b'))));
        assert_eq!(input.text(), "ab");
    }

    #[test]
    fn backspace_removes_the_char_before_the_cursor() {
        let mut input = SearchInput::new("ab");
        assert!(input.input(key(KeyCode::Backspace)));
        assert_eq!(input.text(), "a");
        assert!(input.input(key(KeyCode::Backspace)));
        assert_eq!(input.text(), "");
        assert!(!input.input(key(KeyCode::Backspace)));
    }

    #[test]
    fn cursor_movement_edits_mid_string() {
        let mut input = SearchInput::new("ac");
        input.input(key(KeyCode::Left));
        assert!(input.input(key(KeyCode::Char('b'))));
        assert_eq!(input.text(), "abc");
    }

    #[test]
    fn multibyte_chars_keep_boundaries_intact() {
        let mut input = SearchInput::new("é");
        input.input(key(KeyCode::Left));
        input.input(key(KeyCode::Right));
        assert!(input.input(key(KeyCode::Backspace)));
        assert_eq!(input.text(), "");
    }

    #[test]
    fn ctrl_u_clears_the_line() {
        let mut input = SearchInput::new("paris");
        assert!(input.input(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL)));
        assert_eq!(input.text(), "");
    }

    #[test]
    fn movement_keys_do_not_report_changes() {
        let mut input = SearchInput::new("ab");
        assert!(!input.input(key(KeyCode::Left)));
        assert!(!input.input(key(KeyCode::Home)));
        assert!(!input.input(key(KeyCode::End)));
    }
}
