use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};
use ratatui::widgets::Paragraph;
use throbber_widgets_tui::Throbber;
use unicode_width::UnicodeWidthStr;

use super::App;
use crate::statusbar::{self, PagerStatus};
use crate::{modal, tables};

const LOADING_LABEL: &str = "Loading...";

impl App {
    pub fn draw(&mut self, frame: &mut Frame) {
        let area = frame.area().inner(Margin {
            vertical: 0,
            horizontal: 1,
        });

        // Input row, results, error line, status line.
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(area);

        self.render_input(frame, layout[0]);

        if self.loading {
            self.render_loading(frame, layout[1]);
        } else {
            tables::render_results(
                frame,
                layout[1],
                &mut self.table_state,
                &self.results,
                &self.ui.empty_message,
                &self.theme,
            );
        }

        // The error renders alongside the results, never in their place.
        if let Some(message) = &self.error {
            statusbar::render_error(frame, layout[2], message, &self.theme);
        }

        let pager = PagerStatus {
            page: self.query.page(),
            has_prev: self.query.has_prev(),
            has_next: self.query.has_next(self.results.len()),
        };
        statusbar::render_status(frame, layout[3], &pager, self.hint(), &self.theme);

        if let Some(question) = &self.modal {
            modal::render_detail_modal(frame, area, question, &self.ui.detail_title, &self.theme);
        }
    }

    fn render_input(&self, frame: &mut Frame, area: Rect) {
        let prompt = self.ui.input_title.as_deref().unwrap_or("Search");
        let prompt_text = format!("{prompt} > ");
        let prompt_width = UnicodeWidthStr::width(prompt_text.as_str()) as u16;

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(prompt_width), Constraint::Min(1)])
            .split(area);

        let prompt_widget = Paragraph::new(prompt_text).style(self.theme.prompt_style());
        frame.render_widget(prompt_widget, chunks[0]);
        self.search_input.render(frame, chunks[1], &self.theme);
    }

    fn render_loading(&mut self, frame: &mut Frame, area: Rect) {
        let throbber = Throbber::default()
            .label(LOADING_LABEL)
            .style(self.theme.empty_style())
            .throbber_style(self.theme.prompt_style());

        let label_width = UnicodeWidthStr::width(LOADING_LABEL) as u16 + 2;
        let line = Rect {
            x: area.x + area.width.saturating_sub(label_width) / 2,
            y: area.y + area.height / 2,
            width: label_width.min(area.width),
            height: 1,
        };
        frame.render_stateful_widget(throbber, line, &mut self.throbber_state);
    }

    fn hint(&self) -> &'static str {
        if self.modal.is_some() {
            "esc: close  a: accept"
        } else {
            "enter: details  esc: quit"
        }
    }
}

#[cfg(test)]
mod tests {
    use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend};

    use crate::app::state::tests::{ScriptedService, app_with, wait_for_fetch};

    fn render_to_string(app: &mut crate::App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 16)).unwrap();
        terminal.draw(|frame| app.draw(frame)).unwrap();
        terminal.backend().to_string()
    }

    #[test]
    fn hydrated_page_renders_rows_and_pager() {
        let mut app = app_with(ScriptedService { fail: false }, "paris");
        wait_for_fetch(&mut app);

        let view = render_to_string(&mut app);
        assert!(view.contains("Search >"));
        assert!(view.contains("paris"));
        assert!(view.contains("Page 1"));
        assert!(view.contains("pgdn: next"));
    }

    #[test]
    fn loading_suppresses_the_results_grid() {
        let mut app = app_with(ScriptedService { fail: false }, "paris");
        wait_for_fetch(&mut app);
        app.loading = true;

        let view = render_to_string(&mut app);
        assert!(view.contains("Loading..."));
        assert!(!view.contains("Title"));
    }

    #[test]
    fn error_renders_alongside_the_results() {
        let mut app = app_with(ScriptedService { fail: false }, "paris");
        wait_for_fetch(&mut app);
        app.error = Some(super::super::state::FETCH_ERROR_MESSAGE.to_string());

        let view = render_to_string(&mut app);
        assert!(view.contains("Error fetching questions."));
        assert!(view.contains("paris"), "results stay on screen");
    }

    #[test]
    fn open_modal_overlays_the_results() {
        let mut app = app_with(ScriptedService { fail: false }, "paris");
        wait_for_fetch(&mut app);
        app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));

        let view = render_to_string(&mut app);
        assert!(view.contains("Question Details"));
    }
}
