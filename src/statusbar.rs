use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::theme::Theme;

/// Pagination state shown on the status line.
pub(crate) struct PagerStatus {
    pub page: u32,
    pub has_prev: bool,
    pub has_next: bool,
}

/// Render the bottom status line: page cursor, pager controls and key hints.
///
/// A control with no page to go to renders muted, the terminal rendition of a
/// disabled button.
pub(crate) fn render_status(
    frame: &mut Frame,
    area: Rect,
    pager: &PagerStatus,
    hint: &str,
    theme: &Theme,
) {
    let line = Line::from(vec![
        Span::styled(format!(" Page {} ", pager.page), theme.header_style()),
        Span::raw("  "),
        control_span("pgup: prev", pager.has_prev, theme),
        Span::raw("  "),
        control_span("pgdn: next", pager.has_next, theme),
    ]);
    frame.render_widget(Paragraph::new(line), area);

    let hints = Paragraph::new(Span::styled(hint.to_string(), theme.empty_style()))
        .alignment(Alignment::Right);
    frame.render_widget(hints, area);
}

/// Render the persistent fetch-error message on its own line.
pub(crate) fn render_error(frame: &mut Frame, area: Rect, message: &str, theme: &Theme) {
    let line = Paragraph::new(Span::styled(message.to_string(), theme.error_style()));
    frame.render_widget(line, area);
}

fn control_span(label: &str, enabled: bool, theme: &Theme) -> Span<'static> {
    let style = if enabled {
        Style::default()
    } else {
        theme.empty_style()
    };
    Span::styled(label.to_string(), style)
}
