use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::widgets::{Cell, Clear, HighlightSpacing, Paragraph, Row, Table, TableState};

use crate::theme::Theme;
use crate::types::Question;

const HIGHLIGHT_SYMBOL: &str = "▶ ";
const TABLE_COLUMN_SPACING: u16 = 1;

/// Render the result rows for the current page, or the empty-state message.
pub(crate) fn render_results(
    frame: &mut Frame,
    area: Rect,
    table_state: &mut TableState,
    questions: &[Question],
    empty_message: &str,
    theme: &Theme,
) {
    let rows = questions.iter().map(|question| {
        Row::new(vec![
            Cell::from(question.title.clone()),
            Cell::from(question.kind.label()),
        ])
    });
    let widths = [Constraint::Min(10), Constraint::Length(9)];
    let header = Row::new(vec![Cell::from("Title"), Cell::from("Type")])
        .style(theme.header_style())
        .height(1)
        .bottom_margin(1);

    let table = Table::new(rows, widths)
        .header(header)
        .column_spacing(TABLE_COLUMN_SPACING)
        .highlight_spacing(HighlightSpacing::WhenSelected)
        .row_highlight_style(theme.row_highlight_style())
        .highlight_symbol(HIGHLIGHT_SYMBOL);
    frame.render_stateful_widget(table, area, table_state);

    if questions.is_empty() {
        let mut message_area = area;
        // Skip the header row and its margin.
        const HEADER_AND_DIVIDER_HEIGHT: u16 = 2;
        if message_area.height > HEADER_AND_DIVIDER_HEIGHT {
            message_area.y += HEADER_AND_DIVIDER_HEIGHT;
            message_area.height -= HEADER_AND_DIVIDER_HEIGHT;

            let empty = Paragraph::new(empty_message)
                .alignment(Alignment::Center)
                .style(theme.empty_style());
            frame.render_widget(Clear, message_area);
            frame.render_widget(empty, message_area);
        }
    }
}
