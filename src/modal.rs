use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap};

use crate::theme::Theme;
use crate::types::{Question, QuestionKind};

/// Render the detail overlay for the captured question.
///
/// The body branches exhaustively on the question kind; an unrecognized kind
/// falls back to the bare title and must never fail.
pub(crate) fn render_detail_modal(
    frame: &mut Frame,
    area: Rect,
    question: &Question,
    title: &str,
    theme: &Theme,
) {
    let popup = popup_area(area, 70, 70);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .title(Line::from(format!(" {title} ")).style(theme.header_style()))
        .title(Line::from(" [q] ✕ ").alignment(Alignment::Right))
        .title_bottom(
            Line::from(" close: esc · accept: a ")
                .alignment(Alignment::Center)
                .style(theme.empty_style()),
        )
        .borders(Borders::ALL)
        .border_style(theme.modal_border_style())
        .padding(Padding::horizontal(1));

    let body = Paragraph::new(detail_lines(question, theme))
        .wrap(Wrap { trim: false })
        .block(block);
    frame.render_widget(body, popup);
}

fn detail_lines(question: &Question, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(question.title.clone(), theme.prompt_style())),
        Line::default(),
    ];

    match &question.kind {
        QuestionKind::Mcq { options } => {
            lines.push(Line::from("Options:"));
            for option in options {
                lines.push(mark_line(&option.text, option.is_correct_answer, theme));
            }
        }
        QuestionKind::Anagram { blocks, solution } => {
            lines.push(Line::from("Blocks:"));
            for block in blocks {
                lines.push(mark_line(&block.text, block.is_answer, theme));
            }
            lines.push(Line::default());
            lines.push(Line::from(format!("Solution: {solution}")));
        }
        QuestionKind::Other => {}
    }

    lines
}

fn mark_line(text: &str, correct: bool, theme: &Theme) -> Line<'static> {
    let (mark, style) = if correct {
        ("✓", theme.correct_style())
    } else {
        ("✗", theme.incorrect_style())
    };
    Line::from(vec![
        Span::styled(format!("{mark} "), style),
        Span::raw(text.to_string()),
    ])
}

/// Centered popup rectangle sized as a percentage of the full area.
fn popup_area(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let [area] = Layout::vertical([Constraint::Percentage(percent_y)])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(area);
    area
}
