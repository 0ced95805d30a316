use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use super::state::{SearchField, SearchState};
use crate::ui::strings;
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, PRIMARY_BLUE,
};

/// Search card: two labelled inputs and the search button.
pub fn render_search_panel(frame: &mut Frame, area: Rect, state: &SearchState) {
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", strings::PAGE_TITLE),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Percentage(40),
            Constraint::Percentage(20),
        ])
        .split(inner);

    frame.render_widget(
        field_widget(
            strings::SEARCH_EMPLOYEE_ID,
            &state.draft.employee_id,
            strings::SEARCH_EMPLOYEE_ID_PLACEHOLDER,
            state.focused == Some(SearchField::EmployeeId),
        ),
        columns[0],
    );
    frame.render_widget(
        field_widget(
            strings::SEARCH_NAME,
            &state.draft.name,
            strings::SEARCH_NAME_PLACEHOLDER,
            state.focused == Some(SearchField::Name),
        ),
        columns[1],
    );

    let button_style = if state.is_editing() {
        Style::default()
            .fg(HEADER_TEXT)
            .bg(PRIMARY_BLUE)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(PRIMARY_BLUE)
    };
    let button = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(format!(" 🔍 {} ", strings::SEARCH_BUTTON), button_style)),
    ]);
    frame.render_widget(button, columns[2]);
}

fn field_widget<'a>(label: &'a str, value: &'a str, placeholder: &'a str, focused: bool) -> Paragraph<'a> {
    let value_style = if focused {
        Style::default().fg(HEADER_TEXT).bg(ACTIVE_HIGHLIGHT)
    } else {
        Style::default().fg(HEADER_TEXT)
    };
    let value_span = if value.is_empty() {
        Span::styled(format!(" {}", placeholder), value_style.fg(MUTED_TEXT))
    } else {
        Span::styled(format!(" {}", value), value_style)
    };
    Paragraph::new(vec![
        Line::from(Span::styled(format!(" {}", label), Style::default().fg(MUTED_TEXT))),
        Line::from(value_span),
    ])
}
