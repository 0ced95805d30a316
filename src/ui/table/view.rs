use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;

use super::state::TableState;
use crate::employee::Employee;
use crate::ui::strings;
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, PRIMARY_BLUE, STATUS_ERROR,
};

/// Text of the actions column.
pub const ACTION_HINT: &str = "[e] แก้ไข  [d] ลบ";

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Render the table with its pagination line below it.
pub fn render_table(
    frame: &mut Frame,
    area: Rect,
    rows: &[&Employee],
    state: &TableState,
    loading: bool,
    error: Option<&str>,
    animation_tick: u8,
) {
    let state = TableState {
        selected: state.selected_index(rows.len()).unwrap_or(0),
        ..*state
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));

    if loading {
        let spinner = SPINNER_FRAMES[(animation_tick as usize) % SPINNER_FRAMES.len()];
        let line = Line::from(vec![
            Span::styled(format!(" {} ", spinner), Style::default().fg(PRIMARY_BLUE)),
            Span::styled(strings::LOADING, Style::default().fg(HEADER_TEXT)),
        ]);
        frame.render_widget(Paragraph::new(line).block(block), chunks[0]);
    } else if let Some(error) = error {
        let line = Line::from(Span::styled(
            format!(" {}", error),
            Style::default().fg(STATUS_ERROR),
        ));
        frame.render_widget(Paragraph::new(line).block(block), chunks[0]);
    } else if rows.is_empty() {
        let line = Line::from(Span::styled(
            format!(" {}", strings::EMPTY_TABLE),
            Style::default().fg(MUTED_TEXT),
        ));
        frame.render_widget(Paragraph::new(line).block(block), chunks[0]);
    } else {
        let selected = state.selected_index(rows.len());
        let body: Vec<Row> = state
            .page_range(rows.len())
            .map(|index| {
                let employee = rows[index];
                let row = Row::new(vec![
                    Cell::from(employee.id.clone()),
                    Cell::from(employee.first_name.clone()),
                    Cell::from(employee.address.clone()),
                    Cell::from(Span::styled(ACTION_HINT, Style::default().fg(PRIMARY_BLUE))),
                ]);
                if Some(index) == selected {
                    row.style(
                        Style::default()
                            .bg(ACTIVE_HIGHLIGHT)
                            .add_modifier(Modifier::BOLD),
                    )
                } else {
                    row
                }
            })
            .collect();

        let header = Row::new(vec![
            strings::COLUMN_ID,
            strings::COLUMN_NAME,
            strings::COLUMN_ADDRESS,
            strings::COLUMN_ACTIONS,
        ])
        .style(Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD));

        let table = Table::new(
            body,
            [
                Constraint::Percentage(15),
                Constraint::Percentage(20),
                Constraint::Percentage(50),
                Constraint::Percentage(15),
            ],
        )
        .header(header)
        .block(block);
        frame.render_widget(table, chunks[0]);
    }

    let pagination = format!(
        "{}   ◀ {}/{} ▶ ",
        strings::total_items(rows.len()),
        state.page() + 1,
        state.page_count(rows.len())
    );
    frame.render_widget(
        Paragraph::new(Line::from(pagination).right_aligned())
            .style(Style::default().fg(MUTED_TEXT)),
        chunks[1],
    );
}
