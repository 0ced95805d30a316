use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use super::state::{ConfirmButton, ConfirmDialogState};
use crate::ui::layout::centered_rect_by_size;
use crate::ui::strings;
use crate::ui::theme::{ACTIVE_HIGHLIGHT, HEADER_TEXT, POPUP_BORDER, STATUS_ERROR};

const DIALOG_WIDTH: u16 = 48;

pub fn render_confirm_dialog(frame: &mut Frame, area: Rect, state: &ConfirmDialogState) {
    let ConfirmDialogState::Visible { name, selected, .. } = state else {
        return;
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", strings::CONFIRM_DELETE_PROMPT),
            Style::default().fg(HEADER_TEXT),
        )),
        Line::from(Span::styled(
            format!("  {}", name),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("  {}", strings::CONFIRM_DELETE_QUESTION),
            Style::default().fg(HEADER_TEXT),
        )),
        Line::from(""),
        render_buttons(*selected),
    ];

    let height = lines.len().saturating_add(2) as u16;
    let dialog = centered_rect_by_size(area, DIALOG_WIDTH, height);
    frame.render_widget(Clear, dialog);
    let block = Block::default()
        .title(Span::styled(
            format!(" ⚠ {} ", strings::CONFIRM_DELETE_TITLE),
            Style::default().fg(STATUS_ERROR),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(Paragraph::new(lines).block(block), dialog);
}

fn render_buttons(selected: ConfirmButton) -> Line<'static> {
    let highlighted = Style::default()
        .bg(ACTIVE_HIGHLIGHT)
        .add_modifier(Modifier::BOLD);

    let delete_style = if selected == ConfirmButton::Delete {
        highlighted.fg(STATUS_ERROR)
    } else {
        Style::default().fg(STATUS_ERROR)
    };
    let cancel_style = if selected == ConfirmButton::Cancel {
        highlighted.fg(HEADER_TEXT)
    } else {
        Style::default().fg(HEADER_TEXT)
    };

    Line::from(vec![
        Span::raw("        "),
        Span::styled(format!(" {} ", strings::CANCEL), cancel_style),
        Span::raw("    "),
        Span::styled(format!(" {} ", strings::CONFIRM_DELETE_OK), delete_style),
    ])
}
