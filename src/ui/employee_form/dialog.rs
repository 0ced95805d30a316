//! Rendering for the employee modal.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use super::state::FormDialogState;
use crate::employee::{FormField, ADDRESS_MAX_CHARS};
use crate::ui::layout::centered_rect_by_size;
use crate::ui::strings;
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, HEADER_TEXT, MUTED_TEXT, POPUP_BORDER, PRIMARY_BLUE, STATUS_ERROR,
};

const DIALOG_WIDTH: u16 = 64;

/// `submitting` greys out the confirm button while a save is in flight.
pub fn render_form_dialog(
    frame: &mut Frame,
    area: Rect,
    state: &FormDialogState,
    submitting: bool,
) {
    let FormDialogState::Visible { form, focused, .. } = state else {
        return;
    };

    let mut lines = Vec::new();
    if let Some(id) = &form.id {
        lines.push(Line::from(Span::styled(
            format!(" {}", strings::COLUMN_ID),
            Style::default().fg(MUTED_TEXT),
        )));
        lines.push(Line::from(Span::styled(
            format!("   {}", id),
            Style::default().fg(MUTED_TEXT),
        )));
        lines.push(Line::from(""));
    }

    for field in FormField::ALL {
        let is_focused = field == *focused;
        let marker = if is_focused { "▸" } else { " " };
        let mut label = vec![
            Span::styled(format!("{} ", marker), Style::default().fg(PRIMARY_BLUE)),
            Span::styled("* ", Style::default().fg(STATUS_ERROR)),
            Span::styled(field.label(), Style::default().fg(HEADER_TEXT)),
        ];
        if field == FormField::Address {
            label.push(Span::styled(
                format!("  ({}/{})", form.address.chars().count(), ADDRESS_MAX_CHARS),
                Style::default().fg(MUTED_TEXT),
            ));
        }
        lines.push(Line::from(label));

        let value = form.value(field);
        let value_style = if is_focused {
            Style::default().fg(HEADER_TEXT).bg(ACTIVE_HIGHLIGHT)
        } else {
            Style::default().fg(HEADER_TEXT)
        };
        let value_line = if value.is_empty() {
            Span::styled(
                format!("   {}", field.placeholder()),
                value_style.fg(MUTED_TEXT),
            )
        } else {
            Span::styled(format!("   {}", value), value_style)
        };
        lines.push(Line::from(value_line));

        match state.error_for(field) {
            Some(error) => lines.push(Line::from(Span::styled(
                format!("   {}", error),
                Style::default().fg(STATUS_ERROR),
            ))),
            None => lines.push(Line::from("")),
        }
    }

    let ok_label = if submitting {
        format!(" ⠿ {} ", ok_text(form.is_edit()))
    } else {
        format!(" {} ", ok_text(form.is_edit()))
    };
    let ok_style = if submitting {
        Style::default().fg(MUTED_TEXT).bg(ACTIVE_HIGHLIGHT)
    } else {
        Style::default()
            .fg(HEADER_TEXT)
            .bg(PRIMARY_BLUE)
            .add_modifier(Modifier::BOLD)
    };
    lines.push(Line::from(vec![
        Span::raw("   "),
        Span::styled(format!(" Esc {} ", strings::CANCEL), Style::default().fg(HEADER_TEXT)),
        Span::raw("   "),
        Span::styled(format!("Enter{}", ok_label), ok_style),
    ]));

    let title = if form.is_edit() {
        strings::MODAL_EDIT_TITLE
    } else {
        strings::MODAL_CREATE_TITLE
    };
    let height = lines.len().saturating_add(2) as u16;
    let dialog = centered_rect_by_size(area, DIALOG_WIDTH, height);

    frame.render_widget(Clear, dialog);
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", title),
            Style::default().fg(PRIMARY_BLUE),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        dialog,
    );
}

fn ok_text(edit: bool) -> &'static str {
    if edit {
        strings::MODAL_EDIT_OK
    } else {
        strings::MODAL_CREATE_OK
    }
}
