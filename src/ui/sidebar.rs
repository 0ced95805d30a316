use crate::ui::strings;
use crate::ui::theme::{ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, PRIMARY_BLUE};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Static navigation menu. The employee list is the only page.
pub struct Sidebar;

impl Default for Sidebar {
    fn default() -> Self {
        Self::new()
    }
}

impl Sidebar {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let selected = Style::default()
            .fg(PRIMARY_BLUE)
            .bg(ACTIVE_HIGHLIGHT)
            .add_modifier(Modifier::BOLD);
        let lines = vec![
            Line::from(""),
            Line::from(vec![
                Span::styled(" ▍", Style::default().fg(PRIMARY_BLUE)),
                Span::styled(format!("👥 {}", strings::MENU_EMPLOYEES), selected),
            ]),
            Line::from(vec![
                Span::raw("  "),
                Span::styled(format!("👤 {}", strings::MENU_PROFILE), Style::default().fg(MUTED_TEXT)),
            ]),
        ];

        Paragraph::new(lines).style(Style::default().fg(HEADER_TEXT)).block(
            Block::default()
                .borders(Borders::RIGHT)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
