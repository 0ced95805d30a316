use crate::ui::app::Focus;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, PRIMARY_BLUE};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const SEPARATOR: &str = " │ ";

/// Key hints for whichever layer owns the keyboard, with the version on the
/// right.
pub struct Footer {
    focus: Focus,
}

impl Footer {
    pub fn new(focus: Focus) -> Self {
        Self { focus }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let version = format!("v{} ", VERSION);
        let inner_width = area.width.saturating_sub(2) as usize;
        let budget = inner_width.saturating_sub(version.chars().count() + 1);

        let key_style = Style::default().fg(PRIMARY_BLUE).add_modifier(Modifier::BOLD);
        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let mut spans = vec![Span::raw(" ")];
        let mut used = 1;
        for (index, (key, action)) in hints(self.focus).iter().enumerate() {
            let separator = if index == 0 { "" } else { SEPARATOR };
            let width = separator.chars().count() + key.chars().count() + 2 + action.chars().count();
            // Whole hints only; the tail is dropped on narrow terminals.
            if used + width > budget {
                break;
            }
            used += width;
            spans.push(Span::styled(separator, Style::default().fg(MUTED_TEXT)));
            spans.push(Span::styled(*key, key_style));
            spans.push(Span::styled(format!(": {}", action), text_style));
        }

        spans.push(Span::raw(" ".repeat(inner_width.saturating_sub(used + version.chars().count()))));
        spans.push(Span::styled(version, text_style));

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

/// `(key, action)` pairs shown for `focus`, most important first.
pub fn hints(focus: Focus) -> &'static [(&'static str, &'static str)] {
    match focus {
        Focus::Table => &[
            ("↑↓", "Select"),
            ("←→", "Page"),
            ("n", "New"),
            ("e", "Edit"),
            ("d", "Delete"),
            ("/", "Search"),
            ("c", "Clear"),
            ("r", "Reload"),
            ("q", "Quit"),
        ],
        Focus::Search => &[
            ("Tab", "Field"),
            ("Enter", "Search"),
            ("Esc", "Back"),
        ],
        Focus::Form => &[
            ("Tab", "Next field"),
            ("Shift+Tab", "Previous"),
            ("Enter", "Save"),
            ("Esc", "Cancel"),
        ],
        Focus::Confirm => &[("←→", "Choose"), ("Enter", "Confirm"), ("Esc", "Cancel")],
    }
}
