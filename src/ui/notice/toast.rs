use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use super::state::{NoticeKind, NoticeState};
use crate::ui::theme::{HEADER_TEXT, STATUS_ERROR, STATUS_OK};

const TOAST_HEIGHT: u16 = 3;

/// Stack notices at the top center of `area`, newest at the bottom.
pub fn render_notices(frame: &mut Frame, area: Rect, state: &NoticeState) {
    let mut y = area.y;
    for notice in &state.notices {
        if y + TOAST_HEIGHT > area.y + area.height {
            break;
        }
        let (icon, color) = match notice.kind {
            NoticeKind::Success => ("✓", STATUS_OK),
            NoticeKind::Error => ("✗", STATUS_ERROR),
        };
        let line = Line::from(vec![
            Span::styled(format!(" {} ", icon), Style::default().fg(color)),
            Span::styled(notice.text.as_str(), Style::default().fg(HEADER_TEXT)),
            Span::raw(" "),
        ]);
        let width = (line.width() as u16).saturating_add(2).min(area.width);
        let rect = Rect {
            x: area.x + area.width.saturating_sub(width) / 2,
            y,
            width,
            height: TOAST_HEIGHT,
        };
        frame.render_widget(Clear, rect);
        frame.render_widget(
            Paragraph::new(line).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color)),
            ),
            rect,
        );
        y += TOAST_HEIGHT;
    }
}
