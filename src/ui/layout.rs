use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Width of the navigation sidebar in columns.
pub const SIDEBAR_WIDTH: u16 = 24;

/// Header, body and footer bands of the screen.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Sidebar and content columns of the body. The sidebar is dropped on
/// narrow terminals.
pub fn split_body(body: Rect) -> (Option<Rect>, Rect) {
    if body.width < SIDEBAR_WIDTH * 3 {
        return (None, body);
    }
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
        .split(body);
    (Some(columns[0]), columns[1])
}

/// Search card, result bar and table of the content column.
pub fn split_content(content: Rect) -> (Rect, Rect, Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(content);
    (rows[0], rows[1], rows[2])
}

/// A `width` x `height` rect centered in `area`, shrunk to fit.
pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen(width: u16, height: u16) -> Rect {
        Rect {
            x: 0,
            y: 0,
            width,
            height,
        }
    }

    #[test]
    fn regions_cover_the_screen() {
        let (header, body, footer) = layout_regions(screen(100, 30));
        assert_eq!(header.height, 3);
        assert_eq!(footer.height, 3);
        assert_eq!(body.y, 3);
        assert_eq!(body.height, 24);
    }

    #[test]
    fn tiny_screen_does_not_underflow() {
        let (header, body, footer) = layout_regions(screen(10, 2));
        assert_eq!(header.height, 2);
        assert_eq!(body.height, 0);
        assert_eq!(footer.height, 0);
    }

    #[test]
    fn sidebar_hidden_on_narrow_terminal() {
        let (sidebar, content) = split_body(screen(60, 20));
        assert!(sidebar.is_none());
        assert_eq!(content.width, 60);

        let (sidebar, content) = split_body(screen(120, 20));
        assert_eq!(sidebar.map(|r| r.width), Some(SIDEBAR_WIDTH));
        assert_eq!(content.width, 120 - SIDEBAR_WIDTH);
    }

    #[test]
    fn centered_rect_is_clamped_to_area() {
        let rect = centered_rect_by_size(screen(40, 10), 64, 20);
        assert_eq!(rect, screen(40, 10));
        let rect = centered_rect_by_size(screen(100, 30), 50, 10);
        assert_eq!((rect.x, rect.y), (25, 10));
    }
}
