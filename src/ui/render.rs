use crate::ui::app::App;
use crate::ui::confirm::render_confirm_dialog;
use crate::ui::employee_form::render_form_dialog;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{layout_regions, split_body, split_content};
use crate::ui::notice::render_notices;
use crate::ui::search::render_search_panel;
use crate::ui::sidebar::Sidebar;
use crate::ui::strings;
use crate::ui::table::render_table;
use crate::ui::theme::{HEADER_TEXT, MUTED_TEXT, PRIMARY_BLUE, STATUS_ERROR};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(), header);

    let (sidebar, content) = split_body(body);
    if let Some(sidebar) = sidebar {
        frame.render_widget(Sidebar::new().widget(), sidebar);
    }
    draw_content(frame, content, app);

    frame.render_widget(Footer::new(app.focus()).widget(footer), footer);

    // Overlays, bottom to top
    render_form_dialog(frame, area, app.form_dialog(), app.is_submitting());
    render_confirm_dialog(frame, area, app.confirm_dialog());
    render_notices(frame, body, app.notices());
}

fn draw_content(frame: &mut Frame, area: Rect, app: &App) {
    let (search, results, table) = split_content(area);
    render_search_panel(frame, search, app.search());

    let rows = app.visible_employees();
    draw_results_bar(frame, results, rows.len(), app.last_command_error());

    let state = app.employee_state();
    render_table(
        frame,
        table,
        &rows,
        app.table(),
        state.loading,
        state.error.as_deref(),
        app.animation_tick(),
    );
}

/// "ผลลัพธ์การค้นหา N รายการ" on the left, the add button on the right.
fn draw_results_bar(frame: &mut Frame, area: Rect, count: usize, command_error: Option<&str>) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(22)])
        .split(area);

    let mut spans = vec![
        Span::styled(format!(" {} ", strings::RESULTS_PREFIX), Style::default().fg(HEADER_TEXT)),
        Span::styled(
            count.to_string(),
            Style::default().fg(PRIMARY_BLUE).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" {}", strings::RESULTS_SUFFIX), Style::default().fg(HEADER_TEXT)),
    ];
    if let Some(error) = command_error {
        spans.push(Span::styled(format!("  {}", error), Style::default().fg(STATUS_ERROR)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), columns[0]);

    let button = Line::from(vec![
        Span::styled("[n] ", Style::default().fg(MUTED_TEXT)),
        Span::styled(
            format!("+ {}", strings::ADD_EMPLOYEE),
            Style::default().fg(PRIMARY_BLUE).add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(button), columns[1]);
}
