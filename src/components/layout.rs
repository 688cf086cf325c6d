//! Layout calculations for the UI

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Dashboard screen areas
pub struct DashboardLayout {
    pub header: Rect,
    pub sidebar: Rect,
    pub table: Option<Rect>,
    pub variant_bars: Rect,
    pub timeline: Rect,
    pub box_plot: Rect,
    pub help: Rect,
}

/// Calculate centered popup area
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let popup_x = area.x + (area.width.saturating_sub(width)) / 2;
    let popup_y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect::new(
        popup_x,
        popup_y,
        width.min(area.width),
        height.min(area.height),
    )
}

/// Calculate the dashboard layout
///
/// `table_rows` is the number of data rows the expanded table wants to show;
/// `None` when the table is collapsed.
pub fn calculate_dashboard_layout(area: Rect, table_rows: Option<usize>) -> DashboardLayout {
    // header + content + help bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    // Sidebar on the left, charts on the right
    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(22), Constraint::Percentage(78)])
        .split(main_chunks[1]);

    let (table_area, charts_area) = match table_rows {
        Some(rows) => {
            // header, separator, rows, footer, borders
            let height = (rows as u16 + 6).min(14);
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(height), Constraint::Min(0)])
                .split(body[1]);
            (Some(chunks[0]), chunks[1])
        }
        None => (None, body[1]),
    };

    let chart_rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(charts_area);

    let top_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(chart_rows[0]);

    DashboardLayout {
        header: main_chunks[0],
        sidebar: body[0],
        table: table_area,
        variant_bars: top_row[0],
        timeline: top_row[1],
        box_plot: chart_rows[1],
        help: main_chunks[2],
    }
}
