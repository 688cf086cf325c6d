//! Home screen - header, filter sidebar, data table, charts and help bar

use crate::component::Component;
use crate::components::about_dialog::{TAGLINE, TITLE};
use crate::components::charts::{render_genome_box_plot, render_timeline, render_variant_bars, Palette};
use crate::components::{calculate_dashboard_layout, SidebarComponent, TableComponent};
use crate::model::dashboard::DashboardView;
use anyhow::Result;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Context needed for rendering the home screen
pub struct HomeRenderContext<'a> {
    pub view: &'a DashboardView,
    /// Colors keyed by variant
    pub variant_palette: &'a Palette,
    /// Colors keyed by region
    pub region_palette: &'a Palette,
    pub total_samples: usize,
}

/// Draw the home screen
pub fn draw_home_screen(
    frame: &mut Frame,
    area: Rect,
    sidebar: &mut SidebarComponent,
    table: &mut TableComponent,
    ctx: &HomeRenderContext,
) -> Result<()> {
    let table_rows = table.expanded.then(|| table.row_count().max(1));
    let layout = calculate_dashboard_layout(area, table_rows);

    render_header(frame, layout.header, ctx);
    sidebar.draw(frame, layout.sidebar)?;

    if let Some(table_area) = layout.table {
        table.draw(frame, table_area)?;
    }

    render_variant_bars(frame, layout.variant_bars, &ctx.view.variant_counts, ctx.variant_palette);
    render_timeline(frame, layout.timeline, &ctx.view.timeline, ctx.region_palette);
    render_genome_box_plot(frame, layout.box_plot, &ctx.view.genome_lengths, ctx.variant_palette);

    render_help_bar(frame, layout.help, table.expanded);
    Ok(())
}

fn render_header(frame: &mut Frame, area: Rect, ctx: &HomeRenderContext) {
    let count_style = if ctx.view.row_count == 0 {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    };

    let lines = vec![
        Line::from(vec![
            Span::styled(
                format!(" {} ", TITLE),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  {}", TAGLINE), Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(vec![
            Span::styled(
                "Current number of filtered samples: ",
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::styled(ctx.view.row_count.to_string(), count_style),
            Span::styled(
                format!(" of {}", ctx.total_samples),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
    ];

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(paragraph, area);
}

fn render_help_bar(frame: &mut Frame, area: Rect, table_expanded: bool) {
    let key = |k: &'static str, color: Color| {
        Span::styled(k, Style::default().fg(color).add_modifier(Modifier::BOLD))
    };

    let spans = vec![
        key(" q ", Color::Yellow),
        Span::raw("Quit "),
        key(" Tab ", Color::Cyan),
        Span::raw("Next filter "),
        key(" Space ", Color::Green),
        Span::raw("Toggle "),
        key(" h/l ", Color::Cyan),
        Span::raw("Date "),
        key(" a/n ", Color::Cyan),
        Span::raw("All/None "),
        key(" r ", Color::Magenta),
        Span::raw("Reset "),
        key(" t ", Color::Cyan),
        Span::raw(if table_expanded { "Hide table " } else { "Show table " }),
        key(" i ", Color::White),
        Span::raw("About "),
        key(" ? ", Color::White),
        Span::raw("Help"),
    ];

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
