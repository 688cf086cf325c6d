//! About dialog - the dashboard's introduction and next steps

use crate::action::Action;
use crate::component::Component;
use crate::components::help_dialog::{draw_scroll_dialog, handle_scroll_key};
use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};

pub const TITLE: &str = "Advanced Genomics Dashboard";

/// One-line summary shown in the header
pub const TAGLINE: &str =
    "Interactive filters (date range, region, variant) over a fictitious genomic sample table";

#[derive(Default)]
pub struct AboutDialog {
    pub scroll_offset: usize,
}

impl Component for AboutDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        Ok(handle_scroll_key(&mut self.scroll_offset, key, 'i'))
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        draw_scroll_dialog(
            frame,
            area,
            TITLE,
            build_about_content(),
            &mut self.scroll_offset,
            Color::Magenta,
        );
        Ok(())
    }
}

fn build_about_content() -> Vec<Line<'static>> {
    let heading = |text: &str| {
        Line::from(Span::styled(
            format!("  {}", text),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ))
    };
    let bullet = |text: &str| {
        Line::from(vec![
            Span::styled("    • ", Style::default().fg(Color::Cyan)),
            Span::raw(text.to_string()),
        ])
    };
    let step = |n: usize, text: &str| {
        Line::from(vec![
            Span::styled(format!("  {}. ", n), Style::default().fg(Color::Cyan)),
            Span::raw(text.to_string()),
        ])
    };

    vec![
        Line::from(""),
        Line::from(Span::raw(
            "  An enhanced genomics dashboard for the terminal, featuring:",
        )),
        bullet("interactive filters (date range, region, variant) in the sidebar"),
        bullet("multiple chart types (bar chart, timeline scatter, box plot)"),
        bullet("a structure ready for real data integrations"),
        Line::from(""),
        Line::from(Span::styled(
            "  The data is fictitious: eight samples compiled into the binary.",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        heading("Conclusions & Next Steps"),
        Line::from(""),
        step(1, "Filter by dates, regions and variants, then compare the charts."),
        step(2, "Use real data: swap the built-in table for a CSV file or a remote database."),
        step(3, "Add phylogenetic trees or maps to dig deeper into genomic insights."),
        Line::from(""),
        Line::from(Span::styled(
            "  Press q, Esc, or i to close",
            Style::default().fg(Color::DarkGray),
        )),
    ]
}
