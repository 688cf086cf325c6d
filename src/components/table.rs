//! Filtered data table
//!
//! The collapsible raw view of the filtered samples.

use crate::action::Action;
use crate::component::Component;
use crate::model::sample::Sample;
use anyhow::Result;
use ratatui::{
    layout::{Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};
use unicode_width::UnicodeWidthStr;

const MAX_COLUMN_WIDTH: usize = 30;
const PAGE: usize = 5;

/// Table component for the filtered samples
pub struct TableComponent {
    /// Whether the table is expanded
    pub expanded: bool,
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    scroll: usize,
}

impl Default for TableComponent {
    fn default() -> Self {
        Self::new(false)
    }
}

impl TableComponent {
    pub fn new(expanded: bool) -> Self {
        Self {
            expanded,
            headers: Sample::column_names(),
            rows: Vec::new(),
            scroll: 0,
        }
    }

    /// Replace the rows; keeps the scroll offset when it is still valid
    pub fn set_samples(&mut self, samples: &[Sample]) {
        self.rows = samples.iter().map(Sample::cells).collect();
        self.scroll = self.scroll.min(self.rows.len().saturating_sub(1));
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Pad `text` to `width` display columns, truncating with an ellipsis
    fn fit(text: &str, width: usize) -> String {
        let text_width = text.width();
        if text_width <= width {
            return format!("{}{}", text, " ".repeat(width - text_width));
        }
        let mut out = String::new();
        let mut used = 0;
        for c in text.chars() {
            let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
            if used + w + 1 > width {
                break;
            }
            out.push(c);
            used += w;
        }
        out.push('…');
        used += 1;
        out.push_str(&" ".repeat(width.saturating_sub(used)));
        out
    }

    /// Build table lines from headers and rows
    pub fn build_table_lines(headers: &[String], rows: &[Vec<String>]) -> Vec<Line<'static>> {
        let mut col_widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();
        for row in rows {
            for (i, cell) in row.iter().enumerate() {
                if let Some(w) = col_widths.get_mut(i) {
                    *w = (*w).max(cell.width());
                }
            }
        }
        for width in &mut col_widths {
            *width = (*width).min(MAX_COLUMN_WIDTH);
        }

        // Cells are joined like the separator, with no trailing divider
        let render_row = |cells: &[String], style: Style| -> Line<'static> {
            let mut spans = Vec::new();
            for (i, (cell, width)) in cells.iter().zip(&col_widths).enumerate() {
                if i > 0 {
                    spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
                }
                spans.push(Span::styled(Self::fit(cell, *width), style));
            }
            Line::from(spans)
        };

        let mut lines = vec![render_row(
            headers,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )];

        let separator: String = col_widths
            .iter()
            .map(|w| "─".repeat(*w))
            .collect::<Vec<_>>()
            .join("─┼─");
        lines.push(Line::from(Span::styled(
            separator,
            Style::default().fg(Color::DarkGray),
        )));

        if rows.is_empty() {
            lines.push(Line::from(Span::styled(
                "No samples match the current filters",
                Style::default().fg(Color::Yellow),
            )));
        }
        for row in rows {
            lines.push(render_row(row, Style::default().fg(Color::White)));
        }

        lines
    }
}

impl Component for TableComponent {
    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        let max_scroll = self.rows.len().saturating_sub(1);
        match action {
            Action::ToggleTable => {
                self.expanded = !self.expanded;
            }
            Action::TablePageDown => {
                self.scroll = (self.scroll + PAGE).min(max_scroll);
            }
            Action::TablePageUp => {
                self.scroll = self.scroll.saturating_sub(PAGE);
            }
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let mut content = Self::build_table_lines(&self.headers, &self.rows);
        let visible_height = area.height.saturating_sub(2) as usize;

        // Header and separator stay put; only data rows scroll
        let body: Vec<Line> = content.split_off(2.min(content.len()));
        content.extend(body.into_iter().skip(self.scroll));

        let paragraph = Paragraph::new(content).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Filtered data table ({} rows) ", self.rows.len()))
                .title_style(Style::default().fg(Color::Cyan))
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(paragraph, area);

        let total = self.rows.len() + 2;
        if total > visible_height {
            let mut scrollbar_state =
                ScrollbarState::new(self.rows.len().saturating_sub(1)).position(self.scroll);
            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .begin_symbol(Some("↑"))
                    .end_symbol(Some("↓")),
                area.inner(Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                &mut scrollbar_state,
            );
        }

        Ok(())
    }
}
