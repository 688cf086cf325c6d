//! Chart rendering
//!
//! Three charts over the filtered samples: variant frequency bars, a
//! collection timeline, and a genome length box plot. Each one draws its
//! warning instead of a chart when there is no data.

use crate::model::dashboard::{BoxSummary, ChartData, TimelinePoint, VariantCount, NO_TIMELINE_DATA};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Line as CanvasLine, Points, Rectangle},
        Bar, BarChart, BarGroup, Block, Borders, Paragraph, Wrap,
    },
    Frame,
};
use std::collections::BTreeSet;

const CATEGORY_COLORS: [Color; 8] = [
    Color::LightBlue,
    Color::LightRed,
    Color::LightGreen,
    Color::LightMagenta,
    Color::LightYellow,
    Color::LightCyan,
    Color::Rgb(255, 161, 90),
    Color::Rgb(182, 232, 128),
];

/// Stable category -> color mapping, so a variant keeps its color across charts
#[derive(Debug, Clone, Default)]
pub struct Palette {
    names: Vec<String>,
}

impl Palette {
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    pub fn color(&self, name: &str) -> Color {
        match self.names.iter().position(|n| n == name) {
            Some(idx) => CATEGORY_COLORS[idx % CATEGORY_COLORS.len()],
            None => Color::Gray,
        }
    }
}

fn chart_block(title: &str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", title))
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .border_style(Style::default().fg(Color::DarkGray))
}

fn render_warning(frame: &mut Frame, area: Rect, title: &str, message: &str) {
    let paragraph = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("⚠ {}", message),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(chart_block(title));
    frame.render_widget(paragraph, area);
}

// ═══════════════════════════════════════════════════════════════════════════════
// Variant Frequency
// ═══════════════════════════════════════════════════════════════════════════════

pub const VARIANT_BARS_TITLE: &str = "Frequency of Variants (Filtered)";

pub fn render_variant_bars(
    frame: &mut Frame,
    area: Rect,
    data: &ChartData<Vec<VariantCount>>,
    palette: &Palette,
) {
    let counts = match data {
        ChartData::Ready(counts) => counts,
        ChartData::Empty(message) => return render_warning(frame, area, VARIANT_BARS_TITLE, message),
    };

    let bars: Vec<Bar> = counts
        .iter()
        .map(|c| {
            let color = palette.color(&c.variant);
            Bar::default()
                .value(c.count as u64)
                .label(Line::from(c.variant.clone()))
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(Color::Black).bg(color))
        })
        .collect();

    // Share the inner width between bars, leaving a gap after each
    let inner_width = area.width.saturating_sub(2);
    let slots = counts.len().max(1) as u16;
    let bar_width = (inner_width / slots).saturating_sub(2).clamp(3, 12);

    let chart = BarChart::default()
        .block(chart_block(VARIANT_BARS_TITLE))
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(2);

    frame.render_widget(chart, area);
}

// ═══════════════════════════════════════════════════════════════════════════════
// Collection Timeline
// ═══════════════════════════════════════════════════════════════════════════════

pub const TIMELINE_TITLE: &str = "Timeline of Sample Collection (Filtered)";

/// Plot coordinates for the timeline: days since the earliest date on x,
/// variant row on y
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineGeometry {
    pub variants: Vec<String>,
    /// Days between the first and last date, at least 1
    pub span_days: f64,
    pub points: Vec<(f64, f64)>,
}

impl TimelineGeometry {
    pub fn new(points: &[TimelinePoint]) -> Option<Self> {
        let first = points.iter().map(|p| p.date).min()?;
        let last = points.iter().map(|p| p.date).max()?;
        let variants: Vec<String> = points
            .iter()
            .map(|p| p.variant.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let coords = points
            .iter()
            .map(|p| {
                let x = (p.date - first).num_days() as f64;
                let y = variants.iter().position(|v| *v == p.variant).unwrap_or(0) as f64;
                (x, y)
            })
            .collect();

        Some(Self {
            variants,
            span_days: ((last - first).num_days() as f64).max(1.0),
            points: coords,
        })
    }

    /// Left gutter for the variant names
    fn gutter(&self) -> f64 {
        self.span_days * 0.35
    }

    pub fn x_bounds(&self) -> [f64; 2] {
        [-self.gutter(), self.span_days * 1.3]
    }

    pub fn y_bounds(&self) -> [f64; 2] {
        [-1.0, self.variants.len() as f64 - 0.4]
    }
}

pub fn render_timeline(
    frame: &mut Frame,
    area: Rect,
    data: &ChartData<Vec<TimelinePoint>>,
    palette: &Palette,
) {
    let points = match data {
        ChartData::Ready(points) => points,
        ChartData::Empty(message) => return render_warning(frame, area, TIMELINE_TITLE, message),
    };
    let Some(geometry) = TimelineGeometry::new(points) else {
        return render_warning(frame, area, TIMELINE_TITLE, NO_TIMELINE_DATA);
    };

    let first_date = points.iter().map(|p| p.date).min();
    let last_date = points.iter().map(|p| p.date).max();

    // Legend of region colors in the title
    let regions: BTreeSet<&str> = points.iter().map(|p| p.region.as_str()).collect();
    let mut title = vec![Span::styled(
        format!(" {} ", TIMELINE_TITLE),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )];
    for region in &regions {
        title.push(Span::styled(
            format!("● {} ", region),
            Style::default().fg(palette.color(region)),
        ));
    }

    let [x_min, _] = geometry.x_bounds();
    let span = geometry.span_days;

    let canvas = Canvas::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Line::from(title))
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .marker(Marker::Braille)
        .x_bounds(geometry.x_bounds())
        .y_bounds(geometry.y_bounds())
        .paint(|ctx| {
            // Axes
            ctx.draw(&CanvasLine::new(0.0, -0.5, span, -0.5, Color::DarkGray));
            ctx.draw(&CanvasLine::new(
                0.0,
                -0.5,
                0.0,
                geometry.variants.len() as f64 - 0.5,
                Color::DarkGray,
            ));

            for (row, variant) in geometry.variants.iter().enumerate() {
                ctx.print(
                    x_min,
                    row as f64,
                    Span::styled(variant.clone(), Style::default().fg(Color::White)),
                );
            }

            if let (Some(first), Some(last)) = (first_date, last_date) {
                ctx.print(
                    0.0,
                    -1.0,
                    Span::styled(first.format("%Y-%m-%d").to_string(), Style::default().fg(Color::DarkGray)),
                );
                if last != first {
                    ctx.print(
                        span,
                        -1.0,
                        Span::styled(last.format("%Y-%m-%d").to_string(), Style::default().fg(Color::DarkGray)),
                    );
                }
            }

            ctx.layer();

            for (point, &(x, y)) in points.iter().zip(&geometry.points) {
                let color = palette.color(&point.region);
                ctx.draw(&Points {
                    coords: &[(x, y)],
                    color,
                });
                ctx.print(
                    x,
                    y,
                    Line::from(vec![
                        Span::styled("●", Style::default().fg(color)),
                        Span::styled(point.sample_id.clone(), Style::default().fg(Color::Gray)),
                    ]),
                );
            }
        });

    frame.render_widget(canvas, area);
}

// ═══════════════════════════════════════════════════════════════════════════════
// Genome Length Box Plot
// ═══════════════════════════════════════════════════════════════════════════════

pub const BOX_PLOT_TITLE: &str = "Genome Length Distribution (Filtered)";

/// Value range covered by the boxes, padded; never zero-width
fn box_plot_range(boxes: &[BoxSummary]) -> (f64, f64, f64) {
    let low = boxes.iter().map(|b| b.min).fold(f64::INFINITY, f64::min);
    let high = boxes.iter().map(|b| b.max).fold(f64::NEG_INFINITY, f64::max);
    let pad = if high > low { (high - low) * 0.15 } else { 10.0 };
    (low, high, pad)
}

pub fn render_genome_box_plot(
    frame: &mut Frame,
    area: Rect,
    data: &ChartData<Vec<BoxSummary>>,
    palette: &Palette,
) {
    let boxes = match data {
        ChartData::Ready(boxes) => boxes,
        ChartData::Empty(message) => return render_warning(frame, area, BOX_PLOT_TITLE, message),
    };

    let (low, high, pad) = box_plot_range(boxes);
    let slots = boxes.len() as f64;
    let gutter = (slots + 1.0) * 0.2;
    let half_width = 0.2;
    let label_y = low - pad * 1.5;

    let canvas = Canvas::default()
        .block(chart_block(BOX_PLOT_TITLE))
        .marker(Marker::Braille)
        .x_bounds([-gutter, slots + 0.5])
        .y_bounds([low - pad * 2.0, high + pad])
        .paint(|ctx| {
            ctx.draw(&CanvasLine::new(0.0, low - pad, 0.0, high + pad, Color::DarkGray));
            ctx.print(
                -gutter,
                high,
                Span::styled(format!("{:.0}", high), Style::default().fg(Color::DarkGray)),
            );
            if high > low {
                ctx.print(
                    -gutter,
                    low,
                    Span::styled(format!("{:.0}", low), Style::default().fg(Color::DarkGray)),
                );
            }

            for (idx, summary) in boxes.iter().enumerate() {
                let color = palette.color(&summary.variant);
                let center = idx as f64 + 0.5;
                let (left, right) = (center - half_width, center + half_width);

                ctx.draw(&Rectangle {
                    x: left,
                    y: summary.q1,
                    width: half_width * 2.0,
                    height: summary.iqr(),
                    color,
                });
                ctx.draw(&CanvasLine::new(left, summary.median, right, summary.median, Color::White));

                // Whiskers with caps
                ctx.draw(&CanvasLine::new(center, summary.lower_whisker, center, summary.q1, color));
                ctx.draw(&CanvasLine::new(center, summary.q3, center, summary.upper_whisker, color));
                let cap = half_width / 2.0;
                for y in [summary.lower_whisker, summary.upper_whisker] {
                    ctx.draw(&CanvasLine::new(center - cap, y, center + cap, y, color));
                }

                let outliers: Vec<(f64, f64)> = summary.outliers.iter().map(|v| (center, *v)).collect();
                ctx.draw(&Points {
                    coords: &outliers,
                    color,
                });

                ctx.print(
                    left,
                    label_y,
                    Span::styled(
                        summary.variant.clone(),
                        Style::default().fg(color).add_modifier(Modifier::BOLD),
                    ),
                );
                ctx.print(
                    right + 0.05,
                    summary.median,
                    Span::styled(format!("{:.0}", summary.median), Style::default().fg(Color::Gray)),
                );
            }
        });

    frame.render_widget(canvas, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::dashboard::{DashboardView, NO_BOX_PLOT_DATA, NO_VARIANT_DATA};
    use crate::model::filter::FilterCriteria;
    use crate::model::sample::tests::date;
    use crate::model::sample::SampleTable;
    use crate::components::buffer_text;
    use ratatui::{backend::TestBackend, Terminal};

    fn view(edit: impl FnOnce(&mut FilterCriteria)) -> (DashboardView, SampleTable) {
        let table = SampleTable::builtin().unwrap();
        let mut criteria = FilterCriteria::select_all(&table);
        edit(&mut criteria);
        (DashboardView::build(&criteria.apply(&table)), table)
    }

    fn render(view: &DashboardView, table: &SampleTable) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 45)).unwrap();
        let variants = Palette::new(table.variants());
        let regions = Palette::new(table.regions());
        terminal
            .draw(|frame| {
                render_variant_bars(frame, Rect::new(0, 0, 60, 15), &view.variant_counts, &variants);
                render_timeline(frame, Rect::new(60, 0, 60, 15), &view.timeline, &regions);
                render_genome_box_plot(frame, Rect::new(0, 15, 120, 30), &view.genome_lengths, &variants);
            })
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_palette_is_stable() {
        let palette = Palette::new(vec!["Delta".into(), "Gamma".into()]);
        assert_eq!(palette.color("Gamma"), CATEGORY_COLORS[1]);
        assert_eq!(palette.color("Gamma"), palette.color("Gamma"));
        assert_eq!(palette.color("Unknown"), Color::Gray);
    }

    #[test]
    fn test_charts_render_labels() {
        let (view, table) = view(|_| {});
        let text = render(&view, &table);

        assert!(text.contains(VARIANT_BARS_TITLE));
        assert!(text.contains("Omicron"));
        assert!(text.contains("BR001"));
        assert!(text.contains("2021-01-15"));
        assert!(text.contains(BOX_PLOT_TITLE));
        assert!(!text.contains(NO_VARIANT_DATA));
    }

    #[test]
    fn test_empty_view_shows_warnings() {
        let (view, table) = view(|c| {
            c.start = date("2021-03-12");
            c.end = date("2021-01-15");
        });
        let text = render(&view, &table);

        assert!(text.contains(NO_VARIANT_DATA));
        assert!(text.contains(NO_TIMELINE_DATA));
        assert!(text.contains(NO_BOX_PLOT_DATA));
    }

    #[test]
    fn test_timeline_geometry() {
        let (view, _) = view(|c| c.regions = ["Brazil".to_string()].into_iter().collect());
        let geometry = TimelineGeometry::new(view.timeline.ready().unwrap()).unwrap();

        assert_eq!(geometry.variants, vec!["Delta", "Gamma"]);
        // BR001 is the earliest Brazil sample, BR003 the latest (49 days later)
        assert_eq!(geometry.points[0], (0.0, 1.0));
        assert_eq!(geometry.points[2], (49.0, 0.0));
        assert_eq!(geometry.span_days, 49.0);
    }

    #[test]
    fn test_single_day_timeline_has_width() {
        let (view, _) = view(|c| {
            c.start = date("2021-03-12");
            c.end = date("2021-03-12");
        });
        let geometry = TimelineGeometry::new(view.timeline.ready().unwrap()).unwrap();
        assert_eq!(geometry.span_days, 1.0);
        assert!(geometry.x_bounds()[0] < 0.0);
    }

    #[test]
    fn test_box_plot_range_never_flat() {
        let summary = BoxSummary::from_values("Gamma", &[29903.0, 29903.0]).unwrap();
        let (low, high, pad) = box_plot_range(&[summary]);
        assert_eq!(low, high);
        assert!(pad > 0.0);
    }
}
