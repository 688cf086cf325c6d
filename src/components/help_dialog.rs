//! Help dialog component
//!
//! Displays all keyboard shortcuts available in the dashboard.

use crate::action::Action;
use crate::component::Component;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap},
    Frame,
};

/// Scroll handling shared by the text dialogs. Returns the close action for
/// close keys and `None` for everything else.
pub(crate) fn handle_scroll_key(scroll_offset: &mut usize, key: KeyEvent, close: char) -> Option<Action> {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => Some(Action::CloseModal),
        KeyCode::Char(c) if c == close => Some(Action::CloseModal),
        KeyCode::Char('j') | KeyCode::Down => {
            *scroll_offset = scroll_offset.saturating_add(1);
            None
        }
        KeyCode::Char('k') | KeyCode::Up => {
            *scroll_offset = scroll_offset.saturating_sub(1);
            None
        }
        KeyCode::PageDown => {
            *scroll_offset = scroll_offset.saturating_add(10);
            None
        }
        KeyCode::PageUp => {
            *scroll_offset = scroll_offset.saturating_sub(10);
            None
        }
        _ => None,
    }
}

/// Draw a full-screen text dialog with a scrollbar, clamping the offset
pub(crate) fn draw_scroll_dialog(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    content: Vec<Line<'static>>,
    scroll_offset: &mut usize,
    accent: Color,
) {
    frame.render_widget(Clear, area);

    let margin = 4;
    let dialog_area = Rect::new(
        area.x + margin,
        area.y + margin / 2,
        area.width.saturating_sub(margin * 2),
        area.height.saturating_sub(margin),
    );

    let total = content.len();
    let visible_height = dialog_area.height.saturating_sub(2) as usize;
    let max_scroll = total.saturating_sub(visible_height);
    *scroll_offset = (*scroll_offset).min(max_scroll);

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", title))
                .title_style(Style::default().fg(accent).add_modifier(Modifier::BOLD))
                .border_style(Style::default().fg(accent)),
        )
        .wrap(Wrap { trim: false })
        .scroll((*scroll_offset as u16, 0));

    frame.render_widget(paragraph, dialog_area);

    if total > visible_height {
        let mut scrollbar_state = ScrollbarState::new(max_scroll).position(*scroll_offset);
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("↑"))
                .end_symbol(Some("↓")),
            dialog_area.inner(Margin {
                vertical: 1,
                horizontal: 0,
            }),
            &mut scrollbar_state,
        );
    }
}

/// Help dialog showing all keyboard shortcuts
#[derive(Default)]
pub struct HelpDialog {
    pub scroll_offset: usize,
}

impl Component for HelpDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        Ok(handle_scroll_key(&mut self.scroll_offset, key, '?'))
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        draw_scroll_dialog(
            frame,
            area,
            "Keyboard Shortcuts",
            build_help_content(),
            &mut self.scroll_offset,
            Color::Cyan,
        );
        Ok(())
    }
}

fn build_help_content() -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    let add_section = |lines: &mut Vec<Line<'static>>, title: &str| {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("  {} ", title),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            format!("  {}", "─".repeat(title.len() + 2)),
            Style::default().fg(Color::DarkGray),
        )));
    };

    let add_shortcut = |lines: &mut Vec<Line<'static>>, key: &str, description: &str| {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:12}", key),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::styled(description.to_string(), Style::default().fg(Color::White)),
        ]));
    };

    add_section(&mut lines, "Sidebar");
    add_shortcut(&mut lines, "Tab", "Focus next filter");
    add_shortcut(&mut lines, "Shift+Tab", "Focus previous filter");
    add_shortcut(&mut lines, "j / ↓", "Next option");
    add_shortcut(&mut lines, "k / ↑", "Previous option");

    add_section(&mut lines, "Date Range");
    add_shortcut(&mut lines, "h / ←", "One day earlier");
    add_shortcut(&mut lines, "l / →", "One day later");
    add_shortcut(&mut lines, "H / L", "One week earlier / later");

    add_section(&mut lines, "Regions & Variants");
    add_shortcut(&mut lines, "Space/Enter", "Toggle option");
    add_shortcut(&mut lines, "a", "Select all");
    add_shortcut(&mut lines, "n", "Select none");
    add_shortcut(&mut lines, "r", "Reset every filter");

    add_section(&mut lines, "Data Table");
    add_shortcut(&mut lines, "t", "Show / hide filtered data table");
    add_shortcut(&mut lines, "PgUp / PgDn", "Scroll table");

    add_section(&mut lines, "Dialogs");
    add_shortcut(&mut lines, "i", "About this dashboard");
    add_shortcut(&mut lines, "?", "Show this help");
    add_shortcut(&mut lines, "q", "Quit / Close dialog");
    add_shortcut(&mut lines, "Ctrl+c", "Quit immediately");

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Press q, Esc, or ? to close",
        Style::default().fg(Color::DarkGray),
    )));

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_scroll_keys() {
        let mut dialog = HelpDialog::default();
        let key = |c| KeyEvent::new(c, KeyModifiers::NONE);

        assert_eq!(dialog.handle_key_event(key(KeyCode::Char('j'))).unwrap(), None);
        assert_eq!(dialog.handle_key_event(key(KeyCode::PageDown)).unwrap(), None);
        assert_eq!(dialog.scroll_offset, 11);
        dialog.handle_key_event(key(KeyCode::PageUp)).unwrap();
        dialog.handle_key_event(key(KeyCode::Up)).unwrap();
        dialog.handle_key_event(key(KeyCode::Up)).unwrap();
        assert_eq!(dialog.scroll_offset, 0);

        assert_eq!(dialog.handle_key_event(key(KeyCode::Char('?'))).unwrap(), Some(Action::CloseModal));
    }

    #[test]
    fn test_help_lists_filter_keys() {
        let text: String = build_help_content()
            .iter()
            .flat_map(|l| l.spans.iter().map(|s| s.content.to_string()))
            .collect();
        assert!(text.contains("Select none"));
        assert!(text.contains("filtered data table"));
    }
}
