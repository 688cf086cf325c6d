//! Filter sidebar component
//!
//! Owns the editable filter criteria: a date range bounded to the dataset's
//! dates and two multi-select lists. Every edit that changes the criteria
//! answers with `Action::FiltersChanged`.

use crate::action::{Action, DateBound};
use crate::component::Component;
use crate::model::filter::FilterCriteria;
use crate::model::sample::SampleTable;
use crate::model::ui::SidebarFocus;
use anyhow::Result;
use chrono::{Days, NaiveDate};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use std::collections::BTreeSet;

/// One multi-select control
#[derive(Debug, Clone)]
struct MultiSelect {
    options: Vec<String>,
    cursor: usize,
    list_state: ListState,
}

impl MultiSelect {
    fn new(options: Vec<String>) -> Self {
        let mut list_state = ListState::default();
        list_state.select(if options.is_empty() { None } else { Some(0) });
        Self {
            options,
            cursor: 0,
            list_state,
        }
    }

    fn move_cursor(&mut self, delta: isize) {
        if self.options.is_empty() {
            return;
        }
        let max = self.options.len() - 1;
        self.cursor = self.cursor.saturating_add_signed(delta).min(max);
        self.list_state.select(Some(self.cursor));
    }

    fn current(&self) -> Option<&String> {
        self.options.get(self.cursor)
    }
}

/// Filter sidebar
pub struct SidebarComponent {
    pub focus: SidebarFocus,
    criteria: FilterCriteria,
    defaults: FilterCriteria,
    /// Earliest and latest selectable dates
    bounds: (NaiveDate, NaiveDate),
    regions: MultiSelect,
    variants: MultiSelect,
}

impl SidebarComponent {
    pub fn new(table: &SampleTable) -> Self {
        let defaults = FilterCriteria::select_all(table);
        Self {
            focus: SidebarFocus::default(),
            criteria: defaults.clone(),
            bounds: (defaults.start, defaults.end),
            defaults,
            regions: MultiSelect::new(table.regions()),
            variants: MultiSelect::new(table.variants()),
        }
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    fn focused_list(&mut self) -> Option<(&mut MultiSelect, &mut BTreeSet<String>)> {
        match self.focus {
            SidebarFocus::Regions => Some((&mut self.regions, &mut self.criteria.regions)),
            SidebarFocus::Variants => Some((&mut self.variants, &mut self.criteria.variants)),
            SidebarFocus::StartDate | SidebarFocus::EndDate => None,
        }
    }

    fn focused_bound(&self) -> Option<DateBound> {
        match self.focus {
            SidebarFocus::StartDate => Some(DateBound::Start),
            SidebarFocus::EndDate => Some(DateBound::End),
            _ => None,
        }
    }

    /// Returns whether the criteria changed
    fn toggle_option(&mut self) -> bool {
        let Some((list, selected)) = self.focused_list() else {
            return false;
        };
        let Some(option) = list.current().cloned() else {
            return false;
        };
        if !selected.remove(&option) {
            selected.insert(option);
        }
        true
    }

    fn select_all_options(&mut self) -> bool {
        let Some((list, selected)) = self.focused_list() else {
            return false;
        };
        let all: BTreeSet<String> = list.options.iter().cloned().collect();
        if *selected == all {
            return false;
        }
        *selected = all;
        true
    }

    fn clear_options(&mut self) -> bool {
        let Some((_, selected)) = self.focused_list() else {
            return false;
        };
        if selected.is_empty() {
            return false;
        }
        selected.clear();
        true
    }

    /// Move a bound by `days`, clamped to the dataset's dates
    fn shift_date(&mut self, bound: DateBound, days: i64) -> bool {
        let date = match bound {
            DateBound::Start => &mut self.criteria.start,
            DateBound::End => &mut self.criteria.end,
        };
        let moved = if days >= 0 {
            date.checked_add_days(Days::new(days as u64))
        } else {
            date.checked_sub_days(Days::new(days.unsigned_abs()))
        };
        let (min, max) = self.bounds;
        let clamped = moved.unwrap_or(*date).clamp(min, max);
        if clamped == *date {
            return false;
        }
        *date = clamped;
        true
    }

    fn reset(&mut self) -> bool {
        if self.criteria == self.defaults {
            return false;
        }
        self.criteria = self.defaults.clone();
        true
    }

    fn border_style(&self, field: SidebarFocus) -> Style {
        let focused = match field {
            SidebarFocus::StartDate | SidebarFocus::EndDate => self.focus.is_date(),
            other => self.focus == other,
        };
        if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    }

    fn render_dates(&self, frame: &mut Frame, area: Rect) {
        let field = |label: &str, value: NaiveDate, focus: SidebarFocus| {
            let selected = self.focus == focus;
            let marker = if selected { "▶ " } else { "  " };
            let value_style = if selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            Line::from(vec![
                Span::styled(marker, Style::default().fg(Color::Cyan)),
                Span::styled(format!("{:6}", label), Style::default().fg(Color::DarkGray)),
                Span::styled(value.format("%Y-%m-%d").to_string(), value_style),
            ])
        };

        let mut lines = vec![
            field("From", self.criteria.start, SidebarFocus::StartDate),
            field("To", self.criteria.end, SidebarFocus::EndDate),
        ];
        if self.criteria.is_inverted() {
            lines.push(Line::from(Span::styled(
                "  start is after end",
                Style::default().fg(Color::Yellow),
            )));
        }

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Date range ")
                .border_style(self.border_style(SidebarFocus::StartDate)),
        );
        frame.render_widget(paragraph, area);
    }

    fn render_list(&mut self, frame: &mut Frame, area: Rect, field: SidebarFocus) {
        let border_style = self.border_style(field);
        let focused = self.focus == field;
        let (title, list, selected) = match field {
            SidebarFocus::Regions => ("Select Regions", &mut self.regions, &self.criteria.regions),
            _ => ("Select Variants", &mut self.variants, &self.criteria.variants),
        };

        let items: Vec<ListItem> = list
            .options
            .iter()
            .map(|option| {
                let checked = selected.contains(option);
                let (mark, style) = if checked {
                    ("[x] ", Style::default().fg(Color::Green))
                } else {
                    ("[ ] ", Style::default().fg(Color::DarkGray))
                };
                ListItem::new(Line::from(vec![
                    Span::styled(mark, style),
                    Span::styled(option.clone(), Style::default().fg(Color::White)),
                ]))
            })
            .collect();

        let highlight = if focused {
            Style::default()
                .bg(Color::Blue)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        let widget = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" {} ({}/{}) ", title, selected.len(), list.options.len()))
                    .border_style(border_style),
            )
            .highlight_style(highlight)
            .highlight_symbol(if focused { "▶ " } else { "  " });

        frame.render_stateful_widget(widget, area, &mut list.list_state);
    }
}

impl Component for SidebarComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let bound = self.focused_bound();
        let action = match key.code {
            KeyCode::Tab => Some(Action::FocusNext),
            KeyCode::BackTab => Some(Action::FocusPrev),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::CursorDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::CursorUp),
            KeyCode::Char(' ') | KeyCode::Enter => Some(Action::ToggleOption),
            KeyCode::Char('h') | KeyCode::Left => bound.map(|b| Action::ShiftDate(b, -1)),
            KeyCode::Char('l') | KeyCode::Right => bound.map(|b| Action::ShiftDate(b, 1)),
            KeyCode::Char('H') => bound.map(|b| Action::ShiftDate(b, -7)),
            KeyCode::Char('L') => bound.map(|b| Action::ShiftDate(b, 7)),
            KeyCode::Char('a') => Some(Action::SelectAllOptions),
            KeyCode::Char('n') => Some(Action::ClearOptions),
            KeyCode::Char('r') => Some(Action::ResetFilters),
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        let changed = match action {
            Action::FocusNext => {
                self.focus = self.focus.next();
                false
            }
            Action::FocusPrev => {
                self.focus = self.focus.previous();
                false
            }
            Action::CursorDown => {
                if let Some((list, _)) = self.focused_list() {
                    list.move_cursor(1);
                }
                false
            }
            Action::CursorUp => {
                if let Some((list, _)) = self.focused_list() {
                    list.move_cursor(-1);
                }
                false
            }
            Action::ToggleOption => self.toggle_option(),
            Action::SelectAllOptions => self.select_all_options(),
            Action::ClearOptions => self.clear_options(),
            Action::ShiftDate(bound, days) => self.shift_date(bound, days),
            Action::ResetFilters => self.reset(),
            _ => false,
        };
        Ok(changed.then_some(Action::FiltersChanged))
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let region_height = self.regions.options.len() as u16 + 2;
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5),
                Constraint::Length(region_height),
                Constraint::Min(3),
            ])
            .split(area);

        self.render_dates(frame, chunks[0]);
        self.render_list(frame, chunks[1], SidebarFocus::Regions);
        self.render_list(frame, chunks[2], SidebarFocus::Variants);
        Ok(())
    }
}
