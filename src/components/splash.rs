//! Splash screen component
//!
//! Shows a double helix and the dashboard title briefly before the
//! dashboard appears.

use crate::action::Action;
use crate::component::Component;
use crate::components::about_dialog::{TAGLINE, TITLE};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};

const HELIX: [&str; 12] = [
    "  A=====T  ",
    "   C===G   ",
    "    T=A    ",
    "     ||    ",
    "    G=C    ",
    "   A===T   ",
    "  T=====A  ",
    "   G===C   ",
    "    C=G    ",
    "     ||    ",
    "    A=T    ",
    "   T===A   ",
];

/// Splash screen component
pub struct SplashComponent {
    start_time: Option<Instant>,
    /// How long to show the splash before advancing
    duration: Duration,
}

impl Default for SplashComponent {
    fn default() -> Self {
        Self::new(Duration::from_millis(1500))
    }
}

impl SplashComponent {
    pub fn new(duration: Duration) -> Self {
        Self {
            start_time: None,
            duration,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.start_time
            .map(|t| t.elapsed() >= self.duration)
            .unwrap_or(false)
    }

    fn base_color(c: char) -> Color {
        match c {
            'A' => Color::LightGreen,
            'T' => Color::LightRed,
            'C' => Color::LightBlue,
            'G' => Color::LightYellow,
            _ => Color::DarkGray,
        }
    }
}

impl Component for SplashComponent {
    fn init(&mut self) -> Result<()> {
        self.start_time = Some(Instant::now());
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        // Any key skips the splash
        match key.code {
            KeyCode::Char('q') => Ok(Some(Action::ForceQuit)),
            _ => Ok(Some(Action::SplashComplete)),
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        if action == Action::Tick && self.is_complete() {
            return Ok(Some(Action::SplashComplete));
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        frame.render_widget(Clear, area);

        let helix_height = HELIX.len() as u16;
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length((area.height.saturating_sub(helix_height + 4)) / 2),
                Constraint::Length(helix_height),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(area);

        let helix: Vec<Line> = HELIX
            .iter()
            .map(|row| {
                Line::from(
                    row.chars()
                        .map(|c| Span::styled(c.to_string(), Style::default().fg(Self::base_color(c))))
                        .collect::<Vec<_>>(),
                )
            })
            .collect();
        frame.render_widget(Paragraph::new(helix).alignment(Alignment::Center), chunks[1]);

        let title = Paragraph::new(Line::from(Span::styled(
            TITLE,
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(title, chunks[3]);

        let subtitle = Paragraph::new(Line::from(Span::styled(
            TAGLINE,
            Style::default().fg(Color::DarkGray),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(subtitle, chunks[4]);

        Ok(())
    }
}
