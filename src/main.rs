//! genomics-dashboard - A terminal dashboard for genomic sample metadata
//!
//! This is the main entry point for the genomics-dashboard application.
//! It uses the Component Architecture pattern from ratatui.

mod action;
mod app;
mod component;
mod components;
mod config;
mod logging;
mod model;
mod tui;

use crate::action::Action;
use crate::app::App;
use crate::component::Component;
use crate::config::Config;
use crate::model::SampleTable;
use crate::tui::Tui;
use anyhow::Result;
use crossterm::event::Event;
use tracing::{debug, error, info};

fn main() -> Result<()> {
    let config = Config::load()?;
    logging::init(&config)?;
    info!(
        tick_rate_ms = config.tick_rate_ms,
        splash_ms = config.splash_ms,
        show_table = config.show_table,
        "config loaded"
    );

    let table = SampleTable::builtin()?;

    // Setup terminal
    let mut tui = Tui::new()?.with_tick_rate(config.tick_rate());
    tui.enter()?;

    // Create app state
    let mut app = App::new(&config, table);
    let result = app.init().and_then(|_| run_app(&mut tui, &mut app));

    // Cleanup terminal
    tui.exit()?;

    // Handle any errors
    if let Err(err) = result {
        error!("{:#}", err);
        eprintln!("Error: {:?}", err);
        std::process::exit(1);
    }

    Ok(())
}

/// Run the main application loop
fn run_app(tui: &mut Tui, app: &mut App) -> Result<()> {
    while !app.should_quit {
        // Draw the UI
        let mut draw_result = Ok(());
        tui.draw(|frame| {
            draw_result = app.draw(frame, frame.area());
        })?;
        draw_result?;

        // Poll for events
        let action = match tui.next_event()? {
            Some(Event::Key(key)) => app.handle_key_event(key)?,
            Some(Event::Resize(w, h)) => Some(Action::Resize(w, h)),
            Some(_) => None,
            // No event - send a tick for time-based updates
            None => Some(Action::Tick),
        };

        // Action might produce a follow-up action
        let mut current_action = action;
        while let Some(a) = current_action {
            if a != Action::Tick {
                debug!(action = %a, "dispatch");
            }
            current_action = app.update(a)?;
        }
    }

    Ok(())
}
