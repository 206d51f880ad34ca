//! scenario-desk - A terminal UI for scenario activity logs and pricing requests
//!
//! This is the main entry point for the scenario-desk application.
//! It uses the Component Architecture pattern from ratatui.

mod action;
mod app;
mod component;
mod components;
mod config;
mod logging;
mod model;
mod services;
mod tui;

use crate::action::Action;
use crate::app::App;
use crate::component::Component;
use crate::config::Config;
use crate::tui::Tui;
use anyhow::Result;
use crossterm::event::Event;
use std::time::Duration;

fn main() -> Result<()> {
    let config = Config::load_or_create();
    logging::init(config.log_level.as_deref());
    tracing::info!(
        scenario = %config.scenario_name,
        audit_log_path = %config.audit_log_path,
        locale = %config.date_locale,
        "Starting scenario-desk"
    );

    // Setup terminal
    let mut tui = Tui::new()?.with_tick_rate(Duration::from_millis(100));
    tui.enter()?;

    let mut app = App::new(config);
    app.init()?;

    // Main event loop
    let result = run_app(&mut tui, &mut app);

    // Cleanup terminal
    tui.exit()?;

    if let Err(err) = result {
        tracing::error!(error = %err, "Application error");
        eprintln!("Error: {:?}", err);
        std::process::exit(1);
    }

    tracing::info!("Exiting scenario-desk");
    Ok(())
}

/// Run the main application loop
fn run_app(tui: &mut Tui, app: &mut App) -> Result<()> {
    while !app.should_quit {
        tui.draw(|frame| {
            if let Err(e) = app.draw(frame, frame.area()) {
                tracing::error!(error = %e, "Draw error");
            }
        })?;

        if let Some(event) = tui.next_event()? {
            let action = match event {
                Event::Key(key) => app.handle_key_event(key)?,
                Event::Resize(w, h) => Some(Action::Resize(w, h)),
                _ => None,
            };

            // Action might produce a follow-up action
            let mut current_action = action;
            while let Some(a) = current_action {
                tracing::trace!(action = %a, "Dispatching action");
                current_action = app.update(a)?;
            }
        } else {
            // No event - send a tick so background fetches get picked up
            app.update(Action::Tick)?;
        }
    }

    Ok(())
}
