//! # Terminal UI
//!
//! Reactive form: every key press updates the session, and the next frame
//! recomputes and redraws the whole scenario.

mod app;
mod ui;

use crossterm::event::{self, Event};
use ratatui::DefaultTerminal;

use ship_core::settings::Settings;

use app::App;

/// Run the interactive form until the user quits.
pub fn run(settings: Settings) -> anyhow::Result<()> {
    let mut terminal = ratatui::init();
    let outcome = event_loop(&mut terminal, App::new(settings));
    ratatui::restore();
    outcome
}

fn event_loop(terminal: &mut DefaultTerminal, mut app: App) -> anyhow::Result<()> {
    tracing::info!("tui started");
    while !app.should_quit {
        terminal.draw(|frame| ui::draw(frame, &app))?;
        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }
    }
    tracing::info!(saved = app.session.history().len(), "tui closed");
    Ok(())
}
