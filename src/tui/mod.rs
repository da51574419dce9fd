//! TUI Module - Terminal User Interface powered by ratatui
//!
//! Interactive gallery: filtered silhouette list, vim keybindings,
//! selection, 3-up carousel, and export to the morph/sketch tool.

mod app;
mod ui;

pub use app::{App, AppState};

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::time::Duration;

use crate::cli::TuiArgs;
use crate::config::Config;

/// Run the TUI application
pub async fn run_tui(args: TuiArgs, config: Config) -> Result<()> {
    // Load the catalog before touching the terminal: a dataset failure is
    // terminal and should print as a plain error
    let mut app = App::new(args, config).await?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run main loop
    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("TUI error: {}", e);
    }

    Ok(())
}

/// Main TUI event loop
fn run_event_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Poll for events with timeout
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                app.on_key(key);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
