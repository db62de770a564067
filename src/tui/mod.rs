//! Terminal User Interface (TUI) for lomodoro.
//!
//! The timer screen: countdown readout, phase tabs, session dots, and the
//! ambience pane. Built with ratatui and crossterm.

mod app;
mod display;
mod event;
mod ui;

pub use app::App;
pub use display::TerminalTitle;

use std::io;
use std::time::Instant;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::prelude::*;

use crate::error::LomodoroError;
use crate::features::ambience::Ambience;
use crate::features::session::SessionController;
use crate::features::theme::Theme;

/// Run the timer screen.
///
/// # Errors
///
/// Returns an error if the TUI fails to initialize or run.
pub fn run(
    controller: SessionController,
    ambience: Ambience,
    theme: Theme,
) -> Result<(), LomodoroError> {
    // Setup terminal
    enable_raw_mode()
        .map_err(|e| LomodoroError::Config(format!("Failed to enable raw mode: {e}")))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| LomodoroError::Config(format!("Failed to setup terminal: {e}")))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)
        .map_err(|e| LomodoroError::Config(format!("Failed to create terminal: {e}")))?;

    // Create app state and run main loop
    let mut app = App::new(controller, ambience, theme);
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode().ok();
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        SetTitle("")
    )
    .ok();
    terminal.show_cursor().ok();

    result
}

/// Run the main application loop.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), LomodoroError> {
    loop {
        // Drive due ticks and the deferred ambience restore
        app.pump(Instant::now());

        // Draw UI
        terminal
            .draw(|frame| ui::render(frame, app))
            .map_err(|e| LomodoroError::Config(format!("Failed to draw: {e}")))?;

        // Handle events
        if let Some(action) = event::handle_events()? {
            app.handle(action, Instant::now());
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
