//! Event handling for the timer screen.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

use crate::error::LomodoroError;
use crate::features::session::Phase;

/// Action to take after handling an event.
pub enum Action {
    /// Quit the application.
    Quit,
    /// Start or pause the countdown.
    ToggleTimer,
    /// Reset the current phase.
    Reset,
    /// Switch to a phase explicitly.
    Switch(Phase),
    /// Play or pause ambience.
    ToggleAmbience,
    /// Skip to another ambient track.
    NextTrack,
    /// Mute or unmute ambience.
    ToggleMute,
    /// Raise ambience volume.
    VolumeUp,
    /// Lower ambience volume.
    VolumeDown,
    /// Show or hide the ambience pane.
    TogglePane,
}

/// Handle terminal events.
///
/// Returns an action to take, or None if no action is needed. The poll
/// timeout keeps the loop turning so the countdown stays current.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn handle_events() -> Result<Option<Action>, LomodoroError> {
    if !event::poll(Duration::from_millis(100))
        .map_err(|e| LomodoroError::Config(format!("Event poll failed: {e}")))?
    {
        return Ok(None);
    }

    let Event::Key(key) =
        event::read().map_err(|e| LomodoroError::Config(format!("Event read failed: {e}")))?
    else {
        return Ok(None);
    };

    // Ignore key releases on platforms that report them
    if key.kind == KeyEventKind::Release {
        return Ok(None);
    }

    // Handle Ctrl+C
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Ok(Some(Action::Quit));
    }

    let action = match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),

        // Timer controls
        KeyCode::Char(' ') | KeyCode::Enter => Some(Action::ToggleTimer),
        KeyCode::Char('r') => Some(Action::Reset),

        // Phase switching
        KeyCode::Char('w') => Some(Action::Switch(Phase::Work)),
        KeyCode::Char('s') => Some(Action::Switch(Phase::ShortBreak)),
        KeyCode::Char('l') => Some(Action::Switch(Phase::LongBreak)),

        // Ambience controls
        KeyCode::Char('p') => Some(Action::ToggleAmbience),
        KeyCode::Char('n') => Some(Action::NextTrack),
        KeyCode::Char('m') => Some(Action::ToggleMute),
        KeyCode::Char('+') | KeyCode::Char('=') => Some(Action::VolumeUp),
        KeyCode::Char('-') => Some(Action::VolumeDown),
        KeyCode::Char('b') => Some(Action::TogglePane),

        _ => None,
    };

    Ok(action)
}
