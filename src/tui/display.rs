//! Terminal-title countdown readout.
//!
//! Mirrors the countdown into the terminal window title so the remaining
//! time stays visible while the terminal is in the background.

use std::io;

use crossterm::{execute, terminal::SetTitle};

use crate::features::session::effects::TimeDisplay;
use crate::features::session::Phase;

/// Renders the countdown into the terminal title.
pub struct TerminalTitle {
    phase: Phase,
}

impl TerminalTitle {
    /// Create a title renderer starting at the given phase.
    #[must_use]
    pub const fn new(phase: Phase) -> Self {
        Self { phase }
    }

    fn set(&self, title: &str) {
        if let Err(e) = execute!(io::stdout(), SetTitle(title)) {
            log::debug!("failed to set terminal title: {e}");
        }
    }
}

impl TimeDisplay for TerminalTitle {
    fn render_time(&mut self, minutes: u32, seconds: u32) {
        self.set(&format!(
            "{minutes:02}:{seconds:02} {} | lomodoro",
            self.phase.display_name()
        ));
    }

    fn render_active_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }
}
