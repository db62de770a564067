//! Application state for the timer screen.

use std::time::Instant;

use crate::features::ambience::Ambience;
use crate::features::session::{Phase, SessionController};
use crate::features::theme::Theme;
use crate::tui::event::Action;

/// Application state.
pub struct App {
    /// The session controller driving the countdown.
    pub controller: SessionController,
    /// The ambience deck.
    pub ambience: Ambience,
    /// Active theme.
    pub theme: Theme,
    /// Whether the ambience pane is visible.
    pub show_ambience: bool,
    /// Status message to display.
    pub status: Option<String>,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl App {
    /// Create a new app instance.
    #[must_use]
    pub fn new(controller: SessionController, ambience: Ambience, theme: Theme) -> Self {
        Self {
            controller,
            ambience,
            theme,
            show_ambience: theme.shows_ambience_pane(),
            status: Some("Press space to start".to_string()),
            should_quit: false,
        }
    }

    /// Drive due ticks and deferred effects.
    pub fn pump(&mut self, now: Instant) {
        self.controller.pump(now);
    }

    /// Apply a user action.
    pub fn handle(&mut self, action: Action, now: Instant) {
        match action {
            Action::Quit => self.should_quit = true,

            Action::ToggleTimer => {
                self.controller.toggle(now);
                self.status = Some(if self.controller.is_running() {
                    "Focus!".to_string()
                } else {
                    "Paused".to_string()
                });
            }

            Action::Reset => {
                self.controller.reset(now);
                self.status = Some(format!("{} reset", self.controller.phase().display_name()));
            }

            Action::Switch(phase) => {
                self.controller.switch_mode(phase, now);
                self.status = Some(format!("Switched to {}", phase.display_name()));
            }

            Action::ToggleAmbience => {
                self.ambience.toggle();
                self.status = Some(self.track_status());
            }

            Action::NextTrack => {
                self.ambience.next_track();
                self.status = Some(self.track_status());
            }

            Action::ToggleMute => {
                self.ambience.toggle_mute();
                self.status = Some(if self.ambience.is_muted() {
                    "Ambience muted".to_string()
                } else {
                    "Ambience unmuted".to_string()
                });
            }

            Action::VolumeUp => {
                self.ambience.adjust_volume(5);
                self.status = Some(format!("Volume {}%", self.ambience.current_volume()));
            }

            Action::VolumeDown => {
                self.ambience.adjust_volume(-5);
                self.status = Some(format!("Volume {}%", self.ambience.current_volume()));
            }

            Action::TogglePane => {
                self.show_ambience = !self.show_ambience;
            }
        }
    }

    /// Session dots toward the long break, e.g. `●●○○`.
    #[must_use]
    pub fn session_dots(&self) -> String {
        let completed = self.controller.completed_work_sessions();
        let threshold = self.controller.long_break_threshold();

        (0..threshold)
            .map(|i| if i < completed { '●' } else { '○' })
            .collect()
    }

    /// Index of the active phase tab.
    #[must_use]
    pub fn phase_index(&self) -> usize {
        match self.controller.phase() {
            Phase::Work => 0,
            Phase::ShortBreak => 1,
            Phase::LongBreak => 2,
        }
    }

    fn track_status(&self) -> String {
        self.ambience.current_track().map_or_else(
            || "No ambient tracks loaded".to_string(),
            |entry| format!("♪ {} ({})", entry.title, entry.credit),
        )
    }
}
