//! Ambient "lofi" playback.
//!
//! Combines the playlist with the audio engine into the ambience
//! collaborator the session core talks to, plus the user-facing track
//! and volume controls the TUI exposes.

pub mod cue;
pub mod engine;
pub mod playlist;

pub use cue::FileCue;
pub use engine::AudioEngine;
pub use playlist::{MediaEntry, Playlist};

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::features::session::effects::AmbiencePlayer;

struct AmbienceState {
    playlist: Playlist,
    current: Option<MediaEntry>,
    /// Whether the current track has been handed to the engine.
    loaded: bool,
    muted: bool,
}

/// Shared ambience deck: playlist, current track, volume, and mute state.
///
/// Cheaply cloneable so the effect dispatcher and the TUI can both hold
/// it. With an empty playlist every operation is a silent no-op.
#[derive(Clone)]
pub struct Ambience {
    engine: AudioEngine,
    state: Arc<Mutex<AmbienceState>>,
}

impl Ambience {
    /// Create a deck over a playlist with an initial volume (0-100).
    #[must_use]
    pub fn new(playlist: Playlist, volume: u8) -> Self {
        Self {
            engine: AudioEngine::new(volume),
            state: Arc::new(Mutex::new(AmbienceState {
                playlist,
                current: None,
                loaded: false,
                muted: false,
            })),
        }
    }

    fn with_state<T>(&self, f: impl FnOnce(&mut AmbienceState) -> T) -> Option<T> {
        match self.state.lock() {
            Ok(mut guard) => Some(f(&mut guard)),
            Err(e) => {
                log::warn!("ambience state lock poisoned: {e}");
                None
            }
        }
    }

    /// Begin or resume playback, picking a random track when none is
    /// loaded yet.
    pub fn play(&self) {
        if self.engine.is_playing() {
            return;
        }

        enum Action {
            Load(PathBuf),
            Resume,
            Nothing,
        }

        let action = self
            .with_state(|state| {
                if state.current.is_none() {
                    state.current = state.playlist.random().cloned();
                }
                match (&state.current, state.loaded) {
                    (None, _) => Action::Nothing,
                    (Some(entry), false) => {
                        state.loaded = true;
                        Action::Load(entry.path.clone())
                    }
                    (Some(_), true) => Action::Resume,
                }
            })
            .unwrap_or(Action::Nothing);

        match action {
            Action::Load(path) => {
                self.engine.play(path);
                if self.is_muted() {
                    self.engine.attenuate();
                }
            }
            Action::Resume => self.engine.resume(),
            Action::Nothing => log::debug!("ambience: nothing to play"),
        }
    }

    /// Skip to a different random track and keep playing.
    pub fn next_track(&self) {
        let next = self
            .with_state(|state| {
                let next = match state.current {
                    Some(ref entry) => state.playlist.random_other(&entry.id).cloned(),
                    None => state.playlist.random().cloned(),
                };
                state.current.clone_from(&next);
                state.loaded = next.is_some();
                next
            })
            .flatten();

        if let Some(entry) = next {
            self.engine.play(entry.path);
            if self.is_muted() {
                self.engine.attenuate();
            }
        }
    }

    /// Pause playback, keeping the current track selection.
    pub fn stop(&self) {
        self.engine.pause();
    }

    /// Toggle between playing and paused.
    pub fn toggle(&self) {
        if self.engine.is_playing() {
            self.engine.pause();
        } else {
            self.play();
        }
    }

    /// The track currently selected, if any.
    #[must_use]
    pub fn current_track(&self) -> Option<MediaEntry> {
        self.with_state(|state| state.current.clone()).flatten()
    }

    /// Whether the playlist has no tracks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.with_state(|state| state.playlist.is_empty())
            .unwrap_or(true)
    }

    /// Current volume, 0-100.
    #[must_use]
    pub fn current_volume(&self) -> u8 {
        self.engine.volume()
    }

    /// Set the volume, unmuting like the original volume slider does.
    pub fn set_volume(&self, volume: u8) {
        self.engine.set_volume(volume);
        if volume > 0 {
            self.with_state(|state| state.muted = false);
        }
    }

    /// Nudge the volume by the given delta.
    pub fn adjust_volume(&self, delta: i16) {
        let current = i16::from(self.engine.volume());
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        let next = (current + delta).clamp(0, 100) as u8;
        self.set_volume(next);
    }

    /// Whether the deck is muted.
    #[must_use]
    pub fn is_muted(&self) -> bool {
        self.with_state(|state| state.muted).unwrap_or(false)
    }

    /// Toggle mute without losing the stored volume.
    pub fn toggle_mute(&self) {
        let muted = self
            .with_state(|state| {
                state.muted = !state.muted;
                state.muted
            })
            .unwrap_or(false);

        if muted {
            self.engine.attenuate();
        } else {
            self.engine.reapply_volume();
        }
    }
}

impl AmbiencePlayer for Ambience {
    fn resume(&mut self) {
        self.play();
    }

    fn pause(&mut self) {
        self.stop();
    }

    fn is_playing(&self) -> bool {
        self.engine.is_playing()
    }

    fn volume(&self) -> u8 {
        self.engine.volume()
    }

    fn duck(&mut self) {
        self.engine.attenuate();
    }

    fn restore(&mut self, volume: u8) {
        if self.is_muted() {
            // The user muted while the duck was pending; leave it silent.
            return;
        }
        self.engine.set_volume(volume);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck_with_tracks() -> Ambience {
        let playlist = Playlist::from_entries(vec![MediaEntry {
            id: "t".to_string(),
            title: "T".to_string(),
            credit: "x".to_string(),
            credit_url: None,
            path: PathBuf::from("/nonexistent.mp3"),
        }]);
        Ambience::new(playlist, 60)
    }

    #[test]
    fn test_empty_playlist_is_inert() {
        let deck = Ambience::new(Playlist::default(), 50);
        assert!(deck.is_empty());

        deck.play();
        assert!(!deck.engine.is_playing());
        assert!(deck.current_track().is_none());
    }

    #[test]
    fn test_play_selects_a_track() {
        let deck = deck_with_tracks();
        deck.play();
        assert_eq!(deck.current_track().map(|e| e.id), Some("t".to_string()));
        assert!(deck.engine.is_playing());
    }

    #[test]
    fn test_volume_adjust_clamps() {
        let deck = deck_with_tracks();
        deck.adjust_volume(100);
        assert_eq!(deck.current_volume(), 100);
        deck.adjust_volume(-250);
        assert_eq!(deck.current_volume(), 0);
    }

    #[test]
    fn test_mute_round_trip_keeps_volume() {
        let deck = deck_with_tracks();
        deck.toggle_mute();
        assert!(deck.is_muted());
        assert_eq!(deck.current_volume(), 60);

        deck.toggle_mute();
        assert!(!deck.is_muted());
        assert_eq!(deck.current_volume(), 60);
    }

    #[test]
    fn test_set_volume_unmutes() {
        let deck = deck_with_tracks();
        deck.toggle_mute();
        deck.set_volume(30);
        assert!(!deck.is_muted());
    }

    #[test]
    fn test_restore_respects_mute() {
        let mut deck = deck_with_tracks();
        deck.toggle_mute();
        deck.restore(60);
        assert!(deck.is_muted());
    }
}
