//! Start command implementation.
//!
//! Wires the session core to its collaborators and hands control to the
//! timer screen.

use std::time::Instant;

use crate::cli::args::StartArgs;
use crate::config::{Config, Paths};
use crate::error::LomodoroError;
use crate::features::ambience::{Ambience, FileCue, Playlist};
use crate::features::history::HistoryStorage;
use crate::features::session::effects::{EffectDispatcher, NullAmbience, NullSink, SessionSink};
use crate::features::session::{
    parse_duration, DesktopNotifier, Phase, PhaseDurations, SessionController, SessionMachine,
};
use crate::tui;

/// Execute the start command: build the controller and run the TUI.
///
/// # Errors
///
/// Returns an error on invalid arguments or a terminal failure; a missing
/// audio device, playlist, or notification service only degrades features.
pub fn start(config: &Config, args: StartArgs) -> Result<String, LomodoroError> {
    let paths = Paths::new()?;

    let mode = Phase::parse(&args.mode)
        .ok_or_else(|| LomodoroError::Config(format!("Unknown phase: {}", args.mode)))?;

    let durations = PhaseDurations::from_seconds(
        resolve_seconds(args.duration.as_deref(), config.timer.work_minutes)?,
        resolve_seconds(args.short_break.as_deref(), config.timer.short_break_minutes)?,
        resolve_seconds(args.long_break.as_deref(), config.timer.long_break_minutes)?,
    );

    let threshold = args
        .sessions
        .unwrap_or(config.timer.sessions_until_long_break);
    if threshold == 0 {
        return Err(LomodoroError::Config(
            "Sessions before a long break must be at least 1".to_string(),
        ));
    }

    // Ambience deck: shared between the dispatcher (duck/resume) and the
    // TUI (track and volume keys).
    let playlist_path = config
        .ambience
        .playlist
        .clone()
        .unwrap_or_else(|| paths.playlist.clone());
    let ambience = Ambience::new(
        Playlist::load_or_empty(&playlist_path),
        config.ambience.volume,
    );
    if args.muted {
        ambience.toggle_mute();
    }

    let cue_path = if args.no_sound || !config.timer.notification_sound {
        None
    } else {
        Some(
            config
                .ambience
                .cue
                .clone()
                .unwrap_or_else(|| paths.default_cue()),
        )
    };

    let notifier = DesktopNotifier::new(config.timer.notifications && !args.no_notify);

    // Session history is best-effort: an unopenable database costs the
    // record, not the timer.
    let sink: Box<dyn SessionSink> = match HistoryStorage::new() {
        Ok(storage) => Box::new(storage),
        Err(e) => {
            log::warn!("session history disabled: {e}");
            Box::new(NullSink)
        }
    };

    let dispatcher = EffectDispatcher::new(
        Box::new(tui::TerminalTitle::new(mode)),
        Box::new(FileCue::new(cue_path)),
        if config.ambience.autoplay {
            Box::new(ambience.clone())
        } else {
            // The timer leaves ambience alone; the deck stays under
            // manual key control only.
            Box::new(NullAmbience)
        },
        Box::new(notifier),
        sink,
    );

    let mut controller = SessionController::new(SessionMachine::new(durations, threshold), dispatcher);
    if mode != Phase::Work {
        controller.switch_mode(mode, Instant::now());
    }

    tui::run(controller, ambience, config.general.theme)?;
    Ok(String::new())
}

/// Resolve a duration argument against a configured default (minutes).
fn resolve_seconds(arg: Option<&str>, default_minutes: u32) -> Result<u32, LomodoroError> {
    let Some(s) = arg else {
        return Ok(default_minutes.saturating_mul(60));
    };

    let duration = parse_duration(s)
        .ok_or_else(|| LomodoroError::Config(format!("Invalid duration: {s}")))?;

    u32::try_from(duration.num_seconds())
        .map_err(|_| LomodoroError::Config(format!("Duration out of range: {s}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_seconds_default() {
        assert_eq!(resolve_seconds(None, 25).unwrap(), 1500);
    }

    #[test]
    fn test_resolve_seconds_parses_units() {
        assert_eq!(resolve_seconds(Some("50m"), 25).unwrap(), 3000);
        assert_eq!(resolve_seconds(Some("90s"), 25).unwrap(), 90);
        assert!(resolve_seconds(Some("bogus"), 25).is_err());
    }
}
