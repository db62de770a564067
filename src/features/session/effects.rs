//! Side-effect requests and their dispatcher.
//!
//! The state machine never touches a device. Each transition returns an
//! ordered list of [`Effect`]s and the dispatcher hands them to the
//! collaborators, which keeps the machine pure and every side effect
//! mockable. Collaborators are best-effort: a missing speaker or denied
//! notification permission drops the effect, never the transition.

use std::time::{Duration, Instant};

#[cfg(test)]
use mockall::automock;

use super::phase::Phase;

/// Extra delay after the cue finishes before ambience volume is restored.
pub const RESTORE_BUFFER: Duration = Duration::from_millis(500);

/// Restore delay used when the cue duration is unknown.
pub const RESTORE_FALLBACK: Duration = Duration::from_millis(2500);

/// A side-effect request emitted by the session machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Update the countdown readout.
    RenderTime {
        /// Whole minutes remaining.
        minutes: u32,
        /// Seconds remaining within the minute.
        seconds: u32,
    },
    /// Highlight the newly active phase.
    RenderActivePhase(Phase),
    /// Play the completion cue.
    PlayCompletionCue,
    /// Attenuate ambience to silence around the cue.
    DuckAmbience,
    /// Resume ambient playback.
    ResumeAmbience,
    /// Pause ambient playback.
    PauseAmbience,
    /// Show a desktop notification.
    Notify {
        /// Notification title.
        title: String,
        /// Notification body.
        body: String,
    },
    /// Record a finished phase in the session history.
    RecordSession {
        /// The phase that just completed.
        phase: Phase,
        /// Its nominal duration in seconds.
        planned_seconds: u32,
    },
}

/// Countdown readout.
#[cfg_attr(test, automock)]
pub trait TimeDisplay {
    /// Render the remaining time.
    fn render_time(&mut self, minutes: u32, seconds: u32);
    /// Render the active phase indicator.
    fn render_active_phase(&mut self, phase: Phase);
}

/// Completion cue playback.
#[cfg_attr(test, automock)]
pub trait CuePlayer {
    /// Fire the cue and report its length when the codec exposes it.
    fn play(&mut self) -> Option<Duration>;
}

/// Ambient audio playback.
#[cfg_attr(test, automock)]
pub trait AmbiencePlayer {
    /// Resume (or begin) ambient playback.
    fn resume(&mut self);
    /// Pause ambient playback.
    fn pause(&mut self);
    /// Whether ambience is currently audible.
    fn is_playing(&self) -> bool;
    /// Current volume, 0-100.
    fn volume(&self) -> u8;
    /// Attenuate to silence.
    fn duck(&mut self);
    /// Undo a duck, reapplying the given volume.
    fn restore(&mut self, volume: u8);
}

/// Desktop notifications.
#[cfg_attr(test, automock)]
pub trait Notifier {
    /// Show a notification, best-effort.
    fn notify(&mut self, title: &str, body: &str);
}

/// Session history recording.
#[cfg_attr(test, automock)]
pub trait SessionSink {
    /// Record a finished phase.
    fn record(&mut self, phase: Phase, planned_seconds: u32);
}

/// Display that ignores every request.
pub struct NullDisplay;

impl TimeDisplay for NullDisplay {
    fn render_time(&mut self, _minutes: u32, _seconds: u32) {}
    fn render_active_phase(&mut self, _phase: Phase) {}
}

/// Cue player with no output.
pub struct NullCue;

impl CuePlayer for NullCue {
    fn play(&mut self) -> Option<Duration> {
        None
    }
}

/// Ambience player with no output.
pub struct NullAmbience;

impl AmbiencePlayer for NullAmbience {
    fn resume(&mut self) {}
    fn pause(&mut self) {}
    fn is_playing(&self) -> bool {
        false
    }
    fn volume(&self) -> u8 {
        0
    }
    fn duck(&mut self) {}
    fn restore(&mut self, _volume: u8) {}
}

/// Notifier that drops every notification.
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&mut self, _title: &str, _body: &str) {}
}

/// Sink that discards session records.
pub struct NullSink;

impl SessionSink for NullSink {
    fn record(&mut self, _phase: Phase, _planned_seconds: u32) {}
}

/// A scheduled ambience restore.
struct PendingRestore {
    due: Instant,
    volume: u8,
}

/// Applies effect requests to the collaborators.
///
/// The dispatcher also owns the deferred duck/restore schedule: ducking
/// records the pre-duck volume and a deadline; [`EffectDispatcher::poll`]
/// fires the restore once the deadline passes. A duck that lands while a
/// restore is still pending keeps the original volume and replaces the
/// deadline, so the last-scheduled restore wins.
pub struct EffectDispatcher {
    display: Box<dyn TimeDisplay>,
    cue: Box<dyn CuePlayer>,
    ambience: Box<dyn AmbiencePlayer>,
    notifier: Box<dyn Notifier>,
    sink: Box<dyn SessionSink>,
    last_cue_duration: Option<Duration>,
    pending_restore: Option<PendingRestore>,
}

impl EffectDispatcher {
    /// Create a dispatcher over the given collaborators.
    #[must_use]
    pub fn new(
        display: Box<dyn TimeDisplay>,
        cue: Box<dyn CuePlayer>,
        ambience: Box<dyn AmbiencePlayer>,
        notifier: Box<dyn Notifier>,
        sink: Box<dyn SessionSink>,
    ) -> Self {
        Self {
            display,
            cue,
            ambience,
            notifier,
            sink,
            last_cue_duration: None,
            pending_restore: None,
        }
    }

    /// Dispatcher with no observable side effects, for tests and dry runs.
    #[must_use]
    pub fn silent() -> Self {
        Self::new(
            Box::new(NullDisplay),
            Box::new(NullCue),
            Box::new(NullAmbience),
            Box::new(NullNotifier),
            Box::new(NullSink),
        )
    }

    /// Apply a batch of effects in order.
    pub fn apply(&mut self, effects: Vec<Effect>, now: Instant) {
        for effect in effects {
            self.apply_one(effect, now);
        }
    }

    fn apply_one(&mut self, effect: Effect, now: Instant) {
        match effect {
            Effect::RenderTime { minutes, seconds } => self.display.render_time(minutes, seconds),
            Effect::RenderActivePhase(phase) => self.display.render_active_phase(phase),
            Effect::PlayCompletionCue => self.last_cue_duration = self.cue.play(),
            Effect::DuckAmbience => self.duck(now),
            Effect::ResumeAmbience => self.ambience.resume(),
            Effect::PauseAmbience => self.ambience.pause(),
            Effect::Notify { title, body } => self.notifier.notify(&title, &body),
            Effect::RecordSession {
                phase,
                planned_seconds,
            } => self.sink.record(phase, planned_seconds),
        }
    }

    fn duck(&mut self, now: Instant) {
        if !self.ambience.is_playing() {
            self.last_cue_duration = None;
            return;
        }

        // Back-to-back ducks keep the original pre-duck volume.
        let volume = self
            .pending_restore
            .take()
            .map_or_else(|| self.ambience.volume(), |pending| pending.volume);

        self.ambience.duck();

        let delay = self
            .last_cue_duration
            .take()
            .map_or(RESTORE_FALLBACK, |d| d + RESTORE_BUFFER);

        self.pending_restore = Some(PendingRestore {
            due: now + delay,
            volume,
        });
    }

    /// Fire the deferred ambience restore once its deadline has passed.
    pub fn poll(&mut self, now: Instant) {
        if self
            .pending_restore
            .as_ref()
            .is_some_and(|pending| now >= pending.due)
        {
            if let Some(pending) = self.pending_restore.take() {
                self.ambience.restore(pending.volume);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dispatcher_with_ambience(ambience: MockAmbiencePlayer) -> EffectDispatcher {
        EffectDispatcher::new(
            Box::new(NullDisplay),
            Box::new(NullCue),
            Box::new(ambience),
            Box::new(NullNotifier),
            Box::new(NullSink),
        )
    }

    #[test]
    fn test_notify_passes_through() {
        let mut notifier = MockNotifier::new();
        notifier
            .expect_notify()
            .withf(|title, body| title == "Break is over!" && body.contains("back"))
            .times(1)
            .return_const(());

        let mut dispatcher = EffectDispatcher::new(
            Box::new(NullDisplay),
            Box::new(NullCue),
            Box::new(NullAmbience),
            Box::new(notifier),
            Box::new(NullSink),
        );

        dispatcher.apply(
            vec![Effect::Notify {
                title: "Break is over!".to_string(),
                body: "Time to get back to it. 💪".to_string(),
            }],
            Instant::now(),
        );
    }

    #[test]
    fn test_duck_skipped_when_ambience_silent() {
        let mut ambience = MockAmbiencePlayer::new();
        ambience.expect_is_playing().return_const(false);
        ambience.expect_duck().times(0);

        let mut dispatcher = dispatcher_with_ambience(ambience);
        dispatcher.apply(vec![Effect::DuckAmbience], Instant::now());
    }

    #[test]
    fn test_duck_then_restore_after_fallback_delay() {
        let mut ambience = MockAmbiencePlayer::new();
        ambience.expect_is_playing().return_const(true);
        ambience.expect_volume().return_const(70u8);
        ambience.expect_duck().times(1).return_const(());
        ambience
            .expect_restore()
            .with(mockall::predicate::eq(70u8))
            .times(1)
            .return_const(());

        let mut dispatcher = dispatcher_with_ambience(ambience);
        let start = Instant::now();

        dispatcher.apply(vec![Effect::DuckAmbience], start);

        // Not yet due.
        dispatcher.poll(start + RESTORE_FALLBACK - Duration::from_millis(1));
        // Due: restore fires exactly once.
        dispatcher.poll(start + RESTORE_FALLBACK);
        dispatcher.poll(start + RESTORE_FALLBACK + Duration::from_secs(10));
    }

    #[test]
    fn test_cue_duration_drives_restore_delay() {
        let mut cue = MockCuePlayer::new();
        cue.expect_play()
            .times(1)
            .returning(|| Some(Duration::from_secs(4)));

        let mut ambience = MockAmbiencePlayer::new();
        ambience.expect_is_playing().return_const(true);
        ambience.expect_volume().return_const(50u8);
        ambience.expect_duck().times(1).return_const(());
        ambience.expect_restore().times(1).return_const(());

        let mut dispatcher = EffectDispatcher::new(
            Box::new(NullDisplay),
            Box::new(cue),
            Box::new(ambience),
            Box::new(NullNotifier),
            Box::new(NullSink),
        );

        let start = Instant::now();
        dispatcher.apply(vec![Effect::PlayCompletionCue, Effect::DuckAmbience], start);

        // 4s cue + 500ms buffer: the fallback deadline must not fire.
        dispatcher.poll(start + RESTORE_FALLBACK);
        dispatcher.poll(start + Duration::from_secs(4) + RESTORE_BUFFER);
    }

    #[test]
    fn test_back_to_back_ducks_keep_original_volume() {
        let mut ambience = MockAmbiencePlayer::new();
        ambience.expect_is_playing().return_const(true);
        // volume() is only consulted on the first duck; afterwards the
        // pending restore carries the pre-duck value.
        ambience.expect_volume().times(1).return_const(80u8);
        ambience.expect_duck().times(2).return_const(());
        ambience
            .expect_restore()
            .with(mockall::predicate::eq(80u8))
            .times(1)
            .return_const(());

        let mut dispatcher = dispatcher_with_ambience(ambience);
        let start = Instant::now();

        dispatcher.apply(vec![Effect::DuckAmbience], start);
        // Second transition before the first restore fired.
        let second = start + Duration::from_secs(1);
        dispatcher.apply(vec![Effect::DuckAmbience], second);

        // Only the last-scheduled deadline counts.
        dispatcher.poll(start + RESTORE_FALLBACK);
        dispatcher.poll(second + RESTORE_FALLBACK);
    }
}
