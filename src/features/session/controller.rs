//! Session controller: the machine plus its tick schedule.
//!
//! The controller owns the only tick source. [`SessionController::pump`]
//! advances the schedule against wall time, feeding whole elapsed seconds
//! to the machine one at a time, so ticks are strictly serialized.
//! `pause`, `reset`, and `switch_mode` drop the schedule synchronously: a
//! stale deadline can never decrement the countdown afterwards.

use std::time::{Duration, Instant};

use super::effects::EffectDispatcher;
use super::machine::SessionMachine;
use super::phase::Phase;

const TICK: Duration = Duration::from_secs(1);

/// Drives a [`SessionMachine`] against wall-clock time and routes its
/// side-effect requests through an [`EffectDispatcher`].
pub struct SessionController {
    machine: SessionMachine,
    dispatcher: EffectDispatcher,
    next_tick: Option<Instant>,
}

impl SessionController {
    /// Create a controller over a machine and its collaborators.
    #[must_use]
    pub const fn new(machine: SessionMachine, dispatcher: EffectDispatcher) -> Self {
        Self {
            machine,
            dispatcher,
            next_tick: None,
        }
    }

    /// Begin (or resume) the countdown.
    pub fn start(&mut self, now: Instant) {
        let effects = self.machine.start();

        if self.machine.is_running() && self.next_tick.is_none() {
            self.next_tick = Some(now + TICK);
        }

        self.dispatcher.apply(effects, now);
    }

    /// Pause the countdown and cancel the tick schedule.
    pub fn pause(&mut self, now: Instant) {
        self.next_tick = None;
        let effects = self.machine.pause();
        self.dispatcher.apply(effects, now);
    }

    /// Reset the current phase and cancel the tick schedule.
    pub fn reset(&mut self, now: Instant) {
        self.next_tick = None;
        let effects = self.machine.reset();
        self.dispatcher.apply(effects, now);
    }

    /// Switch to a phase explicitly; cancels the tick schedule.
    pub fn switch_mode(&mut self, target: Phase, now: Instant) {
        self.next_tick = None;
        let effects = self.machine.switch_mode(target);
        self.dispatcher.apply(effects, now);
    }

    /// Toggle between running and paused.
    pub fn toggle(&mut self, now: Instant) {
        if self.machine.is_running() {
            self.pause(now);
        } else {
            self.start(now);
        }
    }

    /// Drive all due ticks and the deferred ambience restore.
    ///
    /// Call this from the event loop; one call fires at most the ticks
    /// whose deadlines have passed, keeping a drift-free 1 Hz cadence even
    /// when the loop wakes late.
    pub fn pump(&mut self, now: Instant) {
        while let Some(due) = self.next_tick {
            if now < due {
                break;
            }

            let effects = self.machine.tick();

            // End-of-session auto-continue keeps the machine running; only
            // a machine that actually stopped loses its schedule.
            self.next_tick = if self.machine.is_running() {
                Some(due + TICK)
            } else {
                None
            };

            self.dispatcher.apply(effects, now);
        }

        self.dispatcher.poll(now);
    }

    /// The currently active phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.machine.phase()
    }

    /// Seconds left in the current countdown.
    #[must_use]
    pub const fn remaining_seconds(&self) -> u32 {
        self.machine.remaining_seconds()
    }

    /// Work sessions completed toward the long-break threshold.
    #[must_use]
    pub const fn completed_work_sessions(&self) -> u32 {
        self.machine.completed_work_sessions()
    }

    /// Work sessions required before a long break.
    #[must_use]
    pub const fn long_break_threshold(&self) -> u32 {
        self.machine.long_break_threshold()
    }

    /// Whether the countdown is ticking.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.machine.is_running()
    }

    /// Countdown progress for the current phase, 0.0 - 1.0.
    #[must_use]
    pub fn progress(&self) -> f64 {
        self.machine.progress()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::session::phase::PhaseDurations;

    fn controller(work: u32, short_break: u32) -> SessionController {
        let machine = SessionMachine::new(PhaseDurations::from_seconds(work, short_break, 10), 4);
        SessionController::new(machine, EffectDispatcher::silent())
    }

    #[test]
    fn test_pump_fires_once_per_second() {
        let mut c = controller(10, 5);
        let t0 = Instant::now();

        c.start(t0);
        assert_eq!(c.remaining_seconds(), 10);

        c.pump(t0 + Duration::from_millis(500));
        assert_eq!(c.remaining_seconds(), 10);

        c.pump(t0 + Duration::from_millis(1100));
        assert_eq!(c.remaining_seconds(), 9);

        // A late wakeup catches up on every due tick.
        c.pump(t0 + Duration::from_millis(3500));
        assert_eq!(c.remaining_seconds(), 7);
    }

    #[test]
    fn test_pause_cancels_schedule() {
        let mut c = controller(10, 5);
        let t0 = Instant::now();

        c.start(t0);
        c.pump(t0 + Duration::from_secs(2));
        assert_eq!(c.remaining_seconds(), 8);

        c.pause(t0 + Duration::from_secs(2));

        // Time passes; nothing may move.
        c.pump(t0 + Duration::from_secs(60));
        assert_eq!(c.remaining_seconds(), 8);
        assert!(!c.is_running());

        // Resume continues from where it stopped.
        let t1 = t0 + Duration::from_secs(60);
        c.start(t1);
        c.pump(t1 + Duration::from_secs(1));
        assert_eq!(c.remaining_seconds(), 7);
    }

    #[test]
    fn test_reset_leaves_no_stray_schedule() {
        let mut c = controller(10, 5);
        let t0 = Instant::now();

        c.start(t0);
        c.pump(t0 + Duration::from_secs(3));
        c.reset(t0 + Duration::from_secs(3));
        assert_eq!(c.remaining_seconds(), 10);

        c.pump(t0 + Duration::from_secs(30));
        assert_eq!(c.remaining_seconds(), 10);
    }

    #[test]
    fn test_auto_continue_across_completion() {
        let mut c = controller(2, 5);
        let t0 = Instant::now();

        c.start(t0);
        c.pump(t0 + Duration::from_secs(2));

        // Work completed; the short break is already ticking.
        assert_eq!(c.phase(), Phase::ShortBreak);
        assert!(c.is_running());
        assert_eq!(c.remaining_seconds(), 5);

        c.pump(t0 + Duration::from_secs(3));
        assert_eq!(c.remaining_seconds(), 4);
    }

    #[test]
    fn test_double_start_does_not_reschedule() {
        let mut c = controller(10, 5);
        let t0 = Instant::now();

        c.start(t0);
        // A second start half a second later must not push the deadline.
        c.start(t0 + Duration::from_millis(500));

        c.pump(t0 + Duration::from_millis(1100));
        assert_eq!(c.remaining_seconds(), 9);
    }

    #[test]
    fn test_switch_mode_stops_ticking() {
        let mut c = controller(10, 5);
        let t0 = Instant::now();

        c.start(t0);
        c.switch_mode(Phase::ShortBreak, t0);
        assert!(!c.is_running());

        c.pump(t0 + Duration::from_secs(10));
        assert_eq!(c.remaining_seconds(), 5);
    }

    #[test]
    fn test_toggle() {
        let mut c = controller(10, 5);
        let t0 = Instant::now();

        c.toggle(t0);
        assert!(c.is_running());
        c.toggle(t0 + Duration::from_millis(10));
        assert!(!c.is_running());
    }
}
