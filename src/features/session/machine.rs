//! The session state machine.
//!
//! Owns the countdown, the work/break cycle, and the completed-session
//! counter. Every operation is a pure state transition that returns the
//! ordered side-effect requests for the dispatcher to carry out; the
//! machine itself knows nothing about clocks, audio, or terminals.

use super::effects::Effect;
use super::messages;
use super::phase::{Phase, PhaseDurations};

/// Pomodoro session state.
///
/// Invariants:
/// - `remaining_seconds` never goes negative; reaching zero while running
///   triggers the end-of-session transition exactly once.
/// - `completed_work_sessions` stays in `[0, long_break_threshold)`; it is
///   reset the moment it reaches the threshold and a long break begins.
/// - `running` is false after `pause`, `reset`, and `switch_mode`; the
///   end-of-session transition leaves it true (auto-continue).
#[derive(Debug)]
pub struct SessionMachine {
    phase: Phase,
    remaining_seconds: u32,
    completed_work_sessions: u32,
    running: bool,
    durations: PhaseDurations,
    long_break_threshold: u32,
}

impl SessionMachine {
    /// Create a machine at the start of a work phase, idle.
    #[must_use]
    pub const fn new(durations: PhaseDurations, long_break_threshold: u32) -> Self {
        Self {
            phase: Phase::Work,
            remaining_seconds: durations.for_phase(Phase::Work),
            completed_work_sessions: 0,
            running: false,
            durations,
            long_break_threshold,
        }
    }

    /// The currently active phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Seconds left in the current countdown.
    #[must_use]
    pub const fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    /// Work sessions completed toward the long-break threshold.
    #[must_use]
    pub const fn completed_work_sessions(&self) -> u32 {
        self.completed_work_sessions
    }

    /// Whether the countdown is ticking.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// The configured duration table.
    #[must_use]
    pub const fn durations(&self) -> PhaseDurations {
        self.durations
    }

    /// Work sessions required before a long break.
    #[must_use]
    pub const fn long_break_threshold(&self) -> u32 {
        self.long_break_threshold
    }

    /// Countdown progress for the current phase, 0.0 - 1.0.
    #[must_use]
    pub fn progress(&self) -> f64 {
        let total = self.durations.for_phase(self.phase);
        if total == 0 {
            return 1.0;
        }
        1.0 - (f64::from(self.remaining_seconds) / f64::from(total))
    }

    /// Begin (or resume) the countdown.
    ///
    /// A no-op while already running, and a zero-duration phase never
    /// starts.
    pub fn start(&mut self) -> Vec<Effect> {
        if self.running || self.remaining_seconds == 0 {
            return Vec::new();
        }

        self.running = true;
        vec![Effect::ResumeAmbience]
    }

    /// Stop the countdown without losing progress.
    pub fn pause(&mut self) -> Vec<Effect> {
        if !self.running {
            return Vec::new();
        }

        self.running = false;
        vec![Effect::PauseAmbience]
    }

    /// Stop the countdown and reload the current phase's full duration.
    pub fn reset(&mut self) -> Vec<Effect> {
        self.running = false;
        self.remaining_seconds = self.durations.for_phase(self.phase);

        vec![Effect::PauseAmbience, self.render_time()]
    }

    /// Advance the countdown by one second.
    ///
    /// Only acts while running. Reaching zero fires the end-of-session
    /// transition, which enters the next phase and auto-continues.
    pub fn tick(&mut self) -> Vec<Effect> {
        if !self.running {
            return Vec::new();
        }

        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);

        if self.remaining_seconds == 0 {
            self.complete_phase()
        } else {
            vec![self.render_time()]
        }
    }

    /// Explicit user override to a given phase.
    ///
    /// Implicitly pauses, reloads the target duration, and leaves
    /// `completed_work_sessions` untouched.
    pub fn switch_mode(&mut self, target: Phase) -> Vec<Effect> {
        let mut effects = self.pause();

        self.phase = target;
        self.remaining_seconds = self.durations.for_phase(target);

        effects.push(Effect::RenderActivePhase(target));
        effects.push(self.render_time());
        effects
    }

    /// End-of-session transition: fires exactly once per completed phase.
    fn complete_phase(&mut self) -> Vec<Effect> {
        self.running = false;

        let ended = self.phase;
        let mut effects = vec![Effect::PlayCompletionCue, Effect::DuckAmbience];

        let next = match ended {
            Phase::Work => {
                self.completed_work_sessions += 1;

                if self.completed_work_sessions >= self.long_break_threshold {
                    let (title, body) = messages::long_break_earned(
                        self.completed_work_sessions,
                        self.long_break_threshold,
                    );
                    effects.push(Effect::Notify { title, body });
                    self.completed_work_sessions = 0;
                    Phase::LongBreak
                } else {
                    let (title, body) = messages::short_break_earned(
                        self.completed_work_sessions,
                        self.long_break_threshold,
                    );
                    effects.push(Effect::Notify { title, body });
                    Phase::ShortBreak
                }
            }
            Phase::ShortBreak | Phase::LongBreak => {
                let (title, body) = messages::back_to_work(ended);
                effects.push(Effect::Notify { title, body });
                Phase::Work
            }
        };

        effects.push(Effect::RecordSession {
            phase: ended,
            planned_seconds: self.durations.for_phase(ended),
        });

        self.phase = next;
        self.remaining_seconds = self.durations.for_phase(next);
        effects.push(Effect::RenderActivePhase(next));
        effects.push(self.render_time());

        // Auto-continue: the next phase begins without user action.
        effects.extend(self.start());
        effects
    }

    const fn render_time(&self) -> Effect {
        Effect::RenderTime {
            minutes: self.remaining_seconds / 60,
            seconds: self.remaining_seconds % 60,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn machine() -> SessionMachine {
        // Short durations keep the tests readable.
        SessionMachine::new(PhaseDurations::from_seconds(3, 2, 4), 4)
    }

    fn assert_invariants(m: &SessionMachine) {
        assert!(m.remaining_seconds() <= m.durations().max());
        assert!(m.completed_work_sessions() < m.long_break_threshold());
    }

    fn run_phase_to_completion(m: &mut SessionMachine) -> Vec<Effect> {
        m.start();
        let mut last = Vec::new();
        for _ in 0..m.durations().max() {
            last = m.tick();
            if last.contains(&Effect::PlayCompletionCue) {
                return last;
            }
        }
        panic!("phase never completed: {last:?}");
    }

    fn transitions(effects: &[Effect]) -> usize {
        effects
            .iter()
            .filter(|e| matches!(e, Effect::PlayCompletionCue))
            .count()
    }

    #[test]
    fn test_initial_state() {
        let m = machine();
        assert_eq!(m.phase(), Phase::Work);
        assert_eq!(m.remaining_seconds(), 3);
        assert_eq!(m.completed_work_sessions(), 0);
        assert!(!m.is_running());
    }

    #[test]
    fn test_start_is_idempotent() {
        let mut m = machine();
        let first = m.start();
        assert_eq!(first, vec![Effect::ResumeAmbience]);
        assert!(m.is_running());

        let second = m.start();
        assert!(second.is_empty());
        assert!(m.is_running());
        assert_eq!(m.remaining_seconds(), 3);
    }

    #[test]
    fn test_zero_duration_phase_never_starts() {
        let mut m = SessionMachine::new(PhaseDurations::from_seconds(0, 2, 4), 4);
        assert!(m.start().is_empty());
        assert!(!m.is_running());
        assert!(m.tick().is_empty());
    }

    #[test]
    fn test_tick_ignored_while_idle() {
        let mut m = machine();
        assert!(m.tick().is_empty());
        assert_eq!(m.remaining_seconds(), 3);
    }

    #[test]
    fn test_countdown_fires_exactly_one_transition() {
        let mut m = machine();
        m.start();

        let mut total_transitions = 0;
        for _ in 0..3 {
            total_transitions += transitions(&m.tick());
        }

        assert_eq!(total_transitions, 1);
        assert_eq!(m.phase(), Phase::ShortBreak);
        assert_invariants(&m);
    }

    #[test]
    fn test_pause_resume_preserves_remaining() {
        let mut m = machine();
        m.start();
        m.tick();
        assert_eq!(m.remaining_seconds(), 2);

        assert_eq!(m.pause(), vec![Effect::PauseAmbience]);
        for _ in 0..5 {
            assert!(m.tick().is_empty());
        }
        assert_eq!(m.remaining_seconds(), 2);

        m.start();
        m.tick();
        assert_eq!(m.remaining_seconds(), 1);
    }

    #[test]
    fn test_pause_when_idle_is_noop() {
        let mut m = machine();
        assert!(m.pause().is_empty());
    }

    #[test]
    fn test_reset_reloads_current_phase() {
        let mut m = machine();
        m.start();
        m.tick();

        let effects = m.reset();
        assert!(effects.contains(&Effect::PauseAmbience));
        assert!(!m.is_running());
        assert_eq!(m.remaining_seconds(), 3);

        // No lingering countdown: ticks before a new start are inert.
        assert!(m.tick().is_empty());
        assert_eq!(m.remaining_seconds(), 3);
    }

    #[test]
    fn test_auto_continue_after_completion() {
        let mut m = machine();
        run_phase_to_completion(&mut m);

        assert!(m.is_running());
        assert_eq!(m.phase(), Phase::ShortBreak);
        assert_eq!(m.remaining_seconds(), 2);
    }

    #[test]
    fn test_work_completion_effect_order() {
        let mut m = machine();
        let effects = run_phase_to_completion(&mut m);

        let expected = vec![
            Effect::PlayCompletionCue,
            Effect::DuckAmbience,
            Effect::Notify {
                title: "Work session complete!".to_string(),
                body: "Take a short break! 😉 (1/4)".to_string(),
            },
            Effect::RecordSession {
                phase: Phase::Work,
                planned_seconds: 3,
            },
            Effect::RenderActivePhase(Phase::ShortBreak),
            Effect::RenderTime {
                minutes: 0,
                seconds: 2,
            },
            Effect::ResumeAmbience,
        ];
        assert_eq!(effects, expected);
    }

    #[test]
    fn test_phase_cycle_with_long_break() {
        let mut m = machine();
        let mut phases = vec![m.phase()];

        // Four work completions, with their breaks in between.
        for _ in 0..7 {
            run_phase_to_completion(&mut m);
            phases.push(m.phase());
            assert_invariants(&m);
        }

        assert_eq!(
            phases,
            vec![
                Phase::Work,
                Phase::ShortBreak,
                Phase::Work,
                Phase::ShortBreak,
                Phase::Work,
                Phase::ShortBreak,
                Phase::Work,
                Phase::LongBreak,
            ]
        );
        // Counter reset on the long-break transition.
        assert_eq!(m.completed_work_sessions(), 0);
    }

    #[test]
    fn test_long_break_notification_and_reset() {
        let mut m = SessionMachine::new(PhaseDurations::from_seconds(1, 1, 1), 2);

        // First work completion: short break.
        let effects = run_phase_to_completion(&mut m);
        assert!(effects.iter().any(|e| matches!(
            e,
            Effect::Notify { body, .. } if body.contains("short break")
        )));

        // Break, then second work completion: long break earned.
        run_phase_to_completion(&mut m);
        let effects = run_phase_to_completion(&mut m);
        assert!(effects.iter().any(|e| matches!(
            e,
            Effect::Notify { body, .. } if body.contains("long break") && body.contains("(2/2)")
        )));
        assert_eq!(m.phase(), Phase::LongBreak);
        assert_eq!(m.completed_work_sessions(), 0);
    }

    #[test]
    fn test_break_completion_returns_to_work() {
        let mut m = machine();
        m.switch_mode(Phase::LongBreak);
        let effects = run_phase_to_completion(&mut m);

        assert_eq!(m.phase(), Phase::Work);
        assert!(effects.iter().any(|e| matches!(
            e,
            Effect::Notify { title, .. } if title == "Break is over!"
        )));
    }

    #[test]
    fn test_switch_mode_pauses_and_reloads() {
        let mut m = machine();
        m.start();
        m.tick();

        let effects = m.switch_mode(Phase::ShortBreak);
        assert!(!m.is_running());
        assert_eq!(m.phase(), Phase::ShortBreak);
        assert_eq!(m.remaining_seconds(), 2);
        assert!(effects.contains(&Effect::PauseAmbience));
        assert!(effects.contains(&Effect::RenderActivePhase(Phase::ShortBreak)));
    }

    #[test]
    fn test_switch_mode_keeps_counter() {
        let mut m = machine();
        run_phase_to_completion(&mut m);
        assert_eq!(m.completed_work_sessions(), 1);

        m.switch_mode(Phase::ShortBreak);
        assert_eq!(m.completed_work_sessions(), 1);

        m.switch_mode(Phase::Work);
        assert_eq!(m.completed_work_sessions(), 1);
    }

    #[test]
    fn test_progress() {
        let mut m = machine();
        assert!(m.progress().abs() < f64::EPSILON);
        m.start();
        m.tick();
        assert!((m.progress() - 1.0 / 3.0).abs() < 1e-9);
    }
}
