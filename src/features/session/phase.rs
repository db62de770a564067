//! Timer phases and their configured durations.

use serde::{Deserialize, Serialize};

/// The purpose of the current countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Focused work.
    Work,
    /// Short break between work sessions.
    ShortBreak,
    /// Long break after the configured number of work sessions.
    LongBreak,
}

impl Phase {
    /// Parse a phase from user input.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "work" | "w" => Some(Self::Work),
            "short" | "short-break" | "shortbreak" | "sb" | "s" => Some(Self::ShortBreak),
            "long" | "long-break" | "longbreak" | "lb" | "l" => Some(Self::LongBreak),
            _ => None,
        }
    }

    /// Get display name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Work => "Work",
            Self::ShortBreak => "Short Break",
            Self::LongBreak => "Long Break",
        }
    }

    /// Stable identifier used in storage and JSON output.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Work => "work",
            Self::ShortBreak => "shortbreak",
            Self::LongBreak => "longbreak",
        }
    }

    /// Check if this is a break phase.
    #[must_use]
    pub const fn is_break(&self) -> bool {
        matches!(self, Self::ShortBreak | Self::LongBreak)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Nominal phase durations, in seconds.
///
/// Caller-supplied and immutable for the lifetime of a session machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseDurations {
    work: u32,
    short_break: u32,
    long_break: u32,
}

impl PhaseDurations {
    /// Build a duration table from minute counts.
    #[must_use]
    pub const fn from_minutes(work: u32, short_break: u32, long_break: u32) -> Self {
        Self {
            work: work * 60,
            short_break: short_break * 60,
            long_break: long_break * 60,
        }
    }

    /// Build a duration table from second counts.
    #[must_use]
    pub const fn from_seconds(work: u32, short_break: u32, long_break: u32) -> Self {
        Self {
            work,
            short_break,
            long_break,
        }
    }

    /// Nominal duration of the given phase, in seconds.
    #[must_use]
    pub const fn for_phase(&self, phase: Phase) -> u32 {
        match phase {
            Phase::Work => self.work,
            Phase::ShortBreak => self.short_break,
            Phase::LongBreak => self.long_break,
        }
    }

    /// Longest configured duration, in seconds.
    #[must_use]
    pub const fn max(&self) -> u32 {
        let mut max = self.work;
        if self.short_break > max {
            max = self.short_break;
        }
        if self.long_break > max {
            max = self.long_break;
        }
        max
    }
}

impl Default for PhaseDurations {
    /// Classic Pomodoro defaults: 25 / 5 / 15 minutes.
    fn default() -> Self {
        Self::from_minutes(25, 5, 15)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(Phase::parse("work"), Some(Phase::Work));
        assert_eq!(Phase::parse("W"), Some(Phase::Work));
        assert_eq!(Phase::parse("short-break"), Some(Phase::ShortBreak));
        assert_eq!(Phase::parse("sb"), Some(Phase::ShortBreak));
        assert_eq!(Phase::parse("long"), Some(Phase::LongBreak));
        assert_eq!(Phase::parse("lunch"), None);
    }

    #[test]
    fn test_is_break() {
        assert!(!Phase::Work.is_break());
        assert!(Phase::ShortBreak.is_break());
        assert!(Phase::LongBreak.is_break());
    }

    #[test]
    fn test_durations() {
        let durations = PhaseDurations::from_minutes(25, 5, 15);
        assert_eq!(durations.for_phase(Phase::Work), 25 * 60);
        assert_eq!(durations.for_phase(Phase::ShortBreak), 5 * 60);
        assert_eq!(durations.for_phase(Phase::LongBreak), 15 * 60);
        assert_eq!(durations.max(), 25 * 60);
    }

    #[test]
    fn test_max_picks_largest() {
        let durations = PhaseDurations::from_seconds(10, 90, 40);
        assert_eq!(durations.max(), 90);
    }
}
