//! Notification copy for phase transitions.
//!
//! Collected in one place so a localization pass has a single seam.

use super::phase::Phase;

/// Notification for a completed work session that earned a short break.
#[must_use]
pub fn short_break_earned(completed: u32, threshold: u32) -> (String, String) {
    (
        "Work session complete!".to_string(),
        format!("Take a short break! 😉 ({completed}/{threshold})"),
    )
}

/// Notification for a completed work session that earned a long break.
#[must_use]
pub fn long_break_earned(completed: u32, threshold: u32) -> (String, String) {
    (
        "Work session complete!".to_string(),
        format!("Take a long break! 🥳 ({completed}/{threshold})"),
    )
}

/// Notification for a finished break.
#[must_use]
pub fn back_to_work(ended: Phase) -> (String, String) {
    let body = match ended {
        Phase::LongBreak => "Time to get back to work! 🚀",
        _ => "Time to get back to it. 💪",
    };
    ("Break is over!".to_string(), body.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_suffix() {
        let (_, body) = short_break_earned(2, 4);
        assert!(body.ends_with("(2/4)"));

        let (_, body) = long_break_earned(4, 4);
        assert!(body.ends_with("(4/4)"));
    }

    #[test]
    fn test_break_copy_differs() {
        let (title_short, body_short) = back_to_work(Phase::ShortBreak);
        let (title_long, body_long) = back_to_work(Phase::LongBreak);
        assert_eq!(title_short, title_long);
        assert_ne!(body_short, body_long);
    }
}
