//! Focus reports.
//!
//! Aggregates recorded sessions into a productivity summary.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use serde::Serialize;

use super::storage::HistoryStorage;
use crate::error::LomodoroError;
use crate::features::session::phase::Phase;

/// Report time period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportPeriod {
    /// Today only.
    Today,
    /// Last 7 days.
    Week,
    /// Last 30 days.
    Month,
    /// All time.
    AllTime,
}

impl ReportPeriod {
    /// Parse a period from user input.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "today" | "day" | "d" => Some(Self::Today),
            "week" | "w" => Some(Self::Week),
            "month" | "m" => Some(Self::Month),
            "all" | "all-time" | "a" => Some(Self::AllTime),
            _ => None,
        }
    }

    /// Get display name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Today => "Today",
            Self::Week => "Last 7 days",
            Self::Month => "Last 30 days",
            Self::AllTime => "All time",
        }
    }

    /// Get the start and end timestamps for this period.
    #[must_use]
    pub fn date_range(&self) -> (DateTime<Utc>, DateTime<Utc>) {
        let now = Utc::now();
        let today = now.date_naive();

        let start_date = match self {
            Self::Today => today,
            Self::Week => today - Duration::days(6),
            Self::Month => today - Duration::days(29),
            Self::AllTime => NaiveDate::MIN,
        };

        (day_start(start_date), now)
    }
}

fn day_start(date: NaiveDate) -> DateTime<Utc> {
    DateTime::from_naive_utc_and_offset(date.and_time(NaiveTime::MIN), Utc)
}

/// Aggregated focus statistics for a period.
#[derive(Debug, Clone, Serialize)]
pub struct FocusReport {
    /// Human-readable period label.
    pub period: String,
    /// Completed work sessions.
    pub work_sessions: usize,
    /// Total seconds of completed work.
    pub work_seconds: i64,
    /// Breaks taken (short and long).
    pub breaks_taken: usize,
    /// Total seconds spent on breaks.
    pub break_seconds: i64,
    /// Work seconds per day, oldest first.
    pub per_day: Vec<(NaiveDate, i64)>,
}

impl FocusReport {
    /// Generate a report for the given period.
    ///
    /// # Errors
    ///
    /// Returns an error if the session query fails.
    pub fn generate(
        storage: &HistoryStorage,
        period: ReportPeriod,
    ) -> Result<Self, LomodoroError> {
        let (start, end) = period.date_range();
        let sessions = storage.in_range(start, end)?;

        let mut report = Self {
            period: period.display_name().to_string(),
            work_sessions: 0,
            work_seconds: 0,
            breaks_taken: 0,
            break_seconds: 0,
            per_day: Vec::new(),
        };

        for session in &sessions {
            if session.phase == Phase::Work {
                report.work_sessions += 1;
                report.work_seconds += session.planned_seconds;

                let day = session.ended_at.date_naive();
                match report.per_day.last_mut() {
                    Some((last_day, seconds)) if *last_day == day => {
                        *seconds += session.planned_seconds;
                    }
                    _ => report.per_day.push((day, session.planned_seconds)),
                }
            } else {
                report.breaks_taken += 1;
                report.break_seconds += session.planned_seconds;
            }
        }

        Ok(report)
    }

    /// The busiest day's work seconds, for scaling bars.
    #[must_use]
    pub fn max_day_seconds(&self) -> i64 {
        self.per_day.iter().map(|(_, s)| *s).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::history::storage::SessionRecord;
    use crate::storage::Database;

    fn storage_with(records: Vec<(Phase, i64)>) -> HistoryStorage {
        let storage = HistoryStorage::with_database(Database::open_in_memory().unwrap());
        for (phase, minutes_ago) in records {
            let ended = Utc::now() - Duration::minutes(minutes_ago);
            let mut record = SessionRecord {
                id: None,
                phase,
                started_at: ended - Duration::minutes(25),
                ended_at: ended,
                planned_seconds: if phase == Phase::Work { 1500 } else { 300 },
                completed: true,
            };
            storage.insert(&mut record).unwrap();
        }
        storage
    }

    #[test]
    fn test_parse_period() {
        assert_eq!(ReportPeriod::parse("today"), Some(ReportPeriod::Today));
        assert_eq!(ReportPeriod::parse("W"), Some(ReportPeriod::Week));
        assert_eq!(ReportPeriod::parse("all"), Some(ReportPeriod::AllTime));
        assert_eq!(ReportPeriod::parse("decade"), None);
    }

    #[test]
    fn test_report_splits_work_and_breaks() {
        let storage = storage_with(vec![
            (Phase::Work, 90),
            (Phase::ShortBreak, 60),
            (Phase::Work, 30),
            (Phase::LongBreak, 10),
        ]);

        let report = FocusReport::generate(&storage, ReportPeriod::Today).unwrap();
        assert_eq!(report.work_sessions, 2);
        assert_eq!(report.work_seconds, 3000);
        assert_eq!(report.breaks_taken, 2);
        assert_eq!(report.break_seconds, 600);
    }

    #[test]
    fn test_week_excludes_old_sessions() {
        let storage = storage_with(vec![
            (Phase::Work, 60 * 24 * 20), // 20 days ago
            (Phase::Work, 30),
        ]);

        let week = FocusReport::generate(&storage, ReportPeriod::Week).unwrap();
        assert_eq!(week.work_sessions, 1);

        let all = FocusReport::generate(&storage, ReportPeriod::AllTime).unwrap();
        assert_eq!(all.work_sessions, 2);
    }

    #[test]
    fn test_per_day_groups() {
        let storage = storage_with(vec![(Phase::Work, 30), (Phase::Work, 20)]);
        let report = FocusReport::generate(&storage, ReportPeriod::Today).unwrap();

        assert_eq!(report.per_day.len(), 1);
        assert_eq!(report.per_day[0].1, 3000);
        assert_eq!(report.max_day_seconds(), 3000);
    }
}
