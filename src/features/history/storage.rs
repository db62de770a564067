//! Session history storage.
//!
//! Persists finished phases to the local database.

use chrono::{DateTime, Duration, Utc};
use rusqlite::{params, OptionalExtension, Row};
use serde::{Deserialize, Serialize};

use crate::error::LomodoroError;
use crate::features::session::effects::SessionSink;
use crate::features::session::phase::Phase;
use crate::storage::Database;

/// One finished phase.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Database ID (None if not persisted).
    pub id: Option<i64>,
    /// The phase that ran.
    pub phase: Phase,
    /// When the phase began.
    pub started_at: DateTime<Utc>,
    /// When the phase ended.
    pub ended_at: DateTime<Utc>,
    /// Nominal duration in seconds.
    pub planned_seconds: i64,
    /// Whether the phase ran to completion.
    pub completed: bool,
}

/// Storage for session history.
pub struct HistoryStorage {
    db: Database,
}

impl HistoryStorage {
    /// Create a new history storage at the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened.
    pub fn new() -> Result<Self, LomodoroError> {
        let db = Database::open()?;
        Ok(Self { db })
    }

    /// Create storage with an existing database connection.
    #[must_use]
    pub const fn with_database(db: Database) -> Self {
        Self { db }
    }

    /// Insert a finished phase.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert(&self, record: &mut SessionRecord) -> Result<(), LomodoroError> {
        let conn = self.db.connection();

        conn.execute(
            r"INSERT INTO sessions (phase, started_at, ended_at, planned_seconds, completed)
              VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                record.phase.as_str(),
                record.started_at.to_rfc3339(),
                record.ended_at.to_rfc3339(),
                record.planned_seconds,
                record.completed,
            ],
        )
        .map_err(|e| LomodoroError::Database(format!("Failed to insert session: {e}")))?;

        record.id = Some(conn.last_insert_rowid());
        Ok(())
    }

    /// Get a session by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get(&self, id: i64) -> Result<Option<SessionRecord>, LomodoroError> {
        let conn = self.db.connection();

        let mut stmt = conn
            .prepare(
                r"SELECT id, phase, started_at, ended_at, planned_seconds, completed
                  FROM sessions WHERE id = ?1",
            )
            .map_err(|e| LomodoroError::Database(format!("Failed to prepare query: {e}")))?;

        let result = stmt
            .query_row([id], row_to_record)
            .optional()
            .map_err(|e| LomodoroError::Database(format!("Failed to query session: {e}")))?;

        Ok(result)
    }

    /// Most recent sessions, newest first, optionally filtered by phase.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn recent(
        &self,
        limit: usize,
        phase: Option<Phase>,
    ) -> Result<Vec<SessionRecord>, LomodoroError> {
        let conn = self.db.connection();

        let mut stmt = conn
            .prepare(
                r"SELECT id, phase, started_at, ended_at, planned_seconds, completed
                  FROM sessions
                  WHERE (?1 IS NULL OR phase = ?1)
                  ORDER BY ended_at DESC
                  LIMIT ?2",
            )
            .map_err(|e| LomodoroError::Database(format!("Failed to prepare query: {e}")))?;

        #[allow(clippy::cast_possible_wrap)]
        let rows = stmt
            .query_map(
                params![phase.map(|p| p.as_str()), limit as i64],
                row_to_record,
            )
            .map_err(|e| LomodoroError::Database(format!("Failed to query sessions: {e}")))?;

        rows.collect::<Result<Vec<_>, _>>()
            .map_err(|e| LomodoroError::Database(format!("Failed to read session row: {e}")))
    }

    /// Sessions that ended within the given range.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn in_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<SessionRecord>, LomodoroError> {
        let conn = self.db.connection();

        let mut stmt = conn
            .prepare(
                r"SELECT id, phase, started_at, ended_at, planned_seconds, completed
                  FROM sessions
                  WHERE ended_at >= ?1 AND ended_at <= ?2
                  ORDER BY ended_at ASC",
            )
            .map_err(|e| LomodoroError::Database(format!("Failed to prepare query: {e}")))?;

        let rows = stmt
            .query_map(params![start.to_rfc3339(), end.to_rfc3339()], row_to_record)
            .map_err(|e| LomodoroError::Database(format!("Failed to query sessions: {e}")))?;

        rows.collect::<Result<Vec<_>, _>>()
            .map_err(|e| LomodoroError::Database(format!("Failed to read session row: {e}")))
    }

    /// Delete all session history. Returns the number of deleted rows.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn clear(&self) -> Result<usize, LomodoroError> {
        self.db
            .connection()
            .execute("DELETE FROM sessions", [])
            .map_err(|e| LomodoroError::Database(format!("Failed to clear sessions: {e}")))
    }
}

impl SessionSink for HistoryStorage {
    /// Record a finished phase at "now".
    ///
    /// The start time is reconstructed from the nominal duration; pauses
    /// inside the phase are not tracked.
    fn record(&mut self, phase: Phase, planned_seconds: u32) {
        let ended_at = Utc::now();
        let mut record = SessionRecord {
            id: None,
            phase,
            started_at: ended_at - Duration::seconds(i64::from(planned_seconds)),
            ended_at,
            planned_seconds: i64::from(planned_seconds),
            completed: true,
        };

        if let Err(e) = self.insert(&mut record) {
            log::warn!("failed to record session: {e}");
        }
    }
}

fn row_to_record(row: &Row<'_>) -> rusqlite::Result<SessionRecord> {
    let phase_str: String = row.get(1)?;
    let started_at: String = row.get(2)?;
    let ended_at: String = row.get(3)?;

    Ok(SessionRecord {
        id: Some(row.get(0)?),
        phase: parse_phase(&phase_str),
        started_at: parse_timestamp(&started_at),
        ended_at: parse_timestamp(&ended_at),
        planned_seconds: row.get(4)?,
        completed: row.get(5)?,
    })
}

fn parse_phase(s: &str) -> Phase {
    match s {
        "shortbreak" => Phase::ShortBreak,
        "longbreak" => Phase::LongBreak,
        _ => Phase::Work,
    }
}

fn parse_timestamp(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn storage() -> HistoryStorage {
        HistoryStorage::with_database(Database::open_in_memory().unwrap())
    }

    fn sample(phase: Phase, minutes_ago: i64) -> SessionRecord {
        let ended = Utc::now() - Duration::minutes(minutes_ago);
        SessionRecord {
            id: None,
            phase,
            started_at: ended - Duration::minutes(25),
            ended_at: ended,
            planned_seconds: 25 * 60,
            completed: true,
        }
    }

    #[test]
    fn test_insert_assigns_id_and_round_trips() {
        let storage = storage();
        let mut record = sample(Phase::Work, 0);

        storage.insert(&mut record).unwrap();
        let id = record.id.unwrap();

        let loaded = storage.get(id).unwrap().unwrap();
        assert_eq!(loaded.phase, Phase::Work);
        assert_eq!(loaded.planned_seconds, 25 * 60);
        assert!(loaded.completed);
    }

    #[test]
    fn test_recent_orders_newest_first_and_filters() {
        let storage = storage();
        storage.insert(&mut sample(Phase::Work, 30)).unwrap();
        storage.insert(&mut sample(Phase::ShortBreak, 20)).unwrap();
        storage.insert(&mut sample(Phase::Work, 10)).unwrap();

        let all = storage.recent(10, None).unwrap();
        assert_eq!(all.len(), 3);
        assert!(all[0].ended_at > all[1].ended_at);

        let work_only = storage.recent(10, Some(Phase::Work)).unwrap();
        assert_eq!(work_only.len(), 2);
        assert!(work_only.iter().all(|r| r.phase == Phase::Work));

        let limited = storage.recent(1, None).unwrap();
        assert_eq!(limited.len(), 1);
    }

    #[test]
    fn test_in_range() {
        let storage = storage();
        storage.insert(&mut sample(Phase::Work, 60 * 25)).unwrap();
        storage.insert(&mut sample(Phase::Work, 5)).unwrap();

        let recent = storage
            .in_range(Utc::now() - Duration::hours(1), Utc::now())
            .unwrap();
        assert_eq!(recent.len(), 1);
    }

    #[test]
    fn test_sink_records_completed_phase() {
        let mut storage = storage();
        storage.record(Phase::ShortBreak, 5 * 60);

        let all = storage.recent(10, None).unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].phase, Phase::ShortBreak);
        assert_eq!(all[0].planned_seconds, 5 * 60);
    }

    #[test]
    fn test_clear() {
        let storage = storage();
        storage.insert(&mut sample(Phase::Work, 1)).unwrap();
        assert_eq!(storage.clear().unwrap(), 1);
        assert!(storage.recent(10, None).unwrap().is_empty());
    }
}
