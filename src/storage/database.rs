//! `SQLite` database connection and operations.
//!
//! The database is stored at `~/.lomodoro/lomodoro.db` and holds the
//! completed session history.

use rusqlite::Connection;

use crate::config::Paths;
use crate::error::LomodoroError;

use super::migrations;

/// Database connection wrapper.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the database at the default location.
    ///
    /// Creates the database file and runs migrations if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or migrations fail.
    pub fn open() -> Result<Self, LomodoroError> {
        let paths = Paths::new()?;
        paths.ensure_dirs()?;
        Self::open_at(&paths.database)
    }

    /// Open the database at a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or migrations fail.
    pub fn open_at(path: &std::path::Path) -> Result<Self, LomodoroError> {
        let conn = Connection::open(path).map_err(|e| {
            LomodoroError::Database(format!("Failed to open database {}: {e}", path.display()))
        })?;

        conn.execute_batch("PRAGMA busy_timeout = 5000;")
            .map_err(|e| LomodoroError::Database(format!("Failed to set busy timeout: {e}")))?;

        let db = Self { conn };
        db.migrate()?;

        Ok(db)
    }

    /// Open an in-memory database (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or migrations fail.
    pub fn open_in_memory() -> Result<Self, LomodoroError> {
        let conn = Connection::open_in_memory().map_err(|e| {
            LomodoroError::Database(format!("Failed to open in-memory database: {e}"))
        })?;

        let db = Self { conn };
        db.migrate()?;

        Ok(db)
    }

    /// Run database migrations.
    fn migrate(&self) -> Result<(), LomodoroError> {
        migrations::run(&self.conn)
    }

    /// Get the current schema version.
    ///
    /// # Errors
    ///
    /// Returns an error if the version cannot be read.
    pub fn schema_version(&self) -> Result<i32, LomodoroError> {
        migrations::get_version(&self.conn)
    }

    /// Access the underlying connection.
    #[must_use]
    pub const fn connection(&self) -> &Connection {
        &self.conn
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_open_migrates() {
        let db = Database::open_in_memory().unwrap();
        assert!(db.schema_version().unwrap() >= 1);
    }

    #[test]
    fn test_open_at_creates_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("lomodoro.db");

        let db = Database::open_at(&path).unwrap();
        assert!(path.exists());
        assert!(db.schema_version().unwrap() >= 1);

        // Reopening an existing database is a no-op for migrations.
        drop(db);
        let db = Database::open_at(&path).unwrap();
        assert!(db.schema_version().unwrap() >= 1);
    }
}
