//! Path resolution for lomodoro configuration and data files.
//!
//! All lomodoro data is stored in `~/.lomodoro/`:
//! - `config.yaml` - Main configuration file
//! - `lomodoro.db` - SQLite database for session history
//! - `media.json` - Ambient playlist (track metadata and file paths)
//! - `media/` - Local ambient audio files
//! - `sounds/` - Completion cue audio (`bell.mp3` by default)

use std::path::PathBuf;

use crate::error::LomodoroError;

/// Paths to lomodoro configuration and data files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.lomodoro/`
    pub root: PathBuf,
    /// Config file: `~/.lomodoro/config.yaml`
    pub config_file: PathBuf,
    /// Database file: `~/.lomodoro/lomodoro.db`
    pub database: PathBuf,
    /// Ambient playlist: `~/.lomodoro/media.json`
    pub playlist: PathBuf,
    /// Ambient audio directory: `~/.lomodoro/media/`
    pub media: PathBuf,
    /// Cue sound directory: `~/.lomodoro/sounds/`
    pub sounds: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, LomodoroError> {
        let home = std::env::var("HOME").map_err(|_| {
            LomodoroError::Config("Could not determine home directory".to_string())
        })?;

        Ok(Self::with_root(PathBuf::from(home).join(".lomodoro")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            database: root.join("lomodoro.db"),
            playlist: root.join("media.json"),
            media: root.join("media"),
            sounds: root.join("sounds"),
            root,
        }
    }

    /// Ensure all data directories exist, creating them if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if a directory cannot be created.
    pub fn ensure_dirs(&self) -> Result<(), LomodoroError> {
        for dir in [&self.root, &self.media, &self.sounds] {
            std::fs::create_dir_all(dir).map_err(|e| {
                LomodoroError::Config(format!("Failed to create {}: {e}", dir.display()))
            })?;
        }
        Ok(())
    }

    /// Default completion cue path: `~/.lomodoro/sounds/bell.mp3`.
    #[must_use]
    pub fn default_cue(&self) -> PathBuf {
        self.sounds.join("bell.mp3")
    }

    /// Whether the root directory exists yet.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.root.exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_root_layout() {
        let paths = Paths::with_root(PathBuf::from("/tmp/lomodoro-test"));
        assert_eq!(
            paths.config_file,
            PathBuf::from("/tmp/lomodoro-test/config.yaml")
        );
        assert_eq!(
            paths.database,
            PathBuf::from("/tmp/lomodoro-test/lomodoro.db")
        );
        assert_eq!(paths.playlist, PathBuf::from("/tmp/lomodoro-test/media.json"));
        assert_eq!(
            paths.default_cue(),
            PathBuf::from("/tmp/lomodoro-test/sounds/bell.mp3")
        );
    }

    #[test]
    fn test_ensure_dirs_creates_tree() {
        let tmp = tempfile::tempdir().unwrap();
        let paths = Paths::with_root(tmp.path().join("data"));

        assert!(!paths.exists());
        paths.ensure_dirs().unwrap();
        assert!(paths.root.is_dir());
        assert!(paths.media.is_dir());
        assert!(paths.sounds.is_dir());
    }
}
