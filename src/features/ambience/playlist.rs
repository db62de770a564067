//! Ambient media playlist.
//!
//! The playlist is a JSON array of track entries stored at
//! `~/.lomodoro/media.json`:
//!
//! ```json
//! [
//!   {
//!     "id": "rainy-cafe",
//!     "title": "Rainy Cafe",
//!     "credit": "Some Artist",
//!     "creditUrl": "https://example.com/artist",
//!     "path": "media/rainy-cafe.mp3"
//!   }
//! ]
//! ```
//!
//! Relative `path` values resolve against the playlist file's directory.

use std::path::{Path, PathBuf};

use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::error::LomodoroError;

/// One ambient track.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaEntry {
    /// Stable track identifier.
    pub id: String,
    /// Track title.
    pub title: String,
    /// Artist or source credit.
    pub credit: String,
    /// Optional link for the credit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credit_url: Option<String>,
    /// Path to the audio file.
    pub path: PathBuf,
}

/// The loaded ambient playlist.
#[derive(Debug, Clone, Default)]
pub struct Playlist {
    entries: Vec<MediaEntry>,
}

impl Playlist {
    /// Load a playlist from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, LomodoroError> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            LomodoroError::Config(format!("Failed to read {}: {e}", path.display()))
        })?;

        let mut entries: Vec<MediaEntry> = serde_json::from_str(&contents)?;

        // Resolve relative track paths against the playlist's directory.
        if let Some(base) = path.parent() {
            for entry in &mut entries {
                if entry.path.is_relative() {
                    entry.path = base.join(&entry.path);
                }
            }
        }

        Ok(Self { entries })
    }

    /// Load a playlist, degrading to an empty one when the file is
    /// missing or malformed. Every ambience operation on an empty
    /// playlist is a no-op.
    #[must_use]
    pub fn load_or_empty(path: &Path) -> Self {
        if !path.exists() {
            log::info!("no ambient playlist at {}", path.display());
            return Self::default();
        }

        match Self::load(path) {
            Ok(playlist) => playlist,
            Err(e) => {
                log::warn!("failed to load ambient playlist: {e}");
                Self::default()
            }
        }
    }

    /// Build a playlist from entries directly (useful for testing).
    #[must_use]
    pub fn from_entries(entries: Vec<MediaEntry>) -> Self {
        Self { entries }
    }

    /// Whether the playlist has no tracks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of tracks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// All tracks, in file order.
    #[must_use]
    pub fn entries(&self) -> &[MediaEntry] {
        &self.entries
    }

    /// Pick a random track.
    #[must_use]
    pub fn random(&self) -> Option<&MediaEntry> {
        self.entries.choose(&mut rand::thread_rng())
    }

    /// Pick a random track other than the given one, when possible.
    #[must_use]
    pub fn random_other(&self, current_id: &str) -> Option<&MediaEntry> {
        let others: Vec<&MediaEntry> = self
            .entries
            .iter()
            .filter(|e| e.id != current_id)
            .collect();

        others
            .choose(&mut rand::thread_rng())
            .copied()
            .or_else(|| self.random())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
        {"id": "a", "title": "Track A", "credit": "Artist A", "creditUrl": "https://a.example", "path": "/music/a.mp3"},
        {"id": "b", "title": "Track B", "credit": "Artist B", "path": "b.mp3"}
    ]"#;

    #[test]
    fn test_load_resolves_relative_paths() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("media.json");
        std::fs::write(&path, SAMPLE).unwrap();

        let playlist = Playlist::load(&path).unwrap();
        assert_eq!(playlist.len(), 2);
        assert_eq!(playlist.entries()[0].path, PathBuf::from("/music/a.mp3"));
        assert_eq!(playlist.entries()[1].path, tmp.path().join("b.mp3"));
        assert_eq!(
            playlist.entries()[0].credit_url.as_deref(),
            Some("https://a.example")
        );
        assert_eq!(playlist.entries()[1].credit_url, None);
    }

    #[test]
    fn test_missing_file_degrades_to_empty() {
        let tmp = tempfile::tempdir().unwrap();
        let playlist = Playlist::load_or_empty(&tmp.path().join("missing.json"));
        assert!(playlist.is_empty());
        assert!(playlist.random().is_none());
    }

    #[test]
    fn test_malformed_file_degrades_to_empty() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("media.json");
        std::fs::write(&path, "not json").unwrap();

        let playlist = Playlist::load_or_empty(&path);
        assert!(playlist.is_empty());
    }

    #[test]
    fn test_random_other_avoids_current() {
        let entries = vec![
            MediaEntry {
                id: "a".to_string(),
                title: "A".to_string(),
                credit: "x".to_string(),
                credit_url: None,
                path: PathBuf::from("a.mp3"),
            },
            MediaEntry {
                id: "b".to_string(),
                title: "B".to_string(),
                credit: "x".to_string(),
                credit_url: None,
                path: PathBuf::from("b.mp3"),
            },
        ];
        let playlist = Playlist::from_entries(entries);

        for _ in 0..20 {
            assert_eq!(playlist.random_other("a").map(|e| e.id.as_str()), Some("b"));
        }
    }

    #[test]
    fn test_random_other_with_single_track() {
        let playlist = Playlist::from_entries(vec![MediaEntry {
            id: "only".to_string(),
            title: "Only".to_string(),
            credit: "x".to_string(),
            credit_url: None,
            path: PathBuf::from("only.mp3"),
        }]);

        assert_eq!(
            playlist.random_other("only").map(|e| e.id.as_str()),
            Some("only")
        );
    }
}
