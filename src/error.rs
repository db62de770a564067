//! Error types for lomodoro.

use thiserror::Error;

/// Errors surfaced by lomodoro commands.
///
/// Collaborator failures inside a running timer (audio, notifications) are
/// deliberately NOT represented here: those degrade to logged no-ops so a
/// missing speaker can never corrupt a phase transition.
#[derive(Debug, Error)]
pub enum LomodoroError {
    /// Configuration loading or validation failed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Database operation failed.
    #[error("Database error: {0}")]
    Database(String),

    /// Requested item was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// JSON serialization or deserialization failed.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Settings file could not be parsed.
    #[error("Settings error: {0}")]
    Settings(#[from] serde_yaml::Error),

    /// Underlying I/O failure.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
