//! JSON output formatting for lomodoro.

use serde_json::json;

use crate::error::LomodoroError;
use crate::features::ambience::MediaEntry;
use crate::features::history::{FocusReport, SessionRecord};

/// Format session history as JSON.
///
/// # Errors
///
/// Returns `LomodoroError::Parse` if JSON serialization fails.
pub fn format_history_json(records: &[SessionRecord]) -> Result<String, LomodoroError> {
    let output = json!({
        "count": records.len(),
        "items": records
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format a focus report as JSON.
///
/// # Errors
///
/// Returns `LomodoroError::Parse` if JSON serialization fails.
pub fn format_report_json(report: &FocusReport) -> Result<String, LomodoroError> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Format the ambient playlist as JSON.
///
/// # Errors
///
/// Returns `LomodoroError::Parse` if JSON serialization fails.
pub fn format_media_json(entries: &[MediaEntry]) -> Result<String, LomodoroError> {
    let output = json!({
        "count": entries.len(),
        "items": entries
    });
    Ok(serde_json::to_string_pretty(&output)?)
}
