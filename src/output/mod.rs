//! Output formatting for lomodoro.
//!
//! This module provides formatters for displaying session data in various
//! formats.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::error::LomodoroError;
use crate::features::ambience::MediaEntry;
use crate::features::history::{FocusReport, SessionRecord};

pub use json::*;
pub use pretty::*;

/// Format session history based on output format.
///
/// # Errors
///
/// Returns `LomodoroError::Parse` if JSON serialization fails.
pub fn format_history(
    records: &[SessionRecord],
    format: OutputFormat,
) -> Result<String, LomodoroError> {
    match format {
        OutputFormat::Pretty => Ok(format_history_pretty(records)),
        OutputFormat::Json => format_history_json(records),
    }
}

/// Format a focus report based on output format.
///
/// # Errors
///
/// Returns `LomodoroError::Parse` if JSON serialization fails.
pub fn format_report(report: &FocusReport, format: OutputFormat) -> Result<String, LomodoroError> {
    match format {
        OutputFormat::Pretty => Ok(format_report_pretty(report)),
        OutputFormat::Json => format_report_json(report),
    }
}

/// Format the ambient playlist based on output format.
///
/// # Errors
///
/// Returns `LomodoroError::Parse` if JSON serialization fails.
pub fn format_media(entries: &[MediaEntry], format: OutputFormat) -> Result<String, LomodoroError> {
    match format {
        OutputFormat::Pretty => Ok(format_media_pretty(entries)),
        OutputFormat::Json => format_media_json(entries),
    }
}

/// Serialize any value as pretty JSON.
///
/// # Errors
///
/// Returns `LomodoroError::Parse` if serialization fails.
pub fn to_json<T: serde::Serialize>(value: &T) -> Result<String, LomodoroError> {
    Ok(serde_json::to_string_pretty(value)?)
}
