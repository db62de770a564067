//! History, report, and clear command implementations.

use colored::Colorize;

use crate::cli::args::OutputFormat;
use crate::error::LomodoroError;
use crate::features::history::{FocusReport, HistoryStorage, ReportPeriod};
use crate::features::session::Phase;
use crate::output::{format_history, format_report};

/// Execute the history command.
///
/// # Errors
///
/// Returns an error if the phase filter is unknown or the query fails.
pub fn history(
    limit: usize,
    phase: Option<&str>,
    format: OutputFormat,
) -> Result<String, LomodoroError> {
    let phase = phase
        .map(|s| {
            Phase::parse(s).ok_or_else(|| LomodoroError::Config(format!("Unknown phase: {s}")))
        })
        .transpose()?;

    let storage = HistoryStorage::new()?;
    let records = storage.recent(limit, phase)?;

    format_history(&records, format)
}

/// Execute the report command.
///
/// # Errors
///
/// Returns an error if the period is unknown or the query fails.
pub fn report(period: &str, format: OutputFormat) -> Result<String, LomodoroError> {
    let period = ReportPeriod::parse(period)
        .ok_or_else(|| LomodoroError::Config(format!("Unknown report period: {period}")))?;

    let storage = HistoryStorage::new()?;
    let report = FocusReport::generate(&storage, period)?;

    format_report(&report, format)
}

/// Execute the clear command.
///
/// # Errors
///
/// Returns an error if the delete fails.
pub fn clear(force: bool, format: OutputFormat) -> Result<String, LomodoroError> {
    if !force {
        return Ok(format!(
            "{}\n{}",
            "This will delete all recorded sessions.".yellow(),
            "Re-run with --force to confirm.".dimmed()
        ));
    }

    let storage = HistoryStorage::new()?;
    let deleted = storage.clear()?;

    match format {
        OutputFormat::Json => Ok(format!("{{\"deleted\": {deleted}}}")),
        OutputFormat::Pretty => Ok(format!("🗑  Deleted {deleted} recorded sessions")),
    }
}
