use chrono::{Duration, Local};
use colored::Colorize;

use crate::features::ambience::MediaEntry;
use crate::features::history::{FocusReport, SessionRecord};
use crate::features::session::timer::{format_duration, render_progress_bar};

/// Format session history as a pretty table.
#[must_use]
pub fn format_history_pretty(records: &[SessionRecord]) -> String {
    if records.is_empty() {
        return "Session history (0 items)\n  No sessions recorded yet".to_string();
    }

    let mut output = format!("Session history ({} items)\n", records.len());
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for record in records {
        let icon = if record.phase.is_break() {
            "☕".normal()
        } else if record.completed {
            "✅".normal()
        } else {
            "⏹".normal()
        };

        let when = record
            .ended_at
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M");

        let line = format!(
            "{} {}  {}  {}",
            icon,
            when.to_string().dimmed(),
            record.phase.display_name().bold(),
            format_duration(Duration::seconds(record.planned_seconds))
        );

        output.push_str(&line);
        output.push('\n');
    }

    output
}

/// Format a focus report as pretty output.
#[must_use]
pub fn format_report_pretty(report: &FocusReport) -> String {
    let mut output = Vec::new();

    output.push(format!("🎯 Focus report: {}", report.period).bold().to_string());
    output.push("─".repeat(60));

    output.push(format!(
        "Work sessions:  {}",
        report.work_sessions.to_string().bold()
    ));
    output.push(format!(
        "Focus time:     {}",
        format_duration(Duration::seconds(report.work_seconds))
    ));
    output.push(format!("Breaks taken:   {}", report.breaks_taken));
    output.push(format!(
        "Break time:     {}",
        format_duration(Duration::seconds(report.break_seconds))
    ));

    if !report.per_day.is_empty() {
        output.push(String::new());
        output.push("Per day:".to_string());

        let max = report.max_day_seconds().max(1);
        for (day, seconds) in &report.per_day {
            #[allow(clippy::cast_precision_loss)]
            let ratio = *seconds as f64 / max as f64;
            output.push(format!(
                "  {}  {} {}",
                day.format("%a %m-%d"),
                render_progress_bar(ratio, 20),
                format_duration(Duration::seconds(*seconds)).dimmed()
            ));
        }
    }

    output.join("\n")
}

/// Format the ambient playlist as pretty output.
#[must_use]
pub fn format_media_pretty(entries: &[MediaEntry]) -> String {
    if entries.is_empty() {
        return "Ambient playlist (0 tracks)\n  No tracks. Add entries to media.json".to_string();
    }

    let mut output = format!("Ambient playlist ({} tracks)\n", entries.len());
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for entry in entries {
        let mut line = format!("♪ {}", entry.title.bold());
        line.push_str(&format!("  {}", entry.credit.cyan()));

        if let Some(ref url) = entry.credit_url {
            line.push_str(&format!("  {}", url.dimmed()));
        }

        output.push_str(&line);
        output.push('\n');
        output.push_str(&format!("    {}\n", entry.path.display().to_string().dimmed()));
    }

    output
}
