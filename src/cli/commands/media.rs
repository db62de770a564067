//! Media command implementation.

use colored::Colorize;
use serde_json::json;

use crate::cli::args::{MediaCommands, OutputFormat};
use crate::config::{Config, Paths};
use crate::error::LomodoroError;
use crate::features::ambience::Playlist;
use crate::output::format_media;

/// Execute media subcommands.
///
/// # Errors
///
/// Returns an error if path resolution or output formatting fails.
pub fn media(
    config: &Config,
    cmd: MediaCommands,
    format: OutputFormat,
) -> Result<String, LomodoroError> {
    let paths = Paths::new()?;
    let playlist_path = config
        .ambience
        .playlist
        .clone()
        .unwrap_or_else(|| paths.playlist.clone());

    let playlist = Playlist::load_or_empty(&playlist_path);

    match cmd {
        MediaCommands::List => format_media(playlist.entries(), format),
        MediaCommands::Check => {
            let missing: Vec<_> = playlist
                .entries()
                .iter()
                .filter(|entry| !entry.path.exists())
                .collect();

            match format {
                OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
                    "tracks": playlist.len(),
                    "missing": missing
                        .iter()
                        .map(|e| e.path.display().to_string())
                        .collect::<Vec<_>>(),
                }))?),
                OutputFormat::Pretty => {
                    if playlist.is_empty() {
                        return Ok(format!(
                            "No playlist at {}\nAdd tracks to enable ambience.",
                            playlist_path.display()
                        ));
                    }

                    if missing.is_empty() {
                        Ok(format!(
                            "{} All {} tracks found",
                            "✅".normal(),
                            playlist.len()
                        ))
                    } else {
                        let mut output = vec![format!(
                            "{} {} of {} tracks missing:",
                            "⚠".yellow(),
                            missing.len(),
                            playlist.len()
                        )];
                        for entry in missing {
                            output.push(format!("  {}", entry.path.display().to_string().red()));
                        }
                        Ok(output.join("\n"))
                    }
                }
            }
        }
    }
}
