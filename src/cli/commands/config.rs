//! Config command implementation.

use colored::Colorize;

use crate::cli::args::{ConfigCommands, OutputFormat};
use crate::config::{Config, Paths};
use crate::error::LomodoroError;
use crate::output::to_json;

/// Execute config subcommands.
///
/// # Errors
///
/// Returns an error if the config cannot be serialized or saved.
pub fn config(
    config: &Config,
    cmd: ConfigCommands,
    format: OutputFormat,
) -> Result<String, LomodoroError> {
    match cmd {
        ConfigCommands::Show => match format {
            OutputFormat::Json => to_json(config),
            OutputFormat::Pretty => Ok(serde_yaml::to_string(config)?),
        },

        ConfigCommands::Path => {
            let paths = Paths::new()?;
            Ok(paths.config_file.display().to_string())
        }

        ConfigCommands::Reset { force } => {
            if !force {
                return Ok(format!(
                    "{}\n{}",
                    "This will reset all settings to their defaults.".yellow(),
                    "Re-run with --force to confirm.".dimmed()
                ));
            }

            Config::default().save()?;

            match format {
                OutputFormat::Json => to_json(&Config::default()),
                OutputFormat::Pretty => Ok("Settings reset to defaults".to_string()),
            }
        }
    }
}
