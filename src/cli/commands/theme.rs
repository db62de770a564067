//! Theme command implementation.

use colored::Colorize;
use serde_json::json;

use crate::cli::args::{OutputFormat, ThemeCommands};
use crate::config::Config;
use crate::error::LomodoroError;
use crate::features::theme::Theme;

/// Execute theme subcommands.
///
/// # Errors
///
/// Returns an error for an unknown theme name or a failed config save.
pub fn theme(
    config: &Config,
    cmd: ThemeCommands,
    format: OutputFormat,
) -> Result<String, LomodoroError> {
    let active = config.general.theme;

    match cmd {
        ThemeCommands::List => match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
                "themes": Theme::all()
                    .iter()
                    .map(Theme::display_name)
                    .collect::<Vec<_>>(),
                "active": active,
            }))?),
            OutputFormat::Pretty => {
                let mut output = vec!["Available themes:".to_string()];
                for theme in Theme::all() {
                    if theme == active {
                        output.push(format!("  * {}", theme.display_name().bold().green()));
                    } else {
                        output.push(format!("    {}", theme.display_name()));
                    }
                }
                Ok(output.join("\n"))
            }
        },

        ThemeCommands::Show => match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({"active": active}))?),
            OutputFormat::Pretty => Ok(format!("Active theme: {}", active.display_name().bold())),
        },

        ThemeCommands::Set { name } => {
            let theme = Theme::parse(&name)
                .ok_or_else(|| LomodoroError::NotFound(format!("Unknown theme: {name}")))?;

            let mut updated = config.clone();
            updated.general.theme = theme;
            updated.save()?;

            match format {
                OutputFormat::Json => {
                    Ok(serde_json::to_string_pretty(&json!({"active": theme}))?)
                }
                OutputFormat::Pretty => {
                    Ok(format!("🎨 Theme set to {}", theme.display_name().bold()))
                }
            }
        }
    }
}
