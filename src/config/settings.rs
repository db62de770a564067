//! Configuration settings for lomodoro.
//!
//! Settings are loaded from `~/.lomodoro/config.yaml`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::cli::args::OutputFormat;
use crate::config::Paths;
use crate::error::LomodoroError;
use crate::features::theme::Theme;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// General settings.
    pub general: GeneralConfig,
    /// Timer settings.
    pub timer: TimerConfig,
    /// Ambient playback settings.
    pub ambience: AmbienceConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Default output format.
    #[serde(default = "default_output_format")]
    pub default_output: OutputFormat,
    /// Color output setting.
    #[serde(default = "default_color")]
    pub color: ColorSetting,
    /// Active cosmetic theme.
    #[serde(default)]
    pub theme: Theme,
}

/// Color output setting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorSetting {
    /// Auto-detect based on terminal.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

/// Timer settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimerConfig {
    /// Work phase duration in minutes.
    #[serde(default = "default_work_duration")]
    pub work_minutes: u32,
    /// Short break duration in minutes.
    #[serde(default = "default_short_break")]
    pub short_break_minutes: u32,
    /// Long break duration in minutes.
    #[serde(default = "default_long_break")]
    pub long_break_minutes: u32,
    /// Number of completed work sessions before a long break.
    #[serde(default = "default_sessions_until_long_break")]
    pub sessions_until_long_break: u32,
    /// Enable desktop notifications.
    #[serde(default = "default_true")]
    pub notifications: bool,
    /// Play the completion cue at phase boundaries.
    #[serde(default = "default_true")]
    pub notification_sound: bool,
}

/// Ambient playback settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AmbienceConfig {
    /// Playback volume (0-100).
    #[serde(default = "default_volume")]
    pub volume: u8,
    /// Start ambience automatically with the timer.
    #[serde(default = "default_true")]
    pub autoplay: bool,
    /// Override path to the playlist file (defaults to `~/.lomodoro/media.json`).
    #[serde(default)]
    pub playlist: Option<PathBuf>,
    /// Override path to the completion cue (defaults to `~/.lomodoro/sounds/bell.mp3`).
    #[serde(default)]
    pub cue: Option<PathBuf>,
}

// Default value functions for serde
const fn default_output_format() -> OutputFormat {
    OutputFormat::Pretty
}

const fn default_color() -> ColorSetting {
    ColorSetting::Auto
}

const fn default_work_duration() -> u32 {
    25
}

const fn default_short_break() -> u32 {
    5
}

const fn default_long_break() -> u32 {
    15
}

const fn default_sessions_until_long_break() -> u32 {
    4
}

const fn default_volume() -> u8 {
    50
}

const fn default_true() -> bool {
    true
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_output: default_output_format(),
            color: default_color(),
            theme: Theme::default(),
        }
    }
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            work_minutes: default_work_duration(),
            short_break_minutes: default_short_break(),
            long_break_minutes: default_long_break(),
            sessions_until_long_break: default_sessions_until_long_break(),
            notifications: default_true(),
            notification_sound: default_true(),
        }
    }
}

impl Default for AmbienceConfig {
    fn default() -> Self {
        Self {
            volume: default_volume(),
            autoplay: default_true(),
            playlist: None,
            cue: None,
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// A missing config file yields the defaults; a malformed one is an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self, LomodoroError> {
        let paths = Paths::new()?;
        Self::load_from(&paths.config_file)
    }

    /// Load configuration from a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, LomodoroError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            LomodoroError::Config(format!("Failed to read {}: {e}", path.display()))
        })?;

        let config: Self = serde_yaml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save(&self) -> Result<(), LomodoroError> {
        let paths = Paths::new()?;
        paths.ensure_dirs()?;
        self.save_to(&paths.config_file)
    }

    /// Save configuration to a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), LomodoroError> {
        let yaml = serde_yaml::to_string(self)?;
        std::fs::write(path, yaml).map_err(|e| {
            LomodoroError::Config(format!("Failed to write {}: {e}", path.display()))
        })
    }

    /// Validate setting values.
    fn validate(&self) -> Result<(), LomodoroError> {
        if self.ambience.volume > 100 {
            return Err(LomodoroError::Config(format!(
                "ambience.volume must be 0-100, got {}",
                self.ambience.volume
            )));
        }
        if self.timer.sessions_until_long_break == 0 {
            return Err(LomodoroError::Config(
                "timer.sessions_until_long_break must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
