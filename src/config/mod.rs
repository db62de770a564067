//! Configuration management for lomodoro.
//!
//! This module handles loading and saving configuration from `~/.lomodoro/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{AmbienceConfig, ColorSetting, Config, GeneralConfig, TimerConfig};
