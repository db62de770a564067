use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "lomodoro")]
#[command(about = "A lofi Pomodoro timer for the terminal")]
#[command(long_about = "lomodoro - A lofi Pomodoro timer for the terminal

A Pomodoro timer that cycles work and break phases, plays ambient lofi
audio while you focus, and records every finished session.

QUICK START:
  lomodoro start            Run the timer (25/5/15, long break every 4)
  lomodoro start -d 50m     Work sessions of 50 minutes
  lomodoro report           See this week's focus time
  lomodoro media list       Inspect the ambient playlist

DATA:
  Configuration lives in ~/.lomodoro/config.yaml, the ambient playlist
  in ~/.lomodoro/media.json, and session history in ~/.lomodoro/lomodoro.db.

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  lomodoro <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output (default),
    /// or 'json' for machine-readable output suitable for scripting.
    #[arg(short, long, value_enum, default_value = "pretty", global = true)]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the interactive timer
    ///
    /// Opens the timer screen and starts at the work phase. Phases cycle
    /// automatically: each finished work session earns a short break, and
    /// every Nth one a long break. Ambient audio plays while the timer
    /// runs and ducks around the completion cue.
    ///
    /// # Keys
    ///
    ///   space    start / pause        m    mute / unmute ambience
    ///   r        reset current phase  p    play / pause ambience
    ///   w s l    switch phase         n    next ambient track
    ///   + -      ambience volume      q    quit
    ///
    /// # Examples
    ///
    ///   lomodoro start                 Classic 25/5/15 Pomodoro
    ///   lomodoro start -d 50m -b 10m   Longer sessions
    ///   lomodoro start --mode short    Begin with a short break
    ///   lomodoro start --muted         Keep the ambience silent
    #[command(alias = "run")]
    Start(StartArgs),

    /// View session history
    ///
    /// Shows recently finished phases, newest first.
    History {
        /// Number of sessions to show
        #[arg(long, short = 'n', default_value = "10")]
        limit: usize,

        /// Filter by phase (work, short-break, long-break)
        #[arg(long, short = 'p')]
        phase: Option<String>,
    },

    /// Generate a focus report
    ///
    /// Summary of focus time, sessions, and breaks for a period.
    Report {
        /// Time period (today, week, month, all)
        #[arg(long, short = 'p', default_value = "week")]
        period: String,
    },

    /// Inspect the ambient playlist
    Media(MediaArgs),

    /// Manage the cosmetic theme
    Theme(ThemeArgs),

    /// Manage configuration
    Config(ConfigArgs),

    /// Clear session history
    ///
    /// Delete all recorded sessions (use with caution).
    Clear {
        /// Skip confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Generate shell completions
    ///
    /// # Examples
    ///
    ///   lomodoro completions zsh > ~/.zfunc/_lomodoro
    ///   lomodoro completions bash > /etc/bash_completion.d/lomodoro
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Arguments for the start command.
#[derive(Args)]
pub struct StartArgs {
    /// Phase to begin with (work, short-break, long-break)
    #[arg(long, short = 'm', default_value = "work")]
    pub mode: String,

    /// Work phase duration (e.g., 25m, 1h, 50)
    #[arg(long, short = 'd')]
    pub duration: Option<String>,

    /// Short break duration (e.g., 5m)
    #[arg(long, short = 'b')]
    pub short_break: Option<String>,

    /// Long break duration (e.g., 15m)
    #[arg(long, short = 'l')]
    pub long_break: Option<String>,

    /// Work sessions before a long break
    #[arg(long, short = 's')]
    pub sessions: Option<u32>,

    /// Start with ambience muted
    #[arg(long)]
    pub muted: bool,

    /// Disable the completion cue
    #[arg(long)]
    pub no_sound: bool,

    /// Disable desktop notifications
    #[arg(long)]
    pub no_notify: bool,
}

/// Arguments for media subcommands.
#[derive(Args)]
pub struct MediaArgs {
    #[command(subcommand)]
    pub command: MediaCommands,
}

#[derive(Subcommand)]
pub enum MediaCommands {
    /// List playlist tracks
    List,

    /// Verify that every track's audio file exists
    Check,
}

/// Arguments for theme subcommands.
#[derive(Args)]
pub struct ThemeArgs {
    #[command(subcommand)]
    pub command: ThemeCommands,
}

#[derive(Subcommand)]
pub enum ThemeCommands {
    /// List available themes
    List,

    /// Show the active theme
    Show,

    /// Set the active theme
    Set {
        /// Theme name (default, ghibli, myanmar, blank)
        name: String,
    },
}

/// Arguments for config subcommands.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the active configuration
    Show,

    /// Print the configuration file path
    Path,

    /// Reset all settings to their defaults
    Reset {
        /// Skip confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}
