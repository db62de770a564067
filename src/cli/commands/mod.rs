//! Command implementations for lomodoro.
//!
//! This module contains the implementation of all CLI commands.

mod config;
mod history;
mod media;
mod start;
mod theme;

pub use config::config;
pub use history::{clear, history, report};
pub use media::media;
pub use start::start;
pub use theme::theme;

use clap::CommandFactory;

use crate::cli::args::Cli;

/// Generate shell completions for the given shell.
#[must_use]
pub fn completions(shell: clap_complete::Shell) -> String {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, "lomodoro", &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}
