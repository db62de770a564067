//! lomodoro - A lofi Pomodoro timer for the terminal
//!
//! This crate provides a Pomodoro timer that cycles work and break phases,
//! plays ambient lofi audio, and records finished sessions.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod features;
pub mod output;
pub mod storage;
pub mod tui;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::LomodoroError;
pub use features::session::{Phase, PhaseDurations, SessionController, SessionMachine};
