//! Command-line interface for lomodoro.

pub mod args;
pub mod commands;
