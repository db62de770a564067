//! Storage layer for lomodoro.
//!
//! This module provides SQLite-based persistence for completed session
//! history.

mod database;
mod migrations;

pub use database::Database;
