//! CLI module for the reminder.
//!
//! This module provides the command-line interface:
//! - `commands`: Option definitions using clap derive

pub mod commands;

pub use commands::Cli;
