//! Command-line interface for video-catalog.
//!
//! This module provides CLI commands for building and inspecting the
//! catalog without an embedding application.

mod commands;

pub use commands::{Cli, Commands, run_command};
