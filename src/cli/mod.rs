//! CLI module for the pomodoro timer.
//!
//! This module provides the command-line interface:
//! - `commands`: Command definitions using clap derive
//! - `display`: Status rendering and output formatting

pub mod commands;
pub mod display;

pub use commands::{Cli, Commands, RunArgs};
pub use display::{
    error_line, format_menu, help_text, show_error, OutputMode, RenderMode, StatusRenderer,
};
