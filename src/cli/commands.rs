//! Command definitions for the pomodoro timer CLI.
//!
//! Uses clap derive macro for argument parsing.

use clap::{Args, Parser, Subcommand};

// ============================================================================
// CLI Structure
// ============================================================================

/// Pomodoro timer for the terminal
#[derive(Parser, Debug)]
#[command(
    name = "pomodori",
    version,
    about = "A pomodoro timer for the terminal",
    long_about = "A pomodoro timer for the terminal.\n\
                  Alternates 25 minute work sessions with 5 minute breaks and \
                  signals each completion with a notification and a chime.",
    propagate_version = true
)]
pub struct Cli {
    /// Subcommand to execute (defaults to `run`)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

// ============================================================================
// Subcommands
// ============================================================================

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Run the interactive timer
    Run(RunArgs),

    /// Generate shell completion scripts
    Completions {
        /// Shell type for completion script
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

// ============================================================================
// Run Command Arguments
// ============================================================================

/// Arguments for the run command
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct RunArgs {
    /// Start the first work session immediately
    #[arg(short, long)]
    pub start: bool,

    /// Disable the completion chime
    #[arg(long)]
    pub no_sound: bool,

    /// Disable desktop notifications
    #[arg(long)]
    pub no_notify: bool,

    /// Emit one JSON snapshot per line instead of the status line
    #[arg(long)]
    pub json: bool,
}

// ============================================================================
// Tests
// ============================================================================
