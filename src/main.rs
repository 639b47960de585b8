//! pomodori - a pomodoro timer for the terminal
//!
//! This tool helps you stay focused using the Pomodoro Technique:
//! - 25 minutes of focused work
//! - 5 minutes of short break
//! - a notification and a chime at every switch

use std::io::IsTerminal;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use tokio::io::BufReader;

use pomodori::app::{App, AppConfig};
use pomodori::cli::{show_error, Cli, Commands, RenderMode, RunArgs, StatusRenderer};
use pomodori::notification::FallbackNotifier;
use pomodori::sound::{get_default_sound, try_create_player, SoundSource};

/// Main entry point
#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    init_tracing(cli.verbose);

    // Execute command
    let code = match execute(cli).await {
        Ok(()) => 0,
        Err(e) => {
            show_error(&format!("{:#}", e));
            1
        }
    };

    // A blocking stdin read may still be pending after Ctrl-C.
    std::process::exit(code);
}

/// Initializes the tracing subscriber for logging.
///
/// Logs go to stderr so they never mix with the status output.
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}

/// Executes the CLI command.
async fn execute(cli: Cli) -> Result<()> {
    if cli.verbose {
        tracing::info!("Verbose mode enabled");
    }

    match cli.command {
        Some(Commands::Run(args)) => run(&args).await,
        Some(Commands::Completions { shell }) => {
            generate_completions(shell);
            Ok(())
        }
        None => run(&RunArgs::default()).await,
    }
}

/// Runs the interactive timer on stdin / stdout.
async fn run(args: &RunArgs) -> Result<()> {
    let config = AppConfig::from(args);

    let stdout = std::io::stdout();
    let mode = RenderMode::detect(config.output, stdout.is_terminal());

    let notifier = config.notifications.then(FallbackNotifier::new);
    let (player, sound_source) = if config.sound {
        (try_create_player(), get_default_sound())
    } else {
        (None, SoundSource::Chime)
    };
    tracing::debug!(sound = sound_source.name(), "Completion sound selected");

    let mut app = App::new(config, notifier, player, StatusRenderer::new(stdout, mode))
        .with_sound_source(sound_source);

    app.run(BufReader::new(tokio::io::stdin())).await
}

/// Generates shell completion scripts.
fn generate_completions(shell: clap_complete::Shell) {
    use clap_complete::generate;
    use std::io;

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    generate(shell, &mut cmd, bin_name, &mut io::stdout());
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_no_args_runs_timer() {
        let cli = Cli::parse_from(["pomodori"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_cli_parse_run() {
        let cli = Cli::parse_from(["pomodori", "run", "--json"]);
        match cli.command {
            Some(Commands::Run(args)) => assert!(args.json),
            _ => panic!("Expected Run command"),
        }
    }

    #[test]
    fn test_cli_debug_assert() {
        Cli::command().debug_assert();
    }
}
