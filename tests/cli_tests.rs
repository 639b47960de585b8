//! Command-line tests for the `pomodori` binary.
//!
//! Input is piped, so the status is written one line per change and the
//! program ends at `q` or end of input.

use assert_cmd::Command;
use predicates::prelude::*;

fn pomodori() -> Command {
    let mut cmd = Command::cargo_bin("pomodori").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

fn run_quiet() -> Command {
    let mut cmd = pomodori();
    cmd.args(["run", "--no-sound", "--no-notify"]);
    cmd
}

#[test]
fn test_quit_shows_initial_status() {
    run_quiet()
        .write_stdin("q\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Work Session  [s] Start"))
        .stdout(predicate::str::contains("🍅 25:00"));
}

#[test]
fn test_end_of_input_exits() {
    run_quiet()
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("🍅 25:00"));
}

#[test]
fn test_default_command_is_run() {
    pomodori()
        .args(["--verbose"])
        .write_stdin("q\n")
        .env("RUST_LOG", "off")
        .timeout(std::time::Duration::from_secs(30))
        .assert()
        .success()
        .stdout(predicate::str::contains("🍅 25:00"));
}

#[test]
fn test_skip_shows_break() {
    run_quiet()
        .write_stdin("k\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Break Session"))
        .stdout(predicate::str::contains("☕ 05:00"));
}

#[test]
fn test_start_and_pause() {
    run_quiet()
        .write_stdin("s\np\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("[p] Pause"))
        .stdout(predicate::str::contains("[s] Resume"))
        .stdout(predicate::str::contains("⏸"));
}

#[test]
fn test_unknown_input_hint() {
    run_quiet()
        .write_stdin("dance\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown input 'dance'"));
}

#[test]
fn test_json_output() {
    run_quiet()
        .arg("--json")
        .write_stdin("q\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""state":"idle""#))
        .stdout(predicate::str::contains(r#""session":"work""#))
        .stdout(predicate::str::contains(r#""remaining_seconds":1500"#))
        .stdout(predicate::str::contains("Work Session").not());
}

#[test]
fn test_completions_bash() {
    pomodori()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pomodori"));
}

#[test]
fn test_help() {
    pomodori()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("pomodoro timer"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn test_run_help_lists_flags() {
    pomodori()
        .args(["run", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--no-sound"))
        .stdout(predicate::str::contains("--no-notify"))
        .stdout(predicate::str::contains("--json"));
}

#[test]
fn test_unknown_subcommand_fails() {
    pomodori()
        .arg("status")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}
