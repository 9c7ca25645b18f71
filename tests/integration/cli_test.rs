//! Tests of the termynal binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::{fixture_arg, run_termynal};

/// Command with colors off and a config path that does not exist.
fn termynal(config_dir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_termynal"));
    cmd.env("NO_COLOR", "1")
        .env("TERMYNAL_CONFIG", config_dir.path().join("config.toml"))
        .env_remove("TERMYNAL_LOG");
    cmd
}

// ============================================================================
// Help and version
// ============================================================================

#[test]
fn help_lists_commands() {
    let dir = TempDir::new().unwrap();
    let (stdout, _stderr, exit_code) = run_termynal(&["--help"], &dir.path().join("c.toml"));
    assert_eq!(exit_code, 0);
    for command in ["play", "render", "inspect", "config", "completions"] {
        assert!(stdout.contains(command), "missing {} in help", command);
    }
}

#[test]
fn play_help_documents_keys() {
    let dir = TempDir::new().unwrap();
    termynal(&dir)
        .args(["play", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Fast-forward the focused terminal"))
        .stdout(predicate::str::contains("--all"));
}

#[test]
fn version_starts_with_package_version() {
    let dir = TempDir::new().unwrap();
    termynal(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(format!(
            "termynal {}",
            env!("CARGO_PKG_VERSION")
        )));
}

// ============================================================================
// render
// ============================================================================

#[test]
fn render_prints_final_transcripts() {
    let dir = TempDir::new().unwrap();
    termynal(&dir)
        .args(["render", &fixture_arg("demo.html")])
        .assert()
        .success()
        .stdout(predicate::str::contains("# terminal 1/2\n$ pip install termynal\n"))
        .stdout(predicate::str::contains("##### 100%\n"))
        .stdout(predicate::str::ends_with("# terminal 2/2\n$ ls\na.txt\n"));
}

#[test]
fn render_flags_override_container_attributes() {
    let dir = TempDir::new().unwrap();
    termynal(&dir)
        .args([
            "render",
            &fixture_arg("demo.html"),
            "--prompt",
            ">",
            "--progress-char",
            "=",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("> pip install termynal\n"))
        // per-line attributes sit above terminal settings
        .stdout(predicate::str::contains("##### 100%\n"));
}

#[test]
fn render_timeline_from_script() {
    let dir = TempDir::new().unwrap();
    termynal(&dir)
        .args(["render", &fixture_arg("demo.toml"), "--timeline"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("    0.100s   1  $ ▋\n"))
        .stdout(predicate::str::ends_with("    0.260s   2  Finished\n"));
}

#[test]
fn render_fast_json_script() {
    let dir = TempDir::new().unwrap();
    termynal(&dir)
        .args(["render", &fixture_arg("demo.json"), "--fast"])
        .assert()
        .success()
        .stdout("$ echo hi\nhi\n");
}

#[test]
fn render_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    termynal(&dir)
        .args(["render", "does-not-exist.html"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to load does-not-exist.html"));
}

#[test]
fn render_rejects_bad_selector() {
    let dir = TempDir::new().unwrap();
    termynal(&dir)
        .args(["render", &fixture_arg("demo.html"), "--selector", "[[["])
        .assert()
        .failure();
}

#[test]
fn config_defaults_apply_below_attributes() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        "[defaults]\nprompt = \"%\"\nprogress_char = \"*\"\n",
    )
    .unwrap();
    termynal(&dir)
        .args(["render", &fixture_arg("demo.json"), "--fast"])
        .assert()
        .success()
        .stdout("% echo hi\nhi\n");
}

// ============================================================================
// inspect
// ============================================================================

#[test]
fn inspect_json_reports_resolved_settings() {
    let dir = TempDir::new().unwrap();
    let output = termynal(&dir)
        .args(["inspect", &fixture_arg("demo.html"), "--json", "--cursor", "_"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let terminals = report.as_array().unwrap();
    assert_eq!(terminals.len(), 2);
    assert_eq!(terminals[0]["config"]["type_delay"], 10.0);
    assert_eq!(terminals[0]["config"]["cursor"], "_");
    assert_eq!(terminals[0]["lines"][1]["kind"], "progress");
    assert_eq!(terminals[1]["lines"][1]["class"], "ok");
}

#[test]
fn inspect_text_lists_lines() {
    let dir = TempDir::new().unwrap();
    termynal(&dir)
        .args(["inspect", &fixture_arg("demo.toml")])
        .assert()
        .success()
        .stdout(predicate::str::contains("terminal 1/1\n"))
        .stdout(predicate::str::contains("  prefix=ty start=100ms type=10ms line=50ms\n"))
        .stdout(predicate::str::contains("    1 input    $ cargo build\n"));
}

// ============================================================================
// completions
// ============================================================================

#[test]
fn completions_bash_mentions_binary() {
    let dir = TempDir::new().unwrap();
    termynal(&dir)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("termynal"));
}

#[test]
fn completions_unknown_shell_is_usage_error() {
    let dir = TempDir::new().unwrap();
    termynal(&dir).args(["completions", "cmd"]).assert().code(2);
}
