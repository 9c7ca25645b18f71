//! Tests of the config subcommands

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use termynal::Config;

fn termynal(config: &std::path::Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_termynal"));
    cmd.env("NO_COLOR", "1").env("TERMYNAL_CONFIG", config);
    cmd
}

#[test]
fn config_path_honors_env_override() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("custom.toml");
    termynal(&path)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::diff(format!("{}\n", path.display())));
}

#[test]
fn config_init_writes_defaults_once() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    termynal(&path)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Created"));
    assert_eq!(Config::load_from(&path).unwrap(), Config::default());

    termynal(&path)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));

    termynal(&path)
        .args(["config", "init", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Overwrote"));
}

#[test]
fn config_show_merges_file_with_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[player]\ntheme = \"ocean\"\n").unwrap();

    termynal(&path)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("theme = \"ocean\""))
        .stdout(predicate::str::contains("type_delay = 90.0"));
}

#[test]
fn invalid_config_is_reported() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[player]\ntheme = \"neon\"\n").unwrap();

    termynal(&path)
        .args(["config", "show"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("unknown theme 'neon'"));
}
