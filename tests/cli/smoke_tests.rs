use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn shows_help() {
    Command::new(env!("CARGO_BIN_EXE_build_version"))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--root"))
        .stdout(predicate::str::contains("--git"));
}

#[test]
fn shows_version() {
    Command::new(env!("CARGO_BIN_EXE_build_version"))
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn rejects_unknown_format() {
    Command::new(env!("CARGO_BIN_EXE_build_version"))
        .args(["--format", "yaml"])
        .assert()
        .failure();
}
