#![allow(dead_code)]
// tests/common/mod.rs
//! Shared fixtures for CLI tests.

use std::{fs, path::Path};

use assert_cmd::Command;
use tempfile::TempDir;

/// A throwaway project root.
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn new() -> Self {
        Self { dir: tempfile::tempdir().unwrap() }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn with_version_file(self, content: &str) -> Self {
        fs::write(self.path().join("VERSION"), content).unwrap();
        self
    }

    pub fn with_git_dir(self) -> Self {
        fs::create_dir_all(self.path().join(".git")).unwrap();
        self
    }

    /// Make `sh describe` print `output` as a Git would.
    pub fn with_describe_output(self, output: &str) -> Self {
        self.write_describe(&format!("printf '%s\\n' '{output}'\n"))
    }

    /// Make `sh describe` fail like Git on an untagged history.
    pub fn with_describe_failure(self) -> Self {
        self.write_describe("echo 'fatal: No names found, cannot describe anything.' >&2\nexit 128\n")
    }

    fn write_describe(self, script: &str) -> Self {
        fs::write(self.path().join("describe"), script).unwrap();
        self
    }

    /// The binary pointed at this project, with `sh` standing in for Git.
    pub fn command(&self) -> Command {
        self.command_with_git("sh")
    }

    pub fn command_with_git(&self, git: &str) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_build_version"));
        cmd.arg("--root").arg(self.path()).args(["--git", git]).env_remove("RUST_LOG");
        cmd
    }
}

/// Run to successful completion and return (stdout, stderr).
pub fn run_ok(cmd: &mut Command) -> (String, String) {
    let output = cmd.assert().success().get_output().clone();
    (String::from_utf8(output.stdout).unwrap(), String::from_utf8(output.stderr).unwrap())
}
