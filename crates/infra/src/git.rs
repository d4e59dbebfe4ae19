// crates/infra/src/git.rs
use std::{
    ffi::OsString,
    path::{Path, PathBuf},
    process::{Command, Stdio},
};

use build_version_domain::DESCRIBE_COMMAND;
use build_version_ports::describe::TagDescriber;
use build_version_shared_kernel::{InfraResult, InfrastructureError, Result};

/// Default executable name looked up on `PATH`.
pub const DEFAULT_GIT: &str = "git";

/// [`TagDescriber`] that shells out to `git describe`.
#[derive(Debug, Clone)]
pub struct GitDescriber {
    executable: OsString,
}

impl GitDescriber {
    /// `executable` is a bare name searched on `PATH`, or a path.
    pub fn new(executable: impl Into<OsString>) -> Self {
        Self { executable: executable.into() }
    }

    fn locate(&self) -> InfraResult<PathBuf> {
        which::which(&self.executable).map_err(|e| {
            tracing::debug!(executable = ?self.executable, error = %e, "git lookup failed");
            InfrastructureError::GitNotFound { executable: self.executable.to_string_lossy().into_owned() }
        })
    }

    fn run_describe(git: &Path, root: &Path) -> InfraResult<String> {
        tracing::debug!(git = %git.display(), cwd = %root.display(), "running git describe");
        let output = Command::new(git)
            .arg("describe")
            .current_dir(root)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| InfrastructureError::CommandSpawn {
                command: DESCRIBE_COMMAND.to_string(),
                source,
            })?;

        if !output.status.success() {
            return Err(InfrastructureError::CommandFailed {
                command: DESCRIBE_COMMAND.to_string(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let stdout = String::from_utf8(output.stdout)
            .map_err(|_| InfrastructureError::NonUtf8Output { command: DESCRIBE_COMMAND.to_string() })?;
        Ok(stdout.trim().to_string())
    }
}

impl Default for GitDescriber {
    fn default() -> Self {
        Self::new(DEFAULT_GIT)
    }
}

impl TagDescriber for GitDescriber {
    fn describe(&self, root: &Path) -> Result<String> {
        let git = self.locate()?;
        Ok(Self::run_describe(&git, root)?)
    }
}
