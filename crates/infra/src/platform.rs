// crates/infra/src/platform.rs
//! Locating the project root.
//!
//! The root is computed once and passed explicitly to every lookup; the
//! process working directory is never changed.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use build_version_shared_kernel::{InfraResult, InfrastructureError};

/// How many directories above the executable's own directory the project
/// root sits by default.
pub const DEFAULT_ROOT_LEVELS: usize = 3;

/// Resolves the directory that version lookups are relative to.
pub struct ProjectRootResolver;

impl ProjectRootResolver {
    /// Use `root` as given, after checking that it is an existing directory.
    pub fn explicit(root: &Path) -> InfraResult<PathBuf> {
        let resolved = fs::canonicalize(root).map_err(|e| InfrastructureError::ProjectRoot {
            anchor: root.to_path_buf(),
            reason: e.to_string(),
        })?;
        if !resolved.is_dir() {
            return Err(InfrastructureError::ProjectRoot {
                anchor: root.to_path_buf(),
                reason: "not a directory".to_string(),
            });
        }
        Ok(resolved)
    }

    /// `levels` directories above the directory holding the running
    /// executable, with symlinks resolved first.
    pub fn from_current_exe(levels: usize) -> InfraResult<PathBuf> {
        let exe = env::current_exe().map_err(|e| InfrastructureError::ProjectRoot {
            anchor: PathBuf::from("<current executable>"),
            reason: e.to_string(),
        })?;
        let exe = fs::canonicalize(&exe).map_err(|e| InfrastructureError::ProjectRoot {
            anchor: exe.clone(),
            reason: e.to_string(),
        })?;
        Self::above_file(&exe, levels)
    }

    /// `levels` directories above the directory containing `file`.
    pub fn above_file(file: &Path, levels: usize) -> InfraResult<PathBuf> {
        let dir = file.parent().ok_or_else(|| InfrastructureError::ProjectRoot {
            anchor: file.to_path_buf(),
            reason: "path has no parent".to_string(),
        })?;
        let root = dir
            .ancestors()
            .nth(levels)
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or_else(|| InfrastructureError::ProjectRoot {
                anchor: file.to_path_buf(),
                reason: format!("fewer than {levels} parent directories"),
            })?;
        tracing::debug!(root = %root.display(), levels, "project root resolved");
        Ok(root.to_path_buf())
    }
}
