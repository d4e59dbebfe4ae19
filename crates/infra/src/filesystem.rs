// crates/infra/src/filesystem.rs
use std::path::{Path, PathBuf};

use build_version_domain::VERSION_FILE_NAME;
use build_version_ports::project::ProjectLayout;
use build_version_shared_kernel::Result;

use crate::persistence::FileReader;

/// Directory whose presence marks a Git checkout.
pub const VCS_METADATA_DIR: &str = ".git";

/// [`ProjectLayout`] backed by a directory on disk.
#[derive(Debug, Clone)]
pub struct ProjectDirectory {
    root: PathBuf,
}

impl ProjectDirectory {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn version_file(&self) -> PathBuf {
        self.root.join(VERSION_FILE_NAME)
    }
}

impl ProjectLayout for ProjectDirectory {
    fn root(&self) -> &Path {
        &self.root
    }

    fn has_version_file(&self) -> bool {
        self.version_file().is_file()
    }

    // A `.git` file (worktrees, submodules) does not count.
    fn has_vcs_metadata(&self) -> bool {
        self.root.join(VCS_METADATA_DIR).is_dir()
    }

    fn read_version_file(&self) -> Result<String> {
        Ok(FileReader::read_to_string(&self.version_file())?)
    }
}
