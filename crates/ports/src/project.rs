// crates/ports/src/project.rs
use std::path::Path;

use build_version_shared_kernel::Result;

/// Read-only view of the project root.
pub trait ProjectLayout {
    /// The directory every lookup is relative to.
    fn root(&self) -> &Path;

    /// Whether a regular file named `VERSION` exists in the root.
    fn has_version_file(&self) -> bool;

    /// Whether the version-control metadata directory exists in the root.
    fn has_vcs_metadata(&self) -> bool;

    /// Full text of the `VERSION` file.
    fn read_version_file(&self) -> Result<String>;
}
