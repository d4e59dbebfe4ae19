// crates/ports/src/describe.rs
use std::path::Path;

use build_version_shared_kernel::Result;

/// Port for querying the nearest descriptive tag of a working tree.
pub trait TagDescriber {
    /// Run the describe operation in `root` and return its trimmed stdout.
    fn describe(&self, root: &Path) -> Result<String>;
}
