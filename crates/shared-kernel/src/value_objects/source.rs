// crates/shared-kernel/src/value_objects/source.rs
use std::fmt;

use serde::{Deserialize, Serialize};

/// Where a resolved version came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VersionSource {
    /// The `VERSION` file in the project root.
    File,
    /// The nearest tag reported by `git describe`.
    Git,
    /// No usable source; the version is `0.0.0`.
    Default,
}

impl VersionSource {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Git => "git",
            Self::Default => "default",
        }
    }
}

impl fmt::Display for VersionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
