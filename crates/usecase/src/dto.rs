// crates/usecase/src/dto.rs
use build_version_shared_kernel::{Version, VersionSource};

/// Outcome of a version resolution run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub version: Version,
    pub source: VersionSource,
}

impl Resolution {
    pub const fn fallback() -> Self {
        Self { version: Version::zero(), source: VersionSource::Default }
    }
}
