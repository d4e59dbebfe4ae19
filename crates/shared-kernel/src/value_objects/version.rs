// crates/shared-kernel/src/value_objects/version.rs
use std::fmt;

use serde::{Deserialize, Serialize};

/// A `major.minor.patch` triple.
///
/// Every component is always present; an unspecified component is zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    #[inline]
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self { major, minor, patch }
    }

    /// The fallback used whenever no source yields a version.
    #[inline]
    pub const fn zero() -> Self {
        Self::new(0, 0, 0)
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.major == 0 && self.minor == 0 && self.patch == 0
    }
}

impl From<[u64; 3]> for Version {
    fn from([major, minor, patch]: [u64; 3]) -> Self {
        Self::new(major, minor, patch)
    }
}

impl From<Version> for [u64; 3] {
    fn from(v: Version) -> Self {
        [v.major, v.minor, v.patch]
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}
