// crates/domain/src/describe.rs
use std::sync::OnceLock;

use build_version_shared_kernel::{DomainError, DomainResult, Version};
use regex::Regex;

/// Command line reported in diagnostics for the describe step.
pub const DESCRIBE_COMMAND: &str = "git describe";

// v<major>.<minor>, then an optional `.<patch>` or `-<commits>`.
// Possible inputs: v1.2, v1.2-1-g8f4e68a, v1.2.3-1-g8f4e68a
const DESCRIBE_PATTERN: &str = r"^v([0-9]+)\.([0-9]+)(?:[-.]([0-9]+))?";

fn describe_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(DESCRIBE_PATTERN).expect("describe pattern is valid"))
}

/// Parse the trimmed output of `git describe` into a version.
///
/// On a two-part tag the commit count after `-` becomes the patch number.
/// On a three-part tag the literal patch field is used and the commit count
/// is ignored.
///
/// # Errors
///
/// Returns [`DomainError::UnrecognizedDescribe`] if the text does not start
/// with a `v<major>.<minor>` tag, and [`DomainError::InvalidComponent`] if a
/// number does not fit in a `u64`.
pub fn parse_describe_output(output: &str) -> DomainResult<Version> {
    let caps = describe_regex().captures(output).ok_or_else(|| DomainError::UnrecognizedDescribe {
        command: DESCRIBE_COMMAND.to_string(),
        output: output.to_string(),
    })?;

    let mut parts = [0u64; 3];
    for (idx, slot) in parts.iter_mut().enumerate() {
        if let Some(m) = caps.get(idx + 1) {
            *slot = m.as_str().parse().map_err(|e: std::num::ParseIntError| {
                DomainError::InvalidComponent {
                    component: m.as_str().to_string(),
                    reason: e.to_string(),
                }
            })?;
        }
    }
    Ok(Version::from(parts))
}
