// crates/domain/src/version_file.rs
use build_version_shared_kernel::{DomainError, DomainResult, Version};

/// Name of the version file looked up in the project root.
pub const VERSION_FILE_NAME: &str = "VERSION";

/// Number of components in a version triple.
pub const COMPONENT_COUNT: usize = 3;

/// Parse the text of a `VERSION` file.
///
/// The content is trimmed and split on `.`. Only the first three components
/// are considered; missing trailing components are zero and anything past
/// the third is ignored without being validated.
///
/// # Errors
///
/// Returns [`DomainError::InvalidComponent`] when a retained component is
/// not a non-negative integer (this includes empty components).
pub fn parse_version_file(content: &str) -> DomainResult<Version> {
    let mut parts = [0u64; COMPONENT_COUNT];
    for (slot, raw) in parts.iter_mut().zip(content.trim().split('.')) {
        *slot = parse_component(raw)?;
    }
    Ok(Version::from(parts))
}

fn parse_component(raw: &str) -> DomainResult<u64> {
    let trimmed = raw.trim();
    trimmed.parse::<u64>().map_err(|e| DomainError::InvalidComponent {
        component: trimmed.to_string(),
        reason: e.to_string(),
    })
}
