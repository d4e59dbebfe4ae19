//! # Domain
//!
//! Pure interpretation of version text. Nothing here touches the
//! filesystem or spawns processes.
//!
//! - [`version_file`]: contents of a `VERSION` file
//! - [`describe`]: output of `git describe`

#![allow(clippy::multiple_crate_versions)]

pub mod describe;
pub mod version_file;

pub use describe::{DESCRIBE_COMMAND, parse_describe_output};
pub use version_file::{COMPONENT_COUNT, VERSION_FILE_NAME, parse_version_file};
