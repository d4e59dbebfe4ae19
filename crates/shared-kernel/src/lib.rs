// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{
    BuildVersionError, DomainError, DomainResult, ErrorContext, InfraResult, InfrastructureError,
    Result,
};

pub mod error;
pub mod value_objects;

pub use value_objects::{Version, VersionSource};
