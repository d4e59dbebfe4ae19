// crates/shared-kernel/src/value_objects/mod.rs
pub mod source;
pub mod version;

pub use source::VersionSource;
pub use version::Version;
