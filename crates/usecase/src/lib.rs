//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`orchestrator`]: Picks a version source and folds failures into `0.0.0`
//! - [`dto`]: Data transfer objects for use case boundaries
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod dto;
pub mod orchestrator;

pub use dto::Resolution;
pub use orchestrator::ResolveVersion;
