//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`project`]: What the project root contains
//! - [`describe`]: Asking version control for the nearest tag
//! - [`diagnostics`]: Reporting recoverable failures
//!
//! The use case layer only sees these traits, so it can be exercised
//! with in-memory fakes.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod describe;
pub mod diagnostics;
pub mod project;
