// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod diagnostics;
pub mod filesystem;
pub mod git;
pub mod persistence;
pub mod platform;
