// src/config.rs
use std::path::PathBuf;

use crate::output::OutputFormat;

/// How the project root is found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RootSpec {
    /// A directory given on the command line.
    Explicit(PathBuf),
    /// This many directories above the directory holding the executable.
    AboveExecutable(usize),
}

/// Runtime configuration derived from CLI arguments.
#[derive(Debug, Clone)]
pub struct Config {
    pub root: RootSpec,
    pub git: String,
    pub format: OutputFormat,
}
