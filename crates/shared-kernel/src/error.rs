// crates/shared-kernel/src/error.rs
use std::{path::PathBuf, process::ExitStatus};

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum BuildVersionError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<BuildVersionError>,
    },

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Infrastructure(#[from] InfrastructureError),
}

pub type Result<T> = std::result::Result<T, BuildVersionError>;

/// Errors raised while interpreting version text.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("invalid version component '{component}': {reason}")]
    InvalidComponent { component: String, reason: String },

    #[error("Cannot parse {command} output: {output}")]
    UnrecognizedDescribe { command: String, output: String },
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Errors raised while talking to the filesystem or external processes.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("open '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The Git executable could not be located.
    #[error("Git not found.")]
    GitNotFound { executable: String },

    #[error("{command}: {source}")]
    CommandSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{command}: exited with {status}{suffix}", suffix = stderr_suffix(.stderr))]
    CommandFailed {
        command: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("{command}: output is not valid UTF-8")]
    NonUtf8Output { command: String },

    #[error("cannot resolve project root from '{anchor}': {reason}")]
    ProjectRoot { anchor: PathBuf, reason: String },

    #[error("Output error: {message}")]
    OutputError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

pub type InfraResult<T> = std::result::Result<T, InfrastructureError>;

fn stderr_suffix(stderr: &str) -> String {
    if stderr.is_empty() { String::new() } else { format!(" ({stderr})") }
}

impl From<std::io::Error> for InfrastructureError {
    fn from(err: std::io::Error) -> Self {
        Self::OutputError { message: err.to_string(), source: Some(Box::new(err)) }
    }
}

impl From<std::io::Error> for BuildVersionError {
    fn from(err: std::io::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<BuildVersionError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| BuildVersionError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| BuildVersionError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
