// src/output.rs
use std::io::Write;

use build_version_shared_kernel::{Version, VersionSource};
use build_version_usecase::Resolution;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// `major.minor.patch`
    Plain,
    /// One JSON object with the components and the source.
    Json,
}

#[derive(Serialize)]
struct JsonVersion {
    #[serde(flatten)]
    version: Version,
    source: VersionSource,
}

/// Write the resolved version to `out`.
///
/// No trailing newline is written in either format, so the output can be
/// captured verbatim by build scripts.
pub fn emit<W: Write>(resolution: &Resolution, format: OutputFormat, out: &mut W) -> anyhow::Result<()> {
    match format {
        OutputFormat::Plain => write!(out, "{}", resolution.version)?,
        OutputFormat::Json => serde_json::to_writer(
            &mut *out,
            &JsonVersion { version: resolution.version, source: resolution.source },
        )?,
    }
    out.flush()?;
    Ok(())
}
