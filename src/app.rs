// src/app.rs
use std::{io, path::PathBuf};

use anyhow::Context;
use build_version_infra::{
    diagnostics::StreamSink, filesystem::ProjectDirectory, git::GitDescriber, platform::ProjectRootResolver,
};
use build_version_ports::diagnostics::DiagnosticSink;
use build_version_usecase::{Resolution, ResolveVersion};

use crate::{
    config::{Config, RootSpec},
    output,
};

/// Turn the configured root specification into a concrete directory.
///
/// # Errors
///
/// Fails when the root cannot be determined; this is not a recoverable
/// version-detection problem.
pub fn resolve_root(spec: &RootSpec) -> anyhow::Result<PathBuf> {
    let root = match spec {
        RootSpec::Explicit(dir) => ProjectRootResolver::explicit(dir)?,
        RootSpec::AboveExecutable(levels) => ProjectRootResolver::from_current_exe(*levels)?,
    };
    Ok(root)
}

/// Resolve the version, reporting recoverable failures to `sink`.
///
/// # Errors
///
/// Only root resolution can fail.
pub fn resolve(config: &Config, sink: &dyn DiagnosticSink) -> anyhow::Result<Resolution> {
    let root = resolve_root(&config.root).context("locating project root")?;
    let layout = ProjectDirectory::new(root);
    let describer = GitDescriber::new(&config.git);
    let resolution = ResolveVersion::new(&layout, &describer, sink).run();
    tracing::debug!(version = %resolution.version, source = %resolution.source, "version resolved");
    Ok(resolution)
}

/// Resolve the version and print it to stdout.
///
/// # Errors
///
/// Fails when the project root cannot be located or stdout cannot be written.
pub fn run(config: &Config) -> anyhow::Result<()> {
    let sink = StreamSink::stderr();
    let resolution = resolve(config, &sink)?;
    let stdout = io::stdout();
    output::emit(&resolution, config.format, &mut stdout.lock()).context("writing version to stdout")?;
    Ok(())
}
