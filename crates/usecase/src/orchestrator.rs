use build_version_domain::{parse_describe_output, parse_version_file};
use build_version_ports::{describe::TagDescriber, diagnostics::DiagnosticSink, project::ProjectLayout};
use build_version_shared_kernel::{Result, Version, VersionSource};

use crate::dto::Resolution;

const FILE_PREFIX: &str = "Ignoring file";
const GIT_PREFIX: &str = "Ignoring Git tags";

/// Resolves the project version from the first available source.
///
/// Sources are tried in order: the `VERSION` file, then version-control
/// tags. Only the first source that exists is consulted. If it fails the
/// reason goes to the diagnostic sink and the result is `0.0.0`.
pub struct ResolveVersion<'a> {
    layout: &'a dyn ProjectLayout,
    describer: &'a dyn TagDescriber,
    sink: &'a dyn DiagnosticSink,
}

impl<'a> ResolveVersion<'a> {
    pub fn new(
        layout: &'a dyn ProjectLayout,
        describer: &'a dyn TagDescriber,
        sink: &'a dyn DiagnosticSink,
    ) -> Self {
        Self { layout, describer, sink }
    }

    pub fn run(&self) -> Resolution {
        if self.layout.has_version_file() {
            tracing::debug!(root = %self.layout.root().display(), "using VERSION file");
            return self.settle(VersionSource::File, FILE_PREFIX, self.from_file());
        }
        if self.layout.has_vcs_metadata() {
            tracing::debug!(root = %self.layout.root().display(), "using git tags");
            return self.settle(VersionSource::Git, GIT_PREFIX, self.from_tags());
        }
        tracing::debug!("no version source found");
        Resolution::fallback()
    }

    fn from_file(&self) -> Result<Version> {
        let content = self.layout.read_version_file()?;
        Ok(parse_version_file(&content)?)
    }

    fn from_tags(&self) -> Result<Version> {
        let output = self.describer.describe(self.layout.root())?;
        Ok(parse_describe_output(&output)?)
    }

    fn settle(&self, source: VersionSource, prefix: &str, outcome: Result<Version>) -> Resolution {
        match outcome {
            Ok(version) => Resolution { version, source },
            Err(e) => {
                self.sink.report(&format!("{prefix}: {e}"));
                Resolution::fallback()
            }
        }
    }
}
