use std::path::PathBuf;

use build_version_infra::{git::DEFAULT_GIT, platform::DEFAULT_ROOT_LEVELS};
use clap::Parser;

use super::value_enum::CliOutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "build_version",
    version = crate::VERSION,
    about = "Print the project version from a VERSION file or Git tags"
)]
pub struct Args {
    /// Project root directory (default: derived from the executable location)
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Directories to ascend from the executable's directory to reach the project root
    #[arg(long, value_name = "N", default_value_t = DEFAULT_ROOT_LEVELS, conflicts_with = "root")]
    pub levels: usize,

    /// Git executable name or path
    #[arg(long, value_name = "EXE", default_value = DEFAULT_GIT)]
    pub git: String,

    /// Output format
    #[arg(long, value_enum, default_value = "plain")]
    pub format: CliOutputFormat,
}
