mod args;
mod value_enum;

pub use args::Args;
use clap::Parser;

use crate::config::{Config, RootSpec};

fn validate_git(git: &str) -> anyhow::Result<()> {
    if git.trim().is_empty() {
        anyhow::bail!("Invalid value for --git: must not be empty");
    }
    Ok(())
}

/// Parse CLI arguments and build a [`Config`].
///
/// # Errors
///
/// Returns `Err` when the parsed arguments are invalid.
pub fn load_config() -> anyhow::Result<Config> {
    let args = Args::parse();
    build_config(&args)
}

/// Convert parsed CLI arguments into a runtime configuration.
///
/// # Errors
///
/// Returns `Err` when `--git` is blank.
pub fn build_config(args: &Args) -> anyhow::Result<Config> {
    validate_git(&args.git)?;

    let root = match &args.root {
        Some(dir) => RootSpec::Explicit(dir.clone()),
        None => RootSpec::AboveExecutable(args.levels),
    };

    Ok(Config { root, git: args.git.clone(), format: args.format.into() })
}
