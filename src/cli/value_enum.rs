use clap::ValueEnum;

use crate::output::OutputFormat;

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliOutputFormat {
    Plain,
    Json,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(value: CliOutputFormat) -> Self {
        match value {
            CliOutputFormat::Plain => OutputFormat::Plain,
            CliOutputFormat::Json => OutputFormat::Json,
        }
    }
}
