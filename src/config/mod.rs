pub mod cli;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_range, Validate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_SIZE: usize = 10_000_000;

/// Largest `--max-size` whose buffer of `i64` values still fits in a single allocation.
pub const MAX_SIZE_LIMIT: usize = isize::MAX as usize / std::mem::size_of::<i64>();

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, clap::Parser)]
#[command(name = "sorted-check")]
#[command(about = "Reads an integer array from stdin and reports whether it is sorted")]
pub struct CliConfig {
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    #[arg(long, default_value_t = DEFAULT_MAX_SIZE, help = "Largest array size accepted")]
    pub max_size: usize,

    #[arg(short, long, help = "Do not print prompts")]
    pub quiet: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_range("max_size", self.max_size, 1, MAX_SIZE_LIMIT)
    }
}
