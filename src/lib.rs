pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::cli::{ConsoleReporter, StdinSource};
pub use config::OutputFormat;
pub use core::checker::{first_inversion, first_inversion_by, is_ascending, is_ascending_by};
pub use core::engine::CheckEngine;
pub use domain::model::{CheckReport, InputSpec, Verdict};
pub use utils::error::{CheckError, Result};
