pub mod checker;
pub mod engine;

pub use crate::domain::model::{CheckReport, InputSpec, Verdict};
pub use crate::domain::ports::{InputSource, Reporter};
pub use crate::utils::error::Result;
