pub mod assertion;
pub mod check;
pub mod cli;
pub mod config;
pub mod errors;
pub mod logging;
pub mod predicate;

pub use assertion::assert_that;
pub use check::{check, AssertionCheck, CheckReport, CheckStep, StepOutcome};
pub use config::CheckConfig;
pub use errors::{CheckError, Result};
