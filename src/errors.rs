use crate::check::CheckStep;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CheckError {
    #[error("{step} failed: {message}")]
    AssertionFailure { step: CheckStep, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl CheckError {
    pub fn assertion(step: CheckStep, message: impl Into<String>) -> Self {
        CheckError::AssertionFailure {
            step,
            message: message.into(),
        }
    }

    /// The failing step, if this is an assertion failure.
    pub fn step(&self) -> Option<CheckStep> {
        match self {
            CheckError::AssertionFailure { step, .. } => Some(*step),
            _ => None,
        }
    }

    pub fn is_assertion_failure(&self) -> bool {
        matches!(self, CheckError::AssertionFailure { .. })
    }
}

impl From<validator::ValidationErrors> for CheckError {
    fn from(err: validator::ValidationErrors) -> Self {
        CheckError::Validation(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CheckError>;
