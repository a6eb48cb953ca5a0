use crate::assertion::assert_that;
use crate::config::CheckConfig;
use crate::errors::{CheckError, Result};
use serde::Serialize;
use std::fmt;

/// The operations of a check, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckStep {
    Flag,
    NonBlank,
    StartsWith,
    EndsWith,
    Contains,
}

impl CheckStep {
    pub const ALL: [CheckStep; 5] = [
        CheckStep::Flag,
        CheckStep::NonBlank,
        CheckStep::StartsWith,
        CheckStep::EndsWith,
        CheckStep::Contains,
    ];
}

impl fmt::Display for CheckStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CheckStep::Flag => "flag",
            CheckStep::NonBlank => "non_blank",
            CheckStep::StartsWith => "starts_with",
            CheckStep::EndsWith => "ends_with",
            CheckStep::Contains => "contains",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepOutcome {
    pub step: CheckStep,
    pub passed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Steps evaluated by one run. Nothing is recorded past the first failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CheckReport {
    pub steps: Vec<StepOutcome>,
}

impl CheckReport {
    pub fn passed(&self) -> bool {
        self.steps.len() == CheckStep::ALL.len() && self.steps.iter().all(|s| s.passed)
    }

    pub fn failure(&self) -> Option<&StepOutcome> {
        self.steps.iter().find(|s| !s.passed)
    }

    pub fn evaluated(&self) -> Vec<CheckStep> {
        self.steps.iter().map(|s| s.step).collect()
    }
}

/// Runs the fixed predicate sequence over a boolean and a greeting.
#[derive(Debug, Clone)]
pub struct AssertionCheck {
    flag: bool,
    greeting: String,
    prefix: String,
    suffix: String,
    needle: String,
}

impl Default for AssertionCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl AssertionCheck {
    pub fn new() -> Self {
        Self::from_config(&CheckConfig::default())
    }

    pub fn from_config(config: &CheckConfig) -> Self {
        Self {
            flag: config.flag,
            greeting: config.greeting.clone(),
            prefix: config.prefix.clone(),
            suffix: config.suffix.clone(),
            needle: config.needle.clone(),
        }
    }

    pub fn run(&self) -> Result<()> {
        for step in CheckStep::ALL {
            self.evaluate(step)?;
        }
        tracing::info!("All {} checks passed", CheckStep::ALL.len());
        Ok(())
    }

    pub fn run_with_report(&self) -> CheckReport {
        let mut report = CheckReport::default();
        for step in CheckStep::ALL {
            match self.evaluate(step) {
                Ok(()) => report.steps.push(StepOutcome {
                    step,
                    passed: true,
                    message: None,
                }),
                Err(e) => {
                    let message = match e {
                        CheckError::AssertionFailure { message, .. } => message,
                        other => other.to_string(),
                    };
                    report.steps.push(StepOutcome {
                        step,
                        passed: false,
                        message: Some(message),
                    });
                    break;
                }
            }
        }
        report
    }

    fn evaluate(&self, step: CheckStep) -> Result<()> {
        tracing::debug!(%step, "Evaluating");
        let greeting = assert_that(&self.greeting);
        let result = match step {
            CheckStep::Flag => assert_that(self.flag).is_true().map(|_| ()),
            CheckStep::NonBlank => greeting.is_not_blank().map(|_| ()),
            CheckStep::StartsWith => greeting.starts_with(&self.prefix).map(|_| ()),
            CheckStep::EndsWith => greeting.ends_with(&self.suffix).map(|_| ()),
            CheckStep::Contains => greeting.contains(&self.needle).map(|_| ()),
        };
        if let Err(e) = &result {
            tracing::warn!(%step, error = %e, "Check failed");
        }
        result
    }
}

/// Runs the check over the literal subject.
pub fn check() -> Result<()> {
    AssertionCheck::new().run()
}
