use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;
use validator::Validate;

pub const DEFAULT_FLAG: bool = true;
pub const DEFAULT_GREETING: &str = "Hello World!";
pub const DEFAULT_PREFIX: &str = "Hello";
pub const DEFAULT_SUFFIX: &str = "World!";
pub const DEFAULT_NEEDLE: &str = "World";

/// Subject values and expected affixes for one check run.
///
/// `greeting` may be blank. The affixes must not be empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct CheckConfig {
    pub flag: bool,
    pub greeting: String,
    #[validate(length(min = 1, message = "prefix must not be empty"))]
    pub prefix: String,
    #[validate(length(min = 1, message = "suffix must not be empty"))]
    pub suffix: String,
    #[validate(length(min = 1, message = "needle must not be empty"))]
    pub needle: String,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            flag: DEFAULT_FLAG,
            greeting: DEFAULT_GREETING.to_string(),
            prefix: DEFAULT_PREFIX.to_string(),
            suffix: DEFAULT_SUFFIX.to_string(),
            needle: DEFAULT_NEEDLE.to_string(),
        }
    }
}

impl CheckConfig {
    /// Load from a YAML file. Fields left out keep their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "Loading check config");
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        // An empty document deserializes to null rather than an empty mapping.
        let config: CheckConfig = if content.trim().is_empty() {
            CheckConfig::default()
        } else {
            serde_yaml::from_str(content)?
        };
        config.validate()?;
        Ok(config)
    }

    pub fn with_flag(mut self, flag: Option<bool>) -> Self {
        if let Some(flag) = flag {
            self.flag = flag;
        }
        self
    }

    pub fn with_greeting(mut self, greeting: Option<String>) -> Self {
        if let Some(greeting) = greeting {
            self.greeting = greeting;
        }
        self
    }
}
