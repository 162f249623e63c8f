/// Error types for configuration loading
use thiserror::Error;

/// Errors that can occur while resolving configuration at startup
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// One or more required variables are unset or empty
    #[error("missing required environment variable(s): {}", .0.join(", "))]
    Missing(Vec<&'static str>),

    /// A required variable is set but not valid unicode
    #[error("environment variable {0} is not valid unicode")]
    NotUnicode(&'static str),
}

impl ConfigError {
    /// Names of the variables that were missing, empty for other variants.
    pub fn missing_vars(&self) -> &[&'static str] {
        match self {
            ConfigError::Missing(names) => names.as_slice(),
            ConfigError::NotUnicode(_) => &[],
        }
    }
}
