use std::env;
use std::path::Path;

use serde::Serialize;

use crate::error::ConfigError;

/// Variable holding the API base URL
pub const API_URL_VAR: &str = "API_URL";

pub fn load_env_file(env_file: Option<&str>) {
    match env_file {
        Some(path) => match dotenvy::from_path(Path::new(path)) {
            Ok(()) => tracing::debug!(path, "Loaded env file"),
            Err(e) => tracing::warn!(path, %e, "Failed to load env file"),
        },
        None => match dotenvy::dotenv() {
            Ok(path) => tracing::debug!(path = %path.display(), "Loaded env file"),
            Err(e) => tracing::debug!(%e, "No env file loaded"),
        },
    }
}

fn require<F>(
    lookup: &F,
    name: &'static str,
    missing: &mut Vec<&'static str>,
) -> Result<Option<String>, ConfigError>
where
    F: Fn(&'static str) -> Result<Option<String>, ConfigError>,
{
    let value = lookup(name)?.filter(|v| !v.is_empty());
    if value.is_none() {
        missing.push(name);
    }
    Ok(value)
}

/// Resolved startup configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiConfig {
    pub api_url: String,
}

impl ApiConfig {
    /// Resolve configuration through `lookup`.
    ///
    /// Every required variable is checked before returning, so the error
    /// names all of the missing ones at once. Empty values count as missing.
    /// Values are returned as-is, without trimming or slash normalization.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::resolve(|name| Ok(lookup(name)))
    }

    /// Resolve configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::resolve(|name| match env::var(name) {
            Ok(value) => Ok(Some(value)),
            Err(env::VarError::NotPresent) => Ok(None),
            Err(env::VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode(name)),
        })
    }

    /// Load an optional env file, then resolve from the environment.
    pub fn load(env_file: Option<&str>) -> Result<Self, ConfigError> {
        load_env_file(env_file);
        Self::from_env()
    }

    fn resolve<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Result<Option<String>, ConfigError>,
    {
        let mut missing = Vec::new();
        let api_url = require(&lookup, API_URL_VAR, &mut missing)?;
        match api_url {
            Some(api_url) if missing.is_empty() => {
                tracing::debug!(api_url = %api_url, "Resolved API base URL");
                Ok(Self { api_url })
            }
            _ => Err(ConfigError::Missing(missing)),
        }
    }
}
