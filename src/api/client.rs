use std::fmt;

use crate::config::ApiConfig;
use crate::utils::build_url;

/// Builds absolute API URLs against a base resolved at startup.
///
/// The base is injected rather than read from global state, so a value can
/// be constructed in tests without loading any configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiUrl {
    base: String,
}

impl ApiUrl {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    pub fn from_config(config: &ApiConfig) -> Self {
        Self::new(config.api_url.clone())
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// Absolute URL for `path`. See [`build_url`].
    pub fn url(&self, path: &str) -> String {
        build_url(&self.base, path)
    }
}

impl From<ApiConfig> for ApiUrl {
    fn from(config: ApiConfig) -> Self {
        Self::new(config.api_url)
    }
}

impl fmt::Display for ApiUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.base)
    }
}
