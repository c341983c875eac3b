//! Client configuration.

use std::time::Duration;

use url::Url;

use crate::error::ConfigError;

/// Backend endpoint used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:4000";

/// Where the backend lives and how long a request may take.
///
/// No timeout is applied unless one is set: a hung request stays pending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: Url,
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    /// Parse and validate `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL does not parse, is not http(s), or cannot
    /// carry a path (e.g. `mailto:`).
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let url = Url::parse(base_url.trim()).map_err(|source| ConfigError::InvalidBaseUrl {
            value: base_url.to_string(),
            source,
        })?;
        if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
            return Err(ConfigError::UnsupportedScheme(base_url.to_string()));
        }
        Ok(Self {
            base_url: url,
            timeout: None,
        })
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            timeout: None,
        }
    }
}
