//! Backend connection configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default backend root address.
fn default_base_url() -> String {
    String::from("http://localhost:8000")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BackendConfig {
    /// Root address of the backend service.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Shared secret sent as `X-Internal-Token`. Empty means no header.
    #[serde(default)]
    pub internal_token: String,

    /// Request timeout in seconds. `0` leaves the transport default.
    #[serde(default)]
    pub timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            internal_token: String::new(),
            timeout_secs: 0,
        }
    }
}

impl BackendConfig {
    /// The internal token, if one is configured.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        Some(self.internal_token.as_str()).filter(|token| !token.is_empty())
    }

    /// The request timeout, if one is configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        if self.timeout_secs == 0 {
            None
        } else {
            Some(Duration::from_secs(self.timeout_secs))
        }
    }

    /// Base URL without trailing slashes.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Reject base URLs that are not absolute `http(s)` addresses.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for an empty or non-HTTP base URL.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.base_url();
        let has_scheme = url.starts_with("http://") || url.starts_with("https://");
        let has_host = url.split_once("://").is_some_and(|(_, rest)| !rest.is_empty());
        if has_scheme && has_host {
            Ok(())
        } else {
            Err(ConfigError::InvalidValue {
                field: "backend.base_url".into(),
                reason: format!("'{}' is not an http(s) URL", self.base_url),
            })
        }
    }
}
