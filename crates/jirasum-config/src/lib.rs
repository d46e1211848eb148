//! # jirasum-config
//!
//! Layered configuration loading for jirasum using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`JIRASUM_*` prefix, `__` as separator)
//! 2. Unprefixed `API_BASE_URL` and `INTERNAL_API_TOKEN`
//! 3. Project-level `.jirasum/config.toml`
//! 4. User-level `~/.config/jirasum/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `JIRASUM_BACKEND__BASE_URL` -> `backend.base_url`,
//! `JIRASUM_ENDPOINTS__FETCH_JIRA` -> `endpoints.fetch_jira`, etc.
//! The `__` (double underscore) separates nested config sections.
//! `INTERNAL_API_TOKEN` and `JIRASUM_BACKEND__INTERNAL_TOKEN` are taken
//! verbatim, so a token like `007` is not read as a number.
//!
//! # Usage
//!
//! ```no_run
//! use jirasum_config::JirasumConfig;
//!
//! let config = JirasumConfig::load_with_dotenv().expect("config");
//! println!("backend: {}", config.backend.base_url());
//! ```

mod backend;
mod endpoints;
mod error;

pub use backend::BackendConfig;
pub use endpoints::{EndpointConfig, TOOL_CALL_PATH};
pub use error::ConfigError;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Unprefixed variables honoured for compatibility with existing shells.
const LEGACY_BASE_URL_VAR: &str = "API_BASE_URL";
const LEGACY_TOKEN_VAR: &str = "INTERNAL_API_TOKEN";
const PREFIXED_TOKEN_VAR: &str = "JIRASUM_BACKEND__INTERNAL_TOKEN";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct JirasumConfig {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub endpoints: EndpointConfig,
}

impl JirasumConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source cannot be extracted or the
    /// resulting base URL is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.backend.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// Variables already present in the process environment are not
    /// overridden by `.env`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        // A missing .env is normal.
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".jirasum/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Unprefixed legacy base URL
        figment = figment.merge(
            Env::raw()
                .only(&[LEGACY_BASE_URL_VAR])
                .map(|_| "backend.base_url".into()),
        );

        // Layer 4: Prefixed environment variables (highest priority).
        // Tokens are opaque, so they skip figment's value parsing.
        figment = figment.merge(
            Env::prefixed("JIRASUM_")
                .ignore(&["BACKEND__INTERNAL_TOKEN"])
                .split("__"),
        );
        for var in [LEGACY_TOKEN_VAR, PREFIXED_TOKEN_VAR] {
            if let Ok(token) = std::env::var(var) {
                figment = figment.merge(Serialized::default("backend.internal_token", token));
            }
        }

        figment
    }

    /// Replace the base URL, e.g. from a command-line flag.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if `base_url` is not an
    /// `http(s)` URL.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, ConfigError> {
        self.backend.base_url = base_url.to_string();
        self.backend.validate()?;
        Ok(self)
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("jirasum").join("config.toml"))
    }
}
