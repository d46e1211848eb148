use anyhow::Context;
use jirasum_config::JirasumConfig;

use crate::cli::GlobalFlags;

/// Load layered configuration and apply per-call flag overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<JirasumConfig> {
    let config =
        JirasumConfig::load_with_dotenv().context("failed to load jirasum configuration")?;
    crate::config_warnings::warn_mistyped_env();

    let config = match flags.base_url.as_deref() {
        Some(base_url) => config
            .with_base_url(base_url)
            .context("invalid --base-url")?,
        None => config,
    };

    tracing::debug!(
        base_url = config.backend.base_url(),
        token_configured = config.backend.token().is_some(),
        "configuration loaded"
    );
    Ok(config)
}
