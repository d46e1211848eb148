//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use jirasum_config::JirasumConfig;
use pretty_assertions::assert_eq;

#[test]
fn loads_backend_and_endpoints_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[backend]
base_url = "https://summarizer.internal/"
internal_token = "toml-token"
timeout_secs = 20

[endpoints]
fetch_and_summarize = "/v1/fetch_and_summarize"
"#,
        )?;

        let config: JirasumConfig = Figment::from(Serialized::defaults(JirasumConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.backend.base_url(), "https://summarizer.internal");
        assert_eq!(config.backend.token(), Some("toml-token"));
        assert_eq!(config.backend.timeout_secs, 20);
        assert_eq!(config.endpoints.fetch_jira, "/v1/tools/call");
        assert_eq!(config.endpoints.fetch_and_summarize, "/v1/fetch_and_summarize");
        Ok(())
    });
}

#[test]
fn partial_toml_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[backend]
internal_token = "only-token"
"#,
        )?;

        let config: JirasumConfig = Figment::from(Serialized::defaults(JirasumConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.backend.base_url(), "http://localhost:8000");
        assert_eq!(config.backend.token(), Some("only-token"));
        assert_eq!(config.backend.timeout_secs, 0);
        Ok(())
    });
}

#[test]
fn project_file_is_picked_up_and_env_wins() {
    Jail::expect_with(|jail| {
        std::fs::create_dir(".jirasum").map_err(|e| e.to_string())?;
        jail.create_file(
            ".jirasum/config.toml",
            r#"
[backend]
base_url = "http://from-project:8000"
internal_token = "project-token"
"#,
        )?;
        jail.set_env("JIRASUM_BACKEND__INTERNAL_TOKEN", "env-token");

        let config = JirasumConfig::load().expect("config loads");
        assert_eq!(config.backend.base_url(), "http://from-project:8000");
        assert_eq!(config.backend.token(), Some("env-token"));
        Ok(())
    });
}
