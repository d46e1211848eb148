//! Environment layering for the backend settings.
//!
//! Uses figment::Jail for safe, sandboxed env var manipulation.

use figment::Jail;
use jirasum_config::{ConfigError, JirasumConfig};
use jirasum_core::ToolName;
use pretty_assertions::assert_eq;

#[test]
fn prefixed_env_sets_backend_values() {
    Jail::expect_with(|jail| {
        jail.set_env("JIRASUM_BACKEND__BASE_URL", "http://summarizer:9000");
        jail.set_env("JIRASUM_BACKEND__INTERNAL_TOKEN", "tok-abc");
        jail.set_env("JIRASUM_BACKEND__TIMEOUT_SECS", "30");

        let config = JirasumConfig::load().expect("config loads");
        assert_eq!(config.backend.base_url(), "http://summarizer:9000");
        assert_eq!(config.backend.token(), Some("tok-abc"));
        assert_eq!(config.backend.timeout_secs, 30);
        Ok(())
    });
}

#[test]
fn legacy_variables_are_honoured() {
    Jail::expect_with(|jail| {
        jail.set_env("API_BASE_URL", "http://legacy:8000");
        jail.set_env("INTERNAL_API_TOKEN", "legacy-token");

        let config = JirasumConfig::load().expect("config loads");
        assert_eq!(config.backend.base_url(), "http://legacy:8000");
        assert_eq!(config.backend.token(), Some("legacy-token"));
        Ok(())
    });
}

#[test]
fn numeric_token_is_kept_as_text() {
    Jail::expect_with(|jail| {
        jail.set_env("INTERNAL_API_TOKEN", "12345");

        let config = JirasumConfig::load().expect("config loads");
        assert_eq!(config.backend.token(), Some("12345"));
        Ok(())
    });
}

#[test]
fn token_text_is_taken_verbatim() {
    for token in ["007", "0123", "[abc]", "1e3", "true", "  spaced  "] {
        Jail::expect_with(|jail| {
            jail.set_env("INTERNAL_API_TOKEN", token);

            let config = JirasumConfig::load().expect("config loads");
            assert_eq!(config.backend.token(), Some(token));
            Ok(())
        });

        Jail::expect_with(|jail| {
            jail.set_env("JIRASUM_BACKEND__INTERNAL_TOKEN", token);

            let config = JirasumConfig::load().expect("config loads");
            assert_eq!(config.backend.token(), Some(token));
            Ok(())
        });
    }
}

#[test]
fn prefixed_token_beats_legacy_token() {
    Jail::expect_with(|jail| {
        jail.set_env("INTERNAL_API_TOKEN", "legacy-token");
        jail.set_env("JIRASUM_BACKEND__INTERNAL_TOKEN", "0042");

        let config = JirasumConfig::load().expect("config loads");
        assert_eq!(config.backend.token(), Some("0042"));
        Ok(())
    });
}

#[test]
fn env_token_beats_toml_token() {
    Jail::expect_with(|jail| {
        jail.create_dir(".jirasum")?;
        jail.create_file(
            ".jirasum/config.toml",
            r#"
            [backend]
            internal_token = "from-file"
            "#,
        )?;
        jail.set_env("INTERNAL_API_TOKEN", "007");

        let config = JirasumConfig::load().expect("config loads");
        assert_eq!(config.backend.token(), Some("007"));
        Ok(())
    });
}

#[test]
fn prefixed_env_beats_legacy_variables() {
    Jail::expect_with(|jail| {
        jail.set_env("API_BASE_URL", "http://legacy:8000");
        jail.set_env("JIRASUM_BACKEND__BASE_URL", "http://prefixed:8000");

        let config = JirasumConfig::load().expect("config loads");
        assert_eq!(config.backend.base_url(), "http://prefixed:8000");
        Ok(())
    });
}

#[test]
fn empty_token_leaves_header_disabled() {
    Jail::expect_with(|jail| {
        jail.set_env("INTERNAL_API_TOKEN", "");

        let config = JirasumConfig::load().expect("config loads");
        assert_eq!(config.backend.token(), None);
        Ok(())
    });
}

#[test]
fn endpoint_mapping_from_env() {
    Jail::expect_with(|jail| {
        jail.set_env(
            "JIRASUM_ENDPOINTS__FETCH_AND_SUMMARIZE",
            "/v1/fetch_and_summarize",
        );

        let config = JirasumConfig::load().expect("config loads");
        assert_eq!(
            config.endpoints.path_for(ToolName::FetchAndSummarize),
            "/v1/fetch_and_summarize"
        );
        assert_eq!(config.endpoints.path_for(ToolName::FetchJira), "/v1/tools/call");
        Ok(())
    });
}

#[test]
fn invalid_base_url_fails_to_load() {
    Jail::expect_with(|jail| {
        jail.set_env("JIRASUM_BACKEND__BASE_URL", "localhost");

        let err = JirasumConfig::load().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "backend.base_url"));
        Ok(())
    });
}
