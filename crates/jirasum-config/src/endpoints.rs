//! Operation-to-endpoint mapping.
//!
//! Both tools post to the generic tool-call route by default. Pointing a
//! tool at its own path keeps the same request body.

use jirasum_core::ToolName;
use serde::{Deserialize, Serialize};

/// Generic tool-call route on the backend.
pub const TOOL_CALL_PATH: &str = "/v1/tools/call";

fn default_path() -> String {
    String::from(TOOL_CALL_PATH)
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct EndpointConfig {
    #[serde(default = "default_path")]
    pub fetch_jira: String,

    #[serde(default = "default_path")]
    pub fetch_and_summarize: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            fetch_jira: default_path(),
            fetch_and_summarize: default_path(),
        }
    }
}

impl EndpointConfig {
    /// Request path for `tool`, always starting with `/`.
    #[must_use]
    pub fn path_for(&self, tool: ToolName) -> String {
        let path = match tool {
            ToolName::FetchJira => self.fetch_jira.as_str(),
            ToolName::FetchAndSummarize => self.fetch_and_summarize.as_str(),
        };
        format!("/{}", path.trim_start_matches('/'))
    }
}
