//! Backend tool names.
//!
//! The wire names are `snake_case` and match the backend's `tool_name`
//! literal exactly.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::UsageError;

/// A backend operation the CLI can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolName {
    /// Fetch one Jira issue with its comments.
    FetchJira,
    /// Fetch a Jira issue and have the backend summarize it.
    FetchAndSummarize,
}

impl ToolName {
    /// Every supported tool, in usage-text order.
    pub const ALL: [Self; 2] = [Self::FetchJira, Self::FetchAndSummarize];

    /// Wire name sent as `tool_name`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FetchJira => "fetch_jira",
            Self::FetchAndSummarize => "fetch_and_summarize",
        }
    }

    /// One-line description for usage text.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::FetchJira => "Fetch one Jira issue and print its key fields",
            Self::FetchAndSummarize => "Fetch a Jira issue and print its summary and root cause",
        }
    }
}

impl fmt::Display for ToolName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToolName {
    type Err = UsageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tool| tool.as_str() == s)
            .ok_or_else(|| UsageError::UnsupportedCommand(s.to_string()))
    }
}
