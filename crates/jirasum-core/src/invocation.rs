//! Invocation parsing from positional process arguments.

use crate::errors::UsageError;
use crate::tool::ToolName;

/// One requested backend operation on one issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub command: ToolName,
    /// Forwarded to the backend unmodified.
    pub issue_key: String,
}

impl Invocation {
    /// Validate the positional `<command> <issue_key>` pair.
    ///
    /// The command is checked first, so an unsupported command with no
    /// issue key reports the command.
    ///
    /// # Errors
    ///
    /// Returns [`UsageError`] if the command is missing or unsupported, or
    /// if the issue key is missing or blank.
    pub fn from_args(command: Option<&str>, issue_key: Option<&str>) -> Result<Self, UsageError> {
        let command = command.ok_or(UsageError::MissingCommand)?.parse::<ToolName>()?;
        let issue_key = issue_key
            .filter(|key| !key.trim().is_empty())
            .ok_or(UsageError::MissingIssueKey)?;

        Ok(Self {
            command,
            issue_key: issue_key.to_string(),
        })
    }

    /// Usage text listing every supported command.
    #[must_use]
    pub fn usage(program: &str) -> String {
        let commands: String = ToolName::ALL
            .iter()
            .map(|tool| format!("  {:<22}{}\n", tool.as_str(), tool.description()))
            .collect();
        format!(
            "Usage: {program} <command> <issue_key>\n\nCommands:\n{commands}\nExample: {program} {} PROJ-123",
            ToolName::FetchAndSummarize
        )
    }
}
