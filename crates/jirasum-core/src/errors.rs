//! Argument validation errors.
//!
//! Transport and decode errors live in `jirasum-client`; they converge with
//! these in the binary.

use thiserror::Error;

/// The process arguments do not describe a runnable invocation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsageError {
    /// No command was given.
    #[error("missing command")]
    MissingCommand,

    /// The command is not one of the supported tool names.
    #[error("unsupported command '{0}'")]
    UnsupportedCommand(String),

    /// The issue key is absent or blank.
    #[error("missing issue key")]
    MissingIssueKey,
}
