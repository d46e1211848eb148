//! Request envelope for the tool-call API.

use jirasum_core::{Invocation, ToolName};
use serde::Serialize;

/// `{"tool_name": ..., "parameters": {"issue_key": ...}}`
#[derive(Debug, Serialize)]
pub struct ToolCallRequest<'a> {
    pub tool_name: ToolName,
    pub parameters: ToolParameters<'a>,
}

#[derive(Debug, Serialize)]
pub struct ToolParameters<'a> {
    pub issue_key: &'a str,
}

impl<'a> From<&'a Invocation> for ToolCallRequest<'a> {
    fn from(invocation: &'a Invocation) -> Self {
        Self {
            tool_name: invocation.command,
            parameters: ToolParameters {
                issue_key: &invocation.issue_key,
            },
        }
    }
}
