//! Display field extraction.
//!
//! Every displayed value goes through [`or_placeholder`], so an absent or
//! empty field renders as [`PLACEHOLDER`] instead of failing.
//! [`detail_fields`] adds the structured values that only JSON output carries.

use serde_json::Value;

use crate::response::{Analysis, IssueDetails, ToolResponse};
use crate::tool::ToolName;

/// Rendered in place of any absent, null or empty field.
pub const PLACEHOLDER: &str = "N/A";

/// One labeled output line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayField {
    /// Human label, e.g. `Root Cause`.
    pub label: &'static str,
    /// Response key the value was read from, e.g. `root_cause`.
    pub key: &'static str,
    pub value: String,
}

impl DisplayField {
    fn new(label: &'static str, key: &'static str, value: Option<&str>) -> Self {
        Self {
            label,
            key,
            value: or_placeholder(value).to_string(),
        }
    }
}

/// A structured value appended after the display fields in JSON output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailField {
    pub key: &'static str,
    pub value: Value,
}

/// Substitute [`PLACEHOLDER`] for an absent or empty value.
#[must_use]
pub fn or_placeholder(value: Option<&str>) -> &str {
    value.filter(|text| !text.is_empty()).unwrap_or(PLACEHOLDER)
}

/// The fields shown for `tool`, in output order.
#[must_use]
pub fn display_fields(tool: ToolName, response: &ToolResponse) -> Vec<DisplayField> {
    match tool {
        ToolName::FetchJira => issue_fields(&IssueDetails::from_response(response)),
        ToolName::FetchAndSummarize => analysis_fields(&Analysis::from_response(response)),
    }
}

/// Extra values for `tool` that have no labeled text line.
///
/// `fetch_and_summarize` adds the analysis `confidence` (placeholder when
/// absent) and the `evidence` list (empty when absent).
#[must_use]
pub fn detail_fields(tool: ToolName, response: &ToolResponse) -> Vec<DetailField> {
    match tool {
        ToolName::FetchJira => Vec::new(),
        ToolName::FetchAndSummarize => {
            let analysis = Analysis::from_response(response);
            vec![
                DetailField {
                    key: "confidence",
                    value: Value::from(or_placeholder(analysis.confidence.as_deref())),
                },
                DetailField {
                    key: "evidence",
                    value: Value::from(analysis.evidence),
                },
            ]
        }
    }
}

fn issue_fields(issue: &IssueDetails) -> Vec<DisplayField> {
    vec![
        DisplayField::new("Key", "key", issue.key.as_deref()),
        DisplayField::new("Summary", "summary", issue.summary.as_deref()),
        DisplayField::new("Status", "status", issue.status.as_deref()),
        DisplayField::new("Priority", "priority", issue.priority.as_deref()),
        DisplayField::new("Assignee", "assignee", issue.assignee.as_deref()),
        DisplayField::new("Reporter", "reporter", issue.reporter.as_deref()),
        DisplayField::new("Updated", "updated", issue.updated.as_deref()),
        DisplayField::new("URL", "url", issue.url.as_deref()),
    ]
}

fn analysis_fields(analysis: &Analysis) -> Vec<DisplayField> {
    vec![
        DisplayField::new("Summary", "summary", analysis.summary.as_deref()),
        DisplayField::new("Root Cause", "root_cause", analysis.root_cause.as_deref()),
    ]
}
