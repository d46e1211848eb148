//! # jirasum-core
//!
//! Core types for jirasum.
//!
//! This crate holds everything that does not touch the network or the
//! process environment:
//! - [`ToolName`], the backend operations the CLI can request
//! - [`Invocation`] parsing and usage text
//! - Permissive views over the backend's JSON response
//! - Display field extraction with `N/A` substitution
//! - [`UsageError`]

pub mod display;
pub mod errors;
pub mod invocation;
pub mod response;
pub mod tool;

pub use display::{
    DetailField, DisplayField, PLACEHOLDER, detail_fields, display_fields, or_placeholder,
};
pub use errors::UsageError;
pub use invocation::Invocation;
pub use response::{Analysis, IssueDetails, ToolResponse};
pub use tool::ToolName;
