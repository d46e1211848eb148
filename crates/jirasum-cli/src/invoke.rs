//! The invocation handler: validate, call the backend, print fields.
//!
//! Output goes to the writers passed in; only `main` turns the returned
//! [`Outcome`] into an exit code.

use std::io::Write;

use anyhow::Context;
use jirasum_client::{ClientError, ToolClient};
use jirasum_config::JirasumConfig;
use jirasum_core::{Invocation, PLACEHOLDER, UsageError, detail_fields, display_fields};

use crate::cli::OutputFormat;
use crate::output::render;

/// How a single invocation ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Fields were printed.
    Success,
    /// The arguments were rejected before any request was made.
    Usage(UsageError),
    /// The backend answered with a non-2xx status.
    Remote { status: u16, body: String },
}

impl Outcome {
    /// Process exit status for this outcome.
    #[must_use]
    pub const fn code(&self) -> u8 {
        match self {
            Self::Success => 0,
            Self::Remote { .. } => 1,
            Self::Usage(_) => 2,
        }
    }
}

pub struct InvocationHandler {
    format: OutputFormat,
}

impl InvocationHandler {
    #[must_use]
    pub const fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Run one invocation from the positional arguments.
    ///
    /// The arguments are validated before `load_config` is called, so a
    /// usage error is reported even when the configuration is broken.
    /// Configuration failures, transport failures, undecodable success
    /// bodies and write failures are returned as errors; everything else
    /// is an [`Outcome`].
    pub async fn run<L, O, E>(
        &self,
        command: Option<&str>,
        issue_key: Option<&str>,
        load_config: L,
        out: &mut O,
        err: &mut E,
    ) -> anyhow::Result<Outcome>
    where
        L: FnOnce() -> anyhow::Result<JirasumConfig>,
        O: Write,
        E: Write,
    {
        let invocation = match Invocation::from_args(command, issue_key) {
            Ok(invocation) => invocation,
            Err(usage) => {
                tracing::debug!(%usage, "rejected arguments");
                writeln!(out, "{}", Invocation::usage("jirasum"))?;
                writeln!(err, "{usage}")?;
                return Ok(Outcome::Usage(usage));
            }
        };

        let config = load_config()?;
        let client = ToolClient::new(&config).context("failed to build HTTP client")?;
        let response = match client.call(&invocation).await {
            Ok(response) => response,
            Err(ClientError::Api { status, body }) => {
                writeln!(err, "Error {status}: {body}")?;
                return Ok(Outcome::Remote { status, body });
            }
            Err(error) => {
                return Err(anyhow::Error::new(error).context(format!(
                    "{} request for {} to {} failed",
                    invocation.command,
                    invocation.issue_key,
                    client.endpoint_url(invocation.command)
                )));
            }
        };

        if response.reported_failure() {
            writeln!(
                err,
                "Backend reported failure: {}",
                response.error.as_deref().unwrap_or(PLACEHOLDER)
            )?;
        }

        let fields = display_fields(invocation.command, &response);
        let details = detail_fields(invocation.command, &response);
        writeln!(out, "{}", render(&fields, &details, self.format)?)?;
        Ok(Outcome::Success)
    }
}
