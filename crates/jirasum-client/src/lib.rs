//! # jirasum-client
//!
//! HTTP client for the Jira summarizer backend.
//!
//! Sends one tool-call request per [`Invocation`] and decodes the reply into
//! a permissive [`ToolResponse`]. Non-2xx replies surface as
//! [`ClientError::Api`] with the raw body; they are never parsed.

mod error;
mod http;
mod request;

pub use error::ClientError;
pub use request::{ToolCallRequest, ToolParameters};

use jirasum_config::{EndpointConfig, JirasumConfig};
use jirasum_core::{Invocation, ToolName, ToolResponse};

/// Header carrying the shared secret expected by the backend.
pub const INTERNAL_TOKEN_HEADER: &str = "X-Internal-Token";

/// HTTP client for the backend's tool-call API.
pub struct ToolClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
    endpoints: EndpointConfig,
}

impl ToolClient {
    /// Create a client from the loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client`
    /// fails to build.
    pub fn new(config: &JirasumConfig) -> Result<Self, ClientError> {
        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("jirasum/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = config.backend.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            base_url: config.backend.base_url().to_string(),
            token: config.backend.token().map(str::to_string),
            endpoints: config.endpoints.clone(),
        })
    }

    /// Full URL the request for `tool` is posted to.
    #[must_use]
    pub fn endpoint_url(&self, tool: ToolName) -> String {
        format!("{}{}", self.base_url, self.endpoints.path_for(tool))
    }

    /// Post the invocation and decode the reply.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] on transport failure,
    /// [`ClientError::Api`] on a non-2xx status, and
    /// [`ClientError::Decode`] if a 2xx body is not valid JSON.
    pub async fn call(&self, invocation: &Invocation) -> Result<ToolResponse, ClientError> {
        let url = self.endpoint_url(invocation.command);
        tracing::debug!(%url, tool = %invocation.command, issue_key = %invocation.issue_key, "calling backend");

        let mut request = self.http.post(&url).json(&ToolCallRequest::from(invocation));
        if let Some(token) = &self.token {
            request = request.header(INTERNAL_TOKEN_HEADER, token);
        }

        let body = http::read_checked(request.send().await?).await?;
        let response = ToolResponse::from_value(serde_json::from_str(&body)?);

        if let Some(seconds) = response.execution_time {
            tracing::debug!(seconds, "backend execution time");
        }
        Ok(response)
    }
}
