//! Response status handling.
//!
//! The body is always read as text first so a failing backend's message can
//! be shown verbatim.

use crate::error::ClientError;

/// Read the full body and fail with [`ClientError::Api`] on a non-2xx status.
///
/// # Errors
///
/// Returns [`ClientError::Http`] if the body cannot be read and
/// [`ClientError::Api`] for any non-success status.
pub async fn read_checked(resp: reqwest::Response) -> Result<String, ClientError> {
    let status = resp.status();
    let body = resp.text().await?;
    tracing::debug!(status = status.as_u16(), bytes = body.len(), "backend responded");

    if !status.is_success() {
        return Err(ClientError::Api {
            status: status.as_u16(),
            body,
        });
    }
    Ok(body)
}
