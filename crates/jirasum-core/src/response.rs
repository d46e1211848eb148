//! Permissive views over the backend's tool-call response.
//!
//! Nothing here fails on shape: a missing, null or mistyped field simply
//! leaves the corresponding `Option` empty. Scalars that are not strings
//! (numbers, booleans) are kept as their JSON text so they still display.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// The response envelope returned by the tool-call endpoint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToolResponse {
    /// `false` when the backend caught an error and answered 200 anyway.
    pub success: Option<bool>,
    pub result: Option<Value>,
    pub error: Option<String>,
    /// Backend-side execution time in seconds.
    pub execution_time: Option<f64>,
}

impl ToolResponse {
    /// Build the envelope from any decoded JSON value.
    ///
    /// Non-object bodies yield an empty envelope.
    #[must_use]
    pub fn from_value(value: Value) -> Self {
        let Value::Object(mut map) = value else {
            tracing::debug!("response body is not a JSON object; treating as empty");
            return Self::default();
        };

        Self {
            success: map.get("success").and_then(Value::as_bool),
            error: map.get("error").and_then(scalar_text),
            execution_time: map.get("execution_time").and_then(Value::as_f64),
            result: map.remove("result").filter(|result| !result.is_null()),
        }
    }

    /// The backend explicitly reported a failure.
    #[must_use]
    pub fn reported_failure(&self) -> bool {
        self.success == Some(false)
    }

    /// The `result` value if it is a JSON object.
    #[must_use]
    pub fn result_object(&self) -> Option<&Value> {
        self.result.as_ref().filter(|result| result.is_object())
    }
}

/// Issue fields returned by `fetch_jira`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct IssueDetails {
    #[serde(deserialize_with = "lenient_text")]
    pub key: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub summary: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub status: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub priority: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub assignee: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub reporter: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub updated: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub url: Option<String>,
}

impl IssueDetails {
    /// Read issue fields directly from the `result` object.
    #[must_use]
    pub fn from_response(response: &ToolResponse) -> Self {
        response
            .result_object()
            .map(view_of)
            .unwrap_or_default()
    }
}

/// Summary and root cause produced by `fetch_and_summarize`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Analysis {
    #[serde(deserialize_with = "lenient_text")]
    pub summary: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub root_cause: Option<String>,
    /// One of `low`, `medium`, `high` when the backend provides it.
    #[serde(deserialize_with = "lenient_text")]
    pub confidence: Option<String>,
    #[serde(deserialize_with = "lenient_list")]
    pub evidence: Vec<String>,
}

impl Analysis {
    /// Prefer `result.analysis`, fall back to `result` itself, then to an
    /// empty analysis.
    #[must_use]
    pub fn from_response(response: &ToolResponse) -> Self {
        let Some(result) = response.result_object() else {
            return Self::default();
        };

        result
            .get("analysis")
            .filter(|analysis| analysis.is_object())
            .map_or_else(|| view_of(result), view_of)
    }
}

fn view_of<T>(value: &Value) -> T
where
    T: for<'de> Deserialize<'de> + Default,
{
    T::deserialize(value).unwrap_or_else(|error| {
        tracing::debug!(%error, "response object did not match expected view");
        T::default()
    })
}

/// Text form of a JSON value for display: strings as-is, other scalars as
/// JSON text, composite values as compact JSON, null as `None`.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        Value::Bool(_) | Value::Number(_) => Some(value.to_string()),
        Value::Array(_) | Value::Object(_) => serde_json::to_string(value).ok(),
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(scalar_text))
}

fn lenient_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => items.iter().filter_map(scalar_text).collect(),
        Some(other) => scalar_text(&other).into_iter().collect(),
        None => Vec::new(),
    })
}
