//! # Response Classification
//!
//! Every call to the asset service ends in one of three ways:
//!
//! - the transport failed or the status was not `200` ([`ApiError::Transport`],
//!   [`ApiError::Status`])
//! - the status was `200` but the body said `success: false` or could not be
//!   decoded ([`ApiError::Rejected`], [`ApiError::Malformed`])
//! - the body said `success: true`, and its `data` is handed back typed
//!
//! [`decode`] works on a plain status code and body text so the rules can be
//! checked without a live server.

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::models::{ApiEnvelope, LoginEnvelope};

/// Placeholder used when a failed response carries no `error` text.
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Failure of a single request against the asset service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// No response was received.
    #[error("transport error: {0}")]
    Transport(String),
    /// Non-200 status; the body is kept for diagnostics.
    #[error("request failed with status {status}")]
    Status { status: u16, body: String },
    /// `success: false` in a 200 response.
    #[error("{0}")]
    Rejected(String),
    /// The body was not the JSON envelope the service documents.
    #[error("malformed response body: {0}")]
    Malformed(String),
    /// A successful login response without a usable token.
    #[error("login response carried no token")]
    MissingToken,
}

impl ApiError {
    /// Response body worth attaching to a failure report, if any.
    pub fn body(&self) -> Option<&str> {
        match self {
            ApiError::Status { body, .. } if !body.is_empty() => Some(body.as_str()),
            _ => None,
        }
    }
}

/// Decode a response into its `data` payload.
///
/// Returns `Ok(None)` for a successful envelope without `data`.
pub fn decode<T: DeserializeOwned>(status: u16, body: &str) -> Result<Option<T>, ApiError> {
    if status != 200 {
        return Err(ApiError::Status {
            status,
            body: body.to_string(),
        });
    }
    let envelope: ApiEnvelope<T> =
        serde_json::from_str(body).map_err(|e| ApiError::Malformed(e.to_string()))?;
    if !envelope.success {
        return Err(rejected(envelope.error));
    }
    Ok(envelope.data)
}

/// Decode a login response into its bearer token.
pub fn decode_login(status: u16, body: &str) -> Result<String, ApiError> {
    if status != 200 {
        return Err(ApiError::Status {
            status,
            body: body.to_string(),
        });
    }
    let envelope: LoginEnvelope =
        serde_json::from_str(body).map_err(|e| ApiError::Malformed(e.to_string()))?;
    if !envelope.success {
        return Err(rejected(envelope.error));
    }
    envelope
        .token()
        .map(str::to_string)
        .ok_or(ApiError::MissingToken)
}

fn rejected(error: Option<String>) -> ApiError {
    ApiError::Rejected(
        error
            .filter(|e| !e.is_empty())
            .unwrap_or_else(|| UNKNOWN_ERROR.to_string()),
    )
}
