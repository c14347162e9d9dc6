//! API failure classification.
//!
//! ERROR HANDLING
//! ==============
//! The transport reduces every outcome to one `ApiError` variant; callers
//! pick display text with `user_message` and branch on the class, never on
//! raw status codes scattered through the codebase. Only two side effects
//! live outside this taxonomy (forced logout on 401, fallback navigation
//! on 5xx) and both belong to the transport.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde_json::Value;

/// Classified failure of an API request.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The HTTP client itself could not be constructed.
    #[error("http client build failed: {0}")]
    ClientBuild(String),
    /// No response at all: timeout, DNS failure, connection refused.
    #[error("could not reach the server: {0}")]
    Network(String),
    /// 401 or 403. `detail` is the server-provided message, if any.
    #[error("not authorized (status {status})")]
    Unauthorized { status: u16, detail: Option<String> },
    /// Any 5xx. Treated as fatal for the current view.
    #[error("server error (status {status})")]
    Server { status: u16 },
    /// Any other non-success status, typically a validation failure.
    #[error("request rejected (status {status})")]
    Rejected { status: u16, detail: Option<String> },
    /// A success response whose body did not decode.
    #[error("malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    /// HTTP status carried by this error, when a response was received.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized { status, .. }
            | Self::Server { status }
            | Self::Rejected { status, .. } => Some(*status),
            Self::ClientBuild(_) | Self::Network(_) | Self::Decode(_) => None,
        }
    }

    /// True for 401 and 403 — the failures the session gate keeps silent
    /// on the initial "who am I" check.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    /// Resolve a human-readable message for display.
    ///
    /// Server-provided detail wins; without a response the message is a
    /// generic connectivity failure; otherwise the caller's fallback,
    /// suffixed with the status code.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Network(_) => {
                "Could not reach the server. Check your connection.".to_owned()
            }
            Self::Unauthorized { detail: Some(detail), .. }
            | Self::Rejected { detail: Some(detail), .. } => detail.clone(),
            Self::Unauthorized { status, detail: None }
            | Self::Server { status }
            | Self::Rejected { status, detail: None } => {
                format!("{fallback} (status {status})")
            }
            Self::ClientBuild(_) | Self::Decode(_) => fallback.to_owned(),
        }
    }
}

/// Pull the message out of an API error body.
///
/// The backend reports failures as `{"detail": "..."}` or, for field
/// validation, `{"detail": [{"msg": "..."}, ...]}`.
#[must_use]
pub fn detail_message(body: &Value) -> Option<String> {
    match body.get("detail") {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Array(items)) => items
            .first()
            .and_then(|item| item.get("msg"))
            .and_then(Value::as_str)
            .map(str::to_owned),
        _ => None,
    }
}
