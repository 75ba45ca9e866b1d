//! Error types for the contact book client.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when interacting with the contact book API.
#[derive(Error, Debug)]
pub enum ContactApiError {
    /// HTTP request failed before a response arrived
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// API returned a non-success status code
    #[error("API error (status {status}): {message}")]
    ApiError {
        status: u16,
        message: String,
        /// Human-readable `detail` field from the error body, if any
        detail: Option<String>,
    },

    /// Failed to parse JSON response
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Network timeout
    #[error("Request timeout")]
    Timeout,
}

impl ContactApiError {
    /// Build an `ApiError` from a status code and raw response body.
    ///
    /// The body is searched for a `detail` field. A string detail is taken
    /// verbatim; a validation-error array has its `msg` entries joined.
    pub fn from_status(status: u16, body: String) -> Self {
        let detail = extract_detail(&body);
        let message = if body.trim().is_empty() {
            "Unknown error".to_string()
        } else {
            body
        };

        ContactApiError::ApiError {
            status,
            message,
            detail,
        }
    }

    /// The server-provided detail message, if the error carried one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ContactApiError::ApiError { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// The HTTP status code, for errors that came from a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            ContactApiError::ApiError { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// True when no response was received at all.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            ContactApiError::HttpError(_) | ContactApiError::Timeout
        )
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: serde_json::Value,
}

fn extract_detail(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;

    match parsed.detail {
        serde_json::Value::String(s) if !s.is_empty() => Some(s),
        serde_json::Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(|m| m.as_str()))
                .collect();
            if messages.is_empty() {
                None
            } else {
                Some(messages.join("; "))
            }
        }
        _ => None,
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with ContactApiError
pub type ContactApiResult<T> = Result<T, ContactApiError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ContactApiError::HttpError("Connection failed".to_string());
        assert_eq!(err.to_string(), "HTTP request failed: Connection failed");

        let err = ConfigError::InvalidValue {
            var: "SEARCH_DEBOUNCE_MS".to_string(),
            reason: "Must be greater than zero".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for SEARCH_DEBOUNCE_MS: Must be greater than zero"
        );

        assert_eq!(ContactApiError::Timeout.to_string(), "Request timeout");
    }

    #[test]
    fn test_from_status_string_detail() {
        let err = ContactApiError::from_status(400, r#"{"detail":"duplicate phone"}"#.to_string());
        assert_eq!(err.detail(), Some("duplicate phone"));
        assert_eq!(err.status(), Some(400));
        assert!(err.to_string().contains("400"));
    }

    #[test]
    fn test_from_status_validation_array() {
        let body = r#"{"detail":[
            {"loc":["body","name"],"msg":"field required","type":"missing"},
            {"loc":["body","phone"],"msg":"field required","type":"missing"}
        ]}"#;
        let err = ContactApiError::from_status(422, body.to_string());
        assert_eq!(err.detail(), Some("field required; field required"));
    }

    #[test]
    fn test_from_status_without_detail() {
        let err = ContactApiError::from_status(500, "Internal Server Error".to_string());
        assert_eq!(err.detail(), None);
        assert!(err.to_string().contains("Internal Server Error"));

        let err = ContactApiError::from_status(502, String::new());
        assert!(err.to_string().contains("Unknown error"));
    }

    #[test]
    fn test_not_found_and_transport() {
        let err = ContactApiError::from_status(404, r#"{"detail":"Contact not found"}"#.to_string());
        assert!(err.is_not_found());
        assert!(!err.is_transport());

        assert!(ContactApiError::Timeout.is_transport());
        assert!(ContactApiError::HttpError("x".into()).detail().is_none());
    }
}
