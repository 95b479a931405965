//! Error taxonomy for backend calls.
//!
//! Two shapes reach callers: a transport failure (network unreachable,
//! malformed body) or a non-2xx status with the most useful message the
//! response body offered. Views convert either into a single inline banner
//! string; nothing is retried and no status code is handled specially.

use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ApiError {
    #[error("{0}")]
    Transport(String),
    #[error("{message}")]
    Status { status: u16, message: String },
}

impl ApiError {
    /// The single human-readable string views show inline.
    pub fn message(&self) -> String {
        self.to_string()
    }

    pub(crate) fn transport(err: reqwest::Error) -> Self {
        ApiError::Transport(format!("request failed: {err}"))
    }

    pub(crate) fn status(status: u16, body: &str) -> Self {
        ApiError::Status {
            status,
            message: extract_message(status, body),
        }
    }
}

/// Pull a `message` or `error` field out of a JSON error body; otherwise
/// fall back to a generic string naming the HTTP status.
fn extract_message(status: u16, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["message", "error"] {
            if let Some(text) = value.get(key).and_then(|v| v.as_str()) {
                if !text.is_empty() {
                    return text.to_string();
                }
            }
        }
    }
    format!("request failed (HTTP {status})")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_field_is_preferred() {
        let err = ApiError::status(400, r#"{"message":"Score must be 1-5"}"#);
        assert_eq!(err.message(), "Score must be 1-5");
    }

    #[test]
    fn error_field_is_used_when_message_is_absent() {
        let err = ApiError::status(400, r#"{"error":"Username already taken"}"#);
        assert_eq!(err.message(), "Username already taken");
    }

    #[test]
    fn non_json_bodies_fall_back_to_a_generic_string() {
        let err = ApiError::status(502, "<html>Bad Gateway</html>");
        assert_eq!(err.message(), "request failed (HTTP 502)");
        let err = ApiError::status(404, "");
        assert_eq!(err.message(), "request failed (HTTP 404)");
    }

    #[test]
    fn non_string_fields_do_not_count() {
        let err = ApiError::status(500, r#"{"message": 42}"#);
        assert_eq!(err.message(), "request failed (HTTP 500)");
    }
}
