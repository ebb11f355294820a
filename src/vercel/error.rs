//! Errors raised by the Vercel API client.

use std::time::Duration;

use thiserror::Error;

/// Longest slice of a remote error body kept in [`ApiError::Remote`].
const MAX_BODY_EXCERPT: usize = 500;

/// Errors that can occur while talking to the Vercel REST API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The API answered with a non-2xx status.
    #[error("Vercel API error {status}: {message}")]
    Remote { status: u16, message: String },

    /// The request never produced a response (DNS, TLS, connection reset...).
    #[error("Transport error: {0}")]
    Transport(String),

    /// The request exceeded the configured timeout.
    #[error("Transport error: request timed out after {}s", .0.as_secs())]
    Timeout(Duration),

    /// The response body was not valid JSON for the expected shape.
    #[error("Invalid response body: {0}")]
    Decode(String),

    /// The HTTP client could not be constructed.
    #[error("Client setup failed: {0}")]
    Setup(String),
}

impl ApiError {
    /// Build a remote error, trimming long bodies.
    pub fn remote(status: u16, body: &str) -> Self {
        let body = body.trim();
        let message = if body.is_empty() {
            "<empty body>".to_string()
        } else if body.len() > MAX_BODY_EXCERPT {
            let mut cut = MAX_BODY_EXCERPT;
            while !body.is_char_boundary(cut) {
                cut -= 1;
            }
            format!("{}...", &body[..cut])
        } else {
            body.to_string()
        };
        Self::Remote { status, message }
    }

    /// HTTP status code for remote errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the failure happened below HTTP (connection or timeout).
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Timeout(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_error_display_includes_status() {
        let err = ApiError::remote(404, r#"{"error":{"code":"not_found"}}"#);
        let text = err.to_string();
        assert!(text.contains("404"));
        assert!(text.contains("not_found"));
        assert_eq!(err.status(), Some(404));
        assert!(!err.is_transport());
    }

    #[test]
    fn test_remote_error_truncates_long_body() {
        let body = "x".repeat(2000);
        match ApiError::remote(500, &body) {
            ApiError::Remote { message, .. } => {
                assert_eq!(message.len(), MAX_BODY_EXCERPT + 3);
                assert!(message.ends_with("..."));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_remote_error_empty_body() {
        let err = ApiError::remote(502, "   ");
        assert_eq!(err.to_string(), "Vercel API error 502: <empty body>");
    }

    #[test]
    fn test_timeout_is_transport() {
        let err = ApiError::Timeout(Duration::from_secs(30));
        assert!(err.is_transport());
        assert!(err.to_string().contains("30s"));
    }
}
