//! Client error types.

use thiserror::Error;

/// Convenience alias for client call results.
pub type ApiResult<T> = Result<T, ApiError>;

/// Body of a failed backend response.
///
/// The backend answers errors either with a bare string or with a JSON
/// object carrying a `message` field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorBody {
    PlainText(String),
    Structured { message: Option<String> },
}

impl ErrorBody {
    /// Classify a raw response body.
    pub fn parse(raw: &[u8]) -> Self {
        match serde_json::from_slice::<serde_json::Value>(raw) {
            Ok(serde_json::Value::String(text)) => ErrorBody::PlainText(text),
            Ok(serde_json::Value::Object(map)) => ErrorBody::Structured {
                message: map
                    .get("message")
                    .and_then(|m| m.as_str())
                    .map(str::to_string),
            },
            Ok(_) => ErrorBody::Structured { message: None },
            Err(_) => ErrorBody::PlainText(String::from_utf8_lossy(raw).trim().to_string()),
        }
    }

    /// The string body, else the `message` field, else `fallback`.
    pub fn message_or(&self, fallback: &str) -> String {
        let message = match self {
            ErrorBody::PlainText(text) => Some(text.as_str()),
            ErrorBody::Structured { message } => message.as_deref(),
        };
        message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or(fallback)
            .to_string()
    }
}

/// Errors from a backend call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend answered 401. The session has already been cleared and
    /// the console sent to the login view.
    #[error("Unauthorized: {}", .0.message_or("session expired"))]
    Unauthorized(ErrorBody),

    #[error("Backend error ({status}): {}", body.message_or("no details"))]
    Backend { status: u16, body: ErrorBody },

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid endpoint URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl ApiError {
    /// User-facing message: whatever the backend said, else `fallback`.
    pub fn message_or(&self, fallback: &str) -> String {
        match self {
            ApiError::Unauthorized(body) | ApiError::Backend { body, .. } => {
                body.message_or(fallback)
            }
            ApiError::Transport(_) | ApiError::InvalidUrl(_) => fallback.to_string(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized(_) => Some(401),
            ApiError::Backend { status, .. } => Some(*status),
            ApiError::Transport(e) => e.status().map(|s| s.as_u16()),
            ApiError::InvalidUrl(_) => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_string_body_is_plain_text() {
        let body = ErrorBody::parse(br#""Username already exists""#);
        assert_eq!(body, ErrorBody::PlainText("Username already exists".into()));
        assert_eq!(body.message_or("fallback"), "Username already exists");
    }

    #[test]
    fn raw_text_body_is_plain_text() {
        let body = ErrorBody::parse("잘못된 비밀번호\n".as_bytes());
        assert_eq!(body.message_or("fallback"), "잘못된 비밀번호");
    }

    #[test]
    fn object_body_uses_message_field() {
        let body = ErrorBody::parse(br#"{"error":"bad_request","message":"Invalid role"}"#);
        assert_eq!(
            body,
            ErrorBody::Structured {
                message: Some("Invalid role".into())
            }
        );
        assert_eq!(body.message_or("fallback"), "Invalid role");
    }

    #[test]
    fn missing_or_empty_message_falls_back() {
        assert_eq!(ErrorBody::parse(br#"{"status":500}"#).message_or("Save failed"), "Save failed");
        assert_eq!(ErrorBody::parse(b"").message_or("Save failed"), "Save failed");
        assert_eq!(ErrorBody::parse(b"[1]").message_or("Save failed"), "Save failed");
    }

    #[test]
    fn api_error_reports_status() {
        let err = ApiError::Backend {
            status: 409,
            body: ErrorBody::PlainText("duplicate".into()),
        };
        assert_eq!(err.status(), Some(409));
        assert_eq!(err.message_or("x"), "duplicate");
        assert!(!err.is_unauthorized());
        assert_eq!(err.to_string(), "Backend error (409): duplicate");
    }
}
