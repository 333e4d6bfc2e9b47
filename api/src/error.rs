//! Error taxonomy for backend calls.
//!
//! Every failure a request can produce collapses into [`ApiError`]; call
//! sites catch it and turn [`user_message`](ApiError::user_message) into a
//! toast. Nothing here is fatal to a page.

use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a usable response (network down, DNS,
    /// malformed body).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("backend returned {status}: {message}")]
    Backend { status: u16, message: String },

    /// A sign-in response that did not carry the expected token.
    #[error("sign-in response did not include a token")]
    MissingToken,
}

impl ApiError {
    /// Short copy suitable for a transient notification.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Transport(_) => "Something went wrong. Please try again.".to_string(),
            ApiError::Backend { message, .. } => message.clone(),
            ApiError::MissingToken => "Authentication token not received".to_string(),
        }
    }
}

/// Error payload the backend sends with non-2xx responses; either field may
/// carry the human-readable reason.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    pub message: Option<String>,
    pub error: Option<String>,
}

impl ErrorBody {
    /// Preferred message, `message` over `error`, with a generic fallback.
    pub fn into_message(self) -> String {
        self.message
            .or(self.error)
            .unwrap_or_else(|| "Please try again.".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_body_prefers_message_over_error() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"message":"Invalid credentials","error":"bad"}"#).unwrap();
        assert_eq!(body.into_message(), "Invalid credentials");

        let body: ErrorBody = serde_json::from_str(r#"{"error":"bad request"}"#).unwrap();
        assert_eq!(body.into_message(), "bad request");

        let body: ErrorBody = serde_json::from_str("{}").unwrap();
        assert_eq!(body.into_message(), "Please try again.");
    }

    #[test]
    fn backend_errors_surface_their_message_to_users() {
        let err = ApiError::Backend {
            status: 401,
            message: "Invalid email or password".to_string(),
        };
        assert_eq!(err.user_message(), "Invalid email or password");
    }
}
