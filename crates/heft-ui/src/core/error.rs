//! Error types surfaced by API reads.

use thiserror::Error;

/// Failure of a request against the Heft API.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (network, CORS, aborted).
    #[error("request failed: {detail}")]
    Transport {
        /// Message reported by the HTTP layer.
        detail: String,
    },
    /// The server answered with a non-success status code.
    #[error("server returned status {status}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Problem document message, when the body carried one.
        detail: Option<String>,
    },
    /// The response body did not match the expected shape.
    #[error("malformed response: {detail}")]
    Decode {
        /// Decoder message.
        detail: String,
    },
}

impl ApiError {
    /// Message suitable for inline display, preferring server-provided detail.
    #[must_use]
    pub fn display_message(&self) -> String {
        match self {
            Self::Status {
                status,
                detail: Some(detail),
            } => format!("{detail} ({status})"),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_message_includes_problem_detail() {
        let err = ApiError::Status {
            status: 503,
            detail: Some("settings store offline".into()),
        };
        assert_eq!(err.display_message(), "settings store offline (503)");
    }

    #[test]
    fn bare_status_falls_back_to_display() {
        let err = ApiError::Status {
            status: 404,
            detail: None,
        };
        assert_eq!(err.display_message(), "server returned status 404");
        let err = ApiError::Transport {
            detail: "connection refused".into(),
        };
        assert_eq!(err.display_message(), "request failed: connection refused");
    }
}
