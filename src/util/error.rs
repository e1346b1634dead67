// MotionDeck - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// No string-based error propagation; every variant keeps enough context
// to produce an actionable status-log line.

use std::fmt;

/// Errors from the generation service round trip.
///
/// All three variants are terminal for the request that produced them:
/// nothing is retried, and the UI returns to the idle state after
/// surfacing the message.
#[derive(Debug)]
pub enum ClientError {
    /// Transport-level failure: connection refused, DNS, TLS, or the
    /// request never producing a response.
    Http(reqwest::Error),

    /// The service answered with a non-2xx status. `detail` is the
    /// service's own explanation from the error body, or a generic
    /// fallback when the body was missing or undecodable.
    Api { status: u16, detail: String },

    /// The service answered 2xx but the body did not decode as a
    /// generation response.
    InvalidResponse { reason: String },
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(e) => write!(f, "request failed: {e}"),
            Self::Api { detail, .. } => f.write_str(detail),
            Self::InvalidResponse { reason } => {
                write!(f, "invalid response from service: {reason}")
            }
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Http(e) => Some(e),
            Self::Api { .. } | Self::InvalidResponse { .. } => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The Api variant surfaces the service's detail verbatim; that text
    /// is what ends up in the status log after "CRITICAL ERROR :: ".
    #[test]
    fn api_error_displays_detail_verbatim() {
        let err = ClientError::Api {
            status: 400,
            detail: "The AI generated invalid Manim code. Please try a different prompt."
                .to_string(),
        };
        assert_eq!(
            err.to_string(),
            "The AI generated invalid Manim code. Please try a different prompt."
        );
    }

    #[test]
    fn invalid_response_display_names_the_reason() {
        let err = ClientError::InvalidResponse {
            reason: "missing field `video_url`".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("invalid response"));
        assert!(text.contains("video_url"));
    }
}
