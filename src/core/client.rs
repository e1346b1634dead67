// MotionDeck - core/client.rs
//
// HTTP client for the generation service. No UI awareness — just the
// round trip and status/body mapping. Runs on the generation worker
// thread, so the blocking reqwest client is used; the UI thread never
// touches it.

use crate::core::model::{ErrorDetail, GenerationRequest, GenerationResponse};
use crate::util::constants::GENERATE_PATH;
use crate::util::error::ClientError;

/// Fallback detail when an error body is missing or undecodable.
const UNKNOWN_SERVER_ERROR: &str = "Unknown server error";

/// Client for the generation service ("the Generation Matrix").
#[derive(Debug)]
pub struct MatrixClient {
    http: reqwest::blocking::Client,
    base_url: String,
}

impl MatrixClient {
    /// Create a client for the given base URL (no trailing slash expected;
    /// one is tolerated). The transport keeps its default timeout; the
    /// service renders video synchronously and slow responses are normal.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http: reqwest::blocking::Client::new(),
            base_url,
        }
    }

    /// Base URL this client was created with.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Submit a prompt and return the generated code and video URL.
    ///
    /// `on_response` fires as soon as a transport-level response arrives,
    /// before the status is inspected. It does not fire on connection
    /// failures. A single best-effort round trip: no retry, no explicit
    /// timeout, no cancellation.
    pub fn generate(
        &self,
        prompt: &str,
        on_response: impl FnOnce(),
    ) -> Result<GenerationResponse, ClientError> {
        let url = format!("{}{}", self.base_url, GENERATE_PATH);
        let request = GenerationRequest {
            text: prompt.to_string(),
        };

        let response = self.http.post(&url).json(&request).send()?;
        on_response();

        let status = response.status();
        if !status.is_success() {
            // The service reports failures as {"detail": "..."}; fall back
            // to a generic message when the body is missing or malformed.
            let detail = response
                .json::<ErrorDetail>()
                .map(|e| e.detail)
                .unwrap_or_else(|_| UNKNOWN_SERVER_ERROR.to_string());
            tracing::warn!(status = status.as_u16(), detail = %detail, "Service error");
            return Err(ClientError::Api {
                status: status.as_u16(),
                detail,
            });
        }

        response
            .json::<GenerationResponse>()
            .map_err(|e| ClientError::InvalidResponse {
                reason: e.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_keeps_base_url() {
        let client = MatrixClient::new("http://127.0.0.1:8000");
        assert_eq!(client.base_url(), "http://127.0.0.1:8000");
    }

    #[test]
    fn client_strips_trailing_slashes() {
        let client = MatrixClient::new("http://localhost:8000///");
        assert_eq!(client.base_url(), "http://localhost:8000");
    }
}
