// MotionDeck - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no UI,
// no platform dependencies.
//
// These types are the shared vocabulary across all layers: the wire
// shapes exchanged with the generation service, the persisted theme
// preference, and the progress messages streamed from the worker
// thread to the UI.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

// =============================================================================
// Theme preference
// =============================================================================

/// Colour scheme preference, persisted between launches.
///
/// Serialised as a lowercase string ("dark" / "light") so the session file
/// stays hand-editable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Dark,
    Light,
}

impl ThemePreference {
    /// The other preference (used by the toggle control).
    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Dark => ThemePreference::Light,
            ThemePreference::Light => ThemePreference::Dark,
        }
    }

    /// Lowercase name as stored on disk and in config.toml.
    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Dark => "dark",
            ThemePreference::Light => "light",
        }
    }

    /// Parse a config.toml value. Case-insensitive; anything unrecognised
    /// is `None` so the caller can warn and fall back to the default.
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "dark" => Some(ThemePreference::Dark),
            "light" => Some(ThemePreference::Light),
            _ => None,
        }
    }
}

impl std::fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Generation service wire shapes
// =============================================================================

/// Request body for `POST /api/generate`.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationRequest {
    /// The user's prompt directive.
    pub text: String,
}

/// Success response body from the generation service.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerationResponse {
    /// The generated scene source code (Python).
    pub generated_code: String,

    /// URL of the rendered video. May be server-relative
    /// (e.g. `/media/videos/...`); resolve against the endpoint before use.
    pub video_url: String,
}

/// Error response body: the service reports failures as `{"detail": "..."}`
/// with a non-2xx status.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorDetail {
    pub detail: String,
}

// =============================================================================
// Status log
// =============================================================================

/// One line in the status log panel. Append-only; lines are never removed
/// while the application runs.
#[derive(Debug, Clone)]
pub struct StatusLine {
    /// Local wall-clock time the line was appended.
    pub timestamp: DateTime<Local>,

    /// Human-readable message text.
    pub message: String,
}

impl StatusLine {
    /// Create a line stamped with the current local time.
    pub fn now(message: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for StatusLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.timestamp.format("%H:%M:%S"), self.message)
    }
}

// =============================================================================
// Generation progress messages
// =============================================================================

/// Progress messages sent from the generation worker thread to the UI.
///
/// The worker sends exactly one terminal message (`Completed` or `Failed`)
/// per submission; the UI's return to the idle state hangs off that
/// guarantee.
#[derive(Debug, Clone)]
pub enum GenerationProgress {
    /// The request is about to be sent to the generation service.
    Contacting,

    /// A transport-level response arrived (any status); decoding is next.
    Received,

    /// The service returned generated code and a rendered video URL.
    Completed { code: String, video_url: String },

    /// The round trip failed: server error detail, transport failure, or
    /// an undecodable response body.
    Failed { error: String },
}

// =============================================================================
// Unit tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_default_is_dark() {
        assert_eq!(ThemePreference::default(), ThemePreference::Dark);
    }

    #[test]
    fn theme_toggle_flips_both_ways() {
        assert_eq!(ThemePreference::Dark.toggled(), ThemePreference::Light);
        assert_eq!(ThemePreference::Light.toggled(), ThemePreference::Dark);
    }

    #[test]
    fn theme_parse_accepts_both_cases() {
        assert_eq!(ThemePreference::parse("dark"), Some(ThemePreference::Dark));
        assert_eq!(ThemePreference::parse("Light"), Some(ThemePreference::Light));
        assert_eq!(ThemePreference::parse("solarized"), None);
    }

    #[test]
    fn theme_serialises_as_lowercase_string() {
        let json = serde_json::to_string(&ThemePreference::Light).unwrap();
        assert_eq!(json, "\"light\"");
        let back: ThemePreference = serde_json::from_str("\"dark\"").unwrap();
        assert_eq!(back, ThemePreference::Dark);
    }

    #[test]
    fn request_body_shape_matches_service_contract() {
        let req = GenerationRequest {
            text: "a circle turning into a square".to_string(),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["text"], "a circle turning into a square");
        assert_eq!(
            json.as_object().unwrap().len(),
            1,
            "body must contain the text field only"
        );
    }

    #[test]
    fn response_body_decodes_both_fields() {
        let body = r#"{"generated_code": "from manim import *", "video_url": "/media/videos/x/1080p60/GeneratedScene.mp4"}"#;
        let resp: GenerationResponse = serde_json::from_str(body).unwrap();
        assert_eq!(resp.generated_code, "from manim import *");
        assert!(resp.video_url.ends_with("GeneratedScene.mp4"));
    }

    #[test]
    fn error_detail_decodes() {
        let body = r#"{"detail": "Failed to generate code from AI."}"#;
        let err: ErrorDetail = serde_json::from_str(body).unwrap();
        assert_eq!(err.detail, "Failed to generate code from AI.");
    }

    #[test]
    fn status_line_display_includes_timestamp_and_message() {
        let line = StatusLine::now("INITIATING DIRECTIVE...");
        let rendered = line.to_string();
        assert!(rendered.starts_with('['));
        assert!(rendered.ends_with("INITIATING DIRECTIVE..."));
    }
}
