// MotionDeck - util/constants.rs
//
// Single source of truth for all named constants and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "MotionDeck";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "MotionDeck";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Generation service
// =============================================================================

/// Default base URL of the generation service. Overridable via
/// `config.toml` (`[service] endpoint`) or the `--endpoint` CLI flag.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000";

/// Path of the generation operation on the service.
pub const GENERATE_PATH: &str = "/api/generate";

/// Language of the code the service returns, as a file extension for the
/// syntax highlighter. The service generates Manim scenes, which are Python.
pub const GENERATED_CODE_LANGUAGE: &str = "py";

// =============================================================================
// UI behaviour
// =============================================================================

/// How long the COPY button shows its COPIED confirmation.
pub const COPY_FEEDBACK_SECS: u64 = 2;

/// How often the UI repaints to poll the progress channel while a
/// generation is in flight (ms).
pub const GENERATION_POLL_INTERVAL_MS: u64 = 100;

// =============================================================================
// Files
// =============================================================================

/// Session file name within the platform data directory.
pub const SESSION_FILE_NAME: &str = "session.json";

/// Configuration file name within the platform config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

// =============================================================================
// Logging
// =============================================================================

/// Default log level when neither RUST_LOG, --debug, nor config set one.
pub const DEFAULT_LOG_LEVEL: &str = "info";
