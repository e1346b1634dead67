// MotionDeck - platform/config.rs
//
// Platform-specific configuration, data directory resolution, and
// config.toml loading with startup validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::core::model::ThemePreference;
use crate::util::constants;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for MotionDeck data and configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/motiondeck/ or %APPDATA%\MotionDeck\)
    pub config_dir: PathBuf,

    /// Data directory for the session file.
    pub data_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to current directory if platform dirs cannot be determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            let data_dir = proj_dirs.data_dir().to_path_buf();

            tracing::debug!(
                config = %config_dir.display(),
                data = %data_dir.display(),
                "Platform paths resolved"
            );

            Self {
                config_dir,
                data_dir,
            }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            let fallback = PathBuf::from(".");
            Self {
                config_dir: fallback.clone(),
                data_dir: fallback,
            }
        }
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility -- a newer
/// config file can be used with an older binary without crashing.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[service]` section.
    pub service: ServiceSection,
    /// `[ui]` section.
    pub ui: UiSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[service]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct ServiceSection {
    /// Base URL of the generation service.
    pub endpoint: Option<String>,
}

/// `[ui]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct UiSection {
    /// Theme: "dark" or "light". First-run default only — once the user
    /// toggles the theme in the app, the session file takes precedence.
    pub theme: Option<String>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// Validated application configuration derived from `config.toml`.
///
/// All values are validated at load time. Invalid values produce
/// actionable warnings and fall back to defaults.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the generation service.
    pub endpoint: String,

    /// First-run theme preference.
    pub theme: ThemePreference,

    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: constants::DEFAULT_ENDPOINT.to_string(),
            theme: ThemePreference::Dark,
            log_level: None,
        }
    }
}

/// Load and validate `config.toml` from the given config directory.
///
/// Returns `AppConfig` with validated values and a list of non-fatal
/// warnings. If the file does not exist, returns defaults with no warnings
/// (first-run). If the file is unparseable, returns defaults with an error
/// warning -- the application still starts but the user is informed.
pub fn load_config(config_dir: &Path) -> (AppConfig, Vec<String>) {
    let config_path = config_dir.join(constants::CONFIG_FILE_NAME);

    let mut warnings: Vec<String> = Vec::new();

    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "No config.toml found; using defaults");
        return (AppConfig::default(), warnings);
    }

    let content = match std::fs::read_to_string(&config_path) {
        Ok(c) => c,
        Err(e) => {
            let msg = format!(
                "Could not read config file '{}': {e}. Using defaults.",
                config_path.display()
            );
            tracing::warn!("{}", msg);
            warnings.push(msg);
            return (AppConfig::default(), warnings);
        }
    };

    let raw: RawConfig = match toml::from_str(&content) {
        Ok(r) => r,
        Err(e) => {
            let msg = format!(
                "Failed to parse config file '{}': {e}. Using defaults. \
                 See config.example.toml for the expected format.",
                config_path.display()
            );
            tracing::warn!("{}", msg);
            warnings.push(msg);
            return (AppConfig::default(), warnings);
        }
    };

    tracing::info!(path = %config_path.display(), "Loaded config.toml");

    // Validate each field, accumulating all warnings.
    let mut config = AppConfig::default();

    // -- Service: endpoint --
    if let Some(ref endpoint) = raw.service.endpoint {
        let trimmed = endpoint.trim().trim_end_matches('/');
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            config.endpoint = trimmed.to_string();
        } else {
            warnings.push(format!(
                "[service] endpoint = \"{endpoint}\" is not an http(s) URL. \
                 Using default ({}).",
                constants::DEFAULT_ENDPOINT,
            ));
        }
    }

    // -- UI: theme --
    if let Some(ref theme) = raw.ui.theme {
        match ThemePreference::parse(theme) {
            Some(t) => config.theme = t,
            None => {
                warnings.push(format!(
                    "[ui] theme = \"{theme}\" is not recognised. \
                     Expected \"dark\" or \"light\". Using default (dark).",
                ));
            }
        }
    }

    // -- Logging: level --
    if let Some(ref level) = raw.logging.level {
        let valid = ["error", "warn", "info", "debug", "trace"];
        if valid.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level.clone());
        } else {
            warnings.push(format!(
                "[logging] level = \"{level}\" is not recognised. \
                 Valid values: error, warn, info, debug, trace. Using default (info).",
            ));
        }
    }

    if !warnings.is_empty() {
        tracing::warn!(count = warnings.len(), "Config validation produced warnings");
    }

    (config, warnings)
}

// =============================================================================
// Unit tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) {
        std::fs::write(dir.path().join(constants::CONFIG_FILE_NAME), content).unwrap();
    }

    #[test]
    fn missing_config_is_silent_first_run() {
        let dir = TempDir::new().unwrap();
        let (config, warnings) = load_config(dir.path());
        assert!(warnings.is_empty());
        assert_eq!(config.endpoint, constants::DEFAULT_ENDPOINT);
        assert_eq!(config.theme, ThemePreference::Dark);
    }

    #[test]
    fn valid_config_is_applied() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir,
            r#"
            [service]
            endpoint = "https://matrix.example.com/"

            [ui]
            theme = "light"

            [logging]
            level = "debug"
            "#,
        );
        let (config, warnings) = load_config(dir.path());
        assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");
        // Trailing slash is normalised away.
        assert_eq!(config.endpoint, "https://matrix.example.com");
        assert_eq!(config.theme, ThemePreference::Light);
        assert_eq!(config.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn invalid_endpoint_warns_and_falls_back() {
        let dir = TempDir::new().unwrap();
        write_config(&dir, "[service]\nendpoint = \"matrix.example.com\"\n");
        let (config, warnings) = load_config(dir.path());
        assert_eq!(config.endpoint, constants::DEFAULT_ENDPOINT);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("endpoint"));
    }

    #[test]
    fn invalid_theme_warns_and_falls_back() {
        let dir = TempDir::new().unwrap();
        write_config(&dir, "[ui]\ntheme = \"solarized\"\n");
        let (config, warnings) = load_config(dir.path());
        assert_eq!(config.theme, ThemePreference::Dark);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("solarized"));
    }

    #[test]
    fn unparseable_toml_warns_and_uses_defaults() {
        let dir = TempDir::new().unwrap();
        write_config(&dir, "this is not [valid toml");
        let (config, warnings) = load_config(dir.path());
        assert_eq!(config.endpoint, constants::DEFAULT_ENDPOINT);
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir,
            "[service]\nendpoint = \"http://localhost:9000\"\nfuture_knob = 42\n",
        );
        let (config, warnings) = load_config(dir.path());
        assert!(warnings.is_empty());
        assert_eq!(config.endpoint, "http://localhost:9000");
    }
}
