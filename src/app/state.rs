// MotionDeck - app/state.rs
//
// Application state management. Holds the prompt input, generation
// lifecycle state, status log, rendered outputs, and theme preference.
// Owned by the eframe::App implementation; panels receive it by &mut
// and communicate back through request flags.

use crate::app::session::{self, SessionData};
use crate::core::model::{GenerationProgress, StatusLine, ThemePreference};
use std::path::PathBuf;
use std::time::Instant;

/// Top-level application state.
#[derive(Debug)]
pub struct AppState {
    /// Base URL of the generation service.
    pub endpoint: String,

    /// Current contents of the directive input box.
    pub prompt_input: String,

    /// Whether a generation round trip is in flight. While true the
    /// trigger control is disabled, which is the only overlap safeguard.
    pub generation_in_progress: bool,

    /// Append-only status log. Grows until the application exits.
    pub status_lines: Vec<StatusLine>,

    /// Code returned by the most recent successful generation.
    pub generated_code: Option<String>,

    /// Video URL returned by the most recent successful generation,
    /// exactly as the service sent it (possibly server-relative).
    pub video_url: Option<String>,

    /// Active theme preference.
    pub theme: ThemePreference,

    /// Set by the View menu when the theme is toggled; the app loop
    /// applies the visuals and persists the session, then clears it.
    pub theme_changed: bool,

    /// Set by the prompt panel when the trigger control is clicked.
    pub pending_generate: bool,

    /// While `Some` and in the future, the COPY button reads COPIED.
    pub copy_feedback_until: Option<Instant>,

    /// Whether to show the About dialog.
    pub show_about: bool,

    /// Platform data directory (session file lives here).
    pub data_dir: PathBuf,

    /// Whether debug mode is enabled.
    pub debug_mode: bool,
}

impl AppState {
    /// Create initial state. Seeds the status log with the standby line.
    pub fn new(
        endpoint: String,
        theme: ThemePreference,
        data_dir: PathBuf,
        debug_mode: bool,
    ) -> Self {
        let mut state = Self {
            endpoint,
            prompt_input: String::new(),
            generation_in_progress: false,
            status_lines: Vec::new(),
            generated_code: None,
            video_url: None,
            theme,
            theme_changed: false,
            pending_generate: false,
            copy_feedback_until: None,
            show_about: false,
            data_dir,
            debug_mode,
        };
        state.log_status("> STANDBY");
        state
    }

    /// Append a timestamped line to the status log.
    pub fn log_status(&mut self, message: impl Into<String>) {
        self.status_lines.push(StatusLine::now(message));
    }

    /// Validate the prompt and enter the Busy state.
    ///
    /// Returns the trimmed prompt to submit, or `None` if the prompt is
    /// empty; in that case an error line is logged and the state stays
    /// Idle so no request is ever issued.
    pub fn begin_generation(&mut self) -> Option<String> {
        let prompt = self.prompt_input.trim().to_string();
        if prompt.is_empty() {
            self.log_status("ERROR :: Please enter a prompt directive.");
            return None;
        }

        self.generation_in_progress = true;
        self.generated_code = None;
        self.video_url = None;
        self.copy_feedback_until = None;

        self.log_status("INITIATING DIRECTIVE...");
        self.log_status(format!("PROMPT: \"{prompt}\""));

        Some(prompt)
    }

    /// Apply one progress message from the generation worker.
    ///
    /// `Completed` and `Failed` are terminal: they restore the Idle state
    /// (re-enabling the trigger) and append the awaiting line. The worker
    /// sends exactly one terminal message per submission, so exactly one
    /// awaiting line follows each submission.
    pub fn apply_progress(&mut self, msg: GenerationProgress) {
        match msg {
            GenerationProgress::Contacting => {
                self.log_status("Contacting Generation Matrix (AI)...");
            }
            GenerationProgress::Received => {
                self.log_status("AI response received. Dispatching to rendering engine...");
            }
            GenerationProgress::Completed { code, video_url } => {
                self.log_status("RENDERING COMPLETE. VISUALS ONLINE.");
                self.generated_code = Some(code);
                self.video_url = Some(video_url);
                self.finish_generation();
            }
            GenerationProgress::Failed { error } => {
                self.log_status(format!("CRITICAL ERROR :: {error}"));
                self.finish_generation();
            }
        }
    }

    /// Return to Idle after a terminal progress message.
    fn finish_generation(&mut self) {
        self.generation_in_progress = false;
        self.log_status("> AWAITING NEW DIRECTIVE...");
    }

    /// The video URL resolved against the endpoint.
    ///
    /// The service returns server-relative media paths; absolute URLs are
    /// passed through untouched.
    pub fn resolved_video_url(&self) -> Option<String> {
        let url = self.video_url.as_deref()?;
        if url.starts_with("http://") || url.starts_with("https://") {
            Some(url.to_string())
        } else {
            let base = self.endpoint.trim_end_matches('/');
            let path = url.trim_start_matches('/');
            Some(format!("{base}/{path}"))
        }
    }

    /// Persist the current session (theme preference). Failures are
    /// logged and otherwise ignored; a broken data directory must not
    /// break the app.
    pub fn save_session(&self) {
        let path = session::session_path(&self.data_dir);
        if let Err(e) = session::save(&SessionData::new(self.theme), &path) {
            tracing::warn!(error = %e, "Failed to save session");
        }
    }
}

// =============================================================================
// Unit tests
// =============================================================================
