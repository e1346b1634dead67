// MotionDeck - app/generate.rs
//
// Generation lifecycle management. Runs the service round trip on a
// background thread, sending progress messages to the UI thread via an
// mpsc channel.
//
// Architecture:
//   - `GenerationManager` lives on the UI thread; `run_generation` runs on
//     a background thread.
//   - All cross-thread communication is via `GenerationProgress` messages.
//   - One submission at a time: the UI disables the trigger control while
//     a generation is in flight, so the manager never holds more than one
//     live worker. There is deliberately no cancel flag, no retry, and no
//     timeout beyond the transport default: a single best-effort round
//     trip whose terminal message restores the Idle state.

use crate::core::client::MatrixClient;
use crate::core::model::GenerationProgress;
use std::sync::mpsc;

/// Manages a generation request on a background thread.
pub struct GenerationManager {
    /// Channel receiver for the UI to poll progress messages.
    progress_rx: Option<mpsc::Receiver<GenerationProgress>>,
}

impl GenerationManager {
    pub fn new() -> Self {
        Self { progress_rx: None }
    }

    /// Submit `prompt` to the service at `endpoint`.
    ///
    /// Spawns a background thread immediately; progress is sent over the
    /// channel. The caller is responsible for not starting a second
    /// generation while one is in flight (the trigger control is disabled
    /// while Busy).
    pub fn start_generation(&mut self, endpoint: String, prompt: String) {
        let (tx, rx) = mpsc::channel();
        self.progress_rx = Some(rx);

        std::thread::spawn(move || {
            run_generation(endpoint, prompt, tx);
        });

        tracing::info!("Generation started");
    }

    /// Poll for progress messages without blocking. Returns all pending messages.
    pub fn poll_progress(&self) -> Vec<GenerationProgress> {
        let mut messages = Vec::new();
        if let Some(ref rx) = self.progress_rx {
            while let Ok(msg) = rx.try_recv() {
                messages.push(msg);
            }
        }
        messages
    }
}

impl Default for GenerationManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Full round trip: contact → POST → decode → terminal message.
///
/// Runs on a background thread. Sends `GenerationProgress` messages to
/// `tx` and exits quietly if the receiver is dropped (UI closed).
fn run_generation(endpoint: String, prompt: String, tx: mpsc::Sender<GenerationProgress>) {
    macro_rules! send {
        ($msg:expr) => {
            if tx.send($msg).is_err() {
                return; // Receiver dropped (UI closed); exit quietly.
            }
        };
    }

    send!(GenerationProgress::Contacting);

    let client = MatrixClient::new(endpoint);
    let tx_response = tx.clone();
    let result = client.generate(&prompt, || {
        // Transport-level response arrived; decoding happens next.
        // Non-fatal: ignore send error (UI may have closed).
        let _ = tx_response.send(GenerationProgress::Received);
    });

    match result {
        Ok(response) => {
            tracing::info!(video_url = %response.video_url, "Generation complete");
            send!(GenerationProgress::Completed {
                code: response.generated_code,
                video_url: response.video_url,
            });
        }
        Err(e) => {
            tracing::warn!(error = %e, "Generation failed");
            send!(GenerationProgress::Failed {
                error: e.to_string(),
            });
        }
    }
}
