// MotionDeck - tests/e2e_generation.rs
//
// End-to-end tests for the generation flow.
//
// These tests exercise the real worker thread, the real blocking HTTP
// client, and real TCP sockets — no mocks of our own code. A canned
// HTTP/1.1 responder stands in for the generation service, which is
// exactly how the service looks from the client's side of the wire.

use motiondeck::app::generate::GenerationManager;
use motiondeck::app::state::AppState;
use motiondeck::core::model::{GenerationProgress, ThemePreference};
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::path::PathBuf;
use std::sync::mpsc;
use std::time::{Duration, Instant};

// =============================================================================
// Canned HTTP service
// =============================================================================

/// Spawn a single-request HTTP responder on an ephemeral port.
///
/// Returns the base URL to point the client at, and a channel that yields
/// the raw request text (request line + headers + body) once received.
fn spawn_service(status_line: &str, body: &str) -> (String, mpsc::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    let status_line = status_line.to_string();
    let body = body.to_string();
    let (tx, rx) = mpsc::channel();

    std::thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let request = read_http_request(&mut stream);
            let _ = tx.send(request);
            let response = format!(
                "HTTP/1.1 {status_line}\r\n\
                 content-type: application/json\r\n\
                 content-length: {}\r\n\
                 connection: close\r\n\
                 \r\n\
                 {body}",
                body.len()
            );
            let _ = stream.write_all(response.as_bytes());
            let _ = stream.flush();
        }
    });

    (format!("http://{addr}"), rx)
}

/// Read one HTTP request (headers + content-length body) from the stream.
fn read_http_request(stream: &mut TcpStream) -> String {
    let mut buf: Vec<u8> = Vec::new();
    let mut chunk = [0u8; 1024];

    loop {
        let n = match stream.read(&mut chunk) {
            Ok(0) | Err(_) => break,
            Ok(n) => n,
        };
        buf.extend_from_slice(&chunk[..n]);

        if let Some(pos) = find_subslice(&buf, b"\r\n\r\n") {
            let headers = String::from_utf8_lossy(&buf[..pos]).to_string();
            let content_length = headers
                .lines()
                .find_map(|line| {
                    let (name, value) = line.split_once(':')?;
                    if name.eq_ignore_ascii_case("content-length") {
                        value.trim().parse::<usize>().ok()
                    } else {
                        None
                    }
                })
                .unwrap_or(0);

            let body_start = pos + 4;
            while buf.len() < body_start + content_length {
                let n = match stream.read(&mut chunk) {
                    Ok(0) | Err(_) => break,
                    Ok(n) => n,
                };
                buf.extend_from_slice(&chunk[..n]);
            }
            break;
        }
    }

    String::from_utf8_lossy(&buf).to_string()
}

fn find_subslice(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

// =============================================================================
// Helpers
// =============================================================================

fn test_state(endpoint: &str) -> AppState {
    AppState::new(
        endpoint.to_string(),
        ThemePreference::Dark,
        PathBuf::from("/tmp/motiondeck-e2e-unused"),
        false,
    )
}

/// Poll the manager until a terminal message arrives, returning everything
/// received. Panics after `timeout` so a hung worker fails the test
/// instead of wedging the suite.
fn wait_for_terminal(manager: &GenerationManager, timeout: Duration) -> Vec<GenerationProgress> {
    let deadline = Instant::now() + timeout;
    let mut all: Vec<GenerationProgress> = Vec::new();

    loop {
        all.extend(manager.poll_progress());
        let has_terminal = all.iter().any(|m| {
            matches!(
                m,
                GenerationProgress::Completed { .. } | GenerationProgress::Failed { .. }
            )
        });
        if has_terminal {
            return all;
        }
        assert!(
            Instant::now() < deadline,
            "timed out waiting for terminal progress; got {all:?}"
        );
        std::thread::sleep(Duration::from_millis(10));
    }
}

fn awaiting_lines(state: &AppState) -> usize {
    state
        .status_lines
        .iter()
        .filter(|l| l.message.contains("AWAITING NEW DIRECTIVE"))
        .count()
}

// =============================================================================
// Success path
// =============================================================================

/// Full happy path: the worker reports Contacting → Received → Completed,
/// the request is a JSON POST to /api/generate, and applying the messages
/// leaves the state Idle with both outputs populated and exactly one
/// awaiting line.
#[test]
fn e2e_successful_generation_round_trip() {
    let (endpoint, request_rx) = spawn_service(
        "200 OK",
        r#"{"generated_code": "from manim import *\n\nclass GeneratedScene(Scene):\n    pass", "video_url": "/media/videos/scene/1080p60/GeneratedScene.mp4"}"#,
    );

    let mut state = test_state(&endpoint);
    state.prompt_input = "a circle turning into a square".to_string();
    let prompt = state.begin_generation().expect("prompt accepted");

    let mut manager = GenerationManager::new();
    manager.start_generation(state.endpoint.clone(), prompt);

    let messages = wait_for_terminal(&manager, Duration::from_secs(10));

    // The wire request matches the service contract.
    let request = request_rx
        .recv_timeout(Duration::from_secs(5))
        .expect("service should have received a request");
    assert!(
        request.starts_with("POST /api/generate"),
        "expected POST /api/generate, got: {}",
        request.lines().next().unwrap_or("")
    );
    assert!(
        request.contains(r#""text":"a circle turning into a square""#),
        "request body must be {{\"text\": ...}}, got: {request}"
    );

    // Progress sequence: Contacting first, Received before the terminal.
    assert!(
        matches!(messages.first(), Some(GenerationProgress::Contacting)),
        "first message should be Contacting, got {messages:?}"
    );
    assert!(
        messages
            .iter()
            .any(|m| matches!(m, GenerationProgress::Received)),
        "a transport response should produce Received, got {messages:?}"
    );

    for msg in messages {
        state.apply_progress(msg);
    }

    assert!(!state.generation_in_progress, "state must return to Idle");
    assert!(
        state
            .generated_code
            .as_deref()
            .unwrap()
            .contains("GeneratedScene"),
        "generated code must be stored"
    );
    assert_eq!(
        state.resolved_video_url().unwrap(),
        format!("{endpoint}/media/videos/scene/1080p60/GeneratedScene.mp4"),
        "relative video URL must resolve against the endpoint"
    );
    assert_eq!(awaiting_lines(&state), 1);
}

// =============================================================================
// Server errors
// =============================================================================

/// A non-2xx response with {"detail": ...} surfaces the detail in the
/// status log and re-enables the trigger.
#[test]
fn e2e_server_error_detail_reaches_the_log() {
    let (endpoint, _request_rx) =
        spawn_service("500 Internal Server Error", r#"{"detail": "Matrix offline"}"#);

    let mut state = test_state(&endpoint);
    state.prompt_input = "spin a cube".to_string();
    let prompt = state.begin_generation().unwrap();

    let mut manager = GenerationManager::new();
    manager.start_generation(state.endpoint.clone(), prompt);

    let messages = wait_for_terminal(&manager, Duration::from_secs(10));
    let failed = messages
        .iter()
        .find_map(|m| match m {
            GenerationProgress::Failed { error } => Some(error.clone()),
            _ => None,
        })
        .expect("a 500 must produce Failed");
    assert_eq!(failed, "Matrix offline");

    for msg in messages {
        state.apply_progress(msg);
    }

    assert!(
        state
            .status_lines
            .iter()
            .any(|l| l.message.contains("Matrix offline")),
        "the service's detail must appear in the status log"
    );
    assert!(!state.generation_in_progress, "trigger must be re-enabled");
    assert!(state.generated_code.is_none());
    assert_eq!(awaiting_lines(&state), 1);
}

/// A non-2xx response without a decodable detail body falls back to the
/// generic message rather than failing to report.
#[test]
fn e2e_server_error_without_detail_uses_fallback() {
    let (endpoint, _request_rx) = spawn_service("502 Bad Gateway", "upstream exploded");

    let mut state = test_state(&endpoint);
    state.prompt_input = "anything".to_string();
    let prompt = state.begin_generation().unwrap();

    let mut manager = GenerationManager::new();
    manager.start_generation(state.endpoint.clone(), prompt);

    let messages = wait_for_terminal(&manager, Duration::from_secs(10));
    let failed = messages
        .iter()
        .find_map(|m| match m {
            GenerationProgress::Failed { error } => Some(error.clone()),
            _ => None,
        })
        .expect("a 502 must produce Failed");
    assert_eq!(failed, "Unknown server error");
}

/// A 2xx response whose body is not a generation response is surfaced as
/// a failure, not a panic.
#[test]
fn e2e_undecodable_success_body_fails_cleanly() {
    let (endpoint, _request_rx) = spawn_service("200 OK", r#"{"unexpected": true}"#);

    let mut state = test_state(&endpoint);
    state.prompt_input = "anything".to_string();
    let prompt = state.begin_generation().unwrap();

    let mut manager = GenerationManager::new();
    manager.start_generation(state.endpoint.clone(), prompt);

    let messages = wait_for_terminal(&manager, Duration::from_secs(10));
    assert!(
        messages
            .iter()
            .any(|m| matches!(m, GenerationProgress::Failed { .. })),
        "undecodable body must produce Failed, got {messages:?}"
    );

    for msg in messages {
        state.apply_progress(msg);
    }
    assert!(!state.generation_in_progress);
    assert_eq!(awaiting_lines(&state), 1);
}

// =============================================================================
// Transport failures
// =============================================================================

/// Connection refused: no Received message (no transport response ever
/// arrived), a Failed terminal, and the Idle state restored.
#[test]
fn e2e_connection_refused_restores_idle() {
    // Bind then immediately drop to get a port with nothing listening.
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let endpoint = format!("http://127.0.0.1:{port}");

    let mut state = test_state(&endpoint);
    state.prompt_input = "a pendulum".to_string();
    let prompt = state.begin_generation().unwrap();

    let mut manager = GenerationManager::new();
    manager.start_generation(state.endpoint.clone(), prompt);

    let messages = wait_for_terminal(&manager, Duration::from_secs(10));
    assert!(
        !messages
            .iter()
            .any(|m| matches!(m, GenerationProgress::Received)),
        "no transport response means no Received message"
    );

    for msg in messages {
        state.apply_progress(msg);
    }

    assert!(!state.generation_in_progress);
    assert!(
        state
            .status_lines
            .iter()
            .any(|l| l.message.starts_with("CRITICAL ERROR ::")),
        "transport failure must be surfaced with the critical prefix"
    );
    assert_eq!(awaiting_lines(&state), 1);
}

// =============================================================================
// Theme persistence
// =============================================================================

/// Toggling the theme persists it such that a fresh load (as at the next
/// launch) yields the same preference.
#[test]
fn e2e_theme_toggle_survives_reload() {
    let dir = tempfile::TempDir::new().unwrap();

    let mut state = AppState::new(
        "http://127.0.0.1:8000".to_string(),
        ThemePreference::Dark,
        dir.path().to_path_buf(),
        false,
    );

    state.theme = state.theme.toggled();
    state.save_session();

    let reloaded = motiondeck::app::session::load(&motiondeck::app::session::session_path(
        dir.path(),
    ))
    .expect("session should exist after save");
    assert_eq!(reloaded.theme, ThemePreference::Light);
}
