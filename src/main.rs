// MotionDeck - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Logging initialisation (debug mode support)
// 3. Config loading and session restore (theme preference)
// 4. eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` and other
// binary-side code can still use `crate::app::...`, `crate::core::...` etc.
pub use motiondeck::app;

pub use motiondeck::core;
pub use motiondeck::platform;
pub use motiondeck::ui;
pub use motiondeck::util;

use clap::Parser;

/// Compile-time-embedded icon PNG bytes (RGBA).
///
/// Using `include_bytes!` ensures the asset is baked into the binary so the
/// icon is always available regardless of the working directory at runtime.
static ICON_PNG: &[u8] = include_bytes!("../assets/icon.png");

/// Decode the embedded PNG and return an `eframe`-compatible `IconData`.
///
/// Falls back to a transparent 1x1 placeholder if decoding fails so the
/// application always launches rather than panicking on a missing asset.
fn load_icon() -> egui::IconData {
    use image::ImageDecoder;

    match image::codecs::png::PngDecoder::new(std::io::Cursor::new(ICON_PNG)) {
        Ok(decoder) => {
            let (w, h) = decoder.dimensions();
            // Convert to RGBA8 regardless of the source colour space.
            match image::DynamicImage::from_decoder(decoder) {
                Ok(img) => {
                    let rgba = img.into_rgba8();
                    egui::IconData {
                        rgba: rgba.into_raw(),
                        width: w,
                        height: h,
                    }
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to decode icon PNG; using placeholder");
                    placeholder_icon()
                }
            }
        }
        Err(e) => {
            tracing::warn!(error = %e, "Failed to open icon PNG decoder; using placeholder");
            placeholder_icon()
        }
    }
}

/// 1x1 transparent RGBA icon used when the real icon cannot be loaded.
fn placeholder_icon() -> egui::IconData {
    egui::IconData {
        rgba: vec![0u8; 4],
        width: 1,
        height: 1,
    }
}

/// MotionDeck - desktop console for a prompt-driven animation generation
/// service.
///
/// Type a directive, submit it to the Generation Matrix, and MotionDeck
/// shows the generated scene code (syntax-highlighted) and the rendered
/// video.
#[derive(Parser, Debug)]
#[command(name = "MotionDeck", version, about)]
struct Cli {
    /// Initial prompt directive (pre-fills the input box).
    prompt: Option<String>,

    /// Base URL of the generation service (overrides config.toml).
    #[arg(short = 'e', long = "endpoint")]
    endpoint: Option<String>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Resolve platform paths and load config before logging init so the
    // configured level can apply.
    let platform_paths = platform::config::PlatformPaths::resolve();
    let (config, config_warnings) = platform::config::load_config(&platform_paths.config_dir);

    // Initialise logging subsystem
    util::logging::init(cli.debug, config.log_level.as_deref());

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        "MotionDeck starting"
    );

    for warning in &config_warnings {
        tracing::warn!(warning = %warning, "Config validation warning");
    }

    // Endpoint precedence: CLI flag > config.toml > built-in default.
    let endpoint = cli
        .endpoint
        .map(|e| e.trim_end_matches('/').to_string())
        .unwrap_or_else(|| config.endpoint.clone());

    // Theme precedence: persisted session (the user's last toggle) >
    // config.toml first-run default > dark.
    let session_file = app::session::session_path(&platform_paths.data_dir);
    let theme = app::session::load(&session_file)
        .map(|s| s.theme)
        .unwrap_or(config.theme);

    tracing::info!(endpoint = %endpoint, theme = %theme, "Ready to launch GUI");

    // Create application state
    let mut state = app::state::AppState::new(
        endpoint,
        theme,
        platform_paths.data_dir.clone(),
        cli.debug,
    );

    // Surface config problems in the status log as well as the trace output.
    for warning in config_warnings {
        state.log_status(format!("ERROR :: {warning}"));
    }

    // If a prompt was provided on the CLI, pre-fill the directive input.
    if let Some(prompt) = cli.prompt {
        state.prompt_input = prompt;
    }

    // Launch the GUI
    //
    // The icon is applied at two levels:
    //   1. OS-level (Windows EXE resource) — embedded by build.rs via winres.
    //      This covers the taskbar, Alt+Tab, title bar, and Explorer.
    //   2. Runtime (eframe viewport) — loaded here from the PNG asset.
    //      This covers the eframe-managed window icon on all platforms and
    //      acts as the canonical source on Linux/macOS.
    let icon_data = load_icon();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size([1100.0, 720.0])
            .with_min_inner_size([760.0, 480.0])
            .with_icon(icon_data),
        ..Default::default()
    };

    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |cc| Ok(Box::new(gui::MotionDeckApp::new(cc, state)))),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch MotionDeck GUI: {e}");
        std::process::exit(1);
    }
}
