// MotionDeck - ui/theme.rs
//
// Theme application, status-line colour mapping, and layout constants.
// No dependencies on app state or business logic.

use crate::core::model::ThemePreference;
use egui::Color32;

/// Apply the given preference to the egui context.
///
/// Swapping `Visuals` wholesale is the native analogue of enabling one of
/// two stylesheets: every widget picks up the new palette on the next frame.
pub fn apply(ctx: &egui::Context, preference: ThemePreference) {
    match preference {
        ThemePreference::Dark => ctx.set_visuals(egui::Visuals::dark()),
        ThemePreference::Light => ctx.set_visuals(egui::Visuals::light()),
    }
}

/// Colour override for a status-log message, `None` for the default text
/// colour. The mapping keys off the conventional message prefixes so
/// error lines stand out in the console.
pub fn status_colour(message: &str) -> Option<Color32> {
    if message.starts_with("ERROR ::") || message.starts_with("CRITICAL ERROR ::") {
        Some(Color32::from_rgb(220, 38, 38)) // Red 600, legible on both themes
    } else if message.starts_with("> ") {
        Some(Color32::from_rgb(34, 197, 94)) // Green 500
    } else {
        None
    }
}

/// Busy badge colour (status bar, while a generation is in flight).
pub const BUSY_BADGE: Color32 = Color32::from_rgb(217, 119, 6); // Amber 600

/// Layout constants.
pub const STATUS_PANEL_HEIGHT: f32 = 160.0;
pub const VIDEO_PANEL_WIDTH: f32 = 300.0;
pub const PROMPT_INPUT_ROWS: usize = 3;
