// MotionDeck - ui/panels/status.rs
//
// Scrolling status log panel. Append-only; sticks to the bottom so the
// newest line is always visible unless the user scrolls back up.

use crate::app::state::AppState;
use crate::ui::theme;

/// Render the status log panel (bottom).
pub fn render(ui: &mut egui::Ui, state: &AppState) {
    ui.label(egui::RichText::new("STATUS LOG").small().strong().weak());

    egui::ScrollArea::vertical()
        .id_salt("status_log")
        .auto_shrink([false; 2])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            for line in &state.status_lines {
                let text = egui::RichText::new(line.to_string()).monospace();
                match theme::status_colour(&line.message) {
                    Some(colour) => ui.label(text.color(colour)),
                    None => ui.label(text),
                };
            }
        });
}
