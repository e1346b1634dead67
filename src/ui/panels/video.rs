// MotionDeck - ui/panels/video.rs
//
// Video panel: shows the resolved URL of the rendered animation and hands
// playback to the system's default handler. A native egui app has no
// embedded video element, so opening externally is the desktop analogue
// of the original autoplay player.

use crate::app::state::AppState;

/// Render the video panel (right side).
pub fn render(ui: &mut egui::Ui, state: &AppState) {
    ui.label(egui::RichText::new("VISUALS").small().strong().weak());
    ui.separator();

    match state.resolved_video_url() {
        Some(url) => {
            ui.add_space(4.0);
            ui.label("Rendered animation:");
            ui.add_space(2.0);

            // The URL itself is clickable, and the button below is the
            // prominent affordance.
            ui.hyperlink_to(egui::RichText::new(&url).small().monospace(), &url);

            ui.add_space(8.0);
            if ui
                .button(egui::RichText::new("\u{25b6} PLAY VIDEO").strong())
                .on_hover_text("Open the rendered video with the system player")
                .clicked()
            {
                ui.ctx().open_url(egui::OpenUrl::new_tab(&url));
            }
        }
        None => {
            ui.add_space(8.0);
            ui.label(egui::RichText::new("No visuals online.").weak());
        }
    }
}
