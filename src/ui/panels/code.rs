// MotionDeck - ui/panels/code.rs
//
// Generated code panel: syntax-highlighted view of the returned scene
// source, with a COPY button that places the plain text (never the
// highlighted markup) on the system clipboard.

use crate::app::state::AppState;
use crate::util::constants::{COPY_FEEDBACK_SECS, GENERATED_CODE_LANGUAGE};
use std::time::{Duration, Instant};

/// Render the code panel (central).
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("GENERATED CODE").small().strong().weak());

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let has_code = state.generated_code.is_some();
            ui.add_enabled_ui(has_code, |ui| {
                let showing_feedback = state
                    .copy_feedback_until
                    .is_some_and(|until| Instant::now() < until);
                let label = if showing_feedback { "COPIED" } else { "COPY" };

                if ui
                    .button(label)
                    .on_hover_text("Copy the code to the clipboard")
                    .clicked()
                {
                    if let Some(code) = &state.generated_code {
                        ui.ctx().copy_text(code.clone());
                        state.copy_feedback_until =
                            Some(Instant::now() + Duration::from_secs(COPY_FEEDBACK_SECS));
                    }
                }

                // Keep repainting until the label reverts to COPY.
                if showing_feedback {
                    ui.ctx().request_repaint_after(Duration::from_millis(200));
                }
            });
        });
    });

    ui.separator();

    match &state.generated_code {
        Some(code) => {
            let code_theme =
                egui_extras::syntax_highlighting::CodeTheme::from_memory(ui.ctx(), ui.style());
            egui::ScrollArea::both()
                .id_salt("code_display")
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    egui_extras::syntax_highlighting::code_view_ui(
                        ui,
                        &code_theme,
                        code,
                        GENERATED_CODE_LANGUAGE,
                    );
                });
        }
        None => {
            ui.centered_and_justified(|ui| {
                ui.label(
                    egui::RichText::new("No code generated yet. Issue a directive to begin.")
                        .weak(),
                );
            });
        }
    }
}
