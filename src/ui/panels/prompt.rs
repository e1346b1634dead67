// MotionDeck - ui/panels/prompt.rs
//
// Directive input and the trigger control. The button is disabled while
// a generation is in flight; the sole overlap safeguard.

use crate::app::state::AppState;
use crate::ui::theme;

/// Render the prompt panel (top).
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.add_space(4.0);
    ui.label(
        egui::RichText::new("PROMPT DIRECTIVE")
            .small()
            .strong()
            .weak(),
    );

    ui.horizontal(|ui| {
        let input = egui::TextEdit::multiline(&mut state.prompt_input)
            .desired_rows(theme::PROMPT_INPUT_ROWS)
            .desired_width(ui.available_width() - 120.0)
            .hint_text("Describe the animation to generate, e.g. \"a circle turning into a square\"");
        ui.add(input);

        ui.vertical(|ui| {
            let busy = state.generation_in_progress;
            let label = if busy { "EXECUTING..." } else { "EXECUTE" };
            ui.add_enabled_ui(!busy, |ui| {
                let button = egui::Button::new(egui::RichText::new(label).strong())
                    .min_size(egui::vec2(104.0, 32.0));
                if ui
                    .add(button)
                    .on_hover_text("Submit the directive to the Generation Matrix")
                    .clicked()
                {
                    state.pending_generate = true;
                }
            });
            if busy {
                ui.add(egui::Spinner::new());
            }
        });
    });
    ui.add_space(4.0);
}
