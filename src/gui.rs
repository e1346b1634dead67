// MotionDeck - gui.rs
//
// Top-level eframe::App implementation.
// Wires together all UI panels and manages the generation lifecycle.

use crate::app::generate::GenerationManager;
use crate::app::state::AppState;
use crate::ui;
use crate::util::constants;
use std::time::{Duration, Instant};

/// The MotionDeck application.
pub struct MotionDeckApp {
    pub state: AppState,
    pub generation_manager: GenerationManager,
}

impl MotionDeckApp {
    /// Create a new application instance with the given state and apply
    /// the restored theme before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, state: AppState) -> Self {
        ui::theme::apply(&cc.egui_ctx, state.theme);
        Self {
            state,
            generation_manager: GenerationManager::new(),
        }
    }
}

impl eframe::App for MotionDeckApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Poll for generation progress.
        let messages = self.generation_manager.poll_progress();
        let had_messages = !messages.is_empty();
        for msg in messages {
            self.state.apply_progress(msg);
        }
        // Keep repainting while a generation is in flight so progress
        // messages appear promptly even when the user is idle.
        if had_messages || self.state.generation_in_progress {
            ctx.request_repaint_after(Duration::from_millis(
                constants::GENERATION_POLL_INTERVAL_MS,
            ));
        }

        // ---- Handle flags set by panels ----
        // pending_generate: the trigger control was clicked.
        if self.state.pending_generate {
            self.state.pending_generate = false;
            // The trigger is disabled while Busy, so this is belt-and-braces:
            // a submission never overlaps an in-flight one.
            if !self.state.generation_in_progress {
                if let Some(prompt) = self.state.begin_generation() {
                    self.generation_manager
                        .start_generation(self.state.endpoint.clone(), prompt);
                }
            }
        }

        // theme_changed: the View menu toggled the preference. Apply the
        // visuals and persist immediately; the preference is written on every toggle.
        if self.state.theme_changed {
            self.state.theme_changed = false;
            ui::theme::apply(ctx, self.state.theme);
            self.state.save_session();
        }

        // Expire stale copy feedback so the button reverts to COPY.
        if self
            .state
            .copy_feedback_until
            .is_some_and(|until| Instant::now() >= until)
        {
            self.state.copy_feedback_until = None;
        }

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
                ui.menu_button("View", |ui| {
                    let mut light = self.state.theme == crate::core::model::ThemePreference::Light;
                    if ui.checkbox(&mut light, "Light Mode").changed() {
                        self.state.theme = if light {
                            crate::core::model::ThemePreference::Light
                        } else {
                            crate::core::model::ThemePreference::Dark
                        };
                        self.state.theme_changed = true;
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("About").clicked() {
                        self.state.show_about = true;
                        ui.close_menu();
                    }
                });
            });
        });

        // Status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                // BUSY badge — shown while a generation is in flight.
                if self.state.generation_in_progress {
                    ui.label(
                        egui::RichText::new(" \u{25cf} BUSY ")
                            .strong()
                            .color(ui::theme::BUSY_BADGE),
                    );
                    ui.separator();
                }
                ui.label(
                    egui::RichText::new(format!("Matrix: {}", self.state.endpoint))
                        .small()
                        .weak(),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(format!(
                            "{} v{}",
                            constants::APP_NAME,
                            constants::APP_VERSION
                        ))
                        .small()
                        .weak(),
                    );
                });
            });
        });

        // Status log panel (above the status bar).
        egui::TopBottomPanel::bottom("status_log_panel")
            .resizable(true)
            .default_height(ui::theme::STATUS_PANEL_HEIGHT)
            .show(ctx, |ui| {
                ui::panels::status::render(ui, &self.state);
            });

        // Prompt panel (top).
        egui::TopBottomPanel::top("prompt_panel").show(ctx, |ui| {
            ui::panels::prompt::render(ui, &mut self.state);
        });

        // Video panel (right).
        egui::SidePanel::right("video_panel")
            .default_width(ui::theme::VIDEO_PANEL_WIDTH)
            .resizable(true)
            .show(ctx, |ui| {
                ui::panels::video::render(ui, &self.state);
            });

        // Central panel (generated code).
        egui::CentralPanel::default().show(ctx, |ui| {
            ui::panels::code::render(ui, &mut self.state);
        });

        // About dialog (modal-ish).
        ui::panels::about::render(ctx, &mut self.state);
    }

    /// Called by eframe when the application window is about to close.
    ///
    /// Saves the current session so the next launch restores the theme.
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.state.save_session();
    }
}
