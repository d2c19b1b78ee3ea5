pub mod quiz;
pub mod results;

use crate::QuizApp;
use egui::Context;

/// Diálogo de confirmación antes de descartar el intento.
pub fn ui_confirm_reset(app: &mut QuizApp, ctx: &Context) {
    egui::Window::new("Retake the quiz?")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label("Your answers will be cleared.");
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("Yes, start over").clicked() {
                    app.reset();
                }
                if ui.button("Cancel").clicked() {
                    app.cancel_reset();
                }
            });
        });
}
