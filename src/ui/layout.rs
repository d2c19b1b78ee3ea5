use egui::{CentralPanel, Context, Frame, Ui, Visuals};
use crate::QuizApp;

pub fn top_panel(app: &mut QuizApp, ctx: &Context, reiniciar: bool) {
    egui::TopBottomPanel::top("menu_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            ui.label(egui::RichText::new("GMAT Readiness Quiz").strong());
            if reiniciar {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("🔄 Retake quiz").clicked() {
                        app.request_reset();
                    }
                });
            }
        });
    });
}

pub fn bottom_panel(ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        // ----------- BOTONES DE TEMA -----------
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("🌙 Dark mode").clicked() {
                ctx.set_visuals(Visuals::dark());
            }
            if ui.button("☀ Light mode").clicked() {
                ctx.set_visuals(Visuals::light());
            }
        });
    });
}

/// Panel centrado tanto vertical como horizontalmente,
/// con un tamaño de contenido máximo y un bloque interior `inner`.
pub fn centered_panel(
    ctx: &Context,
    est_height: f32,
    max_width: f32,
    inner: impl FnOnce(&mut Ui),
) {
    CentralPanel::default().show(ctx, |ui| {
        // Espacio vertical para centrar
        let extra = ((ui.available_height() - est_height) / 2.0).max(0.0);
        ui.add_space(extra);
        ui.vertical_centered(|ui| {
            Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(16, 16))
                .show(ui, |ui| {
                    // Ajusta anchura
                    let w = ui.available_width().min(max_width);
                    ui.set_width(w);
                    // Ejecuta contenido
                    inner(ui);
                });
        });
        ui.add_space(extra);
    });
}

/// Dibuja dos botones del mismo tamaño en una fila, centrados en el ancho dado.
/// Devuelve (clic izquierdo, clic derecho).
pub fn two_button_row(
    ui: &mut Ui,
    panel_width: f32,
    left: (&str, bool),
    right: (&str, bool),
) -> (bool, bool) {
    let btn_w = (panel_width - 8.0) / 2.0;
    let mut clicked_left = false;
    let mut clicked_right = false;
    ui.horizontal(|ui| {
        // espacio para centrar la fila en su panel
        ui.add_space(((ui.available_width() - panel_width) / 2.0).max(0.0));
        let size = egui::vec2(btn_w, 36.0);
        clicked_left = ui
            .add_enabled(left.1, egui::Button::new(left.0).min_size(size))
            .clicked();
        clicked_right = ui
            .add_enabled(right.1, egui::Button::new(right.0).min_size(size))
            .clicked();
    });
    (clicked_left, clicked_right)
}
