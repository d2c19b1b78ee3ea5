// src/ui/helpers.rs
use egui::{Button, Color32, RichText, Ui, Vec2};

/// Botón de opción a todo el ancho; marcado si ya es la respuesta elegida.
pub fn option_button(ui: &mut Ui, label: &str, selected: bool, width: f32) -> bool {
    let text = if selected {
        RichText::new(format!("✔ {label}")).strong()
    } else {
        RichText::new(label)
    };
    ui.add(
        Button::new(text)
            .selected(selected)
            .min_size(Vec2::new(width, 40.0)),
    )
    .clicked()
}

pub fn accent(rgb: [u8; 3]) -> Color32 {
    Color32::from_rgb(rgb[0], rgb[1], rgb[2])
}

/// Texto de error pequeño bajo un campo o pregunta.
pub fn error_label(ui: &mut Ui, text: &str) {
    ui.label(
        RichText::new(text)
            .small()
            .color(ui.visuals().error_fg_color),
    );
}
