use egui::{Button, Context, RichText, TextEdit};
use crate::QuizApp;
use crate::ui::helpers::{accent, error_label};
use crate::ui::layout::centered_panel;
use crate::view_models::LeadStatusView;

pub fn ui_results(app: &mut QuizApp, ctx: &Context) {
    let Some(result) = app.result_view() else {
        return;
    };
    let status = app.lead_status_view();
    let fields = app.lead_field_views();
    let color = accent(result.color);

    let mut submit = false;
    let mut retake = false;

    centered_panel(ctx, 520.0, 480.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new(format!("{}%", result.shown_percentage))
                    .size(56.0)
                    .strong()
                    .color(color),
            );
            ui.heading(&result.tier);
            ui.add_space(4.0);
            ui.label(&result.message);
        });
        ui.add_space(20.0);

        let width = ui.available_width();
        match &status {
            LeadStatusView::Acknowledged { .. } => {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("✅").size(40.0).color(accent([0x10, 0xB9, 0x81])));
                    if let Some(thanks) = status.thank_you() {
                        ui.label(RichText::new(thanks).strong());
                    }
                    ui.label("We'll send your personalized study plan shortly.");
                });
            }
            LeadStatusView::Editing { .. } | LeadStatusView::Submitting => {
                let submitting = matches!(status, LeadStatusView::Submitting);
                ui.label(RichText::new("Get your personalized study plan:").small());
                ui.add_space(6.0);

                if let LeadStatusView::Editing { banner: Some(banner) } = &status {
                    error_label(ui, banner);
                    ui.add_space(4.0);
                }

                for f in &fields {
                    let response = ui.add_enabled(
                        !submitting,
                        TextEdit::singleline(app.lead_form.value_mut(f.field))
                            .hint_text(f.placeholder)
                            .desired_width(width),
                    );
                    // Como en la web: limpiar al escribir, validar al salir del campo
                    if response.changed() {
                        app.lead_form.clear_error(f.field);
                    }
                    if response.lost_focus() && !app.lead_form.value(f.field).is_empty() {
                        app.lead_form.validate_one(f.field);
                    }
                    if let Some(err) = app.lead_form.error(f.field) {
                        error_label(ui, err);
                    }
                    ui.add_space(6.0);
                }

                ui.add_space(4.0);
                if submitting {
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.label("Submitting...");
                    });
                } else if ui
                    .add_sized([width, 36.0], Button::new("Get My Study Plan ➡"))
                    .clicked()
                {
                    submit = true;
                }
            }
        }

        ui.add_space(16.0);
        if ui
            .add_sized([width, 32.0], Button::new("🔄 Retake quiz"))
            .clicked()
        {
            retake = true;
        }
    });

    if submit {
        if let Err(e) = app.submit_lead() {
            log::debug!("Envío del lead rechazado: {e}");
        }
    }
    if retake {
        app.request_reset();
    }
}
