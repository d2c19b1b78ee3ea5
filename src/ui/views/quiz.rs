use egui::{Context, Key, ProgressBar, RichText};
use crate::QuizApp;
use crate::ui::helpers::{error_label, option_button};
use crate::ui::layout::{centered_panel, two_button_row};

const OPTION_KEYS: [Key; 9] = [
    Key::Num1,
    Key::Num2,
    Key::Num3,
    Key::Num4,
    Key::Num5,
    Key::Num6,
    Key::Num7,
    Key::Num8,
    Key::Num9,
];

pub fn ui_quiz(app: &mut QuizApp, ctx: &Context) {
    let Some(question) = app.question_view() else {
        return;
    };
    let nav = app.nav_view();

    // Atajos de teclado: 1-9 elige, Enter avanza, ← / Backspace retrocede.
    // Con el diálogo de reinicio abierto, Enter y Backspace son suyos.
    let shortcuts = app.accepts_shortcuts();
    let (picked, next, previous) = ctx.input(|i| {
        if !shortcuts {
            return (None, false, false);
        }
        let picked = OPTION_KEYS
            .iter()
            .position(|k| i.key_pressed(*k))
            .filter(|&idx| idx < question.options.len());
        let next = i.key_pressed(Key::Enter);
        let previous = i.key_pressed(Key::ArrowLeft) || i.key_pressed(Key::Backspace);
        (picked, next, previous)
    });

    let max_width = 650.0;
    let est_height = 140.0 + 48.0 * question.options.len() as f32;
    let mut clicked_option = None;
    let mut clicked_prev = false;
    let mut clicked_next = false;

    centered_panel(ctx, est_height, max_width, |ui| {
        let panel_width = ui.available_width();

        ui.add(ProgressBar::new(question.progress).desired_width(panel_width));
        ui.label(RichText::new(question.counter_label()).small());
        ui.add_space(10.0);

        ui.heading(&question.prompt);
        ui.add_space(10.0);

        for opt in &question.options {
            if option_button(ui, &opt.label, opt.selected, panel_width) {
                clicked_option = Some(opt.idx);
            }
            ui.add_space(4.0);
        }

        if !app.message.is_empty() {
            ui.add_space(4.0);
            error_label(ui, &app.message);
        }

        ui.add_space(12.0);
        let next_label = format!("{} ➡", nav.next_label);
        let (prev, next) = two_button_row(
            ui,
            panel_width,
            ("⬅ Previous", nav.previous_enabled),
            (&next_label, nav.next_enabled),
        );
        clicked_prev = prev;
        clicked_next = next;
    });

    if let Some(idx) = clicked_option.or(picked) {
        let _ = app.select_option(idx);
    }
    if clicked_prev || previous {
        app.go_previous();
    }
    // Enter sin respuesta muestra el aviso de respuesta obligatoria
    if clicked_next || next {
        let _ = app.go_next();
    }
}
