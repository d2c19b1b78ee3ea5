mod helpers;
pub mod layout;
pub mod views;

use crate::app::QuizApp;
use crate::model::AppState;
use eframe::{App, Frame};
use egui::Context;
use layout::{bottom_panel, top_panel};
use std::time::Duration;

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // Reloj de egui: funciona igual en nativo y en wasm
        let now = ctx.input(|i| i.time);
        self.tick(now);

        // BOTÓN SUPERIOR DE REINICIAR (solo en resultados o con respuestas dadas)
        let show_restart =
            self.state() == AppState::Results || self.session.answered_count() > 0;
        top_panel(self, ctx, show_restart);

        // PANEL INFERIOR TEMA OSCURO O CLARO
        bottom_panel(ctx);

        match self.state() {
            AppState::Quiz => views::quiz::ui_quiz(self, ctx),
            AppState::Results => views::results::ui_results(self, ctx),
        }

        if self.confirm_reset {
            views::ui_confirm_reset(self, ctx);
        }

        // Despertar para la próxima tarea diferida o para animar el contador
        if self.counter_running() {
            ctx.request_repaint();
        } else if let Some(due) = self.next_wakeup() {
            let wait = (due - self.now()).max(0.0);
            match Duration::try_from_secs_f64(wait) {
                Ok(wait) => ctx.request_repaint_after(wait),
                Err(e) => {
                    log::warn!("Espera de repintado no representable ({wait}): {e}");
                    ctx.request_repaint();
                }
            }
        }
    }
}
