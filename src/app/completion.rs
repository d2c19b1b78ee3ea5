use super::*;

impl QuizApp {
    /// Resultado del intento; solo existe en la pantalla de resultados.
    pub fn result(&self) -> Result<QuizResult, QuizError> {
        if !self.session.is_finished() {
            return Err(QuizError::NotFinished);
        }
        self.session.result(&self.tiers)
    }

    pub(super) fn enter_results(&mut self) {
        match self.result() {
            Ok(result) => {
                log::info!(
                    "Quiz completado: {}/{} ({}%) -> {}",
                    result.total,
                    result.max,
                    result.percentage,
                    result.tier.name
                );
                let target = result.percentage as u32;
                self.counter = Some(if self.config.reduce_motion {
                    CountUp::instant(target)
                } else {
                    CountUp::new(target, self.now, self.config.counter_duration_secs)
                });
            }
            // go_next bloquea sin respuesta, así que esto no debería ocurrir
            Err(e) => log::error!("Resultados sin puntuación: {e}"),
        }
        self.lead_form = LeadForm::default();
        self.lead_status = LeadStatus::Editing;
        self.lead_banner = None;
    }

    /// Porcentaje que debe pintarse ahora mismo (animado).
    pub fn displayed_percentage(&self) -> Option<u32> {
        self.counter.map(|c| c.value_at(self.now))
    }

    pub fn counter_running(&self) -> bool {
        self.counter.is_some_and(|c| !c.is_done(self.now))
    }
}
