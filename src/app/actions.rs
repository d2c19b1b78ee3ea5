use super::*;

impl QuizApp {
    /// Registra la opción para la pregunta visible y programa el avance automático.
    pub fn select_option(&mut self, option: usize) -> Result<(), QuizError> {
        let selection = match self.session.select_option(option) {
            Ok(s) => s,
            Err(e) => {
                log::debug!("Selección rechazada: {e}");
                return Err(e);
            }
        };
        log::debug!(
            "Pregunta {} -> opción {}",
            selection.question + 1,
            selection.option
        );

        // Una selección nueva reemplaza el avance pendiente de la anterior
        self.cancel_auto_advance();
        if selection.auto_advance {
            self.tasks.schedule(
                self.now + self.config.auto_advance_delay_secs,
                DeferredTask::AutoAdvance {
                    from: selection.question,
                },
            );
        }
        Ok(())
    }

    pub fn has_pending_auto_advance(&self) -> bool {
        self.tasks
            .contains(|t| matches!(t, DeferredTask::AutoAdvance { .. }))
    }
}
