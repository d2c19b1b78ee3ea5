use super::*;

impl QuizApp {
    /// Vuelve a la pregunta 1 sin respuestas y descarta todo lo pendiente.
    pub fn reset(&mut self) {
        self.teardown();
        self.session.reset();
        self.message.clear();
        self.lead_form = LeadForm::default();
        self.lead_status = LeadStatus::Editing;
        self.lead_banner = None;
        self.counter = None;
        self.confirm_reset = false;
        log::info!("Quiz reiniciado");
    }

    /// Abre el diálogo de confirmación; el reinicio solo ocurre al aceptarlo.
    pub fn request_reset(&mut self) {
        self.confirm_reset = true;
    }

    pub fn cancel_reset(&mut self) {
        self.confirm_reset = false;
    }

    /// Atajos de teclado del quiz: nunca con el diálogo de reinicio abierto.
    pub fn accepts_shortcuts(&self) -> bool {
        !self.confirm_reset && self.state() == AppState::Quiz
    }

    /// Cancela todas las tareas diferidas; ninguna se ejecuta después.
    pub fn teardown(&mut self) {
        if !self.tasks.is_empty() {
            log::debug!("Cancelando {} tareas pendientes", self.tasks.len());
        }
        self.tasks.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;

    #[test]
    fn reset_from_results_starts_over() {
        let mut a = app();
        finish_with(&mut a, 0);
        fill_valid_lead(&mut a);
        a.reset();
        assert_eq!(a.state(), AppState::Quiz);
        assert_eq!(a.session.current_index(), 0);
        assert_eq!(a.session.answered_count(), 0);
        assert_eq!(a.lead_form, LeadForm::default());
        assert!(a.counter.is_none());
        assert_eq!(a.go_next(), Err(QuizError::MissingAnswer { question: 0 }));
    }

    #[test]
    fn retake_from_results_waits_for_confirmation() {
        let mut a = app();
        finish_with(&mut a, 0);
        fill_valid_lead(&mut a);
        a.request_reset();
        assert!(a.confirm_reset);
        assert_eq!(a.state(), AppState::Results);
        assert_eq!(a.lead_form.name, "Priya");

        a.cancel_reset();
        assert!(!a.confirm_reset);
        assert_eq!(a.state(), AppState::Results);

        a.request_reset();
        a.reset();
        assert!(!a.confirm_reset);
        assert_eq!(a.state(), AppState::Quiz);
    }

    #[test]
    fn shortcuts_are_off_while_confirming_reset() {
        let mut a = app();
        assert!(a.accepts_shortcuts());
        a.request_reset();
        assert!(!a.accepts_shortcuts());
        a.cancel_reset();
        assert!(a.accepts_shortcuts());

        finish_with(&mut a, 0);
        assert!(!a.accepts_shortcuts());
    }

    #[test]
    fn reset_cancels_pending_auto_advance() {
        let mut a = app();
        a.tick(0.0);
        a.select_option(0).unwrap();
        a.reset();
        a.tick(1.0);
        assert_eq!(a.session.current_index(), 0);
        assert_eq!(a.next_wakeup(), None);
    }

    #[test]
    fn reset_cancels_pending_submission() {
        let (mut a, sink) = app_with_sink();
        finish_with(&mut a, 0);
        fill_valid_lead(&mut a);
        a.submit_lead().unwrap();
        a.reset();
        a.tick(10.0);
        assert!(sink.borrow().received.is_empty());
        assert_eq!(a.lead_status, LeadStatus::Editing);
    }

    #[test]
    fn teardown_drops_every_task() {
        let mut a = app();
        a.select_option(0).unwrap();
        let _ = a.go_next(); // ya avanza: no hay aviso
        a.select_option(0).unwrap();
        a.show_message("hola");
        a.teardown();
        a.tick(100.0);
        assert_eq!(a.session.current_index(), 1);
        assert_eq!(a.message, "hola");
    }
}
