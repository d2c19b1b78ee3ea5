use super::*;

impl QuizApp {
    /// Siguiente pregunta, o resultados desde la última.
    ///
    /// Sin respuesta no hay transición: se muestra un aviso temporal y se
    /// devuelve [`QuizError::MissingAnswer`].
    pub fn go_next(&mut self) -> Result<Step, QuizError> {
        let was_finished = self.session.is_finished();
        self.cancel_auto_advance();

        match self.session.go_next() {
            Ok(Step::Results) => {
                if !was_finished {
                    self.clear_message();
                    self.enter_results();
                }
                Ok(Step::Results)
            }
            Ok(step) => {
                self.clear_message();
                Ok(step)
            }
            Err(QuizError::MissingAnswer { question }) => {
                log::debug!("Pregunta {} sin responder", question + 1);
                self.show_message(MISSING_ANSWER_MESSAGE);
                Err(QuizError::MissingAnswer { question })
            }
            Err(e) => Err(e),
        }
    }

    /// Pregunta anterior; no hace nada en la primera ni en resultados.
    pub fn go_previous(&mut self) -> Step {
        let before = self.session.current_index();
        let step = self.session.go_previous();
        if self.session.current_index() != before {
            self.cancel_auto_advance();
            self.clear_message();
        }
        step
    }
}
