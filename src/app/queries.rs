use super::*;

impl QuizApp {
    pub fn state(&self) -> AppState {
        if self.session.is_finished() {
            AppState::Results
        } else {
            AppState::Quiz
        }
    }

    pub fn now(&self) -> f64 {
        self.now
    }

    /// Cuándo hay que volver a pintar para que venza la próxima tarea.
    pub fn next_wakeup(&self) -> Option<f64> {
        self.tasks.next_due()
    }

    pub fn current_question_index(&self) -> usize {
        self.session.current_index()
    }

    pub fn answers(&self) -> &[Option<usize>] {
        self.session.answers()
    }
}
