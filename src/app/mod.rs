use crate::config::QuizConfig;
use crate::counter::CountUp;
use crate::data::read_questions_embedded;
use crate::error::{BankError, LeadError, QuizError};
use crate::forms::LeadForm;
use crate::model::{AppState, LeadField, QuestionBank};
use crate::scoring::{QuizResult, TierTable};
use crate::session::{QuizSession, Step};
use crate::submission::{LeadPayload, LeadSink, LogLeadSink};

// Submódulos
pub mod actions;
pub mod completion;
pub mod lead;
pub mod navigation;
pub mod queries;
pub mod resets;
pub mod tasks;
pub mod view_models;

pub use tasks::{DeferredTask, TaskQueue};

pub const MISSING_ANSWER_MESSAGE: &str = "Please select an answer to continue.";
pub const SUBMIT_FAILED_MESSAGE: &str =
    "Something went wrong. Please try again or call us directly.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeadStatus {
    Editing,
    Submitting(LeadPayload),
    Acknowledged { name: String },
}

/// Controlador del quiz: una instancia por vista montada.
pub struct QuizApp {
    pub session: QuizSession,
    pub config: QuizConfig,
    pub tiers: TierTable,
    pub message: String,
    pub lead_form: LeadForm,
    pub lead_status: LeadStatus,
    pub lead_banner: Option<String>,
    pub counter: Option<CountUp>,
    pub confirm_reset: bool,
    tasks: TaskQueue,
    sink: Box<dyn LeadSink>,
    now: f64, // reloj de la UI en segundos
}

impl QuizApp {
    /// Banco y configuración embebidos, leads al log.
    pub fn new() -> Result<Self, BankError> {
        let bank = read_questions_embedded()?;
        let config = QuizConfig::load()?;
        Self::with_parts(bank, config, Box::new(LogLeadSink))
    }

    pub fn with_parts(
        bank: QuestionBank,
        config: QuizConfig,
        sink: Box<dyn LeadSink>,
    ) -> Result<Self, BankError> {
        if bank.is_empty() {
            return Err(BankError::Empty);
        }
        let tiers = config.tier_table()?;
        log::info!(
            "Quiz listo: {} preguntas, {} bandas",
            bank.len(),
            tiers.bands().len()
        );

        Ok(Self {
            session: QuizSession::new(bank),
            config,
            tiers,
            message: String::new(),
            lead_form: LeadForm::default(),
            lead_status: LeadStatus::Editing,
            lead_banner: None,
            counter: None,
            confirm_reset: false,
            tasks: TaskQueue::default(),
            sink,
            now: 0.0,
        })
    }

    /// Avanza el reloj y ejecuta las tareas vencidas, en orden.
    pub fn tick(&mut self, now: f64) {
        if now > self.now {
            self.now = now;
        }
        loop {
            let due = self.tasks.take_due(self.now);
            if due.is_empty() {
                break;
            }
            for task in due {
                self.run_task(task);
            }
        }
    }

    fn run_task(&mut self, task: DeferredTask) {
        log::trace!("Ejecutando tarea diferida {task:?}");
        match task {
            DeferredTask::AutoAdvance { from } => {
                // Solo si seguimos en la pregunta que la programó
                if !self.session.is_finished()
                    && self.session.current_index() == from
                    && !self.session.is_last()
                {
                    let _ = self.go_next();
                }
            }
            DeferredTask::ClearMessage => self.message.clear(),
            DeferredTask::CompleteSubmission => self.complete_submission(),
        }
    }

    /// Muestra un mensaje temporal; sustituye al anterior y a su temporizador.
    pub fn show_message(&mut self, text: &str) {
        self.tasks.cancel(|t| matches!(t, DeferredTask::ClearMessage));
        self.message = text.to_owned();
        self.tasks.schedule(
            self.now + self.config.message_duration_secs,
            DeferredTask::ClearMessage,
        );
    }

    pub fn clear_message(&mut self) {
        self.tasks.cancel(|t| matches!(t, DeferredTask::ClearMessage));
        self.message.clear();
    }

    fn cancel_auto_advance(&mut self) {
        self.tasks
            .cancel(|t| matches!(t, DeferredTask::AutoAdvance { .. }));
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;

    #[test]
    fn missing_answer_message_clears_itself() {
        let mut a = app();
        a.tick(1.0);
        assert_eq!(
            a.go_next(),
            Err(QuizError::MissingAnswer { question: 0 })
        );
        assert_eq!(a.message, MISSING_ANSWER_MESSAGE);
        assert_eq!(a.session.current_index(), 0);

        a.tick(3.9);
        assert_eq!(a.message, MISSING_ANSWER_MESSAGE);
        a.tick(4.0);
        assert!(a.message.is_empty());
    }

    #[test]
    fn newer_message_is_not_cleared_by_older_timer() {
        let mut a = app();
        a.tick(0.0);
        a.show_message("primero");
        a.tick(2.0);
        a.show_message("segundo");
        a.tick(3.5);
        assert_eq!(a.message, "segundo");
        a.tick(5.0);
        assert!(a.message.is_empty());
    }

    #[test]
    fn clock_never_goes_backwards() {
        let mut a = app();
        a.tick(5.0);
        a.tick(2.0);
        assert_eq!(a.now(), 5.0);
    }

    #[test]
    fn rejects_bad_tier_config() {
        let mut config = QuizConfig::embedded().unwrap();
        config.tiers.truncate(1); // la única banda empieza en 80
        assert!(
            QuizApp::with_parts(
                read_questions_embedded().unwrap(),
                config,
                Box::new(LogLeadSink)
            )
            .is_err()
        );
    }

    #[test]
    fn next_wakeup_tracks_pending_tasks() {
        let mut a = app();
        a.tick(1.0);
        assert_eq!(a.next_wakeup(), None);
        a.select_option(0).unwrap();
        assert_eq!(a.next_wakeup(), Some(1.3));
        a.tick(1.3);
        assert_eq!(a.next_wakeup(), None);
        assert_eq!(a.session.current_index(), 1);
    }

    #[test]
    fn state_follows_session_phase() {
        let mut a = app();
        assert_eq!(a.state(), AppState::Quiz);
        finish_with(&mut a, 0);
        assert_eq!(a.state(), AppState::Results);
        assert!(matches!(a.session.go_next(), Ok(Step::Results)));
    }
}
