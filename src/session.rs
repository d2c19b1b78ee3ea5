// src/session.rs
//
// Máquina de estados de un intento del quiz. No sabe nada de egui ni de tiempos:
// la UI y los retardos viven en `app`.

use crate::error::QuizError;
use crate::model::{Question, QuestionBank};
use crate::scoring::{QuizResult, TierTable};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Answering,
    Results,
}

/// Resultado de una navegación: dónde queda la sesión.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Question(usize),
    Results,
}

/// Respuesta registrada; `auto_advance` es falso en la última pregunta.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub question: usize,
    pub option: usize,
    pub auto_advance: bool,
}

#[derive(Debug, Clone)]
pub struct QuizSession {
    bank: QuestionBank,
    current: usize,
    answers: Vec<Option<usize>>, // índice de pregunta -> índice de opción
    phase: Phase,
}

impl QuizSession {
    /// El banco debe venir validado (al menos una pregunta).
    pub fn new(bank: QuestionBank) -> Self {
        let answers = vec![None; bank.len()];
        Self {
            bank,
            current: 0,
            answers,
            phase: Phase::Answering,
        }
    }

    pub fn select_option(&mut self, option: usize) -> Result<Selection, QuizError> {
        if self.phase == Phase::Results {
            return Err(QuizError::QuizFinished);
        }
        let question = self.current;
        let valid = self
            .current_question()
            .is_some_and(|q| q.option(option).is_some());
        if !valid {
            return Err(QuizError::InvalidOption { question, option });
        }

        self.answers[question] = Some(option);
        Ok(Selection {
            question,
            option,
            auto_advance: !self.is_last(),
        })
    }

    pub fn go_next(&mut self) -> Result<Step, QuizError> {
        if self.phase == Phase::Results {
            return Ok(Step::Results);
        }
        if !self.is_answered(self.current) {
            return Err(QuizError::MissingAnswer {
                question: self.current,
            });
        }

        if self.is_last() {
            self.phase = Phase::Results;
            Ok(Step::Results)
        } else {
            self.current += 1;
            Ok(Step::Question(self.current))
        }
    }

    /// No borra la respuesta de la pregunta que se abandona.
    pub fn go_previous(&mut self) -> Step {
        match self.phase {
            Phase::Results => Step::Results,
            Phase::Answering => {
                self.current = self.current.saturating_sub(1);
                Step::Question(self.current)
            }
        }
    }

    pub fn result(&self, tiers: &TierTable) -> Result<QuizResult, QuizError> {
        QuizResult::compute(&self.bank, &self.answers, tiers)
    }

    pub fn reset(&mut self) {
        self.current = 0;
        self.answers.iter_mut().for_each(|a| *a = None);
        self.phase = Phase::Answering;
    }

    // Consultas

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Results
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn question_count(&self) -> usize {
        self.bank.len()
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.bank.get(self.current)
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 >= self.bank.len()
    }

    pub fn answer_for(&self, question: usize) -> Option<usize> {
        self.answers.get(question).copied().flatten()
    }

    pub fn is_answered(&self, question: usize) -> bool {
        self.answer_for(question).is_some()
    }

    pub fn answered_count(&self) -> usize {
        self.answers.iter().filter(|a| a.is_some()).count()
    }

    pub fn answers(&self) -> &[Option<usize>] {
        &self.answers
    }

    /// Pares (enunciado, texto de la opción elegida) de las preguntas respondidas.
    pub fn answered_pairs(&self) -> Vec<(String, String)> {
        self.bank
            .questions
            .iter()
            .zip(&self.answers)
            .filter_map(|(q, a)| {
                let opt = q.option((*a)?)?;
                Some((q.prompt.clone(), opt.text.clone()))
            })
            .collect()
    }
}
