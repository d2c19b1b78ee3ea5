//! Errores del quiz, de la carga de datos y del formulario de leads.

use crate::model::LeadField;
use thiserror::Error;

/// Transiciones rechazadas por la sesión. Ninguna es un fallo del sistema.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuizError {
    #[error("question {question} has no answer yet")]
    MissingAnswer { question: usize },

    #[error("question {question} has no option {option}")]
    InvalidOption { question: usize, option: usize },

    #[error("unanswered questions: {missing:?}")]
    Incomplete { missing: Vec<usize> },

    #[error("the quiz is already finished")]
    QuizFinished,

    #[error("the quiz is not finished yet")]
    NotFinished,
}

/// Errores al cargar el banco de preguntas o la configuración.
#[derive(Error, Debug)]
pub enum BankError {
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("the question bank is empty")]
    Empty,

    #[error("question {question} has no options")]
    NoOptions { question: u32 },

    #[error("question {question}, option {option}: weight {weight} outside 1..=5")]
    InvalidWeight {
        question: u32,
        option: usize,
        weight: u32,
    },

    #[error("question {question} has an empty prompt or option text")]
    EmptyText { question: u32 },

    #[error("invalid tier table: {0}")]
    InvalidTiers(String),

    #[error("tier '{tier}' has an invalid color '{color}'")]
    InvalidColor { tier: String, color: String },

    #[error("timing '{field}' must be a finite, non-negative number of seconds, got {value}")]
    InvalidTiming { field: &'static str, value: f64 },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("lead rejected: {0}")]
    Rejected(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LeadError {
    #[error("invalid fields: {fields:?}")]
    Invalid { fields: Vec<LeadField> },

    #[error("lead capture is only available on the results screen")]
    NotAvailable,

    #[error("a submission is already in progress")]
    AlreadySubmitting,
}
