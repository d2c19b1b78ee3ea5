// src/data.rs

use crate::error::BankError;
use crate::model::{MAX_WEIGHT, QuestionBank};

/// Carga el banco de preguntas desde el YAML embebido
pub fn read_questions_embedded() -> Result<QuestionBank, BankError> {
    parse_question_bank(include_str!("data/quiz_questions.yaml"))
}

/// Parsea y valida un banco de preguntas.
pub fn parse_question_bank(yaml: &str) -> Result<QuestionBank, BankError> {
    let bank: QuestionBank = serde_yaml::from_str(yaml)?;
    validate_bank(&bank)?;
    log::debug!("Banco de preguntas cargado: {} preguntas", bank.len());
    Ok(bank)
}

fn validate_bank(bank: &QuestionBank) -> Result<(), BankError> {
    if bank.is_empty() {
        return Err(BankError::Empty);
    }

    for q in &bank.questions {
        if q.options.is_empty() {
            return Err(BankError::NoOptions { question: q.id });
        }
        if q.prompt.trim().is_empty() || q.options.iter().any(|o| o.text.trim().is_empty()) {
            return Err(BankError::EmptyText { question: q.id });
        }
        for (i, opt) in q.options.iter().enumerate() {
            if !(1..=MAX_WEIGHT).contains(&opt.weight) {
                return Err(BankError::InvalidWeight {
                    question: q.id,
                    option: i,
                    weight: opt.weight,
                });
            }
        }
    }
    Ok(())
}
