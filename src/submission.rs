// src/submission.rs

use crate::error::SubmitError;
use serde::Serialize;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct AnswerRecord {
    pub question: String,
    pub answer: String,
}

/// Lo que se entrega al colaborador externo cuando el usuario deja sus datos.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct LeadPayload {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub score: u32,
    pub percentage: u8,
    pub tier: String,
    pub answers: Vec<AnswerRecord>,
}

/// Destino de los leads. El envío real (HTTP, CRM...) queda fuera del crate.
pub trait LeadSink {
    fn submit(&mut self, payload: &LeadPayload) -> Result<(), SubmitError>;
}

/// Sink por defecto: solo deja constancia en el log.
#[derive(Debug, Default)]
pub struct LogLeadSink;

impl LeadSink for LogLeadSink {
    fn submit(&mut self, payload: &LeadPayload) -> Result<(), SubmitError> {
        log::info!(
            "Lead recibido: {} <{}> {} ({}%, {})",
            payload.name,
            payload.email,
            payload.phone,
            payload.percentage,
            payload.tier
        );
        for a in &payload.answers {
            log::debug!("  {} -> {}", a.question, a.answer);
        }
        Ok(())
    }
}

/// Guarda los payloads en memoria; útil en tests y para quien embeba el quiz.
#[derive(Debug, Default)]
pub struct MemoryLeadSink {
    pub received: Vec<LeadPayload>,
    pub fail_with: Option<String>,
}

impl LeadSink for MemoryLeadSink {
    fn submit(&mut self, payload: &LeadPayload) -> Result<(), SubmitError> {
        if let Some(reason) = &self.fail_with {
            return Err(SubmitError::Rejected(reason.clone()));
        }
        self.received.push(payload.clone());
        Ok(())
    }
}

impl<S: LeadSink + ?Sized> LeadSink for std::rc::Rc<std::cell::RefCell<S>> {
    fn submit(&mut self, payload: &LeadPayload) -> Result<(), SubmitError> {
        self.borrow_mut().submit(payload)
    }
}
