use super::*;
use crate::submission::AnswerRecord;

impl QuizApp {
    pub fn set_lead_field(&mut self, field: LeadField, value: &str) {
        self.lead_form.set(field, value);
    }

    /// Valida el formulario y arranca el envío (con latencia simulada).
    pub fn submit_lead(&mut self) -> Result<(), LeadError> {
        if !self.session.is_finished() {
            return Err(LeadError::NotAvailable);
        }
        match self.lead_status {
            LeadStatus::Editing => {}
            LeadStatus::Submitting(_) => return Err(LeadError::AlreadySubmitting),
            LeadStatus::Acknowledged { .. } => return Err(LeadError::NotAvailable),
        }

        let invalid = self.lead_form.validate();
        if !invalid.is_empty() {
            log::debug!("Formulario de lead con errores: {invalid:?}");
            return Err(LeadError::Invalid { fields: invalid });
        }

        let payload = self.build_lead_payload().map_err(|e| {
            log::error!("No se pudo construir el lead: {e}");
            LeadError::NotAvailable
        })?;

        self.lead_banner = None;
        self.lead_status = LeadStatus::Submitting(payload);
        self.tasks.schedule(
            self.now + self.config.submit_delay_secs,
            DeferredTask::CompleteSubmission,
        );
        Ok(())
    }

    pub fn build_lead_payload(&self) -> Result<LeadPayload, QuizError> {
        let result = self.result()?;
        let answers = self
            .session
            .answered_pairs()
            .into_iter()
            .map(|(question, answer)| AnswerRecord { question, answer })
            .collect();

        Ok(LeadPayload {
            name: self.lead_form.name.trim().to_owned(),
            email: self.lead_form.email.trim().to_owned(),
            phone: self.lead_form.phone.trim().to_owned(),
            score: result.total,
            percentage: result.percentage,
            tier: result.tier.name,
            answers,
        })
    }

    /// Vence la latencia simulada: entrega el lead al sink.
    pub(super) fn complete_submission(&mut self) {
        let payload = match std::mem::replace(&mut self.lead_status, LeadStatus::Editing) {
            LeadStatus::Submitting(payload) => payload,
            other => {
                self.lead_status = other;
                return;
            }
        };

        match self.sink.submit(&payload) {
            Ok(()) => {
                log::info!("Lead enviado para {}", payload.name);
                self.lead_status = LeadStatus::Acknowledged { name: payload.name };
            }
            Err(e) => {
                log::warn!("Fallo al enviar el lead: {e}");
                self.lead_banner = Some(SUBMIT_FAILED_MESSAGE.to_owned());
            }
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.lead_status, LeadStatus::Submitting(_))
    }
}
