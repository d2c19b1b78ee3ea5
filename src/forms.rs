// src/forms.rs

use crate::model::LeadField;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
static PHONE_RE: OnceLock<Regex> = OnceLock::new();

fn email_re() -> &'static Regex {
    EMAIL_RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"))
}

fn phone_re() -> &'static Regex {
    PHONE_RE.get_or_init(|| Regex::new(r"^[\d\s\-\+\(\)]{10,}$").expect("valid phone regex"))
}

/// Valida un campo ya recortado. `None` si es válido.
pub fn validate_field(field: LeadField, value: &str) -> Option<&'static str> {
    let value = value.trim();
    if value.is_empty() {
        return Some("This field is required");
    }
    match field {
        LeadField::Email if !email_re().is_match(value) => {
            Some("Please enter a valid email address")
        }
        LeadField::Phone if !phone_re().is_match(value) => {
            Some("Please enter a valid phone number")
        }
        _ => None,
    }
}

/// Formulario de captación que aparece con los resultados.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub errors: BTreeMap<LeadField, &'static str>,
}

impl LeadForm {
    pub fn value(&self, field: LeadField) -> &str {
        match field {
            LeadField::Name => &self.name,
            LeadField::Email => &self.email,
            LeadField::Phone => &self.phone,
        }
    }

    pub fn value_mut(&mut self, field: LeadField) -> &mut String {
        match field {
            LeadField::Name => &mut self.name,
            LeadField::Email => &mut self.email,
            LeadField::Phone => &mut self.phone,
        }
    }

    pub fn set(&mut self, field: LeadField, value: impl Into<String>) {
        *self.value_mut(field) = value.into();
        self.clear_error(field);
    }

    pub fn clear_error(&mut self, field: LeadField) {
        self.errors.remove(&field);
    }

    pub fn error(&self, field: LeadField) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    /// Validación de un solo campo (al perder el foco).
    pub fn validate_one(&mut self, field: LeadField) -> bool {
        match validate_field(field, self.value(field)) {
            Some(msg) => {
                self.errors.insert(field, msg);
                false
            }
            None => {
                self.errors.remove(&field);
                true
            }
        }
    }

    /// Valida todos los campos y guarda los errores. Devuelve los campos inválidos.
    pub fn validate(&mut self) -> Vec<LeadField> {
        self.errors.clear();
        for field in LeadField::ALL {
            if let Some(msg) = validate_field(field, self.value(field)) {
                self.errors.insert(field, msg);
            }
        }
        self.errors.keys().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_fields() {
        for field in LeadField::ALL {
            assert_eq!(validate_field(field, "   "), Some("This field is required"));
        }
    }

    #[test]
    fn email_format() {
        assert_eq!(validate_field(LeadField::Email, "ana@example.com"), None);
        assert_eq!(validate_field(LeadField::Email, " ana@example.co.in "), None);
        assert!(validate_field(LeadField::Email, "ana@example").is_some());
        assert!(validate_field(LeadField::Email, "ana example@x.com").is_some());
        assert!(validate_field(LeadField::Email, "@example.com").is_some());
    }

    #[test]
    fn phone_format() {
        assert_eq!(validate_field(LeadField::Phone, "+91 97395-61394"), None);
        assert_eq!(validate_field(LeadField::Phone, "(555) 123-4567"), None);
        assert!(validate_field(LeadField::Phone, "12345").is_some());
        assert!(validate_field(LeadField::Phone, "call me maybe").is_some());
    }

    #[test]
    fn name_only_needs_content() {
        assert_eq!(validate_field(LeadField::Name, "Ana"), None);
    }

    #[test]
    fn validate_collects_errors_and_set_clears_them() {
        let mut form = LeadForm {
            name: "Ana".into(),
            email: "no-es-un-email".into(),
            phone: String::new(),
            ..Default::default()
        };
        assert_eq!(form.validate(), vec![LeadField::Email, LeadField::Phone]);
        assert_eq!(form.error(LeadField::Phone), Some("This field is required"));

        form.set(LeadField::Phone, "9739561394");
        assert_eq!(form.error(LeadField::Phone), None);
        assert!(form.error(LeadField::Email).is_some());

        form.set(LeadField::Email, "ana@example.com");
        assert!(form.validate().is_empty());
    }
}
