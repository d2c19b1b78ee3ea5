// src/view_models.rs

use crate::model::LeadField;

#[derive(Clone, Debug, PartialEq)]
pub struct OptionView {
    pub idx: usize,
    pub label: String,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct QuestionView {
    pub number: usize, // número "humano" (1,2,3…)
    pub total: usize,
    pub prompt: String,
    pub options: Vec<OptionView>,
    pub progress: f32, // (current+1)/N
}

impl QuestionView {
    pub fn counter_label(&self) -> String {
        format!("Question {} of {}", self.number, self.total)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavView {
    pub previous_enabled: bool,
    pub next_enabled: bool,
    pub next_label: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultView {
    pub shown_percentage: u32, // valor actual del contador animado
    pub percentage: u8,
    pub tier: String,
    pub message: String,
    pub color: [u8; 3],
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LeadStatusView {
    Editing { banner: Option<String> },
    Submitting,
    Acknowledged { name: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeadFieldView {
    pub field: LeadField,
    pub placeholder: &'static str,
    pub error: Option<&'static str>,
}

impl LeadStatusView {
    pub fn thank_you(&self) -> Option<String> {
        match self {
            LeadStatusView::Acknowledged { name } => Some(format!("Thank you, {name}!")),
            _ => None,
        }
    }
}
