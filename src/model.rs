use serde::{Deserialize, Serialize};

/// Peso máximo de una opción; la puntuación máxima es `N * MAX_WEIGHT`.
pub const MAX_WEIGHT: u32 = 5;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct QuizOption {
    pub text: String,
    pub weight: u32, // 1..=5
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: u32,
    pub prompt: String,
    pub options: Vec<QuizOption>,
}

impl Question {
    pub fn option(&self, idx: usize) -> Option<&QuizOption> {
        self.options.get(idx)
    }
}

/// Banco de preguntas ordenado. Solo se construye a través de `data`, que lo valida.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    pub questions: Vec<Question>,
}

impl QuestionBank {
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<&Question> {
        self.questions.get(idx)
    }

    pub fn max_score(&self) -> u32 {
        self.questions.len() as u32 * MAX_WEIGHT
    }
}

/// Banda de clasificación: se aplica si el porcentaje es `>= min_percentage`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TierBand {
    pub min_percentage: u8,
    pub name: String,
    pub message: String,
    pub color: String, // "#RRGGBB"
}

impl TierBand {
    pub fn rgb(&self) -> Option<[u8; 3]> {
        parse_hex_color(&self.color)
    }
}

pub fn parse_hex_color(hex: &str) -> Option<[u8; 3]> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some([channel(0)?, channel(2)?, channel(4)?])
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    #[default]
    Quiz,
    Results,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum LeadField {
    Name,
    Email,
    Phone,
}

impl LeadField {
    pub const ALL: [LeadField; 3] = [LeadField::Name, LeadField::Email, LeadField::Phone];

    pub fn placeholder(self) -> &'static str {
        match self {
            LeadField::Name => "Your Name",
            LeadField::Email => "Email Address",
            LeadField::Phone => "Phone Number",
        }
    }
}
