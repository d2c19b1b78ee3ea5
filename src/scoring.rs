// src/scoring.rs

use crate::error::{BankError, QuizError};
use crate::model::{QuestionBank, TierBand};

/// Número fijo de bandas de clasificación.
pub const TIER_COUNT: usize = 4;

/// Bandas ordenadas de mayor a menor umbral; cubren todo [0, 100].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierTable {
    bands: Vec<TierBand>,
}

impl TierTable {
    pub fn new(bands: Vec<TierBand>) -> Result<Self, BankError> {
        if bands.len() != TIER_COUNT {
            return Err(BankError::InvalidTiers(format!(
                "expected {TIER_COUNT} tiers, found {}",
                bands.len()
            )));
        }
        let Some(last) = bands.last() else {
            return Err(BankError::InvalidTiers("no tiers defined".into()));
        };
        if last.min_percentage != 0 {
            return Err(BankError::InvalidTiers(format!(
                "lowest tier '{}' must start at 0, not {}",
                last.name, last.min_percentage
            )));
        }
        if let Some(band) = bands.iter().find(|b| b.min_percentage > 100) {
            return Err(BankError::InvalidTiers(format!(
                "tier '{}' starts above 100",
                band.name
            )));
        }
        if bands
            .windows(2)
            .any(|w| w[0].min_percentage <= w[1].min_percentage)
        {
            return Err(BankError::InvalidTiers(
                "thresholds must be strictly descending".into(),
            ));
        }
        if let Some(band) = bands.iter().find(|b| b.rgb().is_none()) {
            return Err(BankError::InvalidColor {
                tier: band.name.clone(),
                color: band.color.clone(),
            });
        }
        Ok(Self { bands })
    }

    /// Se evalúa de mayor a menor: un valor justo en el límite cae en la banda superior.
    pub fn classify(&self, percentage: u8) -> &TierBand {
        self.bands
            .iter()
            .find(|b| percentage >= b.min_percentage)
            .unwrap_or_else(|| &self.bands[self.bands.len() - 1])
    }

    pub fn bands(&self) -> &[TierBand] {
        &self.bands
    }
}

/// `round(total / max * 100)`, redondeando medios hacia arriba.
pub fn percentage(total: u32, max: u32) -> u8 {
    if max == 0 {
        return 0;
    }
    let total = total.min(max) as u64;
    let max = max as u64;
    ((total * 200 + max) / (2 * max)) as u8
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizResult {
    pub total: u32,
    pub max: u32,
    pub percentage: u8,
    pub tier: TierBand,
}

impl QuizResult {
    /// Requiere una respuesta para cada pregunta del banco.
    pub fn compute(
        bank: &QuestionBank,
        answers: &[Option<usize>],
        tiers: &TierTable,
    ) -> Result<Self, QuizError> {
        let missing: Vec<usize> = (0..bank.len())
            .filter(|&i| answers.get(i).copied().flatten().is_none())
            .collect();
        if !missing.is_empty() {
            return Err(QuizError::Incomplete { missing });
        }

        let mut total = 0;
        for (i, q) in bank.questions.iter().enumerate() {
            let chosen = answers[i].unwrap_or_default();
            let option = q.option(chosen).ok_or(QuizError::InvalidOption {
                question: i,
                option: chosen,
            })?;
            total += option.weight;
        }

        let max = bank.max_score();
        let percentage = percentage(total, max);
        Ok(Self {
            total,
            max,
            percentage,
            tier: tiers.classify(percentage).clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::QuizConfig;
    use crate::data::read_questions_embedded;

    fn tiers() -> TierTable {
        QuizConfig::embedded().unwrap().tier_table().unwrap()
    }

    /// Índice de opción con el peso pedido (el banco va de 5 a 1).
    fn answers_for_weights(weights: &[u32]) -> Vec<Option<usize>> {
        weights.iter().map(|w| Some((5 - w) as usize)).collect()
    }

    #[test]
    fn percentage_rounds_half_up() {
        assert_eq!(percentage(5, 25), 20);
        assert_eq!(percentage(25, 25), 100);
        assert_eq!(percentage(1, 8), 13); // 12.5
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(0, 0), 0);
    }

    #[test]
    fn percentage_is_monotone_and_bounded_for_five_questions() {
        let mut previous = 0;
        for total in 5..=25 {
            let p = percentage(total, 25);
            assert!(p >= previous);
            assert!((20..=100).contains(&p));
            previous = p;
        }
    }

    #[test]
    fn boundaries_resolve_to_higher_tier() {
        let t = tiers();
        assert_eq!(t.classify(100).name, "High Achiever");
        assert_eq!(t.classify(80).name, "High Achiever");
        assert_eq!(t.classify(79).name, "Strong Foundation");
        assert_eq!(t.classify(60).name, "Strong Foundation");
        assert_eq!(t.classify(59).name, "Growth Potential");
        assert_eq!(t.classify(40).name, "Growth Potential");
        assert_eq!(t.classify(39).name, "Beginner");
        assert_eq!(t.classify(0).name, "Beginner");
    }

    #[test]
    fn every_percentage_has_exactly_one_tier() {
        let t = tiers();
        for p in 0..=100u8 {
            let band = t.classify(p);
            assert!(p >= band.min_percentage, "porcentaje {p}");
            // ninguna banda superior admite este valor
            let higher = t
                .bands()
                .iter()
                .take_while(|b| b.name != band.name)
                .filter(|b| p >= b.min_percentage)
                .count();
            assert_eq!(higher, 0, "porcentaje {p}");
        }
    }

    #[test]
    fn all_fives_is_highest_tier() {
        let bank = read_questions_embedded().unwrap();
        let r = QuizResult::compute(&bank, &answers_for_weights(&[5, 5, 5, 5, 5]), &tiers())
            .unwrap();
        assert_eq!(r.total, 25);
        assert_eq!(r.percentage, 100);
        assert_eq!(r.tier.name, "High Achiever");
        assert_eq!(r.tier.color, "#10B981");
    }

    #[test]
    fn all_ones_is_lowest_tier() {
        let bank = read_questions_embedded().unwrap();
        let r = QuizResult::compute(&bank, &answers_for_weights(&[1, 1, 1, 1, 1]), &tiers())
            .unwrap();
        assert_eq!(r.total, 5);
        assert_eq!(r.percentage, 20);
        assert_eq!(r.tier.name, "Beginner");
    }

    #[test]
    fn all_threes_lands_on_second_tier_boundary() {
        let bank = read_questions_embedded().unwrap();
        let r = QuizResult::compute(&bank, &answers_for_weights(&[3, 3, 3, 3, 3]), &tiers())
            .unwrap();
        assert_eq!(r.total, 15);
        assert_eq!(r.percentage, 60);
        assert_eq!(r.tier.name, "Strong Foundation");
    }

    #[test]
    fn incomplete_answers_are_rejected() {
        let bank = read_questions_embedded().unwrap();
        let answers = vec![Some(0), None, Some(1), Some(2), None];
        assert_eq!(
            QuizResult::compute(&bank, &answers, &tiers()),
            Err(QuizError::Incomplete { missing: vec![1, 4] })
        );
        assert!(matches!(
            QuizResult::compute(&bank, &[Some(0)], &tiers()),
            Err(QuizError::Incomplete { .. })
        ));
    }

    #[test]
    fn tier_table_rejects_overlaps_and_gaps() {
        let band = |min: u8| TierBand {
            min_percentage: min,
            name: format!("b{min}"),
            message: String::new(),
            color: "#000000".into(),
        };
        assert!(TierTable::new(vec![]).is_err());
        assert!(TierTable::new(vec![band(80), band(60), band(60), band(0)]).is_err());
        assert!(TierTable::new(vec![band(80), band(40), band(60), band(0)]).is_err());
        assert!(TierTable::new(vec![band(80), band(60), band(40), band(10)]).is_err());
        assert!(TierTable::new(vec![band(101), band(60), band(40), band(0)]).is_err());
        assert!(TierTable::new(vec![band(75), band(50), band(25), band(0)]).is_ok());

        let mut bad_color = band(0);
        bad_color.color = "red".into();
        assert!(matches!(
            TierTable::new(vec![band(80), band(60), band(40), bad_color]),
            Err(BankError::InvalidColor { .. })
        ));
    }

    #[test]
    fn tier_table_needs_exactly_four_bands() {
        let band = |min: u8| TierBand {
            min_percentage: min,
            name: format!("b{min}"),
            message: String::new(),
            color: "#000000".into(),
        };
        assert!(matches!(
            TierTable::new(vec![band(50), band(0)]),
            Err(BankError::InvalidTiers(_))
        ));
        assert!(matches!(
            TierTable::new(vec![band(90), band(80), band(60), band(40), band(0)]),
            Err(BankError::InvalidTiers(_))
        ));
        assert_eq!(tiers().bands().len(), TIER_COUNT);
    }
}
