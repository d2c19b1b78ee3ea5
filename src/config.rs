// src/config.rs

use crate::error::BankError;
use crate::model::TierBand;
use crate::scoring::TierTable;
use serde::Deserialize;

/// Variable de entorno con la ruta de un YAML que sustituye al embebido (solo nativo).
pub const CONFIG_ENV: &str = "READINESS_QUIZ_CONFIG";

/// Tiempos de la UI y bandas de clasificación.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct QuizConfig {
    #[serde(default = "default_auto_advance")]
    pub auto_advance_delay_secs: f64,
    #[serde(default = "default_message_duration")]
    pub message_duration_secs: f64,
    #[serde(default = "default_submit_delay")]
    pub submit_delay_secs: f64,
    #[serde(default = "default_counter_duration")]
    pub counter_duration_secs: f64,
    #[serde(default)]
    pub reduce_motion: bool,
    pub tiers: Vec<TierBand>,
}

fn default_auto_advance() -> f64 {
    0.3
}

fn default_message_duration() -> f64 {
    3.0
}

fn default_submit_delay() -> f64 {
    1.5
}

fn default_counter_duration() -> f64 {
    2.0
}

impl QuizConfig {
    pub fn embedded() -> Result<Self, BankError> {
        Self::from_yaml(include_str!("data/quiz_config.yaml"))
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, BankError> {
        let config: QuizConfig = serde_yaml::from_str(yaml)?;
        config.check_timings()?;
        // Falla pronto si las bandas no forman una partición válida
        config.tier_table()?;
        Ok(config)
    }

    /// Los retardos alimentan la cola de tareas y el repintado: `.inf` o `.nan` no vencen nunca.
    fn check_timings(&self) -> Result<(), BankError> {
        let timings = [
            ("auto_advance_delay_secs", self.auto_advance_delay_secs),
            ("message_duration_secs", self.message_duration_secs),
            ("submit_delay_secs", self.submit_delay_secs),
            ("counter_duration_secs", self.counter_duration_secs),
        ];
        match timings
            .into_iter()
            .find(|(_, value)| !value.is_finite() || *value < 0.0)
        {
            Some((field, value)) => Err(BankError::InvalidTiming { field, value }),
            None => Ok(()),
        }
    }

    /// Config embebida, o el fichero indicado en `READINESS_QUIZ_CONFIG`.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Result<Self, BankError> {
        match std::env::var(CONFIG_ENV) {
            Ok(path) if !path.trim().is_empty() => {
                log::info!("Cargando configuración desde {path}");
                let text = std::fs::read_to_string(path.trim())?;
                Self::from_yaml(&text)
            }
            _ => Self::embedded(),
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Result<Self, BankError> {
        Self::embedded()
    }

    pub fn tier_table(&self) -> Result<TierTable, BankError> {
        TierTable::new(self.tiers.clone())
    }
}
