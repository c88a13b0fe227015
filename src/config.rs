//! Configuración central de la aplicación.
//! Carga variables de entorno (.env) y expone una estructura inmutable
//! (`CONFIG`). Las librerías no leen el entorno: reciben `EngineOptions` /
//! `NavigatorOptions` derivadas de acá.
use once_cell::sync::Lazy;
use play_core::{EngineOptions, SharedClock};
use play_domain::Role;
use play_scenes::{NavigatorOptions, DEFAULT_PHASE};
use std::env;

use crate::errors::AppError;

pub const DEFAULT_SCENARIO: &str = "keypad-4-digits";

/// Configuración global de la aplicación.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub session: SessionConfig,
    pub logging: LoggingConfig,
}

/// Parámetros de cada sesión de juego.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Semilla fija para la mezcla; `None` usa entropía.
    pub shuffle_seed: Option<u64>,
    pub default_scenario: String,
    pub default_role: Role,
    pub initial_phase: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Filtro estilo `RUST_LOG`.
    pub filter: String,
    pub json: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { session: SessionConfig { shuffle_seed: None,
                                        default_scenario: DEFAULT_SCENARIO.to_string(),
                                        default_role: Role::Participant,
                                        initial_phase: DEFAULT_PHASE.to_string() },
               logging: LoggingConfig { filter: "info".to_string(),
                                        json: false } }
    }
}

impl AppConfig {
    /// Lee el entorno del proceso (sin cargar `.env`).
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Igual que `from_env` pero con una fuente de variables arbitraria.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
        where F: Fn(&str) -> Option<String>
    {
        let defaults = Self::default();
        let var = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let shuffle_seed = match var("PLAYFLOW_SHUFFLE_SEED") {
            Some(raw) => Some(raw.parse::<u64>()
                                 .map_err(|e| AppError::Config(format!("PLAYFLOW_SHUFFLE_SEED={raw}: {e}")))?),
            None => None,
        };
        let default_role = match var("PLAYFLOW_DEFAULT_ROLE") {
            Some(raw) => raw.parse::<Role>()?,
            None => defaults.session.default_role,
        };
        let json = match var("PLAYFLOW_LOG_JSON") {
            Some(raw) => parse_bool(&raw).ok_or_else(|| AppError::Config(format!("PLAYFLOW_LOG_JSON={raw}")))?,
            None => defaults.logging.json,
        };

        Ok(Self { session: SessionConfig { shuffle_seed,
                                           default_scenario: var("PLAYFLOW_DEFAULT_SCENARIO").unwrap_or(defaults.session.default_scenario),
                                           default_role,
                                           initial_phase: var("PLAYFLOW_INITIAL_PHASE").unwrap_or(defaults.session.initial_phase) },
                  logging: LoggingConfig { filter: var("PLAYFLOW_LOG").unwrap_or(defaults.logging.filter),
                                           json } })
    }

    pub fn engine_options(&self, clock: Option<SharedClock>) -> EngineOptions {
        EngineOptions { seed: self.session.shuffle_seed,
                        default_scenario: Some(self.session.default_scenario.clone()),
                        default_role: self.session.default_role,
                        clock }
    }

    pub fn navigator_options(&self, clock: Option<SharedClock>) -> NavigatorOptions {
        NavigatorOptions { initial_phase: self.session.initial_phase.clone(),
                           clock }
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Instancia global perezosa de configuración, evaluada una sola vez. Un
/// valor inválido se reporta por stderr y se usan los defaults.
pub static CONFIG: Lazy<AppConfig> = Lazy::new(|| {
    let _ = dotenvy::dotenv();
    AppConfig::from_env().unwrap_or_else(|e| {
                             eprintln!("[playflow] {e}; usando configuración por defecto");
                             AppConfig::default()
                         })
});

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let cfg = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg, AppConfig::default());
        assert_eq!(cfg.session.initial_phase, "lobby");
    }

    #[test]
    fn test_reads_every_variable() {
        let cfg = AppConfig::from_lookup(lookup(&[("PLAYFLOW_SHUFFLE_SEED", "42"),
                                                  ("PLAYFLOW_DEFAULT_SCENARIO", "riddle-text"),
                                                  ("PLAYFLOW_DEFAULT_ROLE", "host"),
                                                  ("PLAYFLOW_INITIAL_PHASE", "search"),
                                                  ("PLAYFLOW_LOG", "debug"),
                                                  ("PLAYFLOW_LOG_JSON", "true")])).unwrap();
        assert_eq!(cfg.session.shuffle_seed, Some(42));
        assert_eq!(cfg.session.default_scenario, "riddle-text");
        assert_eq!(cfg.session.default_role, Role::Host);
        assert_eq!(cfg.navigator_options(None).initial_phase, "search");
        assert_eq!(cfg.engine_options(None).seed, Some(42));
        assert_eq!(cfg.logging, LoggingConfig { filter: "debug".into(), json: true });
    }

    #[test]
    fn test_bad_values_are_config_errors() {
        let err = AppConfig::from_lookup(lookup(&[("PLAYFLOW_SHUFFLE_SEED", "abc")])).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
        let err = AppConfig::from_lookup(lookup(&[("PLAYFLOW_DEFAULT_ROLE", "janitor")])).unwrap_err();
        assert!(matches!(err, AppError::Domain(_)));
    }

    #[test]
    fn test_blank_values_fall_back_to_defaults() {
        let cfg = AppConfig::from_lookup(lookup(&[("PLAYFLOW_DEFAULT_SCENARIO", "  ")])).unwrap();
        assert_eq!(cfg.session.default_scenario, DEFAULT_SCENARIO);
    }
}
