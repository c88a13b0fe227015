use thiserror::Error;

/// Ids que el navegador no conoce. Nunca se lanza: viaja dentro de
/// `HotspotOutcome::NotFound` o como error al armar un grafo propio.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NavigatorError {
    #[error("escena desconocida: {0}")]
    SceneNotFound(String),
    #[error("participante desconocido: {0}")]
    ParticipantNotFound(String),
    #[error("hotspot desconocido: {hotspot_id} en {scene_key}")]
    HotspotNotFound { scene_key: String, hotspot_id: String },
    #[error("escenario desconocido: {0}")]
    ScenarioNotFound(String),
}
