//! Errores del core de artefactos.
//!
//! Las operaciones de escritura del motor no devuelven estos errores: un
//! rechazo se expresa como `None`/`false`. Sólo los helpers falibles
//! (`initial_for`, `set_config`, `ScenarioCatalog::self_check`) los usan.

use play_domain::{ArtifactType, ValidationError};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum CoreEngineError {
    #[error("scenario not found: {0}")]
    ScenarioNotFound(String),
    #[error("state mismatch: expected {expected}, got {actual}")]
    StateMismatch { expected: ArtifactType, actual: ArtifactType },
    #[error(transparent)]
    InvalidConfig(#[from] ValidationError),
    #[error("catalog invariant violated: {0}")]
    CatalogInvariant(String),
}
