use play_core::CoreEngineError;
use play_domain::{DomainError, ValidationError};
use thiserror::Error;

/// Errores de los binarios. Las librerías tienen los suyos; acá sólo se
/// juntan para reportarlos en la salida.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Error en IO: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON inválido: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Error de configuración: {0}")]
    Config(String),
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Engine(#[from] CoreEngineError),
}

impl AppError {
    /// 2 para configuraciones inválidas, 1 para el resto.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Validation(_) | AppError::Engine(CoreEngineError::InvalidConfig(_)) => 2,
            _ => 1,
        }
    }
}
