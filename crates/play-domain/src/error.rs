//! Errores del dominio de artefactos.
//!
//! - `DomainError`: fallos al interpretar strings externos (tipo de
//!   artefacto o rol desconocido).
//! - `ValidationError`: resultado estructurado del registro de esquemas; lista
//!   todos los campos inválidos, no sólo el primero.
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::artifact_type::ArtifactType;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("tipo de artefacto desconocido: {0}")]
    UnknownArtifactType(String),
    #[error("rol desconocido: {0}")]
    UnknownRole(String),
}

/// Problema puntual en un campo de la configuración.
///
/// `path` usa notación `a.b[2].c`; vacío para refinamientos a nivel objeto.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldIssue {
    pub path: String,
    pub message: String,
}

impl FieldIssue {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { path: path.into(),
               message: message.into() }
    }
}

impl std::fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.path.is_empty() {
            write!(f, "(raíz): {}", self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("configuración inválida para {artifact_type}: {} problema(s)", issues.len())]
pub struct ValidationError {
    pub artifact_type: ArtifactType,
    pub issues: Vec<FieldIssue>,
}

impl ValidationError {
    pub fn new(artifact_type: ArtifactType, issues: Vec<FieldIssue>) -> Self {
        Self { artifact_type, issues }
    }

    /// Paths afectados, en orden de aparición.
    pub fn paths(&self) -> Vec<&str> {
        self.issues.iter().map(|i| i.path.as_str()).collect()
    }

    pub fn has_issue_at(&self, path: &str) -> bool {
        self.issues.iter().any(|i| i.path == path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_type_message() {
        let err = DomainError::UnknownArtifactType("laser".into());
        assert_eq!(err.to_string(), "tipo de artefacto desconocido: laser");
    }

    #[test]
    fn validation_error_counts_issues() {
        let err = ValidationError { artifact_type: ArtifactType::Keypad,
                                    issues: vec![FieldIssue::new("correctCode", "campo requerido"),
                                                 FieldIssue::new("", "otro")] };
        assert_eq!(err.to_string(), "configuración inválida para keypad: 2 problema(s)");
        assert!(err.has_issue_at("correctCode"));
        assert_eq!(err.issues[1].to_string(), "(raíz): otro");
    }
}
