//! Dominio de artefactos: tipos cerrados, roles, formas de configuración y el
//! registro de esquemas que las valida.
pub mod artifact_type;
pub mod config;
pub mod error;
pub mod role;
pub mod schema;

pub use artifact_type::ArtifactType;
pub use config::ArtifactConfig;
pub use error::{DomainError, FieldIssue, ValidationError};
pub use role::Role;
pub use schema::{canonical_default, validate};
