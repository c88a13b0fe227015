use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Perspectiva de presentación de quien actúa. No es una frontera de
/// seguridad: sólo etiqueta eventos y decide qué controles se ofrecen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Host,
    #[default]
    Participant,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::Host, Role::Participant];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Host => "host",
            Role::Participant => "participant",
        }
    }

    /// host y admin comparten los controles de conducción.
    pub fn is_facilitator(&self) -> bool {
        matches!(self, Role::Admin | Role::Host)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "host" => Ok(Role::Host),
            "participant" => Ok(Role::Participant),
            _ => Err(DomainError::UnknownRole(s.to_string())),
        }
    }
}
