//! Eventos del motor de artefactos.
//!
//! Cada operación que cambia estado agrega exactamente un `ArtifactEvent`. El
//! log es la única entrada que necesitaría un servicio de historial durable.
use chrono::{DateTime, Utc};
use play_domain::Role;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use uuid::Uuid;

use super::Stamped;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    ConfigUpdated,
    StateUpdated,
    Reset,
    Solved,
    Failed,
    Revealed,
    Custom,
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::ConfigUpdated => "config_updated",
            EventType::StateUpdated => "state_updated",
            EventType::Reset => "reset",
            EventType::Solved => "solved",
            EventType::Failed => "failed",
            EventType::Revealed => "revealed",
            EventType::Custom => "custom",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactEvent {
    pub id: u64,
    pub timestamp: DateTime<Utc>,
    pub session_id: Uuid,
    /// Vacío para eventos de sesión (p.ej. `reset_all`).
    pub scenario_id: String,
    pub role: Role,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub payload: Value,
}

/// Evento antes de pasar por el store.
#[derive(Debug, Clone, PartialEq)]
pub struct ArtifactEventDraft {
    pub session_id: Uuid,
    pub scenario_id: String,
    pub role: Role,
    pub event_type: EventType,
    pub payload: Value,
}

impl Stamped for ArtifactEvent {
    type Draft = ArtifactEventDraft;

    fn stamp(draft: ArtifactEventDraft, id: u64, timestamp: DateTime<Utc>) -> Self {
        Self { id,
               timestamp,
               session_id: draft.session_id,
               scenario_id: draft.scenario_id,
               role: draft.role,
               event_type: draft.event_type,
               payload: draft.payload }
    }

    fn id(&self) -> u64 {
        self.id
    }

    fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}
