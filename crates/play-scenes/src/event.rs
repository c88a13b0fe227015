//! Eventos del navegador de escenas.
use chrono::{DateTime, Utc};
use play_core::Stamped;
use play_domain::Role;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SceneEventKind {
    HotspotClick,
    ParticipantMoved,
    ParticipantsMoved,
    OpenArtifact,
    CloseArtifact,
    TriggerFire,
    PhaseChanged,
    ParticipantSelected,
    Reset,
}

impl SceneEventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SceneEventKind::HotspotClick => "hotspot_click",
            SceneEventKind::ParticipantMoved => "participant_moved",
            SceneEventKind::ParticipantsMoved => "participants_moved",
            SceneEventKind::OpenArtifact => "open_artifact",
            SceneEventKind::CloseArtifact => "close_artifact",
            SceneEventKind::TriggerFire => "trigger_fire",
            SceneEventKind::PhaseChanged => "phase_changed",
            SceneEventKind::ParticipantSelected => "participant_selected",
            SceneEventKind::Reset => "reset",
        }
    }
}

impl fmt::Display for SceneEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneEvent {
    pub id: u64,
    pub timestamp: DateTime<Utc>,
    pub session_id: Uuid,
    /// `participant` para clicks, `host` para operaciones del anfitrión.
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub participant_id: Option<String>,
    pub kind: SceneEventKind,
    pub payload: Value,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneEventDraft {
    pub session_id: Uuid,
    pub role: Role,
    pub participant_id: Option<String>,
    pub kind: SceneEventKind,
    pub payload: Value,
}

impl Stamped for SceneEvent {
    type Draft = SceneEventDraft;

    fn stamp(draft: SceneEventDraft, id: u64, timestamp: DateTime<Utc>) -> Self {
        Self { id,
               timestamp,
               session_id: draft.session_id,
               role: draft.role,
               participant_id: draft.participant_id,
               kind: draft.kind,
               payload: draft.payload }
    }

    fn id(&self) -> u64 {
        self.id
    }

    fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}
