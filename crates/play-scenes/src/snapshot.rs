use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use crate::event::SceneEvent;
use crate::types::{Participant, Scene};

/// Vista de sólo lectura del navegador.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneSnapshot {
    pub session_id: Uuid,
    pub phase: String,
    pub scenes: Vec<Scene>,
    pub participants: Vec<Participant>,
    pub active_participant_id: Option<String>,
    pub open_artifact_scenario_id: Option<String>,
    pub events: Vec<SceneEvent>,
}

impl SceneSnapshot {
    pub fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}
