use indexmap::IndexMap;
use play_domain::Role;
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use crate::event::ArtifactEvent;
use crate::state::RuntimeState;

/// Vista de sólo lectura para renderers externos.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineSnapshot {
    pub session_id: Uuid,
    pub active_scenario_id: String,
    pub active_role: Role,
    pub configs: IndexMap<String, Value>,
    pub runtime_states: IndexMap<String, RuntimeState>,
    pub events: Vec<ArtifactEvent>,
}

impl EngineSnapshot {
    pub fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}
