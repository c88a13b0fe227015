//! Escenas, hotspots y participantes.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Alcance de un trigger; lo interpreta un sistema externo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriggerScope {
    Actor,
    Scene,
    Session,
}

impl TriggerScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            TriggerScope::Actor => "actor",
            TriggerScope::Scene => "scene",
            TriggerScope::Session => "session",
        }
    }
}

impl fmt::Display for TriggerScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Qué pasa al activar un hotspot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HotspotTarget {
    #[serde(rename_all = "camelCase")]
    Scene { scene_key: String },
    #[serde(rename_all = "camelCase")]
    OpenArtifact { scenario_id: String },
    #[serde(rename_all = "camelCase")]
    FireTrigger { trigger_ids: Vec<String>, scope: TriggerScope },
}

/// Región clickeable. Posición y radio en % de la imagen.
///
/// `visible_when_phases` / `enabled_when_phases` son listas de fases
/// permitidas; ausentes significa "siempre".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneHotspot {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    pub target: HotspotTarget,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible_when_phases: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled_when_phases: Option<Vec<String>>,
}

impl SceneHotspot {
    pub fn new(id: &str, (x, y, radius): (f64, f64, f64), label: &str, target: HotspotTarget) -> Self {
        Self { id: id.to_string(),
               x,
               y,
               radius,
               label: Some(label.to_string()),
               required: None,
               target,
               visible_when_phases: None,
               enabled_when_phases: None }
    }

    pub fn visible_when(mut self, phases: &[&str]) -> Self {
        self.visible_when_phases = Some(phases.iter().map(|p| p.to_string()).collect());
        self
    }

    pub fn enabled_when(mut self, phases: &[&str]) -> Self {
        self.enabled_when_phases = Some(phases.iter().map(|p| p.to_string()).collect());
        self
    }

    pub fn is_visible_in(&self, phase: &str) -> bool {
        allows(&self.visible_when_phases, phase)
    }

    pub fn is_enabled_in(&self, phase: &str) -> bool {
        allows(&self.enabled_when_phases, phase)
    }

    /// Visible y habilitado.
    pub fn is_available_in(&self, phase: &str) -> bool {
        self.is_visible_in(phase) && self.is_enabled_in(phase)
    }
}

fn allows(phases: &Option<Vec<String>>, phase: &str) -> bool {
    phases.as_ref().map_or(true, |list| list.iter().any(|p| p == phase))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    pub key: String,
    pub label: String,
    pub image_url: String,
    pub hotspots: Vec<SceneHotspot>,
}

impl Scene {
    pub fn hotspot(&self, id: &str) -> Option<&SceneHotspot> {
        self.hotspots.iter().find(|h| h.id == id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub id: String,
    pub name: String,
    pub current_scene_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_scene_changed_at: Option<DateTime<Utc>>,
}

impl Participant {
    pub fn new(id: &str, name: &str, scene_key: &str) -> Self {
        Self { id: id.to_string(),
               name: name.to_string(),
               current_scene_key: scene_key.to_string(),
               last_scene_changed_at: None }
    }
}

/// Quién originó un movimiento.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveOrigin {
    Hotspot,
    Host,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn absent_phase_lists_always_allow() {
        let h = SceneHotspot::new("h", (10.0, 10.0, 5.0), "H", HotspotTarget::Scene { scene_key: "map".into() });
        assert!(h.is_available_in("anything"));
        let gated = h.clone().enabled_when(&["search"]);
        assert!(gated.is_visible_in("lobby"));
        assert!(!gated.is_enabled_in("lobby"));
        assert!(gated.is_available_in("search"));
    }

    #[test]
    fn target_serializes_with_type_tag() {
        let t = HotspotTarget::FireTrigger { trigger_ids: vec!["lights_off".into()],
                                             scope: TriggerScope::Session };
        assert_eq!(serde_json::to_value(&t).unwrap(),
                   json!({ "type": "fire_trigger", "triggerIds": ["lights_off"], "scope": "session" }));
    }
}
