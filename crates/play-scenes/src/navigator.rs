//! Navegador del grafo de escenas.
//!
//! Dueño de la fase, las escenas, los participantes, el puntero de artefacto
//! abierto y su propio log. La fase es una etiqueta libre: sólo decide qué
//! hotspots están disponibles. Las operaciones de host ignoran la fase.
use indexmap::IndexMap;
use log::{debug, info, warn};
use play_core::clock::{system_clock, SharedClock};
use play_core::{EventStore, InMemoryEventStore, ScenarioCatalog};
use play_domain::Role;
use serde_json::{json, Value};
use std::sync::mpsc::Receiver;
use std::sync::Arc;
use uuid::Uuid;

use crate::error::NavigatorError;
use crate::event::{SceneEvent, SceneEventDraft, SceneEventKind};
use crate::fixtures::{default_participants, default_scenes};
use crate::snapshot::SceneSnapshot;
use crate::trigger::{TriggerBus, TriggerFired};
use crate::types::{HotspotTarget, MoveOrigin, Participant, Scene, SceneHotspot};

pub const DEFAULT_PHASE: &str = "lobby";

#[derive(Clone)]
pub struct NavigatorOptions {
    pub initial_phase: String,
    pub clock: Option<SharedClock>,
}

impl Default for NavigatorOptions {
    fn default() -> Self {
        Self { initial_phase: DEFAULT_PHASE.to_string(),
               clock: None }
    }
}

impl std::fmt::Debug for NavigatorOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavigatorOptions")
         .field("initial_phase", &self.initial_phase)
         .field("clock", &self.clock.as_ref().map(|_| "custom"))
         .finish()
    }
}

/// Resultado de `click_hotspot`. El `hotspot_click` ya está en el log en
/// todos los casos.
#[derive(Debug, Clone, PartialEq)]
pub enum HotspotOutcome {
    Moved { participant_id: String, scene_key: String },
    OpenedArtifact(String),
    TriggerFired(TriggerFired),
    /// La fase actual no habilita el hotspot.
    Gated,
    NotFound(NavigatorError),
}

pub struct SceneNavigator<S = InMemoryEventStore<SceneEvent>>
    where S: EventStore<SceneEvent>
{
    session_id: Uuid,
    catalog: Arc<ScenarioCatalog>,
    clock: SharedClock,
    initial_phase: String,
    phase: String,
    scenes: IndexMap<String, Scene>,
    starting_participants: IndexMap<String, Participant>,
    participants: IndexMap<String, Participant>,
    active_participant_id: Option<String>,
    open_artifact_scenario_id: Option<String>,
    events: S,
    triggers: TriggerBus,
}

impl SceneNavigator {
    /// Sesión sobre el grafo del prototipo.
    pub fn new(catalog: Arc<ScenarioCatalog>, options: NavigatorOptions) -> Self {
        let clock = options.clock.clone().unwrap_or_else(system_clock);
        let store = InMemoryEventStore::with_clock(clock.clone());
        Self::build(catalog, store, default_scenes(), default_participants(), NavigatorOptions { clock: Some(clock),
                                                                                                   ..options })
    }

    /// Sesión sobre un grafo propio, validado contra el catálogo.
    pub fn with_graph(catalog: Arc<ScenarioCatalog>,
                      scenes: IndexMap<String, Scene>,
                      participants: IndexMap<String, Participant>,
                      options: NavigatorOptions)
                      -> Result<Self, NavigatorError> {
        let clock = options.clock.clone().unwrap_or_else(system_clock);
        let store = InMemoryEventStore::with_clock(clock.clone());
        Self::with_store(catalog, store, scenes, participants, NavigatorOptions { clock: Some(clock),
                                                                                  ..options })
    }
}

impl<S> SceneNavigator<S> where S: EventStore<SceneEvent>
{
    pub fn with_store(catalog: Arc<ScenarioCatalog>,
                      events: S,
                      scenes: IndexMap<String, Scene>,
                      participants: IndexMap<String, Participant>,
                      options: NavigatorOptions)
                      -> Result<Self, NavigatorError> {
        check_graph(&catalog, &scenes, &participants)?;
        Ok(Self::build(catalog, events, scenes, participants, options))
    }

    fn build(catalog: Arc<ScenarioCatalog>,
             events: S,
             scenes: IndexMap<String, Scene>,
             participants: IndexMap<String, Participant>,
             options: NavigatorOptions)
             -> Self {
        Self { session_id: Uuid::new_v4(),
               catalog,
               clock: options.clock.unwrap_or_else(system_clock),
               phase: options.initial_phase.clone(),
               initial_phase: options.initial_phase,
               scenes,
               active_participant_id: participants.keys().next().cloned(),
               starting_participants: participants.clone(),
               participants,
               open_artifact_scenario_id: None,
               events,
               triggers: TriggerBus::default() }
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn phase(&self) -> &str {
        &self.phase
    }

    pub fn scene(&self, key: &str) -> Option<&Scene> {
        self.scenes.get(key)
    }

    pub fn scenes(&self) -> impl Iterator<Item = &Scene> {
        self.scenes.values()
    }

    pub fn participant(&self, id: &str) -> Option<&Participant> {
        self.participants.get(id)
    }

    pub fn participants(&self) -> impl Iterator<Item = &Participant> {
        self.participants.values()
    }

    pub fn active_participant_id(&self) -> Option<&str> {
        self.active_participant_id.as_deref()
    }

    pub fn open_artifact_scenario_id(&self) -> Option<&str> {
        self.open_artifact_scenario_id.as_deref()
    }

    pub fn events(&self) -> Vec<SceneEvent> {
        self.events.list()
    }

    pub fn subscribe_triggers(&mut self) -> Receiver<TriggerFired> {
        self.triggers.subscribe()
    }

    /// Hotspots que un renderer debería dibujar en la fase actual.
    pub fn visible_hotspots(&self, scene_key: &str) -> Vec<&SceneHotspot> {
        self.scenes
            .get(scene_key)
            .map(|scene| scene.hotspots.iter().filter(|h| h.is_visible_in(&self.phase)).collect())
            .unwrap_or_default()
    }

    /// Visible y habilitado en la fase actual; `false` para ids desconocidos.
    pub fn is_hotspot_enabled(&self, scene_key: &str, hotspot_id: &str) -> bool {
        self.scenes
            .get(scene_key)
            .and_then(|scene| scene.hotspot(hotspot_id))
            .is_some_and(|h| h.is_available_in(&self.phase))
    }

    pub fn set_phase(&mut self, phase: &str) -> bool {
        if self.phase == phase {
            return false;
        }
        let from = std::mem::replace(&mut self.phase, phase.to_string());
        self.log(Role::Host, None, SceneEventKind::PhaseChanged, json!({ "from": from, "to": phase }));
        true
    }

    pub fn set_active_participant(&mut self, participant_id: &str) -> bool {
        if !self.participants.contains_key(participant_id) {
            warn!("cannot select unknown participant '{participant_id}'");
            return false;
        }
        if self.active_participant_id.as_deref() == Some(participant_id) {
            return false;
        }
        self.active_participant_id = Some(participant_id.to_string());
        self.log(Role::Host,
                 Some(participant_id),
                 SceneEventKind::ParticipantSelected,
                 json!({ "participantId": participant_id }));
        true
    }

    /// Mueve un participante sin mirar la fase. Sólo falla con ids
    /// desconocidos; mover a la escena actual también se registra.
    pub fn move_participant_to_scene(&mut self, participant_id: &str, scene_key: &str, origin: MoveOrigin) -> bool {
        if !self.scenes.contains_key(scene_key) {
            warn!("cannot move '{participant_id}' to unknown scene '{scene_key}'");
            return false;
        }
        let now = self.clock.now();
        let Some(participant) = self.participants.get_mut(participant_id) else {
            warn!("cannot move unknown participant '{participant_id}'");
            return false;
        };
        let from = std::mem::replace(&mut participant.current_scene_key, scene_key.to_string());
        participant.last_scene_changed_at = Some(now);
        let role = match origin {
            MoveOrigin::Hotspot => Role::Participant,
            MoveOrigin::Host => Role::Host,
        };
        self.log(role,
                 Some(participant_id),
                 SceneEventKind::ParticipantMoved,
                 json!({ "from": from, "to": scene_key, "origin": origin }));
        true
    }

    pub fn move_all_to_scene(&mut self, scene_key: &str) -> bool {
        if !self.scenes.contains_key(scene_key) {
            warn!("cannot move everyone to unknown scene '{scene_key}'");
            return false;
        }
        let now = self.clock.now();
        for participant in self.participants.values_mut() {
            participant.current_scene_key = scene_key.to_string();
            participant.last_scene_changed_at = Some(now);
        }
        let ids: Vec<&String> = self.participants.keys().collect();
        let payload = json!({ "to": scene_key, "participantIds": ids, "origin": MoveOrigin::Host });
        self.log(Role::Host, None, SceneEventKind::ParticipantsMoved, payload);
        true
    }

    /// Activa un hotspot en nombre del participante activo.
    pub fn click_hotspot(&mut self, scene_key: &str, hotspot_id: &str) -> HotspotOutcome {
        let actor = self.active_participant_id.clone();
        self.log(Role::Participant,
                 actor.as_deref(),
                 SceneEventKind::HotspotClick,
                 json!({ "sceneKey": scene_key, "hotspotId": hotspot_id, "phase": self.phase }));

        let Some(scene) = self.scenes.get(scene_key) else {
            return HotspotOutcome::NotFound(NavigatorError::SceneNotFound(scene_key.to_string()));
        };
        let Some(hotspot) = scene.hotspot(hotspot_id) else {
            return HotspotOutcome::NotFound(NavigatorError::HotspotNotFound { scene_key: scene_key.to_string(),
                                                                              hotspot_id: hotspot_id.to_string() });
        };
        if !hotspot.is_available_in(&self.phase) {
            debug!("hotspot '{hotspot_id}' gated in phase '{}'", self.phase);
            return HotspotOutcome::Gated;
        }

        match hotspot.target.clone() {
            HotspotTarget::Scene { scene_key: to } => {
                let Some(pid) = actor else {
                    return HotspotOutcome::NotFound(NavigatorError::ParticipantNotFound(String::new()));
                };
                if self.move_participant_to_scene(&pid, &to, MoveOrigin::Hotspot) {
                    HotspotOutcome::Moved { participant_id: pid,
                                            scene_key: to }
                } else {
                    HotspotOutcome::NotFound(NavigatorError::SceneNotFound(to))
                }
            }
            HotspotTarget::OpenArtifact { scenario_id } => {
                if !self.catalog.contains(&scenario_id) {
                    return HotspotOutcome::NotFound(NavigatorError::ScenarioNotFound(scenario_id));
                }
                let previous = self.open_artifact_scenario_id.replace(scenario_id.clone());
                self.log(Role::Participant,
                         actor.as_deref(),
                         SceneEventKind::OpenArtifact,
                         json!({ "scenarioId": scenario_id, "sceneKey": scene_key, "hotspotId": hotspot_id, "previous": previous }));
                HotspotOutcome::OpenedArtifact(scenario_id)
            }
            HotspotTarget::FireTrigger { trigger_ids, scope } => {
                let ev = self.log(Role::Participant,
                                  actor.as_deref(),
                                  SceneEventKind::TriggerFire,
                                  json!({ "triggerIds": trigger_ids, "scope": scope, "sceneKey": scene_key, "hotspotId": hotspot_id }));
                let message = TriggerFired { ids: trigger_ids,
                                             scope,
                                             scene_key: scene_key.to_string(),
                                             participant_id: actor,
                                             fired_at: ev.timestamp };
                self.triggers.publish(&message);
                HotspotOutcome::TriggerFired(message)
            }
        }
    }

    /// Cierra el artefacto abierto; sin artefacto abierto no hace nada.
    pub fn close_artifact(&mut self) -> bool {
        let Some(scenario_id) = self.open_artifact_scenario_id.take() else {
            return false;
        };
        let actor = self.active_participant_id.clone();
        self.log(Role::Participant,
                 actor.as_deref(),
                 SceneEventKind::CloseArtifact,
                 json!({ "scenarioId": scenario_id }));
        true
    }

    /// Vuelve a la fase y posiciones iniciales, vacía el log y registra un
    /// único `reset`. Los suscriptores de triggers se conservan.
    pub fn reset(&mut self) -> SceneEvent {
        self.phase = self.initial_phase.clone();
        self.participants = self.starting_participants.clone();
        self.active_participant_id = self.participants.keys().next().cloned();
        self.open_artifact_scenario_id = None;
        self.events.clear();
        info!("scene session {} reset", self.session_id);
        self.log(Role::Host, None, SceneEventKind::Reset, json!({ "phase": self.phase }))
    }

    pub fn snapshot(&self) -> SceneSnapshot {
        SceneSnapshot { session_id: self.session_id,
                        phase: self.phase.clone(),
                        scenes: self.scenes.values().cloned().collect(),
                        participants: self.participants.values().cloned().collect(),
                        active_participant_id: self.active_participant_id.clone(),
                        open_artifact_scenario_id: self.open_artifact_scenario_id.clone(),
                        events: self.events.list() }
    }

    fn log(&mut self, role: Role, participant_id: Option<&str>, kind: SceneEventKind, payload: Value) -> SceneEvent {
        let ev = self.events.append(SceneEventDraft { session_id: self.session_id,
                                                      role,
                                                      participant_id: participant_id.map(str::to_string),
                                                      kind,
                                                      payload });
        debug!("scene event #{} {} ({})", ev.id, ev.kind, ev.role.as_str());
        ev
    }
}

/// Toda transición apunta a una escena existente, todo artefacto a un
/// escenario del catálogo y todo participante arranca en una escena conocida.
fn check_graph(catalog: &ScenarioCatalog,
               scenes: &IndexMap<String, Scene>,
               participants: &IndexMap<String, Participant>)
               -> Result<(), NavigatorError> {
    for scene in scenes.values() {
        for hotspot in &scene.hotspots {
            match &hotspot.target {
                HotspotTarget::Scene { scene_key } if !scenes.contains_key(scene_key) => {
                    return Err(NavigatorError::SceneNotFound(scene_key.clone()));
                }
                HotspotTarget::OpenArtifact { scenario_id } if !catalog.contains(scenario_id) => {
                    return Err(NavigatorError::ScenarioNotFound(scenario_id.clone()));
                }
                _ => {}
            }
        }
    }
    match participants.values().find(|p| !scenes.contains_key(&p.current_scene_key)) {
        Some(p) => Err(NavigatorError::SceneNotFound(p.current_scene_key.clone())),
        None => Ok(()),
    }
}
