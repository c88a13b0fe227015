//! Motor de artefactos por sesión.
//!
//! `ArtifactEngine` reemplaza al store global: cada sesión (o test) construye
//! su propia instancia con catálogo, reloj y fuente de azar inyectados.
//!
//! Contrato de escritura
//! - Cada operación que cambia algo agrega exactamente un evento y devuelve su
//!   tipo.
//! - Un rechazo (id desconocido, tipo equivocado, no-op) devuelve `None` y no
//!   toca ni el estado ni el log.
//! - Las acciones trabajan sobre una copia del estado; sólo se confirma si la
//!   acción produjo un evento.
mod actions;
mod snapshot;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use log::{debug, info, warn};
use play_domain::{ArtifactConfig, ArtifactType, Role};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use serde_json::{json, Value};
use std::sync::Arc;
use uuid::Uuid;

use crate::catalog::ScenarioCatalog;
use crate::clock::{system_clock, SharedClock};
use crate::errors::CoreEngineError;
use crate::event::{ArtifactEvent, ArtifactEventDraft, EventStore, EventType, InMemoryEventStore};
use crate::hashing::config_fingerprint;
use crate::state::{force_solve, initial_state, RuntimeState};

pub use snapshot::EngineSnapshot;

/// Parámetros de sesión. Las librerías nunca leen el entorno; quien arma la
/// sesión traduce su configuración a estas opciones.
#[derive(Clone, Default)]
pub struct EngineOptions {
    /// Semilla para la mezcla del tile puzzle; `None` usa entropía del SO.
    pub seed: Option<u64>,
    /// Escenario activo inicial; si no existe se usa el primero del catálogo.
    pub default_scenario: Option<String>,
    pub default_role: Role,
    pub clock: Option<SharedClock>,
}

impl std::fmt::Debug for EngineOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EngineOptions")
         .field("seed", &self.seed)
         .field("default_scenario", &self.default_scenario)
         .field("default_role", &self.default_role)
         .field("clock", &self.clock.as_ref().map(|_| "custom"))
         .finish()
    }
}

/// Contexto que recibe cada acción.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ActionCtx {
    pub now: DateTime<Utc>,
    pub role: Role,
}

/// Resultado de una acción aceptada: tipo de evento y payload.
pub(crate) type Outcome = Option<(EventType, Value)>;

pub struct ArtifactEngine<S = InMemoryEventStore<ArtifactEvent>>
    where S: EventStore<ArtifactEvent>
{
    session_id: Uuid,
    catalog: Arc<ScenarioCatalog>,
    clock: SharedClock,
    /// Timestamp del último evento; sobrevive a `reset_all`.
    last_logged_at: Option<DateTime<Utc>>,
    rng: Box<dyn RngCore + Send>,
    configs: IndexMap<String, ArtifactConfig>,
    states: IndexMap<String, RuntimeState>,
    events: S,
    active_scenario_id: String,
    active_role: Role,
}

impl ArtifactEngine {
    /// Sesión con log en memoria que comparte el reloj de las opciones.
    pub fn new(catalog: Arc<ScenarioCatalog>, options: EngineOptions) -> Self {
        let clock = options.clock.clone().unwrap_or_else(system_clock);
        let store = InMemoryEventStore::with_clock(clock.clone());
        Self::with_store(catalog, store, EngineOptions { clock: Some(clock),
                                                         ..options })
    }
}

impl<S> ArtifactEngine<S> where S: EventStore<ArtifactEvent>
{
    /// Arma la sesión con un store propio. Los defaults del catálogo que no
    /// validan se omiten con un warning (`ScenarioCatalog::self_check` los
    /// reporta como error).
    pub fn with_store(catalog: Arc<ScenarioCatalog>, events: S, options: EngineOptions) -> Self {
        let rng: Box<dyn RngCore + Send> = match options.seed {
            Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
            None => Box::new(StdRng::from_entropy()),
        };
        let active_scenario_id = options.default_scenario
                                        .filter(|id| catalog.contains(id))
                                        .or_else(|| catalog.first().map(|s| s.id.clone()))
                                        .unwrap_or_default();
        let mut engine = Self { session_id: Uuid::new_v4(),
                                catalog,
                                clock: options.clock.unwrap_or_else(system_clock),
                                last_logged_at: None,
                                rng,
                                configs: IndexMap::new(),
                                states: IndexMap::new(),
                                events,
                                active_scenario_id,
                                active_role: options.default_role };
        engine.load_defaults();
        engine
    }

    /// Hora de la sesión: el reloj, pero nunca antes del último evento. Así
    /// los timestamps del estado no quedan detrás del log que los registra.
    fn now(&self) -> DateTime<Utc> {
        let now = self.clock.now();
        self.last_logged_at.map_or(now, |last| last.max(now))
    }

    fn load_defaults(&mut self) {
        let now = self.now();
        let catalog = Arc::clone(&self.catalog);
        self.configs.clear();
        self.states.clear();
        for scenario in catalog.list() {
            match scenario.parse_config(None) {
                Ok(config) => {
                    let state = initial_state(&config, self.rng.as_mut(), now);
                    self.configs.insert(scenario.id.clone(), config);
                    self.states.insert(scenario.id.clone(), state);
                }
                Err(e) => warn!("skipping scenario '{}': {e}", scenario.id),
            }
        }
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn catalog(&self) -> &ScenarioCatalog {
        &self.catalog
    }

    pub fn active_scenario_id(&self) -> &str {
        &self.active_scenario_id
    }

    pub fn active_role(&self) -> Role {
        self.active_role
    }

    pub fn config(&self, scenario_id: &str) -> Option<&ArtifactConfig> {
        self.configs.get(scenario_id)
    }

    pub fn state(&self, scenario_id: &str) -> Option<&RuntimeState> {
        self.states.get(scenario_id)
    }

    pub fn events(&self) -> Vec<ArtifactEvent> {
        self.events.list()
    }

    /// `None` para escenarios desconocidos.
    pub fn is_solved(&self, scenario_id: &str) -> Option<bool> {
        self.states.get(scenario_id).map(RuntimeState::is_solved)
    }

    /// Estado inicial para el escenario, con la configuración dada o su
    /// default. No modifica la sesión salvo por consumir azar.
    pub fn initial_for(&mut self, scenario_id: &str, config_override: Option<&Value>) -> Result<RuntimeState, CoreEngineError> {
        let scenario = self.catalog
                           .get(scenario_id)
                           .ok_or_else(|| CoreEngineError::ScenarioNotFound(scenario_id.to_string()))?;
        let config = scenario.parse_config(config_override)?;
        let now = self.now();
        Ok(initial_state(&config, self.rng.as_mut(), now))
    }

    pub fn set_active_scenario(&mut self, scenario_id: &str) -> Option<EventType> {
        if !self.catalog.contains(scenario_id) || self.active_scenario_id == scenario_id {
            return None;
        }
        let previous = std::mem::replace(&mut self.active_scenario_id, scenario_id.to_string());
        let payload = json!({ "action": "set_active_scenario", "previous": previous });
        Some(self.log(scenario_id, EventType::Custom, payload).event_type)
    }

    pub fn set_active_role(&mut self, role: Role) -> Option<EventType> {
        if self.active_role == role {
            return None;
        }
        let previous = self.active_role;
        self.active_role = role;
        let scenario_id = self.active_scenario_id.clone();
        let payload = json!({ "action": "set_active_role", "previous": previous, "role": role });
        Some(self.log(&scenario_id, EventType::Custom, payload).event_type)
    }

    /// Valida `candidate` y lo instala como configuración del escenario.
    /// Con `reset_state` el estado vuelve al inicial de la nueva configuración.
    /// Devuelve el fingerprint de la configuración aplicada.
    pub fn set_config(&mut self, scenario_id: &str, candidate: &Value, reset_state: bool) -> Result<String, CoreEngineError> {
        let scenario = self.catalog
                           .get(scenario_id)
                           .ok_or_else(|| CoreEngineError::ScenarioNotFound(scenario_id.to_string()))?;
        let config = match scenario.parse_config(Some(candidate)) {
            Ok(c) => c,
            Err(e) => {
                warn!("config rejected for '{scenario_id}': {:?}", e.paths());
                return Err(e.into());
            }
        };
        let value = config.to_value();
        let fingerprint = config_fingerprint(scenario_id, &value);
        if reset_state {
            let now = self.now();
            let state = initial_state(&config, self.rng.as_mut(), now);
            self.states.insert(scenario_id.to_string(), state);
        }
        self.configs.insert(scenario_id.to_string(), config);
        let payload = json!({
            "artifactType": scenario.artifact_type,
            "fingerprint": fingerprint,
            "resetState": reset_state,
        });
        self.log(scenario_id, EventType::ConfigUpdated, payload);
        Ok(fingerprint)
    }

    /// Reemplaza el estado; se rechaza si el tipo no coincide con el del
    /// escenario.
    pub fn set_runtime_state(&mut self, scenario_id: &str, state: RuntimeState) -> Option<EventType> {
        self.update_runtime_state(scenario_id, |_| state)
    }

    /// Aplica una transformación pura al estado actual. Salida de otro tipo o
    /// igual a la entrada se descarta sin evento.
    pub fn update_runtime_state<F>(&mut self, scenario_id: &str, updater: F) -> Option<EventType>
        where F: FnOnce(&RuntimeState) -> RuntimeState
    {
        let prev = self.states.get(scenario_id)?;
        let next = updater(prev);
        if let Err(e) = ensure_same_kind(prev.kind(), next.kind()) {
            warn!("update on '{scenario_id}' discarded: {e}");
            return None;
        }
        if &next == prev {
            return None;
        }
        let payload = json!({ "artifactType": next.kind(), "solved": next.is_solved() });
        self.states.insert(scenario_id.to_string(), next);
        Some(self.log(scenario_id, EventType::StateUpdated, payload).event_type)
    }

    /// Evento libre sobre el escenario indicado, con el rol activo.
    pub fn add_event(&mut self, scenario_id: &str, event_type: EventType, payload: Value) -> ArtifactEvent {
        self.log(scenario_id, event_type, payload)
    }

    /// Restaura configuración por defecto y estado inicial.
    pub fn reset_scenario(&mut self, scenario_id: &str) -> Option<EventType> {
        let scenario = self.catalog.get(scenario_id)?;
        let artifact_type = scenario.artifact_type;
        let config = match scenario.parse_config(None) {
            Ok(c) => c,
            Err(e) => {
                warn!("cannot reset '{scenario_id}': {e}");
                return None;
            }
        };
        let now = self.now();
        let state = initial_state(&config, self.rng.as_mut(), now);
        self.configs.insert(scenario_id.to_string(), config);
        self.states.insert(scenario_id.to_string(), state);
        info!("scenario '{scenario_id}' reset");
        Some(self.log(scenario_id, EventType::Reset, json!({ "artifactType": artifact_type })).event_type)
    }

    /// Reinicia toda la sesión: defaults, estados y log. El log queda con un
    /// único evento `reset`; los ids siguen creciendo.
    pub fn reset_all(&mut self) -> EventType {
        self.load_defaults();
        self.events.clear();
        info!("session {} reset ({} scenarios)", self.session_id, self.states.len());
        self.log("", EventType::Reset, json!({ "scope": "all" })).event_type
    }

    /// "Marcar como resuelto" del host o del participante.
    pub fn force_solve(&mut self, scenario_id: &str) -> Option<EventType> {
        self.act(scenario_id, |ctx, config, state| {
                if !force_solve(state, config, ctx.now) {
                    return None;
                }
                Some((EventType::Solved, json!({ "via": "fallback" })))
            })
    }

    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot { session_id: self.session_id,
                         active_scenario_id: self.active_scenario_id.clone(),
                         active_role: self.active_role,
                         configs: self.configs
                                      .iter()
                                      .map(|(id, c)| (id.clone(), c.to_value()))
                                      .collect(),
                         runtime_states: self.states.clone(),
                         events: self.events.list() }
    }

    /// Corre `action` sobre una copia del estado y la confirma sólo si hubo
    /// evento. El payload recibe `artifactType`.
    pub(crate) fn act<F>(&mut self, scenario_id: &str, action: F) -> Option<EventType>
        where F: FnOnce(ActionCtx, &ArtifactConfig, &mut RuntimeState) -> Outcome
    {
        let config = self.configs.get(scenario_id)?;
        let mut next = self.states.get(scenario_id)?.clone();
        let ctx = ActionCtx { now: self.now(),
                              role: self.active_role };
        let Some((event_type, mut payload)) = action(ctx, config, &mut next) else {
            debug!("action on '{scenario_id}' rejected");
            return None;
        };
        if let Value::Object(map) = &mut payload {
            map.insert("artifactType".to_string(), json!(next.kind()));
        }
        self.states.insert(scenario_id.to_string(), next);
        Some(self.log(scenario_id, event_type, payload).event_type)
    }

    fn log(&mut self, scenario_id: &str, event_type: EventType, payload: Value) -> ArtifactEvent {
        let ev = self.events.append(ArtifactEventDraft { session_id: self.session_id,
                                                         scenario_id: scenario_id.to_string(),
                                                         role: self.active_role,
                                                         event_type,
                                                         payload });
        self.last_logged_at = Some(ev.timestamp);
        debug!("event #{} {} on '{}' as {}", ev.id, ev.event_type, ev.scenario_id, ev.role);
        ev
    }
}

fn ensure_same_kind(expected: ArtifactType, actual: ArtifactType) -> Result<(), CoreEngineError> {
    if expected == actual {
        Ok(())
    } else {
        Err(CoreEngineError::StateMismatch { expected, actual })
    }
}

impl<S> std::fmt::Debug for ArtifactEngine<S> where S: EventStore<ArtifactEvent>
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArtifactEngine")
         .field("session_id", &self.session_id)
         .field("scenarios", &self.states.len())
         .field("events", &self.events.len())
         .field("active_scenario_id", &self.active_scenario_id)
         .field("active_role", &self.active_role)
         .finish()
    }
}
