//! Sesión de juego: motor de artefactos + navegador de escenas.
//!
//! Ambos comparten catálogo y reloj pero llevan logs separados. Abrir un
//! artefacto desde un hotspot lo deja como escenario activo del motor.
use play_core::clock::system_clock;
use play_core::{ArtifactEngine, ScenarioCatalog, SharedClock};
use play_scenes::{HotspotOutcome, SceneNavigator};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::config::AppConfig;

pub struct Session {
    pub engine: ArtifactEngine,
    pub navigator: SceneNavigator,
}

impl Session {
    pub fn new(config: &AppConfig, catalog: Arc<ScenarioCatalog>, clock: Option<SharedClock>) -> Self {
        let clock = clock.unwrap_or_else(system_clock);
        let engine = ArtifactEngine::new(Arc::clone(&catalog), config.engine_options(Some(clock.clone())));
        let navigator = SceneNavigator::new(catalog, config.navigator_options(Some(clock)));
        Self { engine, navigator }
    }

    /// Click de hotspot; si abre un artefacto, el motor lo activa.
    pub fn click_hotspot(&mut self, scene_key: &str, hotspot_id: &str) -> HotspotOutcome {
        let outcome = self.navigator.click_hotspot(scene_key, hotspot_id);
        if let HotspotOutcome::OpenedArtifact(scenario_id) = &outcome {
            self.engine.set_active_scenario(scenario_id);
        }
        outcome
    }

    /// Reset completo de ambos lados.
    pub fn reset(&mut self) {
        self.engine.reset_all();
        self.navigator.reset();
    }

    /// `{ engine, scenes }` con las dos vistas de sólo lectura.
    pub fn snapshot_json(&self) -> Value {
        json!({ "engine": self.engine.snapshot().to_json(), "scenes": self.navigator.snapshot().to_json() })
    }
}
