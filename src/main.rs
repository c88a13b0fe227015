//! `playflow-demo`: guiona una sesión completa (lobby, búsqueda, apertura
//! del keypad, resolución y trigger final) e imprime ambas vistas en JSON.
use log::info;
use playflow_rust::domain::Role;
use playflow_rust::scenes::{HotspotOutcome, MoveOrigin};
use playflow_rust::{telemetry, Session, CONFIG};
use playflow_rust::core::ScenarioCatalog;
use std::sync::Arc;

fn main() {
    telemetry::init(&CONFIG.logging);
    let catalog = Arc::new(ScenarioCatalog::builtin());
    if let Err(e) = catalog.self_check() {
        eprintln!("[playflow-demo] catálogo inválido: {e}");
        std::process::exit(1);
    }

    let mut session = Session::new(&CONFIG, catalog, None);
    info!("demo session {} started in phase '{}'", session.navigator.session_id(), session.navigator.phase());

    // en lobby el kassaskåp está bloqueado
    session.click_hotspot("map", "to-room-a");
    if session.click_hotspot("room_a", "safe") == HotspotOutcome::Gated {
        info!("safe gated during lobby");
    }

    session.navigator.set_phase("search");
    if let HotspotOutcome::OpenedArtifact(scenario_id) = session.click_hotspot("room_a", "safe") {
        session.engine.enter_keypad_code(&scenario_id, "0000");
        session.engine.enter_keypad_code(&scenario_id, "1234");
        info!("'{scenario_id}' solved: {:?}", session.engine.is_solved(&scenario_id));
        session.navigator.close_artifact();
    }

    session.navigator.set_phase("finale");
    session.navigator.move_all_to_scene("room_b");
    session.engine.set_active_role(Role::Host);
    session.navigator.move_participant_to_scene("p1", "room_b", MoveOrigin::Host);
    let trigger = session.navigator.subscribe_triggers();
    session.click_hotspot("room_b", "switch");
    for fired in trigger.try_iter() {
        info!("trigger {:?} ({}) fired in {}", fired.ids, fired.scope, fired.scene_key);
    }

    match serde_json::to_string_pretty(&session.snapshot_json()) {
        Ok(out) => println!("{out}"),
        Err(e) => {
            eprintln!("[playflow-demo] {e}");
            std::process::exit(1);
        }
    }
}
