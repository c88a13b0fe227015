use chrono::Duration;
use play_core::state::{CheckAnswer, NewReplayMarker, PropStatus, TilePosition};
use play_core::{ArtifactEngine, EngineOptions, EventType, ManualClock, RuntimeState, ScenarioCatalog, SharedClock};
use play_domain::config::{CellValue, GeoCoordinate, LogicGridCell, MarkerType};
use play_domain::{ArtifactType, Role};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::Arc;

fn session() -> (ArtifactEngine, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::at_epoch());
    let shared: SharedClock = clock.clone();
    let options = EngineOptions { seed: Some(42),
                                  clock: Some(shared),
                                  ..EngineOptions::default() };
    (ArtifactEngine::new(Arc::new(ScenarioCatalog::builtin()), options), clock)
}

#[test]
fn test_builtin_catalog_passes_self_check() {
    let catalog = ScenarioCatalog::builtin();
    assert!(catalog.self_check().is_ok());
    assert_eq!(catalog.len(), 26);
    assert_eq!(catalog.ids()[0], "keypad-4-digits");
    assert_eq!(catalog.ids()[24], "empty-artifact");
}

#[test]
fn test_initial_states_are_unsolved_and_match_their_type() {
    let (engine, _) = session();
    for scenario in engine.catalog().list() {
        let state = engine.state(&scenario.id).expect("state loaded");
        assert_eq!(state.kind(), scenario.artifact_type, "{}", scenario.id);
        assert!(!state.is_solved(), "{} starts solved", scenario.id);
    }
}

#[test]
fn test_every_stateful_type_has_a_scenario() {
    let catalog = ScenarioCatalog::builtin();
    for t in ArtifactType::ALL {
        assert!(catalog.first_of(t).is_some(), "no scenario for {t}");
    }
}

#[test]
fn test_keypad_locks_after_max_attempts() {
    let (mut engine, _) = session();
    let id = "keypad-attempt-limit";
    assert_eq!(engine.enter_keypad_code(id, "0000"), Some(EventType::Failed));
    assert_eq!(engine.enter_keypad_code(id, "1111"), Some(EventType::Failed));
    assert_eq!(engine.enter_keypad_code(id, "2222"), Some(EventType::Failed));
    assert_eq!(engine.enter_keypad_code(id, "4711"), None);
    let Some(RuntimeState::Keypad(s)) = engine.state(id) else { panic!("keypad state") };
    assert!(s.is_locked);
    assert!(!s.is_solved);
    assert_eq!(engine.events().len(), 3);
    assert_eq!(engine.events()[2].payload["locked"], json!(true));
}

#[test]
fn test_keypad_solves_once() {
    let (mut engine, _) = session();
    assert_eq!(engine.enter_keypad_code("keypad-4-digits", "1234"), Some(EventType::Solved));
    assert_eq!(engine.enter_keypad_code("keypad-4-digits", "1234"), None);
    assert_eq!(engine.is_solved("keypad-4-digits"), Some(true));
}

#[test]
fn test_riddle_fuzzy_and_numeric_matching() {
    let (mut engine, _) = session();
    assert_eq!(engine.submit_riddle_answer("quiz-numeric-answer", "3,66 "), Some(EventType::Solved));
    assert_eq!(engine.submit_riddle_answer("riddle-text", "  Stockholm "), Some(EventType::Solved));
    let Some(RuntimeState::Riddle(s)) = engine.state("riddle-text") else { panic!("riddle state") };
    assert_eq!(s.correct_answer.as_deref(), Some("Stockholm"));
    assert_eq!(s.attempts[0].normalized.as_deref(), Some("stockholm"));
}

#[test]
fn test_riddle_shows_hint_and_stops_at_max_attempts() {
    let (mut engine, _) = session();
    let id = "riddle-text";
    assert_eq!(engine.submit_riddle_answer(id, "Oslo"), Some(EventType::Failed));
    assert_eq!(engine.submit_riddle_answer(id, "Göteborg"), Some(EventType::Failed));
    let Some(RuntimeState::Riddle(s)) = engine.state(id) else { panic!("riddle state") };
    assert!(s.show_hint);
    assert_eq!(engine.submit_riddle_answer(id, "Malmö"), Some(EventType::Failed));
    assert_eq!(engine.submit_riddle_answer(id, "Stockholm"), None);
    assert_eq!(engine.is_solved(id), Some(false));
}

#[test]
fn test_cipher_guess_logs_length_then_solves() {
    let (mut engine, _) = session();
    let id = "cipher-caesar";
    assert_eq!(engine.submit_cipher_guess(id, "hej"), Some(EventType::Custom));
    assert_eq!(engine.events()[0].payload["guessLength"], json!(3));
    assert_eq!(engine.submit_cipher_guess(id, "hello, world!"), Some(EventType::Solved));
    assert_eq!(engine.submit_cipher_guess(id, "hello world"), None);
}

#[test]
fn test_refinding_a_hotspot_is_a_no_op() {
    let (mut engine, _) = session();
    let id = "hotspot-clickable-image";
    assert_eq!(engine.find_hotspot(id, "h1"), Some(EventType::Revealed));
    assert_eq!(engine.find_hotspot(id, "h1"), None);
    assert_eq!(engine.find_hotspot(id, "nope"), None);
    assert_eq!(engine.find_hotspot(id, "h2"), Some(EventType::Solved));
    let solved = engine.events()
                       .iter()
                       .filter(|e| e.event_type == EventType::Solved)
                       .count();
    assert_eq!(solved, 1);
    let Some(RuntimeState::Hotspot(s)) = engine.state(id) else { panic!("hotspot state") };
    assert_eq!((s.found_count, s.required_count), (2, 2));
}

#[test]
fn test_hotspot_without_required_zones_starts_complete() {
    let (mut engine, _) = session();
    let id = "hotspot-clickable-image";
    engine.set_config(id, &json!({ "imageArtifactId": "img", "hotspots": [] }), true)
          .unwrap();
    assert_eq!(engine.is_solved(id), Some(true));
    let Some(RuntimeState::Hotspot(s)) = engine.state(id) else { panic!("hotspot state") };
    assert_eq!((s.found_count, s.required_count, s.is_complete), (0, 0, true));

    let optional = json!({
        "imageArtifactId": "img",
        "hotspots": [
            { "id": "a", "x": 10, "y": 10, "radius": 5, "required": false },
            { "id": "b", "x": 50, "y": 50, "radius": 5, "required": false }
        ]
    });
    engine.set_config(id, &optional, true).unwrap();
    assert_eq!(engine.is_solved(id), Some(true));
    assert_eq!(engine.find_hotspot(id, "a"), None);
}

#[test]
fn test_tile_puzzle_can_always_be_solved_by_swaps() {
    let (mut engine, _) = session();
    let id = "tile-puzzle-3x3";
    let mut last = None;
    for i in 0..9 {
        let tile_id = format!("tile-{i}");
        let Some(RuntimeState::TilePuzzle(s)) = engine.state(id) else { panic!("tile state") };
        let tile = s.tiles.iter().find(|t| t.id == tile_id).expect("tile").clone();
        if tile.current_position != tile.correct_position {
            last = engine.move_tile(id, &tile_id, tile.correct_position);
        }
    }
    assert_eq!(last, Some(EventType::Solved));
    assert_eq!(engine.is_solved(id), Some(true));
    assert_eq!(engine.move_tile(id, "tile-0", TilePosition::new(1, 1)), None);
}

#[test]
fn test_tile_moves_outside_the_grid_are_rejected() {
    let (mut engine, _) = session();
    assert_eq!(engine.move_tile("tile-puzzle-3x3", "tile-0", TilePosition::new(3, 0)), None);
    assert_eq!(engine.move_tile("tile-puzzle-3x3", "tile-99", TilePosition::new(0, 0)), None);
    assert!(engine.events().is_empty());
}

#[test]
fn test_logic_grid_single_required_cell() {
    let (mut engine, _) = session();
    let id = "logic-grid";
    let wrong = LogicGridCell::new("person", 1, "pet", 0, CellValue::Yes);
    assert_eq!(engine.set_logic_cell(id, wrong), Some(EventType::StateUpdated));
    assert_eq!(engine.is_solved(id), Some(false));

    let (mut engine, _) = session();
    let right = LogicGridCell::new("person", 0, "pet", 0, CellValue::Yes);
    assert_eq!(engine.set_logic_cell(id, right), Some(EventType::Solved));
    assert_eq!(engine.is_solved(id), Some(true));
}

#[test]
fn test_logic_grid_cycle_and_clues() {
    let (mut engine, _) = session();
    let id = "logic-grid";
    assert_eq!(engine.cycle_logic_cell(id, "person", 0, "pet", 0), Some(EventType::Solved));

    let (mut engine, _) = session();
    assert_eq!(engine.set_logic_cell(id, LogicGridCell::new("person", 9, "pet", 0, CellValue::Yes)), None);
    assert_eq!(engine.reveal_clue(id, "c1"), Some(EventType::Revealed));
    assert_eq!(engine.reveal_clue(id, "c1"), None);
    assert_eq!(engine.reveal_clue(id, "c9"), None);
}

#[test]
fn test_counter_clamps_at_zero_and_solves_at_target() {
    let (mut engine, _) = session();
    let id = "counter-hint";
    assert_eq!(engine.decrement_counter(id), None);
    assert_eq!(engine.increment_counter(id), Some(EventType::StateUpdated));
    assert_eq!(engine.increment_counter(id), Some(EventType::StateUpdated));
    assert_eq!(engine.increment_counter(id), Some(EventType::Solved));
    assert_eq!(engine.increment_counter(id), Some(EventType::StateUpdated));
    assert_eq!(engine.decrement_counter(id), Some(EventType::StateUpdated));
    assert_eq!(engine.is_solved(id), Some(true));
}

#[test]
fn test_scan_gate_and_manual_fallback() {
    let (mut engine, _) = session();
    let id = "qr-gate-checkpoint";
    assert_eq!(engine.submit_scan(id, "WRONG"), Some(EventType::Failed));
    assert_eq!(engine.submit_fallback_code(id, "CHECKPOINT-1"), Some(EventType::Solved));
    assert_eq!(engine.submit_scan(id, "CHECKPOINT-1"), None);
    let Some(RuntimeState::ScanGate(s)) = engine.state(id) else { panic!("gate state") };
    assert!(s.used_fallback);
    assert_eq!(s.scan_attempts, 2);
}

#[test]
fn test_location_check_manual_confirmation() {
    let (mut engine, _) = session();
    let id = "location-checkpoint";
    let here = GeoCoordinate { latitude: 59.0,
                               longitude: 18.0 };
    assert_eq!(engine.report_location(id, here), Some(EventType::StateUpdated));
    assert_eq!(engine.submit_location_qr(id, "anything"), None);
    assert_eq!(engine.confirm_location(id), Some(EventType::Solved));
    assert_eq!(engine.confirm_location(id), None);
}

#[test]
fn test_location_distance_uses_target() {
    let (mut engine, _) = session();
    let id = "location-checkpoint";
    let cfg = json!({
        "locationId": "loc-1",
        "locationName": "Slottet",
        "checkType": "gps",
        "targetCoordinates": { "latitude": 59.3268, "longitude": 18.0717 },
        "radiusMeters": 50
    });
    engine.set_config(id, &cfg, true).unwrap();
    engine.report_location(id, GeoCoordinate { latitude: 59.3268,
                                               longitude: 18.0717 });
    let Some(RuntimeState::LocationCheck(s)) = engine.state(id) else { panic!("location state") };
    assert_eq!(s.distance_meters, Some(0.0));
    assert_eq!(engine.events().last().unwrap().payload["withinRadius"], json!(true));
}

#[test]
fn test_hints_respect_cooldown_and_accrue_penalties() {
    let (mut engine, clock) = session();
    let id = "hint-container";
    assert_eq!(engine.reveal_hint(id, "h1"), Some(EventType::Revealed));
    assert_eq!(engine.reveal_hint(id, "h1"), None);
    assert_eq!(engine.reveal_hint(id, "h2"), None);
    clock.advance(Duration::seconds(10));
    assert_eq!(engine.reveal_hint(id, "h2"), Some(EventType::Revealed));
    let Some(RuntimeState::HintContainer(s)) = engine.state(id) else { panic!("hint state") };
    assert_eq!(s.hints_available, 0);
    assert_eq!(s.total_penalty_time, 30);
    assert_eq!(s.revealed_hint_ids, vec!["h1".to_string(), "h2".to_string()]);
    assert_eq!(engine.events().len(), 2);
}

#[test]
fn test_custom_hints_need_a_facilitator() {
    let (mut engine, _) = session();
    assert_eq!(engine.send_custom_hint("hint-single", "Titta upp"), None);
    engine.set_active_role(Role::Host);
    assert_eq!(engine.send_custom_hint("hint-single", "Titta upp"), Some(EventType::Revealed));
    assert_eq!(engine.events().last().unwrap().payload["hintId"], json!("custom-1"));
}

#[test]
fn test_prop_confirmation_lifecycle() {
    let (mut engine, clock) = session();
    let id = "prop-check";
    assert_eq!(engine.reject_prop(id, None), None);
    assert_eq!(engine.request_prop(id), Some(EventType::StateUpdated));
    assert_eq!(engine.request_prop(id), None);
    assert_eq!(engine.reject_prop(id, Some("fel mynt")), Some(EventType::Failed));
    assert_eq!(engine.request_prop(id), Some(EventType::StateUpdated));
    clock.advance(Duration::seconds(5));
    assert_eq!(engine.expire_prop(id), Some(EventType::Failed));
    engine.set_active_role(Role::Host);
    assert_eq!(engine.confirm_prop(id, Some("ok")), Some(EventType::Solved));
    let Some(RuntimeState::PropConfirmation(s)) = engine.state(id) else { panic!("prop state") };
    assert_eq!(s.status, PropStatus::Confirmed);
    assert_eq!(s.confirmed_by.as_deref(), Some("host"));
}

#[test]
fn test_prop_timeout_waits_for_deadline() {
    let (mut engine, clock) = session();
    let id = "prop-check";
    let cfg = json!({
        "propId": "prop-1",
        "propDescription": "Ett gammalt mynt",
        "instructions": "Hitta myntet.",
        "requirePhoto": true,
        "timeoutSeconds": 60
    });
    engine.set_config(id, &cfg, true).unwrap();
    engine.request_prop(id);
    assert_eq!(engine.confirm_prop(id, None), None);
    assert_eq!(engine.expire_prop(id), None);
    clock.advance(Duration::seconds(60));
    assert_eq!(engine.expire_prop(id), Some(EventType::Failed));
}

#[test]
fn test_audio_ack_only_when_required() {
    let (mut engine, _) = session();
    assert_eq!(engine.acknowledge_audio("audio-clue"), None);
    assert_eq!(engine.acknowledge_audio("audio-activation"), Some(EventType::Solved));
    assert_eq!(engine.acknowledge_audio("audio-activation"), None);
}

#[test]
fn test_sound_level_clamps_and_triggers_once() {
    let (mut engine, clock) = session();
    let id = "sound-level-clap";
    assert_eq!(engine.report_sound_level(id, 150), Some(EventType::StateUpdated));
    clock.advance(Duration::milliseconds(1500));
    engine.report_sound_level(id, 80);
    let Some(RuntimeState::SoundLevel(s)) = engine.state(id) else { panic!("sound state") };
    assert_eq!((s.current_level, s.peak_level), (80, 100));
    assert_eq!(s.sustained_seconds, 1.5);
    assert_eq!(engine.trigger_sound_level(id), Some(EventType::Solved));
    assert_eq!(engine.trigger_sound_level(id), None);
    assert_eq!(engine.report_sound_level(id, 10), None);
}

#[test]
fn test_clock_going_back_does_not_rewind_session_time() {
    let (mut engine, clock) = session();
    let id = "sound-level-clap";
    clock.advance(Duration::seconds(20));
    engine.report_sound_level(id, 100);
    clock.advance(Duration::seconds(-10));
    engine.report_sound_level(id, 100);

    let Some(RuntimeState::SoundLevel(s)) = engine.state(id) else { panic!("sound state") };
    assert_eq!(s.sustained_seconds, 0.0);
    let events = engine.events();
    let last = events.last().unwrap();
    assert_eq!(s.last_sample_at, Some(last.timestamp));

    clock.advance(Duration::seconds(12));
    engine.report_sound_level(id, 100);
    let Some(RuntimeState::SoundLevel(s)) = engine.state(id) else { panic!("sound state") };
    assert_eq!(s.sustained_seconds, 2.0);
    assert!(engine.events().windows(2).all(|w| w[0].timestamp <= w[1].timestamp));
}

#[test]
fn test_replay_markers_are_typed_and_deletable() {
    let (mut engine, _) = session();
    let id = "replay-marker";
    let marker = NewReplayMarker { marker_type: MarkerType::Bookmark,
                                   timestamp_seconds: 12.5,
                                   label: "Här".to_string(),
                                   note: None };
    assert_eq!(engine.add_replay_marker(id, marker), Some(EventType::Revealed));
    let marker_id = engine.events()[0].payload["markerId"].as_str().unwrap().to_string();
    assert!(marker_id.starts_with("marker-"));
    assert_eq!(engine.delete_replay_marker(id, &marker_id), Some(EventType::Custom));
    assert_eq!(engine.delete_replay_marker(id, &marker_id), None);
}

#[test]
fn test_checklist_completes_when_all_toggles_pass() {
    let (mut engine, _) = session();
    let id = "checklist";
    assert_eq!(engine.submit_check(id, "c1", CheckAnswer::Toggle(false)), Some(EventType::StateUpdated));
    assert_eq!(engine.submit_check(id, "c1", CheckAnswer::Toggle(true)), Some(EventType::StateUpdated));
    assert_eq!(engine.submit_check(id, "c3", CheckAnswer::Toggle(true)), None);
    assert_eq!(engine.submit_check(id, "c2", CheckAnswer::Toggle(true)), Some(EventType::Solved));
    let Some(RuntimeState::MultiAnswer(s)) = engine.state(id) else { panic!("multi state") };
    assert_eq!((s.passed_count, s.total_count), (2, 2));
}

#[test]
fn test_force_solve_marks_fallback() {
    let (mut engine, _) = session();
    assert_eq!(engine.force_solve("tile-puzzle-3x3"), Some(EventType::Solved));
    assert_eq!(engine.events()[0].payload["via"], json!("fallback"));
    assert_eq!(engine.force_solve("tile-puzzle-3x3"), None);
    assert_eq!(engine.force_solve("learn-card"), None);
    assert_eq!(engine.is_solved("tile-puzzle-3x3"), Some(true));
}

#[test]
fn test_reset_scenario_restores_defaults() {
    let (mut engine, _) = session();
    let id = "riddle-text";
    engine.set_config(id,
                      &json!({ "promptText": "?", "acceptedAnswers": ["x"], "normalizeMode": "strict" }),
                      false)
          .unwrap();
    engine.submit_riddle_answer(id, "x");
    assert_eq!(engine.reset_scenario(id), Some(EventType::Reset));

    let scenario = engine.catalog().get(id).unwrap().clone();
    assert_eq!(engine.config(id).cloned(), Some(scenario.parse_config(None).unwrap()));
    let initial = engine.initial_for(id, None).unwrap();
    assert_eq!(engine.state(id).cloned(), Some(initial));
    assert_eq!(engine.events().last().unwrap().event_type, EventType::Reset);
}

#[test]
fn test_events_carry_session_role_and_artifact_type() {
    let (mut engine, _) = session();
    engine.set_active_role(Role::Admin);
    engine.enter_keypad_code("keypad-4-digits", "1234");
    let last = engine.events().last().cloned().unwrap();
    assert_eq!(last.session_id, engine.session_id());
    assert_eq!(last.role, Role::Admin);
    assert_eq!(last.scenario_id, "keypad-4-digits");
    assert_eq!(last.payload["artifactType"], json!("keypad"));
    assert_eq!(serde_json::to_value(&last).unwrap()["type"], json!("solved"));
}
