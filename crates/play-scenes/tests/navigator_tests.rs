use chrono::Duration;
use play_core::{Clock, ManualClock, ScenarioCatalog, SharedClock};
use play_domain::Role;
use play_scenes::{HotspotOutcome, MoveOrigin, NavigatorError, NavigatorOptions, SceneEventKind, SceneNavigator, TriggerScope};
use pretty_assertions::assert_eq;
use std::sync::Arc;

fn navigator_with_clock() -> (SceneNavigator, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::at_epoch());
    let shared: SharedClock = clock.clone();
    let options = NavigatorOptions { clock: Some(shared),
                                     ..NavigatorOptions::default() };
    (SceneNavigator::new(Arc::new(ScenarioCatalog::builtin()), options), clock)
}

fn kinds(nav: &SceneNavigator) -> Vec<SceneEventKind> {
    nav.events().iter().map(|e| e.kind).collect()
}

#[test]
fn test_gated_click_logs_only_the_click() {
    let (mut nav, _) = navigator_with_clock();
    nav.move_participant_to_scene("p1", "room_a", MoveOrigin::Host);
    let before = nav.events().len();

    let outcome = nav.click_hotspot("room_a", "safe");

    assert_eq!(outcome, HotspotOutcome::Gated);
    let events = nav.events();
    assert_eq!(events.len(), before + 1);
    assert_eq!(events[before].kind, SceneEventKind::HotspotClick);
    assert_eq!(nav.open_artifact_scenario_id(), None);
    assert_eq!(nav.participant("p1").unwrap().current_scene_key, "room_a");
}

#[test]
fn test_enabled_click_opens_artifact() {
    let (mut nav, _) = navigator_with_clock();
    nav.set_phase("search");
    nav.move_participant_to_scene("p1", "room_a", MoveOrigin::Host);

    let outcome = nav.click_hotspot("room_a", "safe");

    assert_eq!(outcome, HotspotOutcome::OpenedArtifact("keypad-4-digits".into()));
    assert_eq!(nav.open_artifact_scenario_id(), Some("keypad-4-digits"));
    let tail: Vec<_> = kinds(&nav).into_iter().rev().take(2).collect();
    assert_eq!(tail, vec![SceneEventKind::OpenArtifact, SceneEventKind::HotspotClick]);
}

#[test]
fn test_open_artifact_last_write_wins() {
    let (mut nav, _) = navigator_with_clock();
    nav.set_phase("search");
    nav.move_participant_to_scene("p1", "room_a", MoveOrigin::Host);
    nav.click_hotspot("room_a", "safe");
    nav.move_participant_to_scene("p1", "room_b", MoveOrigin::Host);

    nav.click_hotspot("room_b", "note");

    assert_eq!(nav.open_artifact_scenario_id(), Some("riddle-text"));
    let last = nav.events().pop().unwrap();
    assert_eq!(last.payload["previous"], "keypad-4-digits");
}

#[test]
fn test_transition_moves_active_participant_and_stamps_time() {
    let (mut nav, clock) = navigator_with_clock();
    clock.advance(Duration::seconds(5));

    let outcome = nav.click_hotspot("map", "to-room-b");

    assert_eq!(outcome,
               HotspotOutcome::Moved { participant_id: "p1".into(),
                                       scene_key: "room_b".into() });
    let p1 = nav.participant("p1").unwrap();
    assert_eq!(p1.current_scene_key, "room_b");
    assert_eq!(p1.last_scene_changed_at, Some(clock.now()));
    assert_eq!(nav.participant("p2").unwrap().current_scene_key, "map");

    let moved = nav.events().pop().unwrap();
    assert_eq!(moved.kind, SceneEventKind::ParticipantMoved);
    assert_eq!(moved.role, Role::Participant);
    assert_eq!(moved.payload["origin"], "hotspot");
    assert_eq!(moved.payload["from"], "map");
}

#[test]
fn test_trigger_is_delivered_to_subscribers() {
    let (mut nav, _) = navigator_with_clock();
    let rx = nav.subscribe_triggers();
    nav.set_phase("finale");
    nav.move_participant_to_scene("p2", "room_b", MoveOrigin::Host);
    nav.set_active_participant("p2");

    let outcome = nav.click_hotspot("room_b", "switch");

    let HotspotOutcome::TriggerFired(fired) = outcome else { panic!("expected trigger") };
    assert_eq!(fired.ids, vec!["lights_off".to_string()]);
    assert_eq!(fired.scope, TriggerScope::Session);
    assert_eq!(fired.participant_id.as_deref(), Some("p2"));
    assert_eq!(rx.try_recv().unwrap(), fired);

    let last = nav.events().pop().unwrap();
    assert_eq!(last.kind, SceneEventKind::TriggerFire);
    assert_eq!(last.payload["scope"], "session");
}

#[test]
fn test_hidden_trigger_is_gated_in_lobby() {
    let (mut nav, _) = navigator_with_clock();
    let rx = nav.subscribe_triggers();
    nav.move_participant_to_scene("p1", "room_b", MoveOrigin::Host);

    assert_eq!(nav.click_hotspot("room_b", "switch"), HotspotOutcome::Gated);
    assert!(rx.try_recv().is_err());
    assert!(nav.visible_hotspots("room_b").iter().all(|h| h.id != "switch"));
    assert!(!nav.is_hotspot_enabled("room_b", "switch"));
}

#[test]
fn test_unknown_hotspot_still_logs_click() {
    let (mut nav, _) = navigator_with_clock();

    let outcome = nav.click_hotspot("map", "nowhere");
    assert_eq!(outcome,
               HotspotOutcome::NotFound(NavigatorError::HotspotNotFound { scene_key: "map".into(),
                                                                          hotspot_id: "nowhere".into() }));
    assert_eq!(nav.click_hotspot("attic", "door"),
               HotspotOutcome::NotFound(NavigatorError::SceneNotFound("attic".into())));
    assert_eq!(kinds(&nav), vec![SceneEventKind::HotspotClick, SceneEventKind::HotspotClick]);
}

#[test]
fn test_host_moves_bypass_gating() {
    let (mut nav, _) = navigator_with_clock();

    assert!(nav.move_all_to_scene("room_a"));
    assert!(nav.participants().all(|p| p.current_scene_key == "room_a"));
    let ev = nav.events().pop().unwrap();
    assert_eq!(ev.kind, SceneEventKind::ParticipantsMoved);
    assert_eq!(ev.role, Role::Host);
    assert_eq!(ev.payload["participantIds"].as_array().unwrap().len(), 3);

    // mover a la misma escena también se registra
    assert!(nav.move_participant_to_scene("p3", "room_a", MoveOrigin::Host));
    assert_eq!(nav.events().len(), 2);
}

#[test]
fn test_unknown_ids_leave_log_untouched() {
    let (mut nav, _) = navigator_with_clock();

    assert!(!nav.move_participant_to_scene("p9", "room_a", MoveOrigin::Host));
    assert!(!nav.move_participant_to_scene("p1", "attic", MoveOrigin::Host));
    assert!(!nav.move_all_to_scene("attic"));
    assert!(!nav.set_active_participant("p9"));
    assert!(!nav.set_active_participant("p1"));
    assert!(!nav.close_artifact());
    assert!(nav.events().is_empty());
}

#[test]
fn test_close_artifact_logs_only_on_effect() {
    let (mut nav, _) = navigator_with_clock();
    nav.move_participant_to_scene("p1", "room_b", MoveOrigin::Host);
    nav.click_hotspot("room_b", "note");

    assert!(nav.close_artifact());
    assert!(!nav.close_artifact());
    assert_eq!(nav.open_artifact_scenario_id(), None);
    assert_eq!(kinds(&nav).iter().filter(|k| **k == SceneEventKind::CloseArtifact).count(), 1);
}

#[test]
fn test_reset_restores_start_and_keeps_ids_growing() {
    let (mut nav, _) = navigator_with_clock();
    nav.set_phase("search");
    nav.move_all_to_scene("room_b");
    nav.set_active_participant("p3");
    nav.click_hotspot("room_b", "note");
    let last_id = nav.events().last().unwrap().id;

    let reset = nav.reset();

    assert_eq!(reset.kind, SceneEventKind::Reset);
    assert_eq!(reset.id, last_id + 1);
    assert_eq!(nav.events(), vec![reset]);
    assert_eq!(nav.phase(), "lobby");
    assert_eq!(nav.active_participant_id(), Some("p1"));
    assert_eq!(nav.open_artifact_scenario_id(), None);
    assert!(nav.participants().all(|p| p.current_scene_key == "map" && p.last_scene_changed_at.is_none()));
}

#[test]
fn test_snapshot_exposes_read_surface() {
    let (mut nav, _) = navigator_with_clock();
    nav.set_phase("search");

    let snap = nav.snapshot();
    assert_eq!(snap.session_id, nav.session_id());
    assert_eq!(snap.scenes.len(), 3);
    assert_eq!(snap.participants.len(), 3);

    let json = snap.to_json();
    assert_eq!(json["phase"], "search");
    assert_eq!(json["activeParticipantId"], "p1");
    assert_eq!(json["events"][0]["kind"], "phase_changed");
    assert!(json["openArtifactScenarioId"].is_null());
}

#[test]
fn test_event_ids_and_timestamps_are_monotonic() {
    let (mut nav, clock) = navigator_with_clock();
    nav.click_hotspot("map", "to-room-a");
    clock.advance(Duration::seconds(-10));
    nav.click_hotspot("room_a", "back");
    clock.advance(Duration::seconds(30));
    nav.set_phase("finale");

    let events = nav.events();
    for pair in events.windows(2) {
        assert!(pair[0].id < pair[1].id);
        assert!(pair[0].timestamp <= pair[1].timestamp);
    }
    assert!(events.iter().all(|e| e.session_id == nav.session_id()));
}
