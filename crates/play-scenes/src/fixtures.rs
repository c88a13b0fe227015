//! Grafo de escenas del prototipo: un mapa y dos salas.
use indexmap::IndexMap;

use crate::types::{HotspotTarget, Participant, Scene, SceneHotspot, TriggerScope};

pub const START_SCENE: &str = "map";

fn to_scene(key: &str) -> HotspotTarget {
    HotspotTarget::Scene { scene_key: key.to_string() }
}

fn open(scenario_id: &str) -> HotspotTarget {
    HotspotTarget::OpenArtifact { scenario_id: scenario_id.to_string() }
}

pub fn default_scenes() -> IndexMap<String, Scene> {
    let scenes = vec![Scene { key: "map".into(),
                              label: "Karta".into(),
                              image_url: "/scenes/map.png".into(),
                              hotspots: vec![SceneHotspot::new("to-room-a", (30.0, 40.0, 6.0), "Rum A", to_scene("room_a")),
                                             SceneHotspot::new("to-room-b", (70.0, 40.0, 6.0), "Rum B", to_scene("room_b")),] },
                      Scene { key: "room_a".into(),
                              label: "Rum A".into(),
                              image_url: "/scenes/room_a.png".into(),
                              hotspots: vec![SceneHotspot::new("safe", (55.0, 60.0, 5.0), "Kassaskåp", open("keypad-4-digits")).enabled_when(&["search"]),
                                             SceneHotspot::new("back", (5.0, 90.0, 4.0), "Tillbaka", to_scene("map")),] },
                      Scene { key: "room_b".into(),
                              label: "Rum B".into(),
                              image_url: "/scenes/room_b.png".into(),
                              hotspots: vec![SceneHotspot::new("note", (40.0, 30.0, 5.0), "Lapp", open("riddle-text")),
                                             SceneHotspot::new("switch",
                                                               (80.0, 20.0, 4.0),
                                                               "Strömbrytare",
                                                               HotspotTarget::FireTrigger { trigger_ids: vec!["lights_off".into()],
                                                                                            scope: TriggerScope::Session }).visible_when(&["search", "finale"]),
                                             SceneHotspot::new("back", (5.0, 90.0, 4.0), "Tillbaka", to_scene("map")),] },];
    scenes.into_iter().map(|s| (s.key.clone(), s)).collect()
}

pub fn default_participants() -> IndexMap<String, Participant> {
    [("p1", "Anna"), ("p2", "Erik"), ("p3", "Maria")].into_iter()
                                                      .map(|(id, name)| (id.to_string(), Participant::new(id, name, START_SCENE)))
                                                      .collect()
}
