use chrono::{DateTime, Utc};
use play_domain::config::{CounterConfig, HintConfig, TilePuzzleConfig};
use play_domain::ArtifactConfig;
use rand::seq::SliceRandom;
use rand::RngCore;
use std::collections::BTreeMap;

use super::*;

/// Construye el estado inicial de un artefacto a partir de su configuración
/// ya validada.
///
/// La única fuente de azar es la mezcla del tile puzzle; se inyecta para que
/// las pruebas sean reproducibles.
pub fn initial_state<R>(config: &ArtifactConfig, rng: &mut R, now: DateTime<Utc>) -> RuntimeState
    where R: RngCore + ?Sized
{
    match config {
        ArtifactConfig::Keypad(_) => RuntimeState::Keypad(KeypadState::default()),
        ArtifactConfig::Riddle(_) => RuntimeState::Riddle(RiddleState::default()),
        ArtifactConfig::Cipher(_) => RuntimeState::Cipher(CipherState::default()),
        ArtifactConfig::Hotspot(cfg) => {
            // sin zonas requeridas no hay nada que buscar
            let required = cfg.required_count();
            RuntimeState::Hotspot(HotspotState { found_hotspot_ids: Vec::new(),
                                                 found_count: 0,
                                                 required_count: required,
                                                 is_complete: required == 0 })
        }
        ArtifactConfig::TilePuzzle(cfg) => RuntimeState::TilePuzzle(tile_puzzle(cfg, rng, now)),
        ArtifactConfig::LogicGrid(cfg) => {
            // las pistas marcadas `revealed` arrancan visibles
            let revealed = cfg.clues
                              .iter()
                              .filter(|c| c.revealed.unwrap_or(false))
                              .map(|c| c.id.clone())
                              .collect();
            RuntimeState::LogicGrid(LogicGridState { cells: Vec::new(),
                                                     revealed_clue_ids: revealed,
                                                     is_solved: false,
                                                     move_count: 0,
                                                     started_at: now,
                                                     solved_at: None })
        }
        ArtifactConfig::Counter(cfg) => RuntimeState::Counter(counter(cfg)),
        ArtifactConfig::ScanGate(_) => RuntimeState::ScanGate(ScanGateState::default()),
        ArtifactConfig::LocationCheck(_) => RuntimeState::LocationCheck(LocationCheckState::default()),
        ArtifactConfig::HintContainer(cfg) => RuntimeState::HintContainer(hints(cfg, now)),
        ArtifactConfig::PropConfirmation(_) => RuntimeState::PropConfirmation(PropConfirmationState::default()),
        ArtifactConfig::Audio(_) => RuntimeState::Audio(AudioState::default()),
        ArtifactConfig::SoundLevel(_) => RuntimeState::SoundLevel(SoundLevelState::default()),
        ArtifactConfig::ReplayMarker(_) => RuntimeState::ReplayMarker(ReplayMarkerState::default()),
        ArtifactConfig::MultiAnswer(cfg) => RuntimeState::MultiAnswer(MultiAnswerState { results: Vec::new(),
                                                                                       passed_count: 0,
                                                                                       total_count: cfg.checks.len(),
                                                                                       is_complete: false }),
        ArtifactConfig::Card(_) => RuntimeState::Card,
        ArtifactConfig::Document(_) => RuntimeState::Document,
        ArtifactConfig::Image(_) => RuntimeState::Image,
        ArtifactConfig::Empty(_) => RuntimeState::EmptyArtifact,
    }
}

/// Enumera la grilla fila por fila. Con `shuffleOnStart` sólo se permutan las
/// posiciones actuales, así que siempre existe solución.
fn tile_puzzle<R>(cfg: &TilePuzzleConfig, rng: &mut R, now: DateTime<Utc>) -> TilePuzzleState
    where R: RngCore + ?Sized
{
    let (rows, cols) = cfg.grid_size.dimensions();
    let positions: Vec<TilePosition> = (0..rows).flat_map(|row| (0..cols).map(move |col| TilePosition::new(row, col)))
                                                .collect();
    let mut current = positions.clone();
    if cfg.shuffle_on_start.unwrap_or(false) {
        current.shuffle(rng);
        // una mezcla que deja todo en su lugar no es un puzzle
        if current == positions && current.len() > 1 {
            current.swap(0, 1);
        }
    }
    let tiles: Vec<Tile> = positions.iter()
                                    .zip(current)
                                    .enumerate()
                                    .map(|(i, (correct, cur))| Tile { id: format!("tile-{i}"),
                                                                      correct_position: *correct,
                                                                      current_position: cur })
                                    .collect();
    let is_complete = is_tile_puzzle_solved(&tiles);
    TilePuzzleState { tiles,
                      rows,
                      cols,
                      is_complete,
                      move_count: 0,
                      started_at: now,
                      completed_at: if is_complete { Some(now) } else { None } }
}

fn counter(cfg: &CounterConfig) -> CounterState {
    let current = cfg.initial_value.unwrap_or(0);
    CounterState { key: cfg.key.clone(),
                   current_value: current,
                   target: cfg.target,
                   is_complete: current >= cfg.target,
                   role_values: if cfg.per_role.unwrap_or(false) { Some(BTreeMap::new()) } else { None } }
}

fn hints(cfg: &HintConfig, now: DateTime<Utc>) -> HintState {
    HintState { revealed_hint_ids: Vec::new(),
                last_hint_time: None,
                cooldown_remaining: 0,
                hints_available: cfg.budget(),
                total_penalty_time: 0,
                total_penalty_points: 0,
                started_at: now }
}

#[cfg(test)]
mod tests {
    use super::*;
    use play_domain::{validate, ArtifactType};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use serde_json::json;

    fn tile_config(grid: &str, shuffle: bool) -> ArtifactConfig {
        validate(ArtifactType::TilePuzzle,
                 &json!({ "imageArtifactId": "img", "gridSize": grid, "shuffleOnStart": shuffle })).unwrap()
    }

    #[test]
    fn unshuffled_tiles_start_solved() {
        let mut rng = StdRng::seed_from_u64(1);
        let state = initial_state(&tile_config("3x2", false), &mut rng, Utc::now());
        let RuntimeState::TilePuzzle(tiles) = state else { panic!("wrong kind") };
        assert_eq!((tiles.rows, tiles.cols), (3, 2));
        assert_eq!(tiles.tiles.len(), 6);
        assert_eq!(tiles.tiles[5].id, "tile-5");
        assert!(tiles.is_complete);
    }

    #[test]
    fn shuffled_two_by_two_is_never_solved() {
        for seed in 0..64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let state = initial_state(&tile_config("2x2", true), &mut rng, Utc::now());
            assert!(!state.is_solved(), "seed {seed} produced a solved grid");
        }
    }

    #[test]
    fn counter_with_initial_value_at_target_is_complete() {
        let cfg = validate(ArtifactType::Counter, &json!({ "key": "k", "target": 2, "initialValue": 2 })).unwrap();
        let state = initial_state(&cfg, &mut StdRng::seed_from_u64(0), Utc::now());
        assert!(state.is_solved());
    }
}
