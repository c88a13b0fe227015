use chrono::{DateTime, Utc};
use play_domain::config::{CellValue, LogicGridCell};
use play_domain::ArtifactConfig;

use super::{PropStatus, RuntimeState, Tile};

/// Resuelto cuando cada ficha está en su posición correcta.
pub fn is_tile_puzzle_solved(tiles: &[Tile]) -> bool {
    !tiles.is_empty() && tiles.iter().all(|t| t.current_position == t.correct_position)
}

/// Cada celda de la solución debe estar marcada con su valor. Una celda
/// `unknown` de la solución también acepta la ausencia de marca.
pub fn is_logic_grid_solved(cells: &[LogicGridCell], solution: &[LogicGridCell]) -> bool {
    !solution.is_empty()
    && solution.iter().all(|required| {
                          let marked = cells.iter()
                                            .find(|c| c.same_position(required))
                                            .map(|c| c.value)
                                            .unwrap_or(CellValue::Unknown);
                          marked == required.value
                      })
}

/// Marca el estado como resuelto dejando contadores coherentes (fallback del
/// host). Devuelve `false` si el tipo no se resuelve, si ya estaba resuelto o
/// si configuración y estado no son del mismo tipo.
pub fn force_solve(state: &mut RuntimeState, config: &ArtifactConfig, now: DateTime<Utc>) -> bool {
    if state.is_solved() {
        return false;
    }
    match (config, state) {
        (ArtifactConfig::Keypad(_), RuntimeState::Keypad(s)) => {
            s.is_solved = true;
            s.is_locked = false;
        }
        (ArtifactConfig::Riddle(cfg), RuntimeState::Riddle(s)) => {
            s.is_correct = true;
            s.correct_answer = cfg.accepted_answers.first().cloned();
        }
        (ArtifactConfig::Cipher(cfg), RuntimeState::Cipher(s)) => {
            s.is_decoded = true;
            s.current_guess = cfg.expected_plaintext.clone();
            s.decoded_at = Some(now);
        }
        (ArtifactConfig::Hotspot(cfg), RuntimeState::Hotspot(s)) => {
            for zone in cfg.hotspots.iter().filter(|z| z.is_required()) {
                if !s.found_hotspot_ids.contains(&zone.id) {
                    s.found_hotspot_ids.push(zone.id.clone());
                }
            }
            s.found_count = s.found_hotspot_ids.len().max(s.required_count);
            s.is_complete = true;
        }
        (ArtifactConfig::TilePuzzle(_), RuntimeState::TilePuzzle(s)) => {
            for tile in s.tiles.iter_mut() {
                tile.current_position = tile.correct_position;
            }
            s.is_complete = true;
            s.completed_at = Some(now);
        }
        (ArtifactConfig::LogicGrid(cfg), RuntimeState::LogicGrid(s)) => {
            s.cells = cfg.solution.clone();
            s.is_solved = true;
            s.solved_at = Some(now);
        }
        (ArtifactConfig::Counter(_), RuntimeState::Counter(s)) => {
            s.current_value = s.current_value.max(s.target);
            s.is_complete = true;
        }
        (ArtifactConfig::ScanGate(_), RuntimeState::ScanGate(s)) => {
            s.is_verified = true;
            s.verified_at = Some(now);
        }
        (ArtifactConfig::LocationCheck(_), RuntimeState::LocationCheck(s)) => {
            s.is_verified = true;
            s.verified_at = Some(now);
        }
        (ArtifactConfig::PropConfirmation(_), RuntimeState::PropConfirmation(s)) => {
            s.status = PropStatus::Confirmed;
            s.confirmed_at = Some(now);
        }
        (ArtifactConfig::Audio(_), RuntimeState::Audio(s)) => {
            s.acknowledged = true;
            s.acknowledged_at = Some(now);
        }
        (ArtifactConfig::SoundLevel(_), RuntimeState::SoundLevel(s)) => {
            s.is_triggered = true;
            s.triggered_at = Some(now);
        }
        (ArtifactConfig::MultiAnswer(_), RuntimeState::MultiAnswer(s)) => {
            s.passed_count = s.total_count;
            s.is_complete = true;
        }
        _ => return false,
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::TilePosition;

    #[test]
    fn logic_grid_needs_every_solution_cell() {
        let solution = vec![LogicGridCell::new("person", 0, "pet", 0, CellValue::Yes),
                            LogicGridCell::new("person", 1, "pet", 1, CellValue::No)];
        let partial = vec![LogicGridCell::new("person", 0, "pet", 0, CellValue::Yes)];
        assert!(!is_logic_grid_solved(&partial, &solution));
        let mut full = partial.clone();
        full.push(LogicGridCell::new("person", 1, "pet", 1, CellValue::No));
        assert!(is_logic_grid_solved(&full, &solution));
    }

    #[test]
    fn tile_puzzle_checks_positions() {
        let p = TilePosition::new(0, 0);
        let q = TilePosition::new(0, 1);
        let tiles = vec![Tile { id: "tile-0".into(),
                                correct_position: p,
                                current_position: q },
                         Tile { id: "tile-1".into(),
                                correct_position: q,
                                current_position: p }];
        assert!(!is_tile_puzzle_solved(&tiles));
        assert!(!is_tile_puzzle_solved(&[]));
    }
}
