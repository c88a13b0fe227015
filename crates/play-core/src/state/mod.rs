//! Estado de ejecución por artefacto.
//!
//! `RuntimeState` es una unión cerrada etiquetada por tipo de artefacto: cada
//! variante sólo puede llevar los campos de su tipo. Serializa como
//! `{ "kind": "...", "state": { ... } }`.
mod initial;
mod solve;
mod variants;

use play_domain::ArtifactType;
use serde::{Deserialize, Serialize};

pub use initial::initial_state;
pub use solve::{force_solve, is_logic_grid_solved, is_tile_puzzle_solved};
pub use variants::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "state", rename_all = "snake_case")]
pub enum RuntimeState {
    Keypad(KeypadState),
    Riddle(RiddleState),
    Cipher(CipherState),
    Hotspot(HotspotState),
    TilePuzzle(TilePuzzleState),
    LogicGrid(LogicGridState),
    Counter(CounterState),
    #[serde(rename = "qr_gate")]
    ScanGate(ScanGateState),
    LocationCheck(LocationCheckState),
    HintContainer(HintState),
    PropConfirmation(PropConfirmationState),
    Audio(AudioState),
    SoundLevel(SoundLevelState),
    ReplayMarker(ReplayMarkerState),
    MultiAnswer(MultiAnswerState),
    Card,
    Document,
    Image,
    EmptyArtifact,
}

impl RuntimeState {
    pub fn kind(&self) -> ArtifactType {
        match self {
            RuntimeState::Keypad(_) => ArtifactType::Keypad,
            RuntimeState::Riddle(_) => ArtifactType::Riddle,
            RuntimeState::Cipher(_) => ArtifactType::Cipher,
            RuntimeState::Hotspot(_) => ArtifactType::Hotspot,
            RuntimeState::TilePuzzle(_) => ArtifactType::TilePuzzle,
            RuntimeState::LogicGrid(_) => ArtifactType::LogicGrid,
            RuntimeState::Counter(_) => ArtifactType::Counter,
            RuntimeState::ScanGate(_) => ArtifactType::ScanGate,
            RuntimeState::LocationCheck(_) => ArtifactType::LocationCheck,
            RuntimeState::HintContainer(_) => ArtifactType::HintContainer,
            RuntimeState::PropConfirmation(_) => ArtifactType::PropConfirmation,
            RuntimeState::Audio(_) => ArtifactType::Audio,
            RuntimeState::SoundLevel(_) => ArtifactType::SoundLevel,
            RuntimeState::ReplayMarker(_) => ArtifactType::ReplayMarker,
            RuntimeState::MultiAnswer(_) => ArtifactType::MultiAnswer,
            RuntimeState::Card => ArtifactType::Card,
            RuntimeState::Document => ArtifactType::Document,
            RuntimeState::Image => ArtifactType::Image,
            RuntimeState::EmptyArtifact => ArtifactType::EmptyArtifact,
        }
    }

    /// Predicado "resuelto" de cada tipo. hint, replay y los estáticos nunca
    /// se resuelven.
    pub fn is_solved(&self) -> bool {
        match self {
            RuntimeState::Keypad(s) => s.is_solved,
            RuntimeState::Riddle(s) => s.is_correct,
            RuntimeState::Cipher(s) => s.is_decoded,
            RuntimeState::Hotspot(s) => s.is_complete,
            RuntimeState::TilePuzzle(s) => s.is_complete,
            RuntimeState::LogicGrid(s) => s.is_solved,
            RuntimeState::Counter(s) => s.is_complete,
            RuntimeState::ScanGate(s) => s.is_verified,
            RuntimeState::LocationCheck(s) => s.is_verified,
            RuntimeState::PropConfirmation(s) => s.status == PropStatus::Confirmed,
            RuntimeState::Audio(s) => s.acknowledged,
            RuntimeState::SoundLevel(s) => s.is_triggered,
            RuntimeState::MultiAnswer(s) => s.is_complete,
            RuntimeState::HintContainer(_)
            | RuntimeState::ReplayMarker(_)
            | RuntimeState::Card
            | RuntimeState::Document
            | RuntimeState::Image
            | RuntimeState::EmptyArtifact => false,
        }
    }

    /// Si el tipo tiene noción de resolución.
    pub fn is_solvable(&self) -> bool {
        !matches!(self,
                  RuntimeState::HintContainer(_)
                  | RuntimeState::ReplayMarker(_)
                  | RuntimeState::Card
                  | RuntimeState::Document
                  | RuntimeState::Image
                  | RuntimeState::EmptyArtifact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_with_kind_and_state() {
        let s = RuntimeState::Keypad(KeypadState::default());
        assert_eq!(serde_json::to_value(&s).unwrap(),
                   json!({ "kind": "keypad", "state": { "isSolved": false, "attemptsUsed": 0, "isLocked": false } }));
        let gate = RuntimeState::ScanGate(ScanGateState::default());
        assert_eq!(serde_json::to_value(&gate).unwrap()["kind"], json!("qr_gate"));
        assert_eq!(serde_json::to_value(RuntimeState::EmptyArtifact).unwrap(),
                   json!({ "kind": "empty_artifact" }));
    }

    #[test]
    fn kind_names_match_artifact_types() {
        let s = RuntimeState::HintContainer(HintState { revealed_hint_ids: vec![],
                                                        last_hint_time: None,
                                                        cooldown_remaining: 0,
                                                        hints_available: 1,
                                                        total_penalty_time: 0,
                                                        total_penalty_points: 0,
                                                        started_at: chrono::Utc::now() });
        let v = serde_json::to_value(&s).unwrap();
        assert_eq!(v["kind"], json!(s.kind().as_str()));
    }
}
