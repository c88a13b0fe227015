//! Payloads de estado por tipo de artefacto. Cada struct lleva sólo los campos
//! de su tipo; el discriminante vive en `RuntimeState`.
use chrono::{DateTime, Utc};
use play_domain::config::{GeoCoordinate, LogicGridCell, MarkerType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeypadState {
    pub is_solved: bool,
    pub attempts_used: u32,
    pub is_locked: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiddleAttempt {
    pub answer: String,
    pub timestamp: DateTime<Utc>,
    pub correct: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub normalized: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiddleState {
    pub is_correct: bool,
    pub attempts_used: u32,
    pub attempts: Vec<RiddleAttempt>,
    pub show_hint: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correct_answer: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CipherState {
    pub current_guess: String,
    pub is_decoded: bool,
    pub attempts_used: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decoded_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotspotState {
    pub found_hotspot_ids: Vec<String>,
    pub found_count: usize,
    /// Fijado al inicializar.
    pub required_count: usize,
    pub is_complete: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TilePosition {
    pub row: u32,
    pub col: u32,
}

impl TilePosition {
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tile {
    pub id: String,
    pub correct_position: TilePosition,
    pub current_position: TilePosition,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TilePuzzleState {
    pub tiles: Vec<Tile>,
    pub rows: u32,
    pub cols: u32,
    pub is_complete: bool,
    pub move_count: u32,
    pub started_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl TilePuzzleState {
    pub fn tile_at(&self, position: TilePosition) -> Option<&Tile> {
        self.tiles.iter().find(|t| t.current_position == position)
    }

    pub fn in_grid(&self, position: TilePosition) -> bool {
        position.row < self.rows && position.col < self.cols
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogicGridState {
    pub cells: Vec<LogicGridCell>,
    pub revealed_clue_ids: Vec<String>,
    pub is_solved: bool,
    pub move_count: u32,
    pub started_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solved_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CounterState {
    pub key: String,
    pub current_value: u32,
    pub target: u32,
    pub is_complete: bool,
    /// Sólo con `perRole`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_values: Option<BTreeMap<String, u32>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanGateState {
    pub is_verified: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scanned_value: Option<String>,
    pub used_fallback: bool,
    pub scan_attempts: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationCheckState {
    pub is_verified: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_coordinates: Option<GeoCoordinate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_meters: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_check_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HintState {
    pub revealed_hint_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_hint_time: Option<DateTime<Utc>>,
    /// Segundos de cooldown vigentes al momento de la última pista.
    pub cooldown_remaining: u32,
    pub hints_available: u32,
    pub total_penalty_time: u32,
    pub total_penalty_points: u32,
    pub started_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropStatus {
    #[default]
    Pending,
    Waiting,
    Confirmed,
    Rejected,
    Timeout,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropConfirmationState {
    pub status: PropStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requested_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmed_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmed_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioState {
    pub acknowledged: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acknowledged_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoundLevelState {
    pub current_level: u8,
    pub peak_level: u8,
    pub is_triggered: bool,
    /// Segundos seguidos sobre el umbral, medidos entre muestras.
    pub sustained_seconds: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_sample_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub triggered_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplayMarker {
    pub id: String,
    #[serde(rename = "type")]
    pub marker_type: MarkerType,
    pub timestamp_seconds: f64,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Marcador tal como llega del timeline, antes de asignarle id y fecha.
#[derive(Debug, Clone, PartialEq)]
pub struct NewReplayMarker {
    pub marker_type: MarkerType,
    pub timestamp_seconds: f64,
    pub label: String,
    pub note: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReplayMarkerState {
    pub markers: Vec<ReplayMarker>,
}

/// Valor enviado para un check de multi_answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CheckAnswer {
    Toggle(bool),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckResult {
    pub check_id: String,
    pub value: CheckAnswer,
    pub passed: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiAnswerState {
    pub results: Vec<CheckResult>,
    pub passed_count: usize,
    pub total_count: usize,
    pub is_complete: bool,
}
