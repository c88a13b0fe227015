//! Configuraciones de los artefactos tipo puzzle: keypad, riddle, cipher,
//! hotspot, tile_puzzle, logic_grid y counter.
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::checker::Presence::{Optional, Required};
use super::checker::{Bounds, Checker, Object};
use super::common::{check_storage_ref, DisplaySize, NormalizeMode, StorageRef};
use super::ConfigShape;

// ---------------------------------------------------------------------------
// Keypad
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeypadConfig {
    pub correct_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_length: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_attempts: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_attempts: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cooldown_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub haptic_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<DisplaySize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_submit: Option<bool>,
}

impl ConfigShape for KeypadConfig {
    fn check(c: &mut Checker, obj: &Object) {
        if let Some(code) = c.non_empty(obj, "", "correctCode", Required) {
            if !code.chars().all(|ch| ch.is_ascii_digit()) {
                c.issue("correctCode", "correctCode sólo admite dígitos");
            }
        }
        c.int(obj, "", "codeLength", Optional, Bounds::at_least(1.0));
        c.int(obj, "", "maxAttempts", Optional, Bounds::at_least(1.0));
        c.boolean(obj, "", "showAttempts");
        c.int(obj, "", "cooldownMs", Optional, Bounds::at_least(0.0));
        c.boolean(obj, "", "hapticEnabled");
        c.text(obj, "", "title", Optional);
        c.one_of(obj, "", "size", Optional, &DisplaySize::NAMES);
        c.boolean(obj, "", "autoSubmit");
    }
}

// ---------------------------------------------------------------------------
// Riddle
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiddleConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt_artifact_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt_text: Option<String>,
    pub accepted_answers: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub normalize_mode: Option<NormalizeMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_attempts: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_hint_after_attempts: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder_text: Option<String>,
}

impl RiddleConfig {
    pub fn mode(&self) -> NormalizeMode {
        self.normalize_mode.unwrap_or_default()
    }
}

impl ConfigShape for RiddleConfig {
    fn check(c: &mut Checker, obj: &Object) {
        c.text(obj, "", "promptArtifactId", Optional);
        c.text(obj, "", "promptText", Optional);
        c.strings(obj, "", "acceptedAnswers", Required, 1, true, &[]);
        c.one_of(obj, "", "normalizeMode", Optional, &NormalizeMode::NAMES);
        c.int(obj, "", "maxAttempts", Optional, Bounds::at_least(1.0));
        c.int(obj, "", "showHintAfterAttempts", Optional, Bounds::at_least(1.0));
        c.text(obj, "", "hintText", Optional);
        c.text(obj, "", "placeholderText", Optional);
    }
}

// ---------------------------------------------------------------------------
// Cipher
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CipherType {
    Caesar,
    Substitution,
    Atbash,
    Custom,
}

impl CipherType {
    pub const NAMES: [&'static str; 4] = ["caesar", "substitution", "atbash", "custom"];
}

/// Desplazamiento usado cuando un caesar no declara `caesarShift`.
pub const DEFAULT_CAESAR_SHIFT: u8 = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CipherConfig {
    pub cipher_type: CipherType,
    pub encoded_message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_artifact_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caesar_shift: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub substitution_map: Option<BTreeMap<String, String>>,
    pub expected_plaintext: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub normalize_mode: Option<NormalizeMode>,
    #[serde(default, rename = "showDecoderUI", skip_serializing_if = "Option::is_none")]
    pub show_decoder_ui: Option<bool>,
}

impl CipherConfig {
    pub fn mode(&self) -> NormalizeMode {
        self.normalize_mode.unwrap_or_default()
    }

    pub fn shift(&self) -> u8 {
        self.caesar_shift.unwrap_or(DEFAULT_CAESAR_SHIFT)
    }
}

impl ConfigShape for CipherConfig {
    fn check(c: &mut Checker, obj: &Object) {
        let cipher_type = c.one_of(obj, "", "cipherType", Required, &CipherType::NAMES);
        c.non_empty(obj, "", "encodedMessage", Required);
        c.text(obj, "", "keyArtifactId", Optional);
        c.int(obj, "", "caesarShift", Optional, Bounds::between(1.0, 25.0));
        let map_len = c.string_map(obj, "", "substitutionMap", Optional);
        c.non_empty(obj, "", "expectedPlaintext", Required);
        c.one_of(obj, "", "normalizeMode", Optional, &NormalizeMode::NAMES);
        c.boolean(obj, "", "showDecoderUI");
        if cipher_type == Some("substitution") && map_len.is_none() && !obj.contains_key("substitutionMap") {
            c.issue("substitutionMap", "un cifrado substitution requiere substitutionMap");
        }
    }
}

// ---------------------------------------------------------------------------
// Hotspot
// ---------------------------------------------------------------------------

/// Zona clicable sobre una imagen, en porcentaje del tamaño de la imagen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotspotZone {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reveal_artifact_id: Option<String>,
}

impl HotspotZone {
    /// Una zona cuenta como requerida salvo `required: false` explícito.
    pub fn is_required(&self) -> bool {
        self.required != Some(false)
    }
}

pub(crate) fn check_zone(c: &mut Checker, zone: &Object, path: &str) {
    c.non_empty(zone, path, "id", Required);
    c.number(zone, path, "x", Required, Bounds::between(0.0, 100.0));
    c.number(zone, path, "y", Required, Bounds::between(0.0, 100.0));
    c.number(zone, path, "radius", Required, Bounds::between(0.0, 100.0));
    c.text(zone, path, "label", Optional);
    c.boolean(zone, path, "required");
    c.text(zone, path, "revealArtifactId", Optional);
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotspotConfig {
    pub image_artifact_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_ref: Option<StorageRef>,
    pub hotspots: Vec<HotspotZone>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub require_all: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_progress: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_zoom: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub haptic_feedback: Option<bool>,
}

impl HotspotConfig {
    /// Cantidad de hallazgos necesaria para completar.
    ///
    /// `requireAll` todavía no distingue nada: ambas ramas cuentan las zonas
    /// requeridas.
    #[allow(clippy::if_same_then_else)]
    pub fn required_count(&self) -> usize {
        let required = self.hotspots.iter().filter(|h| h.is_required()).count();
        if self.require_all.unwrap_or(false) {
            required
        } else {
            required
        }
    }

    pub fn zone(&self, id: &str) -> Option<&HotspotZone> {
        self.hotspots.iter().find(|h| h.id == id)
    }
}

impl ConfigShape for HotspotConfig {
    fn check(c: &mut Checker, obj: &Object) {
        c.non_empty(obj, "", "imageArtifactId", Required);
        c.url(obj, "", "imageUrl", Optional, true);
        check_storage_ref(c, obj, "", "imageRef");
        c.each_object(obj, "", "hotspots", Required, 0, check_zone);
        c.boolean(obj, "", "requireAll");
        c.boolean(obj, "", "showProgress");
        c.boolean(obj, "", "allowZoom");
        c.boolean(obj, "", "hapticFeedback");
    }
}

// ---------------------------------------------------------------------------
// Tile puzzle
// ---------------------------------------------------------------------------

/// Tamaño de la grilla, leído como `filas x columnas`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileGridSize {
    #[serde(rename = "2x2")]
    TwoByTwo,
    #[serde(rename = "3x3")]
    ThreeByThree,
    #[serde(rename = "4x4")]
    FourByFour,
    #[serde(rename = "3x2")]
    ThreeByTwo,
    #[serde(rename = "4x3")]
    FourByThree,
}

impl TileGridSize {
    pub const NAMES: [&'static str; 5] = ["2x2", "3x3", "4x4", "3x2", "4x3"];
    pub const ALL: [TileGridSize; 5] = [TileGridSize::TwoByTwo,
                                        TileGridSize::ThreeByThree,
                                        TileGridSize::FourByFour,
                                        TileGridSize::ThreeByTwo,
                                        TileGridSize::FourByThree];

    /// `(rows, cols)`
    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            TileGridSize::TwoByTwo => (2, 2),
            TileGridSize::ThreeByThree => (3, 3),
            TileGridSize::FourByFour => (4, 4),
            TileGridSize::ThreeByTwo => (3, 2),
            TileGridSize::FourByThree => (4, 3),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TilePuzzleConfig {
    pub image_artifact_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub grid_size: TileGridSize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snap_to_grid: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shuffle_on_start: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_preview: Option<bool>,
}

impl ConfigShape for TilePuzzleConfig {
    fn check(c: &mut Checker, obj: &Object) {
        c.non_empty(obj, "", "imageArtifactId", Required);
        c.url(obj, "", "imageUrl", Optional, false);
        c.one_of(obj, "", "gridSize", Required, &TileGridSize::NAMES);
        c.boolean(obj, "", "snapToGrid");
        c.boolean(obj, "", "shuffleOnStart");
        c.boolean(obj, "", "showPreview");
    }
}

// ---------------------------------------------------------------------------
// Logic grid
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogicGridCategory {
    pub id: String,
    pub name: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogicGridClue {
    pub id: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revealed: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellValue {
    Yes,
    No,
    Unknown,
}

impl CellValue {
    pub const NAMES: [&'static str; 3] = ["yes", "no", "unknown"];

    /// Ciclo de un click: unknown -> yes -> no -> unknown.
    pub fn cycled(self) -> Self {
        match self {
            CellValue::Unknown => CellValue::Yes,
            CellValue::Yes => CellValue::No,
            CellValue::No => CellValue::Unknown,
        }
    }
}

/// Celda `(rowCategory,rowIndex) x (colCategory,colIndex)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogicGridCell {
    pub row_category_id: String,
    pub row_item_index: u32,
    pub col_category_id: String,
    pub col_item_index: u32,
    pub value: CellValue,
}

impl LogicGridCell {
    pub fn new(row_category_id: &str, row_item_index: u32, col_category_id: &str, col_item_index: u32, value: CellValue) -> Self {
        Self { row_category_id: row_category_id.to_string(),
               row_item_index,
               col_category_id: col_category_id.to_string(),
               col_item_index,
               value }
    }

    /// Misma coordenada, sin mirar el valor.
    pub fn same_position(&self, other: &LogicGridCell) -> bool {
        self.row_category_id == other.row_category_id
        && self.row_item_index == other.row_item_index
        && self.col_category_id == other.col_category_id
        && self.col_item_index == other.col_item_index
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogicGridConfig {
    pub title: String,
    pub categories: Vec<LogicGridCategory>,
    pub clues: Vec<LogicGridClue>,
    pub solution: Vec<LogicGridCell>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progressive_clues: Option<bool>,
}

impl LogicGridConfig {
    pub fn category(&self, id: &str) -> Option<&LogicGridCategory> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn has_clue(&self, id: &str) -> bool {
        self.clues.iter().any(|c| c.id == id)
    }

    /// La celda apunta a categorías e índices existentes.
    pub fn contains_position(&self, cell: &LogicGridCell) -> bool {
        let in_range = |cat: &str, idx: u32| {
            self.category(cat)
                .map(|c| (idx as usize) < c.items.len())
                .unwrap_or(false)
        };
        in_range(&cell.row_category_id, cell.row_item_index) && in_range(&cell.col_category_id, cell.col_item_index)
    }
}

impl ConfigShape for LogicGridConfig {
    fn check(c: &mut Checker, obj: &Object) {
        c.non_empty(obj, "", "title", Required);
        c.each_object(obj, "", "categories", Required, 3, |c, cat, p| {
             c.non_empty(cat, p, "id", Required);
             c.non_empty(cat, p, "name", Required);
             c.strings(cat, p, "items", Required, 2, true, &[]);
         });
        c.each_object(obj, "", "clues", Required, 1, |c, clue, p| {
             c.non_empty(clue, p, "id", Required);
             c.non_empty(clue, p, "text", Required);
             c.boolean(clue, p, "revealed");
         });
        c.each_object(obj, "", "solution", Required, 1, |c, cell, p| {
             c.non_empty(cell, p, "rowCategoryId", Required);
             c.int(cell, p, "rowItemIndex", Required, Bounds::at_least(0.0));
             c.non_empty(cell, p, "colCategoryId", Required);
             c.int(cell, p, "colItemIndex", Required, Bounds::at_least(0.0));
             c.one_of(cell, p, "value", Required, &CellValue::NAMES);
         });
        c.boolean(obj, "", "progressiveClues");
    }
}

// ---------------------------------------------------------------------------
// Counter
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CounterConfig {
    pub key: String,
    pub target: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_value: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per_role: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_decrement: Option<bool>,
}

impl ConfigShape for CounterConfig {
    fn check(c: &mut Checker, obj: &Object) {
        c.non_empty(obj, "", "key", Required);
        c.int(obj, "", "target", Required, Bounds::between(1.0, u32::MAX as f64));
        c.int(obj, "", "initialValue", Optional, Bounds::between(0.0, u32::MAX as f64));
        c.boolean(obj, "", "perRole");
        c.text(obj, "", "label", Optional);
        c.boolean(obj, "", "allowDecrement");
    }
}
