//! Formas de configuración por tipo de artefacto.
//!
//! Cada forma tiene un struct tipado (lo que consume el motor) y una rutina
//! `check` que recorre el JSON crudo acumulando problemas. Sólo cuando el
//! recorrido queda limpio se construye el struct con `serde_json`.
pub(crate) mod checker;
pub mod common;
pub mod content;
pub mod gate;
pub mod puzzle;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::artifact_type::ArtifactType;
use crate::error::{FieldIssue, ValidationError};
use checker::{Checker, Object};

pub use common::{DisplaySize, GeoCoordinate, NormalizeMode, StorageBucket, StorageRef};
pub use content::{AudioConfig, AudioPlayback, CheckItem, CheckItemType, CheckOption, EmptyConfig, HintConfig,
                  HintCost, HintItem, ImageContentConfig, MarkerType, MultiAnswerConfig, ReplayMarkerConfig,
                  TextContentConfig, Visibility};
pub use gate::{CheckType, LocationCheckConfig, PropConfirmationConfig, ScanGateConfig, ScanMode, SoundLevelConfig,
               TriggerMode};
pub use puzzle::{CellValue, CipherConfig, CipherType, CounterConfig, HotspotConfig, HotspotZone, KeypadConfig,
                 LogicGridCategory, LogicGridCell, LogicGridClue, LogicGridConfig, RiddleConfig, TileGridSize,
                 TilePuzzleConfig, DEFAULT_CAESAR_SHIFT};

/// Forma validable: chequeo estructural más construcción tipada.
pub(crate) trait ConfigShape: DeserializeOwned {
    fn check(c: &mut Checker, obj: &Object);
}

pub(crate) fn parse_shape<T: ConfigShape>(artifact_type: ArtifactType, candidate: &Value) -> Result<T, ValidationError> {
    let mut c = Checker::new();
    if let Some(obj) = c.object("", candidate) {
        T::check(&mut c, obj);
    }
    if !c.is_clean() {
        return Err(ValidationError::new(artifact_type, c.into_issues()));
    }
    // El recorrido ya garantizó la forma; un fallo aquí es un desajuste entre
    // `check` y el struct y se reporta igual como problema de raíz.
    serde_json::from_value(candidate.clone())
        .map_err(|e| ValidationError::new(artifact_type, vec![FieldIssue::new("", e.to_string())]))
}

/// Configuración validada de un artefacto. El tipo queda fijado por la
/// variante; la serialización produce el JSON plano del contrato externo.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ArtifactConfig {
    Keypad(KeypadConfig),
    Riddle(RiddleConfig),
    Cipher(CipherConfig),
    Hotspot(HotspotConfig),
    TilePuzzle(TilePuzzleConfig),
    LogicGrid(LogicGridConfig),
    Counter(CounterConfig),
    ScanGate(ScanGateConfig),
    LocationCheck(LocationCheckConfig),
    HintContainer(HintConfig),
    PropConfirmation(PropConfirmationConfig),
    Audio(AudioConfig),
    SoundLevel(SoundLevelConfig),
    ReplayMarker(ReplayMarkerConfig),
    MultiAnswer(MultiAnswerConfig),
    Card(TextContentConfig),
    Document(TextContentConfig),
    Image(ImageContentConfig),
    Empty(EmptyConfig),
}

impl ArtifactConfig {
    pub fn artifact_type(&self) -> ArtifactType {
        match self {
            ArtifactConfig::Keypad(_) => ArtifactType::Keypad,
            ArtifactConfig::Riddle(_) => ArtifactType::Riddle,
            ArtifactConfig::Cipher(_) => ArtifactType::Cipher,
            ArtifactConfig::Hotspot(_) => ArtifactType::Hotspot,
            ArtifactConfig::TilePuzzle(_) => ArtifactType::TilePuzzle,
            ArtifactConfig::LogicGrid(_) => ArtifactType::LogicGrid,
            ArtifactConfig::Counter(_) => ArtifactType::Counter,
            ArtifactConfig::ScanGate(_) => ArtifactType::ScanGate,
            ArtifactConfig::LocationCheck(_) => ArtifactType::LocationCheck,
            ArtifactConfig::HintContainer(_) => ArtifactType::HintContainer,
            ArtifactConfig::PropConfirmation(_) => ArtifactType::PropConfirmation,
            ArtifactConfig::Audio(_) => ArtifactType::Audio,
            ArtifactConfig::SoundLevel(_) => ArtifactType::SoundLevel,
            ArtifactConfig::ReplayMarker(_) => ArtifactType::ReplayMarker,
            ArtifactConfig::MultiAnswer(_) => ArtifactType::MultiAnswer,
            ArtifactConfig::Card(_) => ArtifactType::Card,
            ArtifactConfig::Document(_) => ArtifactType::Document,
            ArtifactConfig::Image(_) => ArtifactType::Image,
            ArtifactConfig::Empty(_) => ArtifactType::EmptyArtifact,
        }
    }

    /// JSON plano (camelCase). Los structs tipados siempre serializan.
    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}
