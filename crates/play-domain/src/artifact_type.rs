use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Conjunto cerrado de tipos de artefacto.
///
/// Los nombres serializados son los del contrato externo (`qr_gate` para la
/// compuerta de escaneo, `empty_artifact` para el placeholder).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactType {
    Keypad,
    Riddle,
    Cipher,
    Hotspot,
    TilePuzzle,
    LogicGrid,
    Counter,
    #[serde(rename = "qr_gate")]
    ScanGate,
    LocationCheck,
    HintContainer,
    PropConfirmation,
    Audio,
    SoundLevel,
    ReplayMarker,
    MultiAnswer,
    Card,
    Document,
    Image,
    EmptyArtifact,
}

impl ArtifactType {
    pub const ALL: [ArtifactType; 19] = [ArtifactType::Keypad,
                                         ArtifactType::Riddle,
                                         ArtifactType::Cipher,
                                         ArtifactType::Hotspot,
                                         ArtifactType::TilePuzzle,
                                         ArtifactType::LogicGrid,
                                         ArtifactType::Counter,
                                         ArtifactType::ScanGate,
                                         ArtifactType::LocationCheck,
                                         ArtifactType::HintContainer,
                                         ArtifactType::PropConfirmation,
                                         ArtifactType::Audio,
                                         ArtifactType::SoundLevel,
                                         ArtifactType::ReplayMarker,
                                         ArtifactType::MultiAnswer,
                                         ArtifactType::Card,
                                         ArtifactType::Document,
                                         ArtifactType::Image,
                                         ArtifactType::EmptyArtifact];

    pub fn as_str(&self) -> &'static str {
        match self {
            ArtifactType::Keypad => "keypad",
            ArtifactType::Riddle => "riddle",
            ArtifactType::Cipher => "cipher",
            ArtifactType::Hotspot => "hotspot",
            ArtifactType::TilePuzzle => "tile_puzzle",
            ArtifactType::LogicGrid => "logic_grid",
            ArtifactType::Counter => "counter",
            ArtifactType::ScanGate => "qr_gate",
            ArtifactType::LocationCheck => "location_check",
            ArtifactType::HintContainer => "hint_container",
            ArtifactType::PropConfirmation => "prop_confirmation",
            ArtifactType::Audio => "audio",
            ArtifactType::SoundLevel => "sound_level",
            ArtifactType::ReplayMarker => "replay_marker",
            ArtifactType::MultiAnswer => "multi_answer",
            ArtifactType::Card => "card",
            ArtifactType::Document => "document",
            ArtifactType::Image => "image",
            ArtifactType::EmptyArtifact => "empty_artifact",
        }
    }

    /// Tipos de contenido sin estado de resolución propio.
    pub fn is_static(&self) -> bool {
        matches!(self,
                 ArtifactType::Card | ArtifactType::Document | ArtifactType::Image | ArtifactType::EmptyArtifact)
    }
}

impl fmt::Display for ArtifactType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArtifactType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // alias aceptados en la frontera de texto
        let key = match s {
            "scan_gate" | "scan-gate" => "qr_gate",
            "empty" => "empty_artifact",
            other => other,
        };
        ArtifactType::ALL.iter()
                         .copied()
                         .find(|t| t.as_str() == key || t.as_str().replace('_', "-") == key)
                         .ok_or_else(|| DomainError::UnknownArtifactType(s.to_string()))
    }
}
