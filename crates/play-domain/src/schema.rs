//! Registro de esquemas: `validate` y configuraciones canónicas.
use log::{debug, warn};
use serde_json::{json, Value};

use crate::artifact_type::ArtifactType;
use crate::config::{parse_shape, ArtifactConfig};
use crate::error::ValidationError;

/// Valida `candidate` contra la forma de `artifact_type`.
///
/// Nunca entra en pánico con datos malformados: todos los campos inválidos
/// vuelven en `ValidationError::issues`. Las claves desconocidas se
/// descartan salvo en `empty_artifact`, que es estricto.
pub fn validate(artifact_type: ArtifactType, candidate: &Value) -> Result<ArtifactConfig, ValidationError> {
    let parsed = match artifact_type {
        ArtifactType::Keypad => parse_shape(artifact_type, candidate).map(ArtifactConfig::Keypad),
        ArtifactType::Riddle => parse_shape(artifact_type, candidate).map(ArtifactConfig::Riddle),
        ArtifactType::Cipher => parse_shape(artifact_type, candidate).map(ArtifactConfig::Cipher),
        ArtifactType::Hotspot => parse_shape(artifact_type, candidate).map(ArtifactConfig::Hotspot),
        ArtifactType::TilePuzzle => parse_shape(artifact_type, candidate).map(ArtifactConfig::TilePuzzle),
        ArtifactType::LogicGrid => parse_shape(artifact_type, candidate).map(ArtifactConfig::LogicGrid),
        ArtifactType::Counter => parse_shape(artifact_type, candidate).map(ArtifactConfig::Counter),
        ArtifactType::ScanGate => parse_shape(artifact_type, candidate).map(ArtifactConfig::ScanGate),
        ArtifactType::LocationCheck => parse_shape(artifact_type, candidate).map(ArtifactConfig::LocationCheck),
        ArtifactType::HintContainer => parse_shape(artifact_type, candidate).map(ArtifactConfig::HintContainer),
        ArtifactType::PropConfirmation => parse_shape(artifact_type, candidate).map(ArtifactConfig::PropConfirmation),
        ArtifactType::Audio => parse_shape(artifact_type, candidate).map(ArtifactConfig::Audio),
        ArtifactType::SoundLevel => parse_shape(artifact_type, candidate).map(ArtifactConfig::SoundLevel),
        ArtifactType::ReplayMarker => parse_shape(artifact_type, candidate).map(ArtifactConfig::ReplayMarker),
        ArtifactType::MultiAnswer => parse_shape(artifact_type, candidate).map(ArtifactConfig::MultiAnswer),
        ArtifactType::Card => parse_shape(artifact_type, candidate).map(ArtifactConfig::Card),
        ArtifactType::Document => parse_shape(artifact_type, candidate).map(ArtifactConfig::Document),
        ArtifactType::Image => parse_shape(artifact_type, candidate).map(ArtifactConfig::Image),
        ArtifactType::EmptyArtifact => parse_shape(artifact_type, candidate).map(ArtifactConfig::Empty),
    };
    match &parsed {
        Ok(_) => debug!("config válida para {artifact_type}"),
        Err(e) => warn!("{e}: {:?}", e.paths()),
    }
    parsed
}

/// Configuración mínima válida para un artefacto recién creado.
pub fn canonical_default(artifact_type: ArtifactType) -> Value {
    match artifact_type {
        ArtifactType::Keypad => json!({ "correctCode": "0000" }),
        ArtifactType::Riddle => json!({ "acceptedAnswers": ["svar"] }),
        ArtifactType::Cipher => json!({
            "cipherType": "caesar",
            "encodedMessage": "DEF",
            "expectedPlaintext": "ABC"
        }),
        ArtifactType::Hotspot => json!({ "imageArtifactId": "image", "hotspots": [] }),
        ArtifactType::TilePuzzle => json!({ "imageArtifactId": "image", "gridSize": "3x3" }),
        ArtifactType::LogicGrid => json!({
            "title": "Logic grid",
            "categories": [
                { "id": "a", "name": "A", "items": ["a0", "a1"] },
                { "id": "b", "name": "B", "items": ["b0", "b1"] },
                { "id": "c", "name": "C", "items": ["c0", "c1"] }
            ],
            "clues": [{ "id": "c1", "text": "a0 va con b0" }],
            "solution": [{
                "rowCategoryId": "a", "rowItemIndex": 0,
                "colCategoryId": "b", "colItemIndex": 0,
                "value": "yes"
            }]
        }),
        ArtifactType::Counter => json!({ "key": "counter", "target": 1 }),
        ArtifactType::ScanGate => json!({ "mode": "qr", "allowedValues": ["CODE"] }),
        ArtifactType::LocationCheck => json!({
            "locationId": "loc",
            "locationName": "Plats",
            "checkType": "manual"
        }),
        ArtifactType::HintContainer => json!({ "hints": [{ "id": "h1", "content": "Ledtråd" }] }),
        ArtifactType::PropConfirmation => json!({
            "propId": "prop",
            "propDescription": "Föremål",
            "instructions": "Visa föremålet för spelledaren"
        }),
        ArtifactType::Audio => json!({ "src": "/audio.wav" }),
        ArtifactType::SoundLevel => json!({
            "triggerMode": "threshold",
            "thresholdLevel": 70,
            "activityLabel": "Klappa"
        }),
        ArtifactType::ReplayMarker => json!({ "availableTypes": ["bookmark"] }),
        ArtifactType::MultiAnswer => json!({ "checks": [{ "id": "c1", "type": "toggle", "label": "Klart" }] }),
        ArtifactType::Card | ArtifactType::Document => json!({ "title": "Titel", "body": "" }),
        ArtifactType::Image => json!({ "title": "Bild", "imageUrl": "https://example.com/image.png" }),
        ArtifactType::EmptyArtifact => json!({}),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_canonical_default_validates() {
        for t in ArtifactType::ALL {
            let cfg = validate(t, &canonical_default(t)).unwrap_or_else(|e| panic!("{t}: {:?}", e.issues));
            assert_eq!(cfg.artifact_type(), t);
        }
    }

    #[test]
    fn non_object_is_a_root_issue() {
        let err = validate(ArtifactType::Keypad, &json!("1234")).unwrap_err();
        assert_eq!(err.paths(), vec![""]);
    }
}
