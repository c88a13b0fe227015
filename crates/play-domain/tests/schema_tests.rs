use play_domain::config::{CellValue, CipherType, TileGridSize};
use play_domain::{validate, ArtifactConfig, ArtifactType};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn test_keypad_rejects_non_digit_code_and_bad_ranges() {
    let err = validate(ArtifactType::Keypad,
                       &json!({ "correctCode": "12a4", "maxAttempts": 0, "size": "xl" })).unwrap_err();
    assert_eq!(err.paths(), vec!["correctCode", "maxAttempts", "size"]);
}

#[test]
fn test_keypad_strips_unknown_keys() {
    let cfg = validate(ArtifactType::Keypad, &json!({ "correctCode": "1234", "extra": true })).unwrap();
    assert_eq!(cfg.to_value(), json!({ "correctCode": "1234" }));
}

#[test]
fn test_fractional_integer_is_rejected() {
    let err = validate(ArtifactType::Counter, &json!({ "key": "k", "target": 3.5 })).unwrap_err();
    assert!(err.has_issue_at("target"));
}

#[test]
fn test_riddle_requires_non_empty_answers() {
    let err = validate(ArtifactType::Riddle, &json!({ "acceptedAnswers": ["ok", ""] })).unwrap_err();
    assert_eq!(err.paths(), vec!["acceptedAnswers[1]"]);
    let err = validate(ArtifactType::Riddle, &json!({ "acceptedAnswers": [] })).unwrap_err();
    assert_eq!(err.paths(), vec!["acceptedAnswers"]);
}

#[test]
fn test_cipher_substitution_needs_map() {
    let err = validate(ArtifactType::Cipher,
                       &json!({
                           "cipherType": "substitution",
                           "encodedMessage": "XYZ",
                           "expectedPlaintext": "ABC"
                       })).unwrap_err();
    assert_eq!(err.paths(), vec!["substitutionMap"]);

    let ok = validate(ArtifactType::Cipher,
                      &json!({
                          "cipherType": "substitution",
                          "encodedMessage": "XYZ",
                          "substitutionMap": { "X": "A", "Y": "B", "Z": "C" },
                          "expectedPlaintext": "ABC"
                      })).unwrap();
    match ok {
        ArtifactConfig::Cipher(c) => assert_eq!(c.cipher_type, CipherType::Substitution),
        other => panic!("variante inesperada: {other:?}"),
    }
}

#[test]
fn test_hotspot_reports_every_bad_zone_field() {
    let err = validate(ArtifactType::Hotspot,
                       &json!({
                           "imageArtifactId": "img",
                           "imageUrl": "no es url",
                           "imageRef": { "bucket": "otro", "path": "" },
                           "hotspots": [
                               { "id": "h1", "x": 10, "y": 10, "radius": 5 },
                               { "id": "", "x": 120, "y": -1, "radius": 5 }
                           ]
                       })).unwrap_err();
    assert_eq!(err.paths(),
               vec!["imageUrl",
                    "imageRef.bucket",
                    "imageRef.path",
                    "hotspots[1].id",
                    "hotspots[1].x",
                    "hotspots[1].y"]);
}

#[test]
fn test_hotspot_accepts_relative_path_image() {
    let cfg = validate(ArtifactType::Hotspot,
                       &json!({ "imageArtifactId": "img", "imageUrl": "/sandbox/a.svg", "hotspots": [] }));
    assert!(cfg.is_ok());
}

#[test]
fn test_tile_puzzle_grid_dimensions() {
    let cfg = validate(ArtifactType::TilePuzzle,
                       &json!({ "imageArtifactId": "img", "gridSize": "4x3" })).unwrap();
    let ArtifactConfig::TilePuzzle(tp) = cfg else { panic!("variante inesperada") };
    assert_eq!(tp.grid_size, TileGridSize::FourByThree);
    assert_eq!(tp.grid_size.dimensions(), (4, 3));

    let err = validate(ArtifactType::TilePuzzle,
                       &json!({ "imageArtifactId": "img", "gridSize": "5x5", "imageUrl": "/local.png" })).unwrap_err();
    assert_eq!(err.paths(), vec!["imageUrl", "gridSize"]);
}

#[test]
fn test_logic_grid_minimums() {
    let err = validate(ArtifactType::LogicGrid,
                       &json!({
                           "title": "t",
                           "categories": [{ "id": "a", "name": "A", "items": ["x"] }],
                           "clues": [],
                           "solution": [{
                               "rowCategoryId": "a", "rowItemIndex": -1,
                               "colCategoryId": "b", "colItemIndex": 0,
                               "value": "maybe"
                           }]
                       })).unwrap_err();
    assert_eq!(err.paths(),
               vec!["categories",
                    "categories[0].items",
                    "clues",
                    "solution[0].rowItemIndex",
                    "solution[0].value"]);
}

#[test]
fn test_cell_value_cycle() {
    assert_eq!(CellValue::Unknown.cycled(), CellValue::Yes);
    assert_eq!(CellValue::Yes.cycled(), CellValue::No);
    assert_eq!(CellValue::No.cycled(), CellValue::Unknown);
}

#[test]
fn test_audio_needs_a_source() {
    let err = validate(ArtifactType::Audio, &json!({ "title": "Ljud" })).unwrap_err();
    assert_eq!(err.paths(), vec![""]);
    assert!(validate(ArtifactType::Audio,
                     &json!({ "audioRef": { "bucket": "media-audio", "path": "a.wav" } })).is_ok());
}

#[test]
fn test_location_coordinates_bounds() {
    let err = validate(ArtifactType::LocationCheck,
                       &json!({
                           "locationId": "l",
                           "locationName": "L",
                           "checkType": "gps",
                           "targetCoordinates": { "latitude": 91, "longitude": 0 },
                           "radiusMeters": 0.5
                       })).unwrap_err();
    assert_eq!(err.paths(), vec!["targetCoordinates.latitude", "radiusMeters"]);
}

#[test]
fn test_replay_marker_types_are_enumerated() {
    let err = validate(ArtifactType::ReplayMarker, &json!({ "availableTypes": ["bookmark", "star"] })).unwrap_err();
    assert_eq!(err.paths(), vec!["availableTypes[1]"]);
}

#[test]
fn test_multi_answer_nested_options() {
    let err = validate(ArtifactType::MultiAnswer,
                       &json!({
                           "checks": [{
                               "id": "c1", "type": "select", "label": "Val",
                               "options": [{ "value": "", "label": "A" }]
                           }]
                       })).unwrap_err();
    assert_eq!(err.paths(), vec!["checks[0].options[0].value"]);
}

#[test]
fn test_text_content_keeps_explicit_null() {
    let cfg = validate(ArtifactType::Document,
                       &json!({ "title": "T", "body": "B", "visibleToRoleId": null })).unwrap();
    assert_eq!(cfg.to_value(), json!({ "title": "T", "body": "B", "visibleToRoleId": null }));
    let err = validate(ArtifactType::Card, &json!({ "title": "T", "body": "B", "visibleToRoleId": 3 })).unwrap_err();
    assert_eq!(err.paths(), vec!["visibleToRoleId"]);
}

#[test]
fn test_empty_artifact_is_strict() {
    assert!(validate(ArtifactType::EmptyArtifact, &json!({})).is_ok());
    let err = validate(ArtifactType::EmptyArtifact, &json!({ "a": 1, "b": 2 })).unwrap_err();
    assert_eq!(err.paths(), vec!["a", "b"]);
}
