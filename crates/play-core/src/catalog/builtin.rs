use play_domain::ArtifactType;
use serde_json::json;

use super::Scenario;

/// Escenarios del sandbox, en el orden en que se presentan.
pub fn builtin_scenarios() -> Vec<Scenario> {
    vec![Scenario::new("keypad-4-digits",
                       ArtifactType::Keypad,
                       "Keypad (4 siffror)",
                       "Standard PIN-inmatning med 4 siffror.",
                       json!({
                           "correctCode": "1234",
                           "codeLength": 4,
                           "title": "Ange koden",
                           "showAttempts": true,
                           "size": "md",
                           "autoSubmit": true
                       })),
         Scenario::new("keypad-attempt-limit",
                       ArtifactType::Keypad,
                       "Keypad (försöksbegränsning)",
                       "PIN-inmatning med max antal försök (utlåst vid fel).",
                       json!({
                           "correctCode": "4711",
                           "codeLength": 4,
                           "maxAttempts": 3,
                           "title": "Ange koden",
                           "showAttempts": true,
                           "size": "md",
                           "autoSubmit": true
                       })),
         Scenario::new("riddle-text",
                       ArtifactType::Riddle,
                       "Gåta / Fråga (text)",
                       "Textfråga med fuzzy matching, valfri hint efter X fel.",
                       json!({
                           "promptText": "Vad heter Sveriges huvudstad?",
                           "acceptedAnswers": ["Stockholm"],
                           "normalizeMode": "fuzzy",
                           "maxAttempts": 3,
                           "showHintAfterAttempts": 2,
                           "hintText": "Det börjar på S…"
                       })),
         Scenario::new("cipher-caesar",
                       ArtifactType::Cipher,
                       "Caesar-chiffer",
                       "Avkoda ett meddelande, med valfri avkodarhjälp.",
                       json!({
                           "cipherType": "caesar",
                           "encodedMessage": "KHOOR ZRUOG",
                           "caesarShift": 3,
                           "expectedPlaintext": "HELLO WORLD",
                           "normalizeMode": "fuzzy",
                           "showDecoderUI": true
                       })),
         Scenario::new("hotspot-clickable-image",
                       ArtifactType::Hotspot,
                       "Klickbar bild",
                       "Hitta hotspot(s) i en bild.",
                       json!({
                           "imageArtifactId": "sandbox-image",
                           "imageUrl": "/sandbox/hotspot-test.svg",
                           "hotspots": [
                               { "id": "h1", "x": 30, "y": 40, "radius": 8, "label": "Nyckeln" },
                               { "id": "h2", "x": 70, "y": 60, "radius": 8, "label": "Låset" }
                           ],
                           "requireAll": true,
                           "showProgress": true,
                           "allowZoom": true,
                           "hapticFeedback": false
                       })),
         Scenario::new("tile-puzzle-3x3",
                       ArtifactType::TilePuzzle,
                       "Pusselspel (3x3)",
                       "Drag-and-drop tile puzzle i 3x3.",
                       json!({
                           "imageArtifactId": "sandbox-image",
                           "imageUrl": "https://images.unsplash.com/photo-1496307653780-42ee777d4833?auto=format&fit=crop&w=1200&q=80",
                           "gridSize": "3x3",
                           "snapToGrid": true,
                           "shuffleOnStart": true,
                           "showPreview": true
                       })),
         Scenario::new("logic-grid",
                       ArtifactType::LogicGrid,
                       "Logikrutnät",
                       "Einstein-style logikpussel med ledtrådar och grid.",
                       json!({
                           "title": "Vem har vilket husdjur?",
                           "categories": [
                               { "id": "person", "name": "Person", "items": ["Anna", "Erik", "Maria"] },
                               { "id": "pet", "name": "Husdjur", "items": ["Hund", "Katt", "Fisk"] },
                               { "id": "color", "name": "Färg", "items": ["Röd", "Blå", "Grön"] }
                           ],
                           "clues": [
                               { "id": "c1", "text": "Anna har inte katt." },
                               { "id": "c2", "text": "Den som har fisk bor inte i det röda huset." }
                           ],
                           // una sola celda "yes" basta para resolver
                           "solution": [{
                               "rowCategoryId": "person",
                               "rowItemIndex": 0,
                               "colCategoryId": "pet",
                               "colItemIndex": 0,
                               "value": "yes"
                           }],
                           "progressiveClues": false
                       })),
         Scenario::new("counter-hint",
                       ArtifactType::Counter,
                       "Ledtrådsräknare",
                       "Räknare som kan ökas/minskas av host/admin.",
                       json!({
                           "key": "hints_used",
                           "target": 3,
                           "initialValue": 0,
                           "label": "Ledtrådar",
                           "allowDecrement": true
                       })),
         Scenario::new("hint-container",
                       ArtifactType::HintContainer,
                       "Tips-behållare",
                       "Hela hint-systemet (flera hints, cooldown, cost).",
                       json!({
                           "hints": [
                               { "id": "h1", "content": "Kolla under mattan.", "cost": "none" },
                               { "id": "h2", "content": "Nyckeln är nära dörren.", "cost": "time", "timePenalty": 30 }
                           ],
                           "cooldownSeconds": 10,
                           "maxHints": 2,
                           "showHintCount": true
                       })),
         Scenario::new("qr-gate-checkpoint",
                       ArtifactType::ScanGate,
                       "QR-kod checkpoint",
                       "Verifiering via QR (med manuell fallback).",
                       json!({
                           "mode": "qr",
                           "allowedValues": ["CHECKPOINT-1"],
                           "allowManualFallback": true,
                           "fallbackCode": "CHECKPOINT-1",
                           "promptText": "Skanna QR-koden för att fortsätta",
                           "successMessage": "Verifierad!"
                       })),
         Scenario::new("location-checkpoint",
                       ArtifactType::LocationCheck,
                       "Plats-checkpoint",
                       "Platsverifiering via GPS / QR / manual.",
                       json!({
                           "locationId": "loc-1",
                           "locationName": "Startplatsen",
                           "checkType": "manual",
                           "hint": "Gå till startpunkten och invänta bekräftelse.",
                           "showDistance": true,
                           "showCompass": true
                       })),
         Scenario::new("hint-single",
                       ArtifactType::HintContainer,
                       "Ledtråd/Hint",
                       "En enkel hint (1-item) i HintPanel.",
                       json!({
                           "hints": [{ "id": "h1", "content": "Titta på baksidan av dokumentet." }],
                           "cooldownSeconds": 0,
                           "maxHints": 1,
                           "showHintCount": false
                       })),
         Scenario::new("secret-document",
                       ArtifactType::Document,
                       "Hemligt dokument",
                       "Textinnehåll (document) som kan kopplas till synlighet senare.",
                       json!({
                           "title": "Hemligt dokument",
                           "body": "Detta är ett hemligt dokument. Endast vissa roller ska kunna se det.",
                           "visibility": "role_private",
                           "visibleToRoleId": null
                       })),
         Scenario::new("reveal-card",
                       ArtifactType::Card,
                       "Avslöjande kort",
                       "Ett kort med text som kan användas som reveal/handout.",
                       json!({
                           "title": "Avslöjande",
                           "body": "Du hittar en lapp: \"Nyckeln finns där ingen tittar.\"",
                           "visibility": "public",
                           "visibleToRoleId": null
                       })),
         Scenario::new("role-secret",
                       ArtifactType::Card,
                       "Rollhemlighet",
                       "Kort som representerar en hemlighet för en specifik roll.",
                       json!({
                           "title": "Din hemlighet",
                           "body": "Du var på platsen vid tidpunkten för brottet.",
                           "visibility": "role_private",
                           "visibleToRoleId": "suspect"
                       })),
         Scenario::new("audio-clue",
                       ArtifactType::Audio,
                       "Ljudledtråd",
                       "Ljuduppspelning som ledtråd (utan ack-krav).",
                       json!({
                           "title": "Ljudledtråd",
                           "src": "/sandbox/audio-test.wav",
                           "config": {
                               "requireAck": false,
                               "showTranscript": true,
                               "transcriptText": "En svag viskning: \"Se mot norr\".",
                               "requireHeadphones": true
                           },
                           "size": "md"
                       })),
         Scenario::new("audio-activation",
                       ArtifactType::Audio,
                       "Ljudaktivering",
                       "Ljud som kräver ack innan man går vidare.",
                       json!({
                           "title": "Lyssna och bekräfta",
                           "src": "/sandbox/audio-test.wav",
                           "config": {
                               "requireAck": true,
                               "ackButtonText": "Jag har lyssnat",
                               "showTranscript": false
                           },
                           "size": "md"
                       })),
         Scenario::new("prop-check",
                       ArtifactType::PropConfirmation,
                       "Rekvisita-check",
                       "Deltagare begär bekräftelse av host (med ev foto).",
                       json!({
                           "propId": "prop-1",
                           "propDescription": "Ett gammalt mynt",
                           "instructions": "Hitta myntet och be spelledaren bekräfta.",
                           "requirePhoto": false,
                           "allowPartial": false
                       })),
         Scenario::new("quiz-numeric-answer",
                       ArtifactType::Riddle,
                       "Quizsvar (siffersvar)",
                       "Riddle i numeric mode (endast siffror matchas).",
                       json!({
                           "promptText": "Hur många dagar har ett skottår?",
                           "acceptedAnswers": ["366"],
                           "normalizeMode": "numeric",
                           "maxAttempts": 2
                       })),
         Scenario::new("text-question",
                       ArtifactType::Riddle,
                       "Textfråga",
                       "Riddle i fuzzy mode för vanlig textfråga.",
                       json!({
                           "promptText": "Vilket ord saknas: \"Kunskap är ___\"?",
                           "acceptedAnswers": ["makt"],
                           "normalizeMode": "fuzzy",
                           "maxAttempts": 3
                       })),
         Scenario::new("checklist",
                       ArtifactType::MultiAnswer,
                       "Checklista",
                       "MultiAnswer-form med toggle-checks.",
                       json!({
                           "checks": [
                               { "id": "c1", "type": "toggle", "label": "Jag har läst instruktionerna" },
                               { "id": "c2", "type": "toggle", "label": "Jag har hittat artefakten" }
                           ],
                           "requireAll": true,
                           "showProgress": true
                       })),
         Scenario::new("learn-card",
                       ArtifactType::Card,
                       "Lärokort",
                       "Ett kort med instruktion/kunskap (content).",
                       json!({
                           "title": "Lärokort",
                           "body": "Tips: Om du fastnar, be om en ledtråd.",
                           "visibility": "public",
                           "visibleToRoleId": null
                       })),
         Scenario::new("reveal-image",
                       ArtifactType::Image,
                       "Bild att avslöja",
                       "En bild (url) som kan visas som artifact content.",
                       json!({
                           "title": "Avslöjad bild",
                           "imageUrl": "https://images.unsplash.com/photo-1520975916090-3105956dac38?auto=format&fit=crop&w=1200&q=80",
                           "description": "En ledtråd gömmer sig i bilden."
                       })),
         Scenario::new("replay-marker",
                       ArtifactType::ReplayMarker,
                       "Replay-markör",
                       "Tidslinje där deltagare kan lägga markörer.",
                       json!({
                           "allowParticipantMarkers": true,
                           "availableTypes": ["highlight", "bookmark", "note", "error"]
                       })),
         Scenario::new("empty-artifact",
                       ArtifactType::EmptyArtifact,
                       "Tom artefakt",
                       "Placeholder som alltid renderar en tom yta.",
                       json!({})),
         // sound_level no tiene escenario en el sandbox web; éste cubre el tipo
         Scenario::new("sound-level-clap",
                       ArtifactType::SoundLevel,
                       "Ljudnivå (klappa)",
                       "Klappa tillräckligt högt för att aktivera.",
                       json!({
                           "triggerMode": "threshold",
                           "thresholdLevel": 70,
                           "activityLabel": "Klappa händerna",
                           "instructions": "Klappa så högt ni kan!",
                           "showMeter": true,
                           "showProgress": true
                       })),]
}
