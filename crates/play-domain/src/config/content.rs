//! Configuraciones de contenido y soporte: hint_container, audio,
//! replay_marker, multi_answer y los tipos estáticos (card, document, image,
//! empty_artifact).
use serde::{Deserialize, Serialize};

use super::checker::Presence::{Optional, Required};
use super::checker::{Bounds, Checker, Object};
use super::common::{check_storage_ref, DisplaySize, NormalizeMode, StorageRef};
use super::ConfigShape;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HintCost {
    #[default]
    None,
    Time,
    Points,
}

impl HintCost {
    pub const NAMES: [&'static str; 3] = ["none", "time", "points"];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HintItem {
    pub id: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_artifact: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<HintCost>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_penalty: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points_penalty: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_after_seconds: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HintConfig {
    pub hints: Vec<HintItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cooldown_seconds: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_hints: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_hint_count: Option<bool>,
}

impl HintConfig {
    pub fn hint(&self, id: &str) -> Option<&HintItem> {
        self.hints.iter().find(|h| h.id == id)
    }

    /// Tope de pistas: `maxHints` o, si falta, todas las configuradas.
    pub fn budget(&self) -> u32 {
        self.max_hints.unwrap_or(self.hints.len() as u32)
    }
}

impl ConfigShape for HintConfig {
    fn check(c: &mut Checker, obj: &Object) {
        c.each_object(obj, "", "hints", Required, 1, |c, hint, p| {
             c.non_empty(hint, p, "id", Required);
             c.non_empty(hint, p, "content", Required);
             c.boolean(hint, p, "isArtifact");
             c.one_of(hint, p, "cost", Optional, &HintCost::NAMES);
             c.int(hint, p, "timePenalty", Optional, Bounds::between(0.0, u32::MAX as f64));
             c.int(hint, p, "pointsPenalty", Optional, Bounds::between(0.0, u32::MAX as f64));
             c.int(hint, p, "availableAfterSeconds", Optional, Bounds::between(0.0, u32::MAX as f64));
         });
        c.int(obj, "", "cooldownSeconds", Optional, Bounds::between(0.0, u32::MAX as f64));
        c.int(obj, "", "maxHints", Optional, Bounds::between(1.0, u32::MAX as f64));
        c.boolean(obj, "", "showHintCount");
    }
}

// ---------------------------------------------------------------------------
// Audio
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AudioPlayback {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub require_ack: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ack_button_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_transcript: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transcript_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_play: Option<bool>,
    #[serde(default, rename = "loop", skip_serializing_if = "Option::is_none")]
    pub looped: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub require_headphones: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_ref: Option<StorageRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<AudioPlayback>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<DisplaySize>,
}

impl AudioConfig {
    pub fn requires_ack(&self) -> bool {
        self.config
            .as_ref()
            .and_then(|c| c.require_ack)
            .unwrap_or(false)
    }
}

impl ConfigShape for AudioConfig {
    fn check(c: &mut Checker, obj: &Object) {
        c.url(obj, "", "src", Optional, true);
        check_storage_ref(c, obj, "", "audioRef");
        c.nested(obj, "", "config", Optional, |c, cfg, p| {
             c.boolean(cfg, p, "requireAck");
             c.text(cfg, p, "ackButtonText", Optional);
             c.boolean(cfg, p, "showTranscript");
             c.text(cfg, p, "transcriptText", Optional);
             c.boolean(cfg, p, "autoPlay");
             c.boolean(cfg, p, "loop");
             c.boolean(cfg, p, "requireHeadphones");
         });
        c.text(obj, "", "title", Optional);
        c.one_of(obj, "", "size", Optional, &DisplaySize::NAMES);

        let has_src = matches!(obj.get("src"), Some(serde_json::Value::String(s)) if !s.is_empty());
        if !has_src && !obj.contains_key("audioRef") {
            c.issue("", "se requiere src o audioRef");
        }
    }
}

// ---------------------------------------------------------------------------
// Replay marker
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerType {
    Highlight,
    Bookmark,
    Note,
    Error,
}

impl MarkerType {
    pub const NAMES: [&'static str; 4] = ["highlight", "bookmark", "note", "error"];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplayMarkerConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_participant_markers: Option<bool>,
    pub available_types: Vec<MarkerType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_mark_events: Option<Vec<String>>,
}

impl ConfigShape for ReplayMarkerConfig {
    fn check(c: &mut Checker, obj: &Object) {
        c.boolean(obj, "", "allowParticipantMarkers");
        c.strings(obj, "", "availableTypes", Required, 1, false, &MarkerType::NAMES);
        c.strings(obj, "", "autoMarkEvents", Optional, 0, false, &[]);
    }
}

// ---------------------------------------------------------------------------
// Multi answer
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckItemType {
    Text,
    Code,
    Select,
    Toggle,
}

impl CheckItemType {
    pub const NAMES: [&'static str; 4] = ["text", "code", "select", "toggle"];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckOption {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckItem {
    pub id: String,
    #[serde(rename = "type")]
    pub item_type: CheckItemType,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<CheckOption>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub normalize_mode: Option<NormalizeMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiAnswerConfig {
    pub checks: Vec<CheckItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub require_all: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_partial_save: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_progress: Option<bool>,
}

impl MultiAnswerConfig {
    pub fn check_item(&self, id: &str) -> Option<&CheckItem> {
        self.checks.iter().find(|c| c.id == id)
    }

    /// `requireAll` por defecto.
    pub fn requires_all(&self) -> bool {
        self.require_all.unwrap_or(true)
    }
}

impl ConfigShape for MultiAnswerConfig {
    fn check(c: &mut Checker, obj: &Object) {
        c.each_object(obj, "", "checks", Required, 1, |c, item, p| {
             c.non_empty(item, p, "id", Required);
             c.one_of(item, p, "type", Required, &CheckItemType::NAMES);
             c.non_empty(item, p, "label", Required);
             c.text(item, p, "expected", Optional);
             c.each_object(item, p, "options", Optional, 0, |c, opt, op| {
                  c.non_empty(opt, op, "value", Required);
                  c.non_empty(opt, op, "label", Required);
              });
             c.one_of(item, p, "normalizeMode", Optional, &NormalizeMode::NAMES);
             c.text(item, p, "hint", Optional);
         });
        c.boolean(obj, "", "requireAll");
        c.boolean(obj, "", "allowPartialSave");
        c.boolean(obj, "", "showProgress");
    }
}

// ---------------------------------------------------------------------------
// Contenido estático
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    Public,
    LeaderOnly,
    RolePrivate,
}

impl Visibility {
    pub const NAMES: [&'static str; 3] = ["public", "leader_only", "role_private"];
}

/// card y document comparten forma.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextContentConfig {
    pub title: String,
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,
    /// `Some(None)` conserva el `null` explícito.
    #[serde(default,
            skip_serializing_if = "Option::is_none",
            with = "nullable")]
    pub visible_to_role_id: Option<Option<String>>,
}

impl ConfigShape for TextContentConfig {
    fn check(c: &mut Checker, obj: &Object) {
        c.non_empty(obj, "", "title", Required);
        c.text(obj, "", "body", Required);
        c.one_of(obj, "", "visibility", Optional, &Visibility::NAMES);
        c.nullable_text(obj, "", "visibleToRoleId");
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageContentConfig {
    pub title: String,
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ConfigShape for ImageContentConfig {
    fn check(c: &mut Checker, obj: &Object) {
        c.non_empty(obj, "", "title", Required);
        c.url(obj, "", "imageUrl", Required, false);
        c.text(obj, "", "description", Optional);
    }
}

/// Placeholder sin campos; cualquier clave es un error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct EmptyConfig {}

impl ConfigShape for EmptyConfig {
    fn check(c: &mut Checker, obj: &Object) {
        c.no_unknown_keys(obj, "", &[]);
    }
}

/// Distingue campo ausente de `null` explícito.
mod nullable {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(value: &Option<Option<String>>, serializer: S) -> Result<S::Ok, S::Error>
        where S: Serializer
    {
        match value {
            Some(inner) => inner.serialize(serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
        where D: Deserializer<'de>
    {
        Option::<String>::deserialize(deserializer).map(Some)
    }
}
