//! Piezas compartidas entre varias configuraciones.
use serde::{Deserialize, Serialize};

use super::checker::{Bounds, Checker, Object, Presence};

/// Modo de normalización de respuestas (riddle, cipher, multi_answer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NormalizeMode {
    Strict,
    #[default]
    Fuzzy,
    Numeric,
}

impl NormalizeMode {
    pub const NAMES: [&'static str; 3] = ["strict", "fuzzy", "numeric"];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplaySize {
    Sm,
    Md,
    Lg,
}

impl DisplaySize {
    pub const NAMES: [&'static str; 3] = ["sm", "md", "lg"];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StorageBucket {
    #[serde(rename = "game-media")]
    GameMedia,
    #[serde(rename = "custom_utmarkelser")]
    CustomAwards,
    #[serde(rename = "tenant-media")]
    TenantMedia,
    #[serde(rename = "media-images")]
    MediaImages,
    #[serde(rename = "media-audio")]
    MediaAudio,
}

impl StorageBucket {
    pub const NAMES: [&'static str; 5] = ["game-media", "custom_utmarkelser", "tenant-media", "media-images", "media-audio"];
}

/// Referencia a un objeto en el storage externo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageRef {
    pub bucket: StorageBucket,
    pub path: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

pub(crate) fn check_storage_ref(c: &mut Checker, obj: &Object, path: &str, field: &str) {
    c.nested(obj, path, field, Presence::Optional, |c, r, p| {
         c.one_of(r, p, "bucket", Presence::Required, &StorageBucket::NAMES);
         c.non_empty(r, p, "path", Presence::Required);
     });
}

pub(crate) fn check_coordinates(c: &mut Checker, obj: &Object, path: &str, field: &str) {
    c.nested(obj, path, field, Presence::Optional, |c, g, p| {
         c.number(g, p, "latitude", Presence::Required, Bounds::between(-90.0, 90.0));
         c.number(g, p, "longitude", Presence::Required, Bounds::between(-180.0, 180.0));
     });
}
