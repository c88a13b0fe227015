//! Compuertas confirmadas desde afuera: qr_gate, location_check,
//! prop_confirmation y sound_level. El motor sólo modela las banderas; el
//! hardware real (cámara, GPS, micrófono) queda fuera.
use serde::{Deserialize, Serialize};

use super::checker::Presence::{Optional, Required};
use super::checker::{Bounds, Checker, Object};
use super::common::{check_coordinates, GeoCoordinate};
use super::ConfigShape;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanMode {
    Qr,
    Nfc,
    Either,
}

impl ScanMode {
    pub const NAMES: [&'static str; 3] = ["qr", "nfc", "either"];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanGateConfig {
    pub mode: ScanMode,
    pub allowed_values: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_manual_fallback: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success_message: Option<String>,
}

impl ScanGateConfig {
    pub fn accepts(&self, value: &str) -> bool {
        self.allowed_values.iter().any(|v| v == value.trim())
    }
}

impl ConfigShape for ScanGateConfig {
    fn check(c: &mut Checker, obj: &Object) {
        c.one_of(obj, "", "mode", Required, &ScanMode::NAMES);
        c.strings(obj, "", "allowedValues", Required, 1, true, &[]);
        c.boolean(obj, "", "allowManualFallback");
        c.text(obj, "", "fallbackCode", Optional);
        c.text(obj, "", "promptText", Optional);
        c.text(obj, "", "successMessage", Optional);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckType {
    Gps,
    Beacon,
    Qr,
    Manual,
}

impl CheckType {
    pub const NAMES: [&'static str; 4] = ["gps", "beacon", "qr", "manual"];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationCheckConfig {
    pub location_id: String,
    pub location_name: String,
    pub check_type: CheckType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_coordinates: Option<GeoCoordinate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius_meters: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beacon_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qr_code_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_distance: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_compass: Option<bool>,
}

impl ConfigShape for LocationCheckConfig {
    fn check(c: &mut Checker, obj: &Object) {
        c.non_empty(obj, "", "locationId", Required);
        c.non_empty(obj, "", "locationName", Required);
        c.one_of(obj, "", "checkType", Required, &CheckType::NAMES);
        check_coordinates(c, obj, "", "targetCoordinates");
        c.number(obj, "", "radiusMeters", Optional, Bounds::at_least(1.0));
        c.text(obj, "", "beaconId", Optional);
        c.text(obj, "", "qrCodeValue", Optional);
        c.text(obj, "", "hint", Optional);
        c.boolean(obj, "", "showDistance");
        c.boolean(obj, "", "showCompass");
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropConfirmationConfig {
    pub prop_id: String,
    pub prop_description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prop_image_url: Option<String>,
    pub instructions: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub require_photo: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_partial: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_seconds: Option<u32>,
}

impl ConfigShape for PropConfirmationConfig {
    fn check(c: &mut Checker, obj: &Object) {
        c.non_empty(obj, "", "propId", Required);
        c.non_empty(obj, "", "propDescription", Required);
        c.url(obj, "", "propImageUrl", Optional, false);
        c.non_empty(obj, "", "instructions", Required);
        c.boolean(obj, "", "requirePhoto");
        c.boolean(obj, "", "allowPartial");
        c.int(obj, "", "timeoutSeconds", Optional, Bounds::between(1.0, u32::MAX as f64));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriggerMode {
    Threshold,
    Sustained,
    Peak,
}

impl TriggerMode {
    pub const NAMES: [&'static str; 3] = ["threshold", "sustained", "peak"];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoundLevelConfig {
    pub trigger_mode: TriggerMode,
    pub threshold_level: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sustain_duration: Option<f64>,
    pub activity_label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_meter: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_progress: Option<bool>,
}

impl ConfigShape for SoundLevelConfig {
    fn check(c: &mut Checker, obj: &Object) {
        c.one_of(obj, "", "triggerMode", Required, &TriggerMode::NAMES);
        c.int(obj, "", "thresholdLevel", Required, Bounds::between(0.0, 100.0));
        c.number(obj, "", "sustainDuration", Optional, Bounds::at_least(0.0));
        c.non_empty(obj, "", "activityLabel", Required);
        c.text(obj, "", "instructions", Optional);
        c.boolean(obj, "", "showMeter");
        c.boolean(obj, "", "showProgress");
    }
}
