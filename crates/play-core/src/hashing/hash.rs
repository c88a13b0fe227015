//! Hash helpers sobre blake3.

use blake3::Hasher;
use serde_json::{json, Value};

use super::to_canonical_json;
use crate::constants::ENGINE_VERSION;

/// Hashea un string y devuelve hex.
pub fn hash_str(input: &str) -> String {
    let mut h = Hasher::new();
    h.update(input.as_bytes());
    h.finalize().to_hex().to_string()
}

pub fn hash_value(value: &Value) -> String {
    hash_str(&to_canonical_json(value))
}

/// Fingerprint estable de la configuración efectiva de un escenario.
pub fn config_fingerprint(scenario_id: &str, config: &Value) -> String {
    hash_value(&json!({
        "engine_version": ENGINE_VERSION,
        "scenario_id": scenario_id,
        "config": config,
    }))
}
