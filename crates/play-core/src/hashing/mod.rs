//! Canonicalización JSON y fingerprints de configuración.

pub mod canonical_json;
pub mod hash;

pub use canonical_json::to_canonical_json;
pub use hash::{config_fingerprint, hash_str, hash_value};
