//! Constantes del motor de artefactos.
//!
//! `ENGINE_VERSION` entra en el fingerprint de configuración que acompaña a
//! cada `config_updated`; cambiarla altera todos los fingerprints aunque la
//! configuración sea la misma.

pub const ENGINE_VERSION: &str = "P1.0";

/// Prefijo de las pistas enviadas a mano por el host.
pub const CUSTOM_HINT_PREFIX: &str = "custom-";

/// Prefijo de los ids generados para marcadores de replay.
pub const MARKER_ID_PREFIX: &str = "marker-";

/// Radio medio terrestre usado por la distancia haversine.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Rango del medidor de sonido.
pub const SOUND_LEVEL_MAX: u8 = 100;
