//! PlayFlow Rust Library
//!
//! Fachada del workspace:
//! - Re-exporta `play_domain`, `play_core` y `play_scenes`.
//! - Expone `config` (entorno / `.env`) y `telemetry` para los binarios.
//! - `Session` junta un motor de artefactos y un navegador de escenas que
//!   comparten catálogo y reloj.

pub mod config;
pub mod errors;
pub mod session;
pub mod telemetry;

pub use play_core as core;
pub use play_domain as domain;
pub use play_scenes as scenes;

pub use config::{AppConfig, CONFIG};
pub use errors::AppError;
pub use session::Session;
