//! Instalación del subscriber de `tracing` para los binarios.
//!
//! Las librerías loguean con `log`; `init()` del subscriber instala también el
//! puente `tracing-log`, así que esos registros salen por el mismo lado.
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

/// `RUST_LOG` tiene prioridad sobre el filtro configurado. Llamar una sola
/// vez por proceso; los intentos siguientes se ignoran.
pub fn init(config: &LoggingConfig) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.filter));
    let registry = tracing_subscriber::registry().with(env_filter);
    let result = if config.json {
        registry.with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .try_init()
    } else {
        registry.with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .try_init()
    };
    if let Err(e) = result {
        eprintln!("[playflow] logging ya inicializado: {e}");
    }
}
