use clap::{Parser, Subcommand};
use play_core::ScenarioCatalog;
use playflow_rust::{telemetry, CONFIG};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

mod commands;

#[derive(Parser)]
#[command(name = "play", about = "Catálogo de artefactos y navegación de escenas")]
#[command(version)]
struct Cli {
    /// Logs en JSON (pisa PLAYFLOW_LOG_JSON)
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Lista los escenarios del catálogo
    Scenarios {
        /// Sólo escenarios de este tipo (p.ej. `keypad`, `qr_gate`)
        #[arg(long = "type")]
        artifact_type: Option<String>,
    },

    /// Valida un archivo JSON de configuración; sale con 2 si es inválido
    Validate { artifact_type: String, file: PathBuf },

    /// Imprime el estado inicial de un escenario
    Init {
        scenario: String,
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Verifica que todos los defaults del catálogo validen
    Check,

    /// Recorrido guionado por las escenas del prototipo
    Walk,
}

fn main() {
    let cli = Cli::parse();
    let mut logging = CONFIG.logging.clone();
    logging.json |= cli.json;
    telemetry::init(&logging);

    let catalog = Arc::new(ScenarioCatalog::builtin());
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let result = match cli.command {
        Commands::Scenarios { artifact_type } => commands::scenarios(&catalog, artifact_type.as_deref(), &mut out),
        Commands::Validate { artifact_type, file } => commands::validate_file(&artifact_type, &file, &mut out),
        Commands::Init { scenario, seed } => commands::init(catalog, &CONFIG, &scenario, seed, &mut out),
        Commands::Check => commands::check(&catalog, &mut out),
        Commands::Walk => commands::walk(catalog, &CONFIG, &mut out),
    };
    let _ = out.flush();

    let code = match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("[play] {e}");
            e.exit_code()
        }
    };
    std::process::exit(code);
}
