//! Implementación de cada subcomando. Escriben en `out` para poder testearlos
//! sin capturar stdout; devuelven el código de salida.
use play_core::{ArtifactEngine, ScenarioCatalog};
use play_domain::{validate, ArtifactType};
use play_scenes::SceneNavigator;
use playflow_rust::{AppConfig, AppError};
use serde_json::Value;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

pub fn scenarios(catalog: &ScenarioCatalog, filter: Option<&str>, out: &mut impl Write) -> Result<i32, AppError> {
    let filter = filter.map(str::parse::<ArtifactType>).transpose()?;
    for s in catalog.list().filter(|s| filter.map_or(true, |t| s.artifact_type == t)) {
        writeln!(out, "{:<28} {:<18} {}", s.id, s.artifact_type.as_str(), s.label)?;
    }
    Ok(0)
}

/// Valida el JSON de `file` contra el esquema de `artifact_type`. Lista todos
/// los problemas y sale con 2 si hay alguno.
pub fn validate_file(artifact_type: &str, file: &Path, out: &mut impl Write) -> Result<i32, AppError> {
    let artifact_type: ArtifactType = artifact_type.parse()?;
    let raw = std::fs::read_to_string(file)?;
    let candidate: Value = serde_json::from_str(&raw)?;
    match validate(artifact_type, &candidate) {
        Ok(config) => {
            writeln!(out, "ok: {}", config.artifact_type())?;
            Ok(0)
        }
        Err(e) => {
            writeln!(out, "{e}")?;
            for issue in &e.issues {
                writeln!(out, "  - {issue}")?;
            }
            Ok(2)
        }
    }
}

/// Estado inicial del escenario con su configuración por defecto.
pub fn init(catalog: Arc<ScenarioCatalog>,
            config: &AppConfig,
            scenario_id: &str,
            seed: Option<u64>,
            out: &mut impl Write)
            -> Result<i32, AppError> {
    let mut options = config.engine_options(None);
    options.seed = seed.or(options.seed);
    let mut engine = ArtifactEngine::new(catalog, options);
    let state = engine.initial_for(scenario_id, None)?;
    writeln!(out, "{}", serde_json::to_string_pretty(&state)?)?;
    Ok(0)
}

pub fn check(catalog: &ScenarioCatalog, out: &mut impl Write) -> Result<i32, AppError> {
    catalog.self_check()?;
    writeln!(out, "{} escenarios ok", catalog.len())?;
    Ok(0)
}

/// Recorrido guionado por el grafo del prototipo; imprime el log de escenas.
pub fn walk(catalog: Arc<ScenarioCatalog>, config: &AppConfig, out: &mut impl Write) -> Result<i32, AppError> {
    let mut nav = SceneNavigator::new(catalog, config.navigator_options(None));
    let triggers = nav.subscribe_triggers();
    let script: [(&str, &str); 5] = [("map", "to-room-a"),
                                     ("room_a", "safe"),
                                     ("room_a", "back"),
                                     ("map", "to-room-b"),
                                     ("room_b", "switch")];
    for (i, (scene, hotspot)) in script.iter().enumerate() {
        if i == 2 {
            nav.set_phase("search");
            nav.click_hotspot("room_a", "safe");
            nav.close_artifact();
        }
        if i == 4 {
            nav.set_phase("finale");
        }
        let outcome = nav.click_hotspot(scene, hotspot);
        log::debug!("{scene}/{hotspot}: {outcome:?}");
    }
    for ev in nav.events() {
        writeln!(out,
                 "#{:<3} {:<20} {:<11} {:<4} {}",
                 ev.id,
                 ev.kind.as_str(),
                 ev.role.as_str(),
                 ev.participant_id.as_deref().unwrap_or("-"),
                 ev.payload)?;
    }
    for fired in triggers.try_iter() {
        writeln!(out, "trigger {} -> {}", fired.ids.join(","), fired.scope)?;
    }
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn run<F>(f: F) -> (i32, String)
        where F: FnOnce(&mut Vec<u8>) -> Result<i32, AppError>
    {
        let mut buf = Vec::new();
        let code = f(&mut buf).unwrap();
        (code, String::from_utf8(buf).unwrap())
    }

    fn temp_json(name: &str, value: &Value) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("play-cli-{}-{name}.json", std::process::id()));
        std::fs::write(&path, value.to_string()).unwrap();
        path
    }

    #[test]
    fn test_scenarios_filter_by_type() {
        let catalog = ScenarioCatalog::builtin();
        let (code, text) = run(|out| scenarios(&catalog, Some("keypad"), out));
        assert_eq!(code, 0);
        assert!(text.lines().count() >= 1);
        assert!(text.lines().all(|l| l.contains("keypad")));
    }

    #[test]
    fn test_unknown_type_is_an_error() {
        let catalog = ScenarioCatalog::builtin();
        let err = scenarios(&catalog, Some("laser"), &mut Vec::new()).unwrap_err();
        assert!(matches!(err, AppError::Domain(_)));
    }

    #[test]
    fn test_validate_reports_every_issue() {
        let path = temp_json("bad", &json!({ "correctCode": "", "codeLength": 0 }));
        let (code, text) = run(|out| validate_file("keypad", &path, out));
        assert_eq!(code, 2);
        assert!(text.lines().filter(|l| l.starts_with("  - ")).count() >= 2);
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_init_prints_state_json() {
        let catalog = Arc::new(ScenarioCatalog::builtin());
        let (code, text) = run(|out| init(catalog, &AppConfig::default(), "keypad-4-digits", Some(1), out));
        assert_eq!(code, 0);
        let state: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(state["kind"], "keypad");
    }

    #[test]
    fn test_walk_ends_with_trigger() {
        let catalog = Arc::new(ScenarioCatalog::builtin());
        let (code, text) = run(|out| walk(catalog, &AppConfig::default(), out));
        assert_eq!(code, 0);
        assert!(text.contains("trigger_fire"));
        assert!(text.ends_with("trigger lights_off -> session\n"));
    }
}
