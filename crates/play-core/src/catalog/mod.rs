//! Catálogo de escenarios: lista fija y ordenada que une un tipo de artefacto
//! con una configuración por defecto y los roles que pueden operarlo.
mod builtin;

use indexmap::IndexMap;
use log::{info, warn};
use play_domain::{validate, ArtifactConfig, ArtifactType, Role, ValidationError};
use serde::Serialize;
use serde_json::Value;

use crate::errors::CoreEngineError;

pub use builtin::builtin_scenarios;

/// Escenario inmutable. El esquema de configuración queda implícito en
/// `artifact_type`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    pub id: String,
    pub artifact_type: ArtifactType,
    pub label: String,
    pub description: String,
    pub allowed_roles: Vec<Role>,
    pub default_config: Value,
}

impl Scenario {
    pub fn new(id: &str, artifact_type: ArtifactType, label: &str, description: &str, default_config: Value) -> Self {
        Self { id: id.to_string(),
               artifact_type,
               label: label.to_string(),
               description: description.to_string(),
               allowed_roles: Role::ALL.to_vec(),
               default_config }
    }

    pub fn with_roles(mut self, roles: &[Role]) -> Self {
        self.allowed_roles = roles.to_vec();
        self
    }

    /// Valida `candidate` (o el default si es `None`) contra el esquema del
    /// escenario.
    pub fn parse_config(&self, candidate: Option<&Value>) -> Result<ArtifactConfig, ValidationError> {
        validate(self.artifact_type, candidate.unwrap_or(&self.default_config))
    }

    pub fn allows(&self, role: Role) -> bool {
        self.allowed_roles.contains(&role)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ScenarioCatalog {
    scenarios: IndexMap<String, Scenario>,
}

impl ScenarioCatalog {
    /// Construye el catálogo; ids duplicados son un error de autoría.
    pub fn new(scenarios: Vec<Scenario>) -> Result<Self, CoreEngineError> {
        let mut map = IndexMap::with_capacity(scenarios.len());
        for s in scenarios {
            if map.contains_key(&s.id) {
                return Err(CoreEngineError::CatalogInvariant(format!("duplicate scenario id '{}'", s.id)));
            }
            map.insert(s.id.clone(), s);
        }
        Ok(Self { scenarios: map })
    }

    /// Catálogo incorporado (sandbox). Pasa por `new`; ante un id repetido
    /// queda la primera aparición y se avisa.
    pub fn builtin() -> Self {
        match Self::new(builtin_scenarios()) {
            Ok(catalog) => catalog,
            Err(e) => {
                warn!("builtin catalog: {e}");
                let mut scenarios = IndexMap::new();
                for s in builtin_scenarios() {
                    scenarios.entry(s.id.clone()).or_insert(s);
                }
                Self { scenarios }
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&Scenario> {
        self.scenarios.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.scenarios.contains_key(id)
    }

    /// Escenarios en orden de inserción.
    pub fn list(&self) -> impl Iterator<Item = &Scenario> {
        self.scenarios.values()
    }

    pub fn ids(&self) -> Vec<&str> {
        self.scenarios.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    pub fn first(&self) -> Option<&Scenario> {
        self.scenarios.values().next()
    }

    pub fn first_of(&self, artifact_type: ArtifactType) -> Option<&Scenario> {
        self.list().find(|s| s.artifact_type == artifact_type)
    }

    pub fn allows(&self, id: &str, role: Role) -> bool {
        self.get(id).map(|s| s.allows(role)).unwrap_or(false)
    }

    /// Chequeo de arranque: cada default valida contra su propio esquema.
    pub fn self_check(&self) -> Result<(), CoreEngineError> {
        for s in self.list() {
            if let Err(e) = s.parse_config(None) {
                warn!("scenario '{}' default config invalid: {:?}", s.id, e.paths());
                return Err(CoreEngineError::CatalogInvariant(format!("scenario '{}': {e}", s.id)));
            }
            if s.allowed_roles.is_empty() {
                return Err(CoreEngineError::CatalogInvariant(format!("scenario '{}' allows no role", s.id)));
            }
        }
        info!("catalog self-check ok ({} scenarios)", self.len());
        Ok(())
    }
}
