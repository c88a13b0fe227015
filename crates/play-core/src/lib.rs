//! play-core: catálogo de escenarios, estado de ejecución por artefacto y log
//! de eventos de una sesión.
pub mod answer;
pub mod catalog;
pub mod clock;
pub mod constants;
pub mod engine;
pub mod errors;
pub mod event;
pub mod geo;
pub mod hashing;
pub mod state;

pub use catalog::{Scenario, ScenarioCatalog};
pub use clock::{Clock, ManualClock, SharedClock, SystemClock};
pub use engine::{ArtifactEngine, EngineOptions, EngineSnapshot};
pub use errors::CoreEngineError;
pub use event::{ArtifactEvent, ArtifactEventDraft, EventStore, EventType, InMemoryEventStore, Stamped};
pub use state::{initial_state, RuntimeState};
