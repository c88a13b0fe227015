//! Registro de eventos append-only y tipos de evento del motor.

mod store;
mod types;

pub use store::{EventStore, InMemoryEventStore, Stamped};
pub use types::{ArtifactEvent, ArtifactEventDraft, EventType};
