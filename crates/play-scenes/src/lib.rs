//! play-scenes: escenas conectadas por hotspots, fase de sesión y emisión de
//! triggers hacia sistemas externos.
pub mod error;
pub mod event;
pub mod fixtures;
pub mod navigator;
pub mod snapshot;
pub mod trigger;
pub mod types;

pub use error::NavigatorError;
pub use event::{SceneEvent, SceneEventDraft, SceneEventKind};
pub use navigator::{HotspotOutcome, NavigatorOptions, SceneNavigator, DEFAULT_PHASE};
pub use snapshot::SceneSnapshot;
pub use trigger::{TriggerBus, TriggerFired};
pub use types::{HotspotTarget, MoveOrigin, Participant, Scene, SceneHotspot, TriggerScope};
