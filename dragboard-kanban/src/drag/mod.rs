//! Drag-and-drop interaction: activation sensor, controller and commit sink.

mod change;
mod controller;
mod sensor;

pub use change::{BoardChange, PersistenceSink, RecordingSink};
pub use controller::{DragController, DragOutcome, DragState};
pub use sensor::{Point, PointerSensor, DEFAULT_ACTIVATION_DISTANCE};

use crate::types::EntityRef;
use serde::{Deserialize, Serialize};

/// Drag lifecycle signal, as produced by the host's hit testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "target", rename_all = "snake_case")]
pub enum DragEvent {
    /// Pointer travel passed the activation distance on this entity
    Start(EntityRef),
    /// Pointer is over this droppable, or over nothing
    Over(Option<EntityRef>),
    /// Pointer released over this droppable, or over nothing
    End(Option<EntityRef>),
    /// Gesture aborted by the host (escape key, lost pointer capture)
    Cancel,
}
