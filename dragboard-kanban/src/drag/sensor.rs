//! Pointer activation sensor.
//!
//! A press only becomes a drag once the pointer has travelled further than
//! the activation distance, so a plain click on a card never starts one.

use super::DragEvent;
use crate::types::EntityRef;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Pointer travel, in pixels, before a press activates a drag
pub const DEFAULT_ACTIVATION_DISTANCE: f64 = 3.0;

/// A pointer location in screen pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

#[derive(Debug, Clone, Copy)]
struct Press {
    entity: EntityRef,
    origin: Point,
    activated: bool,
}

/// Turns raw press/move/release input into a single drag-start
#[derive(Debug, Clone)]
pub struct PointerSensor {
    activation_distance: f64,
    press: Option<Press>,
}

impl Default for PointerSensor {
    fn default() -> Self {
        Self::new(DEFAULT_ACTIVATION_DISTANCE)
    }
}

impl PointerSensor {
    pub fn new(activation_distance: f64) -> Self {
        Self {
            activation_distance: activation_distance.max(0.0),
            press: None,
        }
    }

    pub fn activation_distance(&self) -> f64 {
        self.activation_distance
    }

    /// Pointer went down on a draggable entity
    pub fn press(&mut self, entity: EntityRef, at: Point) {
        self.press = Some(Press {
            entity,
            origin: at,
            activated: false,
        });
    }

    /// Pointer moved. Returns the drag-start the first time the travel from
    /// the press origin strictly exceeds the activation distance.
    pub fn move_to(&mut self, at: Point) -> Option<DragEvent> {
        let press = self.press.as_mut()?;
        if press.activated {
            return None;
        }
        let travelled = press.origin.distance_to(at);
        if travelled > self.activation_distance {
            press.activated = true;
            trace!(travelled, "Drag activated for {}", press.entity);
            Some(DragEvent::Start(press.entity))
        } else {
            None
        }
    }

    /// Pointer went up. Returns true when the press had turned into a drag,
    /// false when it was a click.
    pub fn release(&mut self) -> bool {
        self.press.take().is_some_and(|p| p.activated)
    }

    pub fn is_dragging(&self) -> bool {
        self.press.is_some_and(|p| p.activated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TaskId;

    fn task_ref() -> EntityRef {
        EntityRef::Task(TaskId::new(1))
    }

    #[test]
    fn test_exact_threshold_does_not_activate() {
        let mut sensor = PointerSensor::default();
        sensor.press(task_ref(), Point::new(10.0, 10.0));
        assert!(sensor.move_to(Point::new(13.0, 10.0)).is_none());
        assert!(!sensor.is_dragging());
    }

    #[test]
    fn test_activates_once() {
        let mut sensor = PointerSensor::default();
        sensor.press(task_ref(), Point::new(0.0, 0.0));
        assert!(sensor.move_to(Point::new(1.0, 1.0)).is_none());
        assert_eq!(
            sensor.move_to(Point::new(3.0, 3.0)),
            Some(DragEvent::Start(task_ref()))
        );
        assert!(sensor.move_to(Point::new(30.0, 3.0)).is_none());
        assert!(sensor.release());
        assert!(!sensor.is_dragging());
    }

    #[test]
    fn test_click_is_not_a_drag() {
        let mut sensor = PointerSensor::default();
        sensor.press(task_ref(), Point::new(5.0, 5.0));
        sensor.move_to(Point::new(6.0, 5.0));
        assert!(!sensor.release());
    }

    #[test]
    fn test_move_without_press() {
        let mut sensor = PointerSensor::new(0.0);
        assert!(sensor.move_to(Point::new(100.0, 0.0)).is_none());
    }
}
