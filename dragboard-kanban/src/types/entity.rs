//! Tagged references carried by drag payloads and drop targets.

use super::board::Column;
use super::ids::{ColumnId, TaskId};
use super::task::Task;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A tagged reference to a column or a task.
///
/// Drag payloads and drop targets are compared as whole references, so a
/// column and a task that happen to share a numeric id are never equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "id")]
pub enum EntityRef {
    Column(ColumnId),
    Task(TaskId),
}

impl From<ColumnId> for EntityRef {
    fn from(id: ColumnId) -> Self {
        Self::Column(id)
    }
}

impl From<TaskId> for EntityRef {
    fn from(id: TaskId) -> Self {
        Self::Task(id)
    }
}

impl fmt::Display for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Column(id) => write!(f, "column:{}", id),
            Self::Task(id) => write!(f, "task:{}", id),
        }
    }
}

/// The entity being dragged, cloned at drag-start for overlay rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActiveEntity {
    Column(Column),
    Task(Task),
}

impl ActiveEntity {
    /// Tagged reference to the dragged entity
    pub fn entity_ref(&self) -> EntityRef {
        match self {
            Self::Column(column) => EntityRef::Column(column.id),
            Self::Task(task) => EntityRef::Task(task.id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refs_with_same_number_differ() {
        let column = EntityRef::Column(ColumnId::new(3));
        let task = EntityRef::Task(TaskId::new(3));
        assert_ne!(column, task);
        assert_eq!(column.to_string(), "column:3");
    }

    #[test]
    fn test_entity_ref_payload_shape() {
        let value = serde_json::to_value(EntityRef::Task(TaskId::new(8))).unwrap();
        assert_eq!(value, serde_json::json!({"type": "Task", "id": 8}));
    }
}
