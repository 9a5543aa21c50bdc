//! Changes handed to the persistence collaborator when a gesture commits.

use crate::store::BoardSnapshot;
use crate::types::{Column, Task};
use serde::Serialize;
use std::sync::{Arc, Mutex};

/// A single entity whose persisted fields changed during a gesture
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "entity", rename_all = "snake_case")]
pub enum BoardChange {
    /// Column title or position changed
    Column(Column),
    /// Task content, column or position changed
    Task(Task),
}

/// Receiver for committed changes.
///
/// `submit` must return promptly: the controller calls it from the event
/// handler and does not wait for the write to finish.
pub trait PersistenceSink: Send + Sync {
    fn submit(&self, change: BoardChange);
}

/// Sink that keeps every submitted change in memory.
///
/// Useful for hosts that batch writes themselves, and for tests.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    changes: Arc<Mutex<Vec<BoardChange>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything submitted so far, in submission order
    pub fn changes(&self) -> Vec<BoardChange> {
        self.changes
            .lock()
            .map(|changes| changes.clone())
            .unwrap_or_default()
    }
}

impl PersistenceSink for RecordingSink {
    fn submit(&self, change: BoardChange) {
        if let Ok(mut changes) = self.changes.lock() {
            changes.push(change);
        }
    }
}

/// Columns whose title or position differs from the snapshot
pub(crate) fn column_changes(before: &BoardSnapshot, after: &[Column]) -> Vec<BoardChange> {
    after
        .iter()
        .filter(|column| {
            before.column(column.id).map_or(true, |old| {
                old.title != column.title || old.position != column.position
            })
        })
        .cloned()
        .map(BoardChange::Column)
        .collect()
}

/// Tasks whose content, column or position differs from the snapshot
pub(crate) fn task_changes(before: &BoardSnapshot, after: &[Task]) -> Vec<BoardChange> {
    after
        .iter()
        .filter(|task| {
            before.task(task.id).map_or(true, |old| {
                old.content != task.content
                    || old.column != task.column
                    || old.position != task.position
            })
        })
        .cloned()
        .map(BoardChange::Task)
        .collect()
}
