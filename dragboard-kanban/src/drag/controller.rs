//! Drag Interaction Controller
//!
//! One gesture runs Idle → Dragging → Idle. While dragging, every drag-over
//! re-evaluates the active entity against whatever is under the pointer and
//! applies the live task moves. Column reorders wait for the drop. A drop
//! commits by diffing the store against the snapshot taken at drag-start and
//! handing each changed entity to the [`PersistenceSink`].

use super::change::{column_changes, task_changes, BoardChange, PersistenceSink};
use super::DragEvent;
use crate::store::{BoardSnapshot, BoardStore};
use crate::types::{ActiveEntity, ColumnId, EntityRef};
use std::sync::Arc;
use tracing::{debug, info, trace};

/// Where the controller is in the gesture lifecycle
#[derive(Debug, Clone, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        active: ActiveEntity,
        snapshot: BoardSnapshot,
    },
}

/// What handling an event did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragOutcome {
    /// Event did not apply in the current state
    Ignored,
    /// A gesture began
    Started,
    /// Drag-over mutated the store
    Moved,
    /// Drag-over left the store as it was
    Unchanged,
    /// Gesture ended without a drop target; the store was restored
    Abandoned,
    /// Gesture ended with a drop; these changes were submitted
    Committed(Vec<BoardChange>),
}

/// Interprets drag lifecycle events against a [`BoardStore`]
pub struct DragController {
    state: DragState,
    sink: Arc<dyn PersistenceSink>,
}

impl std::fmt::Debug for DragController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DragController")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl DragController {
    pub fn new(sink: Arc<dyn PersistenceSink>) -> Self {
        Self {
            state: DragState::Idle,
            sink,
        }
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// The entity to render in the drag overlay, if a gesture is running
    pub fn active(&self) -> Option<&ActiveEntity> {
        match &self.state {
            DragState::Idle => None,
            DragState::Dragging { active, .. } => Some(active),
        }
    }

    /// Dispatch one lifecycle event
    pub fn handle(&mut self, store: &mut BoardStore, event: DragEvent) -> DragOutcome {
        match event {
            DragEvent::Start(entity) => self.drag_start(store, entity),
            DragEvent::Over(over) => self.drag_over(store, over),
            DragEvent::End(over) => self.drag_end(store, over),
            DragEvent::Cancel => self.drag_cancel(store),
        }
    }

    /// Classify the dragged entity and remember it for the overlay
    pub fn drag_start(&mut self, store: &BoardStore, entity: EntityRef) -> DragOutcome {
        if self.is_dragging() {
            trace!("Ignoring drag-start for {} while dragging", entity);
            return DragOutcome::Ignored;
        }

        let active = match entity {
            EntityRef::Column(id) => store.column(id).cloned().map(ActiveEntity::Column),
            EntityRef::Task(id) => store.task(id).cloned().map(ActiveEntity::Task),
        };
        let Some(active) = active else {
            trace!("Ignoring drag-start for unknown {}", entity);
            return DragOutcome::Ignored;
        };

        debug!("Drag started on {}", entity);
        self.state = DragState::Dragging {
            active,
            snapshot: store.snapshot(),
        };
        DragOutcome::Started
    }

    /// Apply live task moves for whatever is under the pointer
    pub fn drag_over(&mut self, store: &mut BoardStore, over: Option<EntityRef>) -> DragOutcome {
        let DragState::Dragging { active, .. } = &self.state else {
            trace!("Ignoring drag-over while idle");
            return DragOutcome::Ignored;
        };
        let Some(over) = over else {
            return DragOutcome::Unchanged;
        };
        let active = active.entity_ref();
        if active == over {
            return DragOutcome::Unchanged;
        }

        let moved = match (active, over) {
            (EntityRef::Task(task), EntityRef::Task(target)) => {
                store.move_task_over_task(task, target)
            }
            (EntityRef::Task(task), EntityRef::Column(column)) => {
                store.move_task_over_column(task, column)
            }
            // Columns reorder on drop only
            (EntityRef::Column(_), _) => false,
        };

        if moved {
            DragOutcome::Moved
        } else {
            DragOutcome::Unchanged
        }
    }

    /// Finish the gesture, committing whatever changed
    pub fn drag_end(&mut self, store: &mut BoardStore, over: Option<EntityRef>) -> DragOutcome {
        let DragState::Dragging { active, snapshot } = std::mem::take(&mut self.state) else {
            trace!("Ignoring drag-end while idle");
            return DragOutcome::Ignored;
        };

        let Some(over) = over else {
            debug!("Drag on {} abandoned", active.entity_ref());
            store.restore(snapshot);
            return DragOutcome::Abandoned;
        };

        let changes = match &active {
            ActiveEntity::Column(column) => match drop_column(store, over) {
                Some(target) if target != column.id => {
                    store.move_column(column.id, target);
                    store.resequence_columns();
                    column_changes(&snapshot, store.columns())
                }
                _ => Vec::new(),
            },
            // Nothing moved while hovering, so stored positions stay as loaded
            ActiveEntity::Task(_) if store.tasks() == snapshot.tasks() => Vec::new(),
            ActiveEntity::Task(task) => {
                let mut touched = vec![task.column];
                if let Some(current) = store.task(task.id) {
                    if current.column != task.column {
                        touched.push(current.column);
                    }
                }
                store.resequence_tasks(&touched);
                task_changes(&snapshot, store.tasks())
            }
        };

        info!(
            changes = changes.len(),
            "Committed drag of {}",
            active.entity_ref()
        );
        for change in &changes {
            self.sink.submit(change.clone());
        }
        DragOutcome::Committed(changes)
    }

    /// Abort the gesture as if it ended with no drop target
    pub fn drag_cancel(&mut self, store: &mut BoardStore) -> DragOutcome {
        self.drag_end(store, None)
    }
}

/// Column a dragged column should land on. A task target stands in for the
/// column that owns it.
fn drop_column(store: &BoardStore, over: EntityRef) -> Option<ColumnId> {
    match over {
        EntityRef::Column(id) => store.column(id).map(|c| c.id),
        EntityRef::Task(id) => store.task(id).map(|t| t.column),
    }
}
