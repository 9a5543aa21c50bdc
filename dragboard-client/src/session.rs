//! A loaded board plus the drag controller and CRUD actions around it.
//!
//! CRUD goes to the server first and touches the store only once the server
//! accepted it. Drags run the other way round: the store moves immediately
//! and the persistence dispatcher catches the server up afterwards.

use std::sync::Arc;

use dragboard_kanban::{
    BoardStore, Column, ColumnId, DragController, DragEvent, DragOutcome, EntityRef,
    KanbanError, Point, PointerSensor, Task, TaskId,
};
use tracing::{debug, error};

use crate::api::BoardApi;
use crate::dispatch::PersistenceDispatcher;
use crate::error::Result;
use crate::loader::load_board;
use crate::types::{ColumnUpdate, NewColumn, NewTask, TaskUpdate};

pub struct BoardSession {
    api: Arc<dyn BoardApi>,
    store: BoardStore,
    controller: DragController,
    sensor: PointerSensor,
    dispatcher: Arc<PersistenceDispatcher>,
}

impl std::fmt::Debug for BoardSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoardSession")
            .field("store", &self.store)
            .field("controller", &self.controller)
            .field("dispatcher", &self.dispatcher)
            .finish_non_exhaustive()
    }
}

impl BoardSession {
    /// Create an empty session. Must run inside a tokio runtime.
    pub fn new(api: Arc<dyn BoardApi>, activation_distance: f64) -> Result<Self> {
        let dispatcher = Arc::new(PersistenceDispatcher::new(Arc::clone(&api))?);
        Ok(Self {
            controller: DragController::new(dispatcher.clone()),
            sensor: PointerSensor::new(activation_distance),
            store: BoardStore::new(),
            api,
            dispatcher,
        })
    }

    pub fn store(&self) -> &BoardStore {
        &self.store
    }

    pub fn controller(&self) -> &DragController {
        &self.controller
    }

    /// Fetch the board from the server, replacing whatever was loaded.
    ///
    /// On failure the error is logged and the store is emptied.
    pub async fn load(&mut self) -> Result<()> {
        if let Err(e) = load_board(self.api.as_ref(), &mut self.store).await {
            error!("Failed to load board: {}", e);
            self.store.clear();
            return Err(e);
        }
        Ok(())
    }

    // -- Drag input --

    /// Feed one drag lifecycle event to the controller
    pub fn handle_drag(&mut self, event: DragEvent) -> DragOutcome {
        self.controller.handle(&mut self.store, event)
    }

    /// Pointer pressed on a draggable column or task
    pub fn pointer_down(&mut self, entity: EntityRef, at: Point) {
        self.sensor.press(entity, at);
    }

    /// Pointer moved with `over` under it. Starts the drag once the pointer
    /// has travelled past the activation distance, then reports drag-over.
    ///
    /// The move that activates the drag is also a drag-over, so the result
    /// is `Moved` when that first hover already moved something.
    pub fn pointer_move(&mut self, at: Point, over: Option<EntityRef>) -> DragOutcome {
        if let Some(start) = self.sensor.move_to(at) {
            let started = self.handle_drag(start);
            if started != DragOutcome::Started {
                return started;
            }
            return match self.handle_drag(DragEvent::Over(over)) {
                DragOutcome::Moved => DragOutcome::Moved,
                _ => DragOutcome::Started,
            };
        }
        if self.sensor.is_dragging() {
            self.handle_drag(DragEvent::Over(over))
        } else {
            DragOutcome::Ignored
        }
    }

    /// Pointer released over `over`. A press that never activated is a
    /// click and produces no drag events.
    pub fn pointer_up(&mut self, over: Option<EntityRef>) -> DragOutcome {
        if self.sensor.release() {
            self.handle_drag(DragEvent::End(over))
        } else {
            DragOutcome::Ignored
        }
    }

    /// Wait until every persistence request from committed drags finished
    pub async fn flush(&self) {
        self.dispatcher.wait_idle().await;
    }

    // -- CRUD --

    /// Append a column named after its ordinal
    pub async fn add_column(&mut self) -> Result<Column> {
        let board = self.store.board().ok_or(KanbanError::NotLoaded)?.id;
        let n = self.store.columns().len() + 1;
        let request = NewColumn {
            title: format!("New Column {}", n),
            position: self.store.next_column_position(),
            board,
        };
        let column = self.api.create_column(&request).await?;
        debug!("Added column {}", column.id);
        self.store.push_column(column.clone());
        Ok(column)
    }

    pub async fn rename_column(&mut self, id: ColumnId, title: &str) -> Result<Column> {
        let current = self
            .store
            .column(id)
            .ok_or_else(|| KanbanError::column_not_found(id))?;
        let update = ColumnUpdate {
            title: title.to_string(),
            ..ColumnUpdate::from(current)
        };
        let column = self.api.update_column(id, &update).await?;
        self.store.replace_column(column.clone());
        Ok(column)
    }

    /// Delete a column and, with it, all of its tasks
    pub async fn delete_column(&mut self, id: ColumnId) -> Result<Vec<Task>> {
        if self.store.column(id).is_none() {
            return Err(KanbanError::column_not_found(id).into());
        }
        self.api.delete_column(id).await?;
        let removed = self
            .store
            .remove_column(id)
            .map(|(_, tasks)| tasks)
            .unwrap_or_default();
        Ok(removed)
    }

    /// Append a placeholder task to the end of `column`
    pub async fn add_task(&mut self, column: ColumnId) -> Result<Task> {
        let column_title = self
            .store
            .column(column)
            .ok_or_else(|| KanbanError::column_not_found(column))?
            .title
            .clone();
        let n = self.store.tasks().len() + 1;
        let request = NewTask {
            title: format!("Task {} - {}", n, column_title),
            content: format!("New Task {}", n),
            column,
            position: self.store.next_task_position(column),
        };
        let task = self.api.create_task(&request).await?;
        debug!("Added task {} to column {}", task.id, column);
        self.store.push_task(task.clone())?;
        Ok(task)
    }

    pub async fn edit_task(&mut self, id: TaskId, content: &str) -> Result<Task> {
        let current = self
            .store
            .task(id)
            .ok_or_else(|| KanbanError::task_not_found(id))?;
        let update = TaskUpdate {
            content: content.to_string(),
            ..TaskUpdate::from(current)
        };
        let task = self.api.update_task(id, &update).await?;
        self.store.replace_task(task.clone())?;
        Ok(task)
    }

    pub async fn delete_task(&mut self, id: TaskId) -> Result<Task> {
        if self.store.task(id).is_none() {
            return Err(KanbanError::task_not_found(id).into());
        }
        self.api.delete_task(id).await?;
        self.store
            .remove_task(id)
            .ok_or_else(|| KanbanError::task_not_found(id).into())
    }
}
