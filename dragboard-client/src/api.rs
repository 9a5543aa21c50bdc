//! The board backend as seen by the session and the persistence dispatcher

use async_trait::async_trait;
use dragboard_kanban::{Board, Column, ColumnId, Task, TaskId};

use crate::error::Result;
use crate::types::{ColumnUpdate, NewBoard, NewColumn, NewTask, TaskUpdate};

/// Boards, columns and tasks over some transport.
///
/// [`BoardClient`](crate::BoardClient) is the HTTP implementation. Tests and
/// embedders can substitute their own.
#[async_trait]
pub trait BoardApi: Send + Sync {
    async fn list_boards(&self) -> Result<Vec<Board>>;
    async fn create_board(&self, board: &NewBoard) -> Result<Board>;

    async fn list_columns(&self) -> Result<Vec<Column>>;
    async fn create_column(&self, column: &NewColumn) -> Result<Column>;
    async fn update_column(&self, id: ColumnId, update: &ColumnUpdate) -> Result<Column>;
    async fn delete_column(&self, id: ColumnId) -> Result<()>;

    async fn list_tasks(&self) -> Result<Vec<Task>>;
    async fn create_task(&self, task: &NewTask) -> Result<Task>;
    async fn update_task(&self, id: TaskId, update: &TaskUpdate) -> Result<Task>;
    async fn delete_task(&self, id: TaskId) -> Result<()>;
}
