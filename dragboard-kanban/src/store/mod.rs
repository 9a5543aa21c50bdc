//! Board State Store
//!
//! Holds the ordered columns and the flat, ordered task sequence for the
//! single active board. The displayed order of `columns` is authoritative;
//! within a column, tasks render in the order they appear in `tasks`.
//!
//! Mutations never touch an element in place: each one builds a new sequence
//! with the helpers in [`reorder`] and assigns it back in one step.

pub mod reorder;

use crate::error::{KanbanError, Result};
use crate::types::{Board, Column, ColumnId, Task, TaskId};
use reorder::{array_move, map_at};
use tracing::debug;

/// Frozen copy of the ordered sequences, taken at drag-start
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSnapshot {
    columns: Vec<Column>,
    tasks: Vec<Task>,
}

impl BoardSnapshot {
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Look up a task as it was when the snapshot was taken
    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Look up a column as it was when the snapshot was taken
    pub fn column(&self, id: ColumnId) -> Option<&Column> {
        self.columns.iter().find(|c| c.id == id)
    }
}

/// In-memory source of truth for rendering and reordering
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardStore {
    board: Option<Board>,
    columns: Vec<Column>,
    tasks: Vec<Task>,
}

impl BoardStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all state with a freshly loaded board.
    ///
    /// Columns from other boards are dropped, as are tasks whose column is
    /// not on this board. Both sequences are stably sorted by position.
    pub fn seed(&mut self, board: Board, columns: Vec<Column>, tasks: Vec<Task>) {
        let mut columns: Vec<Column> = columns
            .into_iter()
            .filter(|c| c.board == board.id)
            .collect();
        columns.sort_by_key(|c| c.position);

        let total = tasks.len();
        let mut tasks: Vec<Task> = tasks
            .into_iter()
            .filter(|t| columns.iter().any(|c| c.id == t.column))
            .collect();
        tasks.sort_by_key(|t| t.position);

        if tasks.len() != total {
            debug!(
                dropped = total - tasks.len(),
                "Dropped tasks without a column on board {}", board.id
            );
        }

        debug!(
            columns = columns.len(),
            tasks = tasks.len(),
            "Seeded board {}",
            board.id
        );
        self.board = Some(board);
        self.columns = columns;
        self.tasks = tasks;
    }

    /// Forget everything
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn is_empty(&self) -> bool {
        self.board.is_none() && self.columns.is_empty() && self.tasks.is_empty()
    }

    pub fn column(&self, id: ColumnId) -> Option<&Column> {
        self.columns.iter().find(|c| c.id == id)
    }

    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn column_index(&self, id: ColumnId) -> Option<usize> {
        self.columns.iter().position(|c| c.id == id)
    }

    pub fn task_index(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }

    /// Tasks of one column in render order
    pub fn tasks_in(&self, column: ColumnId) -> impl Iterator<Item = &Task> + '_ {
        self.tasks.iter().filter(move |t| t.column == column)
    }

    /// Position for a column appended at the end
    pub fn next_column_position(&self) -> u32 {
        self.columns.len() as u32
    }

    /// Position for a task appended to `column`
    pub fn next_task_position(&self, column: ColumnId) -> u32 {
        self.tasks_in(column).count() as u32
    }

    // -- Drag mutations --

    /// Relocate column `from` to the index `to` currently occupies.
    ///
    /// Returns false, without touching anything, when the ids are equal or
    /// either one is unknown.
    pub fn move_column(&mut self, from: ColumnId, to: ColumnId) -> bool {
        if from == to {
            return false;
        }
        let (Some(from_index), Some(to_index)) = (self.column_index(from), self.column_index(to))
        else {
            return false;
        };

        self.columns = array_move(&self.columns, from_index, to_index);
        debug!("Moved column {} to index {}", from, to_index);
        true
    }

    /// Reorder `task` to the index `target` currently occupies.
    ///
    /// When the two tasks sit in different columns the dragged task adopts
    /// the target's column first.
    pub fn move_task_over_task(&mut self, task: TaskId, target: TaskId) -> bool {
        if task == target {
            return false;
        }
        let (Some(from_index), Some(to_index)) = (self.task_index(task), self.task_index(target))
        else {
            return false;
        };

        let target_column = self.tasks[to_index].column;
        let tasks = if self.tasks[from_index].column != target_column {
            debug!("Task {} migrates to column {}", task, target_column);
            map_at(&self.tasks, from_index, |t| Task {
                column: target_column,
                ..t.clone()
            })
        } else {
            self.tasks.clone()
        };

        self.tasks = array_move(&tasks, from_index, to_index);
        debug!("Moved task {} to index {}", task, to_index);
        true
    }

    /// Reassign `task` to `column`, keeping its place in the flat sequence.
    pub fn move_task_over_column(&mut self, task: TaskId, column: ColumnId) -> bool {
        if self.column_index(column).is_none() {
            return false;
        }
        let Some(index) = self.task_index(task) else {
            return false;
        };
        if self.tasks[index].column == column {
            return false;
        }

        self.tasks = map_at(&self.tasks, index, |t| Task {
            column,
            ..t.clone()
        });
        debug!("Task {} reassigned to column {}", task, column);
        true
    }

    // -- CRUD mirrors --

    pub fn set_board(&mut self, board: Board) {
        self.board = Some(board);
    }

    /// Append a column after the current last one
    pub fn push_column(&mut self, column: Column) {
        let mut columns = self.columns.clone();
        columns.push(column);
        self.columns = columns;
    }

    /// Replace a column by id, keeping its place. Returns false if unknown.
    pub fn replace_column(&mut self, column: Column) -> bool {
        let Some(index) = self.column_index(column.id) else {
            return false;
        };
        self.columns = map_at(&self.columns, index, |_| column.clone());
        true
    }

    /// Remove a column together with every task it owns
    pub fn remove_column(&mut self, id: ColumnId) -> Option<(Column, Vec<Task>)> {
        let index = self.column_index(id)?;
        let removed = self.columns[index].clone();

        let (orphans, kept): (Vec<Task>, Vec<Task>) =
            self.tasks.iter().cloned().partition(|t| t.column == id);
        self.columns = self
            .columns
            .iter()
            .filter(|c| c.id != id)
            .cloned()
            .collect();
        self.tasks = kept;

        debug!(tasks = orphans.len(), "Removed column {}", id);
        Some((removed, orphans))
    }

    /// Append a task to the flat sequence. Its column must exist.
    pub fn push_task(&mut self, task: Task) -> Result<()> {
        if self.column_index(task.column).is_none() {
            return Err(KanbanError::column_not_found(task.column));
        }
        let mut tasks = self.tasks.clone();
        tasks.push(task);
        self.tasks = tasks;
        Ok(())
    }

    /// Replace a task by id, keeping its place. Its column must exist.
    pub fn replace_task(&mut self, task: Task) -> Result<()> {
        if self.column_index(task.column).is_none() {
            return Err(KanbanError::column_not_found(task.column));
        }
        let index = self
            .task_index(task.id)
            .ok_or_else(|| KanbanError::task_not_found(task.id))?;
        self.tasks = map_at(&self.tasks, index, |_| task.clone());
        Ok(())
    }

    pub fn remove_task(&mut self, id: TaskId) -> Option<Task> {
        let index = self.task_index(id)?;
        let removed = self.tasks[index].clone();
        self.tasks = self.tasks.iter().filter(|t| t.id != id).cloned().collect();
        Some(removed)
    }

    // -- Position bookkeeping --

    /// Rewrite every column position to its displayed index
    pub fn resequence_columns(&mut self) {
        self.columns = self
            .columns
            .iter()
            .enumerate()
            .map(|(index, c)| Column {
                position: index as u32,
                ..c.clone()
            })
            .collect();
    }

    /// Rewrite task positions in the given columns to their render rank
    pub fn resequence_tasks(&mut self, columns: &[ColumnId]) {
        let mut ranks: Vec<(ColumnId, u32)> = columns.iter().map(|c| (*c, 0)).collect();
        self.tasks = self
            .tasks
            .iter()
            .map(|t| match ranks.iter_mut().find(|(c, _)| *c == t.column) {
                Some((_, rank)) => {
                    let task = Task {
                        position: *rank,
                        ..t.clone()
                    };
                    *rank += 1;
                    task
                }
                None => t.clone(),
            })
            .collect();
    }

    // -- Gesture support --

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            columns: self.columns.clone(),
            tasks: self.tasks.clone(),
        }
    }

    /// Put the sequences back exactly as they were in `snapshot`
    pub fn restore(&mut self, snapshot: BoardSnapshot) {
        self.columns = snapshot.columns;
        self.tasks = snapshot.tasks;
    }
}
