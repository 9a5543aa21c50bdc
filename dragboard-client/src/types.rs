//! API request and response types for the board backend.
//!
//! Responses for boards, columns and tasks deserialize straight into the
//! `dragboard_kanban` model types; only request bodies and the auth payloads
//! live here.

use dragboard_kanban::{BoardId, Column, ColumnId, Task};
use serde::{Deserialize, Serialize};

/// Body of `POST /boards/`
#[derive(Debug, Clone, Serialize)]
pub struct NewBoard {
    pub name: String,
    pub description: String,
}

/// Body of `POST /columns/`
#[derive(Debug, Clone, Serialize)]
pub struct NewColumn {
    pub title: String,
    pub position: u32,
    pub board: BoardId,
}

/// Body of `PUT /columns/{id}/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnUpdate {
    pub title: String,
    pub position: u32,
    pub board: BoardId,
}

impl From<&Column> for ColumnUpdate {
    fn from(column: &Column) -> Self {
        Self {
            title: column.title.clone(),
            position: column.position,
            board: column.board,
        }
    }
}

/// Body of `POST /tasks/`
#[derive(Debug, Clone, Serialize)]
pub struct NewTask {
    pub title: String,
    pub content: String,
    pub column: ColumnId,
    pub position: u32,
}

/// Body of `PUT /tasks/{id}/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskUpdate {
    pub title: String,
    pub content: String,
    pub column: ColumnId,
    pub position: u32,
}

impl From<&Task> for TaskUpdate {
    fn from(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            content: task.content.clone(),
            column: task.column,
            position: task.position,
        }
    }
}

/// Body of `POST /login/`
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Response from `POST /login/`
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user_id: u64,
}

/// Body of `POST /signup/`
#[derive(Debug, Serialize)]
pub struct SignupRequest<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}
