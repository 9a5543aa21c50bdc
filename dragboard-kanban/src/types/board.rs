//! Board-level types: Board, Column

use super::ids::{BoardId, ColumnId};
use serde::{Deserialize, Serialize};

/// The kanban board - just metadata (name + description).
/// Columns and tasks are loaded from their own endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub id: BoardId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Board {
    /// Create a board with the given id and name
    pub fn new(id: impl Into<BoardId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            created_at: None,
            updated_at: None,
        }
    }

    /// Add a description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A column is a vertical lane holding an ordered sequence of tasks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    pub position: u32,
    pub board: BoardId,
}

impl Column {
    /// Create a column at the given position
    pub fn new(
        id: impl Into<ColumnId>,
        board: impl Into<BoardId>,
        title: impl Into<String>,
        position: u32,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            position,
            board: board.into(),
        }
    }
}
