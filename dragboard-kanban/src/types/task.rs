//! Task type

use super::ids::{ColumnId, TaskId};
use serde::{Deserialize, Serialize};

/// A task/card on the kanban board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub content: String,
    /// Owning column. Older front-ends send this as `columnId`.
    #[serde(alias = "columnId")]
    pub column: ColumnId,
    pub position: u32,
}

impl Task {
    /// Create a new task in a column
    pub fn new(
        id: impl Into<TaskId>,
        column: impl Into<ColumnId>,
        title: impl Into<String>,
        position: u32,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: String::new(),
            column: column.into(),
            position,
        }
    }

    /// Set the content body
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_accepts_column_id_alias() {
        let json = r#"{"id": 5, "title": "T", "content": "body", "columnId": 2, "position": 0}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.column, ColumnId::new(2));
        assert_eq!(task.content, "body");
    }

    #[test]
    fn test_task_serializes_column_field() {
        let task = Task::new(1, 4, "Write docs", 3);
        let value = serde_json::to_value(&task).unwrap();
        assert_eq!(value["column"], 4);
        assert!(value.get("columnId").is_none());
    }
}
