//! Error types for the board model

use thiserror::Error;

/// Result type for board operations
pub type Result<T> = std::result::Result<T, KanbanError>;

/// Errors raised by board lookups.
///
/// Drag and move primitives never return these; a missing id there is a
/// silent no-op.
#[derive(Debug, Error)]
pub enum KanbanError {
    /// No board has been loaded
    #[error("board not loaded")]
    NotLoaded,

    /// Task not found
    #[error("task not found: {id}")]
    TaskNotFound { id: String },

    /// Column not found
    #[error("column not found: {id}")]
    ColumnNotFound { id: String },

    /// Invalid field value
    #[error("invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

impl KanbanError {
    /// Create an invalid value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a column-not-found error
    pub fn column_not_found(id: impl ToString) -> Self {
        Self::ColumnNotFound { id: id.to_string() }
    }

    /// Create a task-not-found error
    pub fn task_not_found(id: impl ToString) -> Self {
        Self::TaskNotFound { id: id.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = KanbanError::task_not_found(12);
        assert_eq!(err.to_string(), "task not found: 12");
    }

    #[test]
    fn test_invalid_value() {
        let err = KanbanError::invalid_value("column id", "not a number");
        assert!(err.to_string().contains("not a number"));
    }
}
