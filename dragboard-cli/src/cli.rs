//! CLI definition for the Dragboard command-line interface.

use clap::{Parser, Subcommand};
use dragboard_kanban::{ColumnId, TaskId};

/// Dragboard - a kanban board client for the terminal.
///
/// Drag gestures are replayed as start/over/end events against the loaded
/// board, exactly as a pointer would produce them, and the resulting moves
/// are saved to the server.
#[derive(Parser, Debug)]
#[command(name = "dragboard")]
#[command(version)]
#[command(about = "Kanban board client with drag-and-drop reordering")]
#[command(
    long_about = "Dragboard shows and edits a kanban board served by a boards/columns/tasks \
    REST API. Moves are applied the way a drag would apply them and then saved.\n\n\
    Configuration is read from ~/.dragboard/config.toml and ./.dragboard/config.toml.\n\n\
    Environment variables:\n  \
    DRAGBOARD_API_URL           Override the boards API URL\n  \
    DRAGBOARD_AUTH_URL          Override the login/signup URL\n  \
    DRAGBOARD_TOKEN             Provide an auth token without logging in\n  \
    DRAGBOARD_CREDENTIALS_PATH  Override the credentials file location"
)]
pub struct Cli {
    /// Enable debug output to stderr
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Server root serving both the board and auth endpoints
    #[arg(long, global = true, value_name = "URL")]
    pub server: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log in and store the token
    Login {
        /// Prompted for when omitted
        #[arg(short, long)]
        username: Option<String>,
        /// Prompted for when omitted
        #[arg(long)]
        password: Option<String>,
    },

    /// Create a new account
    Signup {
        username: String,
        email: String,
        /// Prompted for when omitted
        #[arg(long)]
        password: Option<String>,
    },

    /// Delete the stored token
    Logout,

    /// Show the board
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Append a new column
    AddColumn,

    /// Rename a column
    RenameColumn { column: ColumnId, title: String },

    /// Delete a column and all of its tasks
    DeleteColumn { column: ColumnId },

    /// Add a task to the bottom of a column
    AddTask { column: ColumnId },

    /// Replace a task's content
    EditTask { task: TaskId, content: String },

    /// Delete a task
    DeleteTask { task: TaskId },

    /// Drag a column onto another column
    MoveColumn { column: ColumnId, onto: ColumnId },

    /// Drag a task onto another task or into a column
    MoveTask {
        task: TaskId,
        /// Drop onto this task, taking its place
        #[arg(long, conflicts_with = "column", required_unless_present = "column")]
        onto: Option<TaskId>,
        /// Drop into this column's empty area
        #[arg(long)]
        column: Option<ColumnId>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_move_task_onto_task() {
        let cli = Cli::try_parse_from(["dragboard", "move-task", "100", "--onto", "101"]).unwrap();
        match cli.command {
            Commands::MoveTask { task, onto, column } => {
                assert_eq!(task, TaskId::new(100));
                assert_eq!(onto, Some(TaskId::new(101)));
                assert_eq!(column, None);
            }
            other => panic!("Expected MoveTask, got {:?}", other),
        }
    }

    #[test]
    fn test_move_task_needs_a_target() {
        assert!(Cli::try_parse_from(["dragboard", "move-task", "100"]).is_err());
        assert!(Cli::try_parse_from([
            "dragboard", "move-task", "100", "--onto", "1", "--column", "2"
        ])
        .is_err());
    }

    #[test]
    fn test_ids_must_be_numbers() {
        assert!(Cli::try_parse_from(["dragboard", "delete-task", "abc"]).is_err());
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::try_parse_from([
            "dragboard",
            "show",
            "--json",
            "--debug",
            "--server",
            "http://localhost:9000",
        ])
        .unwrap();
        assert!(cli.debug);
        assert_eq!(cli.server.as_deref(), Some("http://localhost:9000"));
        assert!(matches!(cli.command, Commands::Show { json: true }));
    }
}
