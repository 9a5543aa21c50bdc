//! show and the column/task CRUD commands

use anyhow::Result;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use dragboard_config::ClientConfig;
use dragboard_kanban::{BoardStore, ColumnId, TaskId};
use serde_json::json;

use super::open_session;

/// One table column per board column, tasks stacked beneath in order.
pub fn board_table(store: &BoardStore) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(
        store
            .columns()
            .iter()
            .map(|c| format!("{} (#{})", c.title, c.id))
            .collect::<Vec<_>>(),
    );

    let lanes: Vec<Vec<String>> = store
        .columns()
        .iter()
        .map(|c| {
            store
                .tasks_in(c.id)
                .map(|t| format!("#{} {}\n{}", t.id, t.title, t.content))
                .collect()
        })
        .collect();
    let depth = lanes.iter().map(Vec::len).max().unwrap_or(0);
    for row in 0..depth {
        table.add_row(
            lanes
                .iter()
                .map(|lane| lane.get(row).cloned().unwrap_or_default())
                .collect::<Vec<_>>(),
        );
    }
    table
}

pub fn print_board(store: &BoardStore) {
    if let Some(board) = store.board() {
        match board.description.as_deref() {
            Some(description) if !description.is_empty() => {
                println!("{} - {}", board.name, description)
            }
            _ => println!("{}", board.name),
        }
    }
    println!("{}", board_table(store));
}

pub async fn run_show(config: &ClientConfig, as_json: bool) -> Result<()> {
    let session = open_session(config).await?;
    let store = session.store();
    if as_json {
        let out = json!({
            "board": store.board(),
            "columns": store.columns(),
            "tasks": store.tasks(),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        print_board(store);
    }
    Ok(())
}

pub async fn run_add_column(config: &ClientConfig) -> Result<()> {
    let mut session = open_session(config).await?;
    let column = session.add_column().await?;
    println!("Added column #{} '{}'", column.id, column.title);
    Ok(())
}

pub async fn run_rename_column(config: &ClientConfig, id: ColumnId, title: &str) -> Result<()> {
    let mut session = open_session(config).await?;
    let column = session.rename_column(id, title).await?;
    println!("Renamed column #{} to '{}'", column.id, column.title);
    Ok(())
}

pub async fn run_delete_column(config: &ClientConfig, id: ColumnId) -> Result<()> {
    let mut session = open_session(config).await?;
    let removed = session.delete_column(id).await?;
    println!("Deleted column #{} and {} task(s)", id, removed.len());
    Ok(())
}

pub async fn run_add_task(config: &ClientConfig, column: ColumnId) -> Result<()> {
    let mut session = open_session(config).await?;
    let task = session.add_task(column).await?;
    println!("Added task #{} '{}'", task.id, task.title);
    Ok(())
}

pub async fn run_edit_task(config: &ClientConfig, id: TaskId, content: &str) -> Result<()> {
    let mut session = open_session(config).await?;
    let task = session.edit_task(id, content).await?;
    println!("Updated task #{}", task.id);
    Ok(())
}

pub async fn run_delete_task(config: &ClientConfig, id: TaskId) -> Result<()> {
    let mut session = open_session(config).await?;
    let task = session.delete_task(id).await?;
    println!("Deleted task #{} '{}'", task.id, task.title);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dragboard_kanban::{Board, Column, Task};

    #[test]
    fn test_table_lays_tasks_out_by_column() {
        let mut store = BoardStore::new();
        store.seed(
            Board::new(1, "Work"),
            vec![Column::new(10, 1, "To Do", 0), Column::new(11, 1, "Done", 1)],
            vec![
                Task::new(100, 10, "Write", 0),
                Task::new(101, 10, "Review", 1),
                Task::new(102, 11, "Plan", 0),
            ],
        );

        let rendered = board_table(&store).to_string();
        assert!(rendered.contains("To Do (#10)"));
        assert!(rendered.contains("#101 Review"));
        assert_eq!(board_table(&store).row_iter().count(), 2);
    }

    #[test]
    fn test_empty_board_renders() {
        let table = board_table(&BoardStore::new());
        assert_eq!(table.row_iter().count(), 0);
    }
}
