//! Initial board load

use dragboard_kanban::{BoardId, BoardStore, Column};
use futures::future::try_join_all;
use tracing::info;

use crate::api::BoardApi;
use crate::error::Result;
use crate::types::{NewBoard, NewColumn};

pub const DEFAULT_BOARD_NAME: &str = "My Kanban Board";
pub const DEFAULT_BOARD_DESCRIPTION: &str = "A board to organize my tasks and projects";
pub const DEFAULT_COLUMN_TITLES: [&str; 3] = ["To Do", "In Progress", "Done"];

/// Fetch the board, its columns and tasks and seed `store` with them.
///
/// A fresh account gets a default board and three default columns. On error
/// the store is left untouched.
pub async fn load_board(api: &dyn BoardApi, store: &mut BoardStore) -> Result<()> {
    let board = match api.list_boards().await?.into_iter().next() {
        Some(board) => board,
        None => {
            info!("No boards yet, creating '{}'", DEFAULT_BOARD_NAME);
            api.create_board(&NewBoard {
                name: DEFAULT_BOARD_NAME.to_string(),
                description: DEFAULT_BOARD_DESCRIPTION.to_string(),
            })
            .await?
        }
    };

    let (columns, tasks) = futures::try_join!(api.list_columns(), api.list_tasks())?;

    let mut columns: Vec<Column> = columns
        .into_iter()
        .filter(|c| c.board == board.id)
        .collect();
    if columns.is_empty() {
        columns = create_default_columns(api, board.id).await?;
    }

    info!(
        columns = columns.len(),
        tasks = tasks.len(),
        "Loaded board '{}'",
        board.name
    );
    store.seed(board, columns, tasks);
    Ok(())
}

async fn create_default_columns(api: &dyn BoardApi, board: BoardId) -> Result<Vec<Column>> {
    info!("Board {} has no columns, creating defaults", board);
    let requests = DEFAULT_COLUMN_TITLES
        .iter()
        .zip(0u32..)
        .map(|(title, position)| NewColumn {
            title: title.to_string(),
            position,
            board,
        })
        .collect::<Vec<_>>();
    try_join_all(requests.iter().map(|column| api.create_column(column))).await
}

