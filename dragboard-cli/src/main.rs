//! Dragboard CLI - a kanban board client for the terminal.
//!
//! Commands:
//! - `dragboard login` / `signup` / `logout`: Manage the stored token
//! - `dragboard show [--json]`: Print the board
//! - `dragboard add-column`, `rename-column`, `delete-column`: Column CRUD
//! - `dragboard add-task`, `edit-task`, `delete-task`: Task CRUD
//! - `dragboard move-column <id> <onto>`: Drag a column onto another
//! - `dragboard move-task <id> --onto <task> | --column <column>`: Drag a task
//!
//! Exit codes:
//! - 0: Success
//! - 1: Error

mod cli;
mod commands;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use commands::drag::TaskDrop;
use commands::{auth, board, drag};

/// Print an error and map it to the process exit code.
fn handle_result(result: anyhow::Result<()>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            1
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let filter = if cli.debug {
        EnvFilter::new("dragboard=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .init();

    let config = match dragboard_config::load_configuration() {
        Ok(config) => match cli.server.as_deref() {
            Some(server) => config.with_server(server),
            None => config,
        },
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let exit_code = match cli.command {
        Commands::Login { username, password } => {
            handle_result(auth::run_login(&config, username, password).await)
        }
        Commands::Signup {
            username,
            email,
            password,
        } => handle_result(auth::run_signup(&config, &username, &email, password).await),
        Commands::Logout => handle_result(auth::run_logout()),
        Commands::Show { json } => handle_result(board::run_show(&config, json).await),
        Commands::AddColumn => handle_result(board::run_add_column(&config).await),
        Commands::RenameColumn { column, title } => {
            handle_result(board::run_rename_column(&config, column, &title).await)
        }
        Commands::DeleteColumn { column } => {
            handle_result(board::run_delete_column(&config, column).await)
        }
        Commands::AddTask { column } => handle_result(board::run_add_task(&config, column).await),
        Commands::EditTask { task, content } => {
            handle_result(board::run_edit_task(&config, task, &content).await)
        }
        Commands::DeleteTask { task } => handle_result(board::run_delete_task(&config, task).await),
        Commands::MoveColumn { column, onto } => {
            handle_result(drag::run_move_column(&config, column, onto).await)
        }
        Commands::MoveTask { task, onto, column } => {
            let target = match (onto, column) {
                (Some(onto), _) => TaskDrop::OntoTask(onto),
                (None, Some(column)) => TaskDrop::IntoColumn(column),
                (None, None) => {
                    eprintln!("Error: move-task needs --onto or --column");
                    std::process::exit(1);
                }
            };
            handle_result(drag::run_move_task(&config, task, target).await)
        }
    };

    std::process::exit(exit_code);
}
