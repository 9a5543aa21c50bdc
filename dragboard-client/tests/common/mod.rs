//! Shared mock backend for client integration tests

#![allow(dead_code)]

use dragboard_client::BoardClient;
use dragboard_config::ClientConfig;
use mockito::{Mock, ServerGuard};
use serde_json::{json, Value};

pub const BOARD: u64 = 1;
pub const COLUMN_A: u64 = 10;
pub const COLUMN_B: u64 = 11;
pub const TASK_1: u64 = 100;

pub fn client_for(server: &ServerGuard) -> BoardClient {
    let config = ClientConfig::default().with_server(&server.url());
    BoardClient::new(&config).unwrap()
}

pub fn board_json() -> Value {
    json!([{
        "id": BOARD,
        "name": "Work",
        "description": "Day job",
        "created_at": "2024-03-01T09:00:00Z",
        "updated_at": "2024-03-01T09:00:00Z"
    }])
}

pub fn columns_json() -> Value {
    json!([
        {"id": COLUMN_B, "title": "B", "position": 1, "board": BOARD},
        {"id": COLUMN_A, "title": "A", "position": 0, "board": BOARD},
        {"id": 99, "title": "Elsewhere", "position": 0, "board": 2}
    ])
}

pub fn tasks_json() -> Value {
    json!([
        {"id": TASK_1, "title": "T1", "content": "first", "column": COLUMN_A, "position": 0}
    ])
}

async fn get(server: &mut ServerGuard, path: &str, body: Value) -> Mock {
    server
        .mock("GET", path)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create_async()
        .await
}

/// Serve a board with columns A and B and task T1 in A.
pub async fn mock_board(server: &mut ServerGuard) -> Vec<Mock> {
    vec![
        get(server, "/boards/", board_json()).await,
        get(server, "/columns/", columns_json()).await,
        get(server, "/tasks/", tasks_json()).await,
    ]
}
