//! BoardClient against a mock backend

mod common;

use common::*;
use dragboard_client::auth::{self, CREDENTIALS_PATH_ENV, TOKEN_ENV};
use dragboard_client::types::{NewColumn, TaskUpdate};
use dragboard_client::{ApiError, BoardApi};
use dragboard_kanban::{BoardId, ColumnId, Task, TaskId};
use mockito::{Matcher, Server};
use serde_json::json;
use serial_test::serial;
use tempfile::TempDir;

#[tokio::test]
async fn test_lists_decode_into_model() {
    let mut server = Server::new_async().await;
    let _mocks = mock_board(&mut server).await;
    let client = client_for(&server);

    let boards = client.list_boards().await.unwrap();
    assert_eq!(boards.len(), 1);
    assert_eq!(boards[0].description.as_deref(), Some("Day job"));

    let columns = client.list_columns().await.unwrap();
    assert_eq!(columns.len(), 3);

    let tasks = client.list_tasks().await.unwrap();
    assert_eq!(tasks[0].column, ColumnId::new(COLUMN_A));
}

#[tokio::test]
async fn test_token_is_sent_with_scheme() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/tasks/")
        .match_header("authorization", "Token s3cret")
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let client = client_for(&server).with_token("s3cret");
    assert!(client.list_tasks().await.unwrap().is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_update_task_puts_full_body() {
    let mut server = Server::new_async().await;
    let task = Task::new(TASK_1, COLUMN_B, "T1", 0).with_content("first");
    let mock = server
        .mock("PUT", "/tasks/100/")
        .match_body(Matcher::Json(json!({
            "title": "T1",
            "content": "first",
            "column": COLUMN_B,
            "position": 0
        })))
        .with_status(200)
        .with_body(serde_json::to_string(&task).unwrap())
        .create_async()
        .await;

    let client = client_for(&server);
    let saved = client
        .update_task(TaskId::new(TASK_1), &TaskUpdate::from(&task))
        .await
        .unwrap();
    assert_eq!(saved, task);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_status_codes_map_to_errors() {
    let mut server = Server::new_async().await;
    let _missing = server
        .mock("DELETE", "/tasks/5/")
        .with_status(404)
        .with_body(r#"{"detail": "Not found."}"#)
        .create_async()
        .await;
    let _rejected = server
        .mock("POST", "/columns/")
        .with_status(400)
        .with_body(r#"{"title": ["This field may not be blank."]}"#)
        .create_async()
        .await;
    let _broken = server
        .mock("DELETE", "/columns/3/")
        .with_status(500)
        .with_body("Server Error")
        .create_async()
        .await;

    let client = client_for(&server);

    match client.delete_task(TaskId::new(5)).await.unwrap_err() {
        ApiError::NotFound(msg) => assert_eq!(msg, "Not found."),
        other => panic!("expected NotFound, got {:?}", other),
    }

    let column = NewColumn {
        title: String::new(),
        position: 0,
        board: BoardId::new(BOARD),
    };
    match client.create_column(&column).await.unwrap_err() {
        ApiError::Validation(msg) => assert_eq!(msg, "title: This field may not be blank."),
        other => panic!("expected Validation, got {:?}", other),
    }

    let err = client.delete_column(ColumnId::new(3)).await.unwrap_err();
    assert_eq!(err.status(), Some(500));
}

#[tokio::test]
async fn test_unreachable_server_is_http_error() {
    let config = dragboard_config::ClientConfig::default().with_server("http://127.0.0.1:9");
    let client = dragboard_client::BoardClient::new(&config).unwrap();
    assert!(matches!(
        client.list_boards().await.unwrap_err(),
        ApiError::Http(_)
    ));
}

#[tokio::test]
#[serial]
async fn test_login_stores_token() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("credentials");
    std::env::set_var(CREDENTIALS_PATH_ENV, &path);
    std::env::remove_var(TOKEN_ENV);

    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/login/")
        .match_body(Matcher::Json(json!({"username": "ana", "password": "pw"})))
        .with_status(200)
        .with_body(r#"{"token": "abc123", "user_id": 7}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let creds = auth::login(&client, "ana", "pw").await.unwrap();
    mock.assert_async().await;

    assert_eq!(creds.token, "abc123");
    assert_eq!(creds.user_id, Some(7));
    assert_eq!(auth::load_credentials(), Some(creds));

    std::env::remove_var(CREDENTIALS_PATH_ENV);
}

#[tokio::test]
#[serial]
async fn test_failed_login_saves_nothing() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("credentials");
    std::env::set_var(CREDENTIALS_PATH_ENV, &path);
    std::env::remove_var(TOKEN_ENV);

    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/login/")
        .with_status(400)
        .with_body(r#"{"non_field_errors": ["Unable to log in with provided credentials."]}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let err = auth::login(&client, "ana", "wrong").await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "rejected by server: Unable to log in with provided credentials."
    );
    assert!(!path.exists());

    std::env::remove_var(CREDENTIALS_PATH_ENV);
}

#[tokio::test]
async fn test_signup_posts_user() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/signup/")
        .match_body(Matcher::Json(json!({
            "username": "ana",
            "email": "ana@example.com",
            "password": "pw"
        })))
        .with_status(201)
        .with_body(r#"{"id": 7, "username": "ana", "email": "ana@example.com"}"#)
        .create_async()
        .await;

    client_for(&server)
        .signup("ana", "ana@example.com", "pw")
        .await
        .unwrap();
    mock.assert_async().await;
}
