//! Command implementations

pub mod auth;
pub mod board;
pub mod drag;

use std::sync::Arc;

use anyhow::Result;
use dragboard_client::{authenticated_client, BoardSession};
use dragboard_config::ClientConfig;

/// Load the board for the logged-in user
pub(crate) async fn open_session(config: &ClientConfig) -> Result<BoardSession> {
    let client = authenticated_client(config)?;
    let mut session = BoardSession::new(Arc::new(client), config.drag.activation_distance)?;
    session.load().await?;
    Ok(session)
}
