//! Backend plumbing for the Dragboard kanban client.
//!
//! [`BoardClient`] speaks the boards/columns/tasks REST API and the token
//! auth endpoints. [`BoardSession`] owns a loaded [`BoardStore`] together with
//! the drag controller, feeding committed drags to a
//! [`PersistenceDispatcher`] that PUTs each changed entity in the background.
//!
//! ```no_run
//! use std::sync::Arc;
//! use dragboard_client::{authenticated_client, BoardSession};
//!
//! # async fn run() -> dragboard_client::Result<()> {
//! let config = dragboard_config::load_configuration()?;
//! let client = authenticated_client(&config)?;
//! let mut session = BoardSession::new(Arc::new(client), config.drag.activation_distance)?;
//! session.load().await?;
//! println!("{} columns", session.store().columns().len());
//! # Ok(())
//! # }
//! ```
//!
//! [`BoardStore`]: dragboard_kanban::BoardStore

mod api;
pub mod auth;
mod client;
mod dispatch;
mod error;
pub mod loader;
mod session;
pub mod types;

pub use api::BoardApi;
pub use auth::{authenticated_client, load_credentials, Credentials};
pub use client::BoardClient;
pub use dispatch::PersistenceDispatcher;
pub use error::{ApiError, Result};
pub use loader::load_board;
pub use session::BoardSession;
