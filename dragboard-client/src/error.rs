//! Error types for the board API client

use dragboard_config::ConfigError;
use dragboard_kanban::KanbanError;
use thiserror::Error;

/// Result type for client operations
pub type Result<T> = std::result::Result<T, ApiError>;

/// Errors from talking to the board backend
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure (connect, timeout, body decode)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// No stored credentials
    #[error("authentication required - run `dragboard login` first")]
    AuthRequired,

    /// 401 from the server
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// 403 from the server
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// 404 from the server
    #[error("not found: {0}")]
    NotFound(String),

    /// 400 from the server, usually field validation
    #[error("rejected by server: {0}")]
    Validation(String),

    /// Any other non-success status
    #[error("API error ({status}): {body}")]
    Api { status: u16, body: String },

    /// Persistence needs a tokio runtime to spawn on
    #[error("no async runtime available: {0}")]
    Runtime(String),

    /// Local board model rejected the operation
    #[error(transparent)]
    Kanban(#[from] KanbanError),

    /// Configuration could not be resolved
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ApiError {
    /// Status code if the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized(_) => Some(401),
            Self::Forbidden(_) => Some(403),
            Self::NotFound(_) => Some(404),
            Self::Validation(_) => Some(400),
            Self::Api { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
