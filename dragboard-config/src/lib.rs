//! Dragboard configuration management using Figment
//!
//! # Configuration Files
//!
//! - Global: `~/.dragboard/config.{toml,yaml,yml,json}`
//! - Project: `./.dragboard/config.{toml,yaml,yml,json}`
//!
//! ```toml
//! api_url = "https://boards.example.com/kanban"
//! auth_url = "https://boards.example.com/api"
//! timeout_secs = 10
//!
//! [drag]
//! activation_distance = 3.0
//! ```
//!
//! Environment variables with the `DRAGBOARD_` prefix override files. Nested
//! keys use a double underscore, e.g. `DRAGBOARD_DRAG__ACTIVATION_DISTANCE=5`.
//!
//! ```no_run
//! let config = dragboard_config::load_configuration()?;
//! println!("API at {}", config.api_url);
//! # Ok::<(), dragboard_config::ConfigError>(())
//! ```

pub mod discovery;
mod error;
mod provider;
mod types;

#[cfg(test)]
mod tests;

pub use discovery::{global_config_dir, ConfigFile, ConfigFormat, ConfigScope, FileDiscovery};
pub use error::ConfigError;
pub use provider::{load_configuration, ConfigProvider, ENV_PREFIX};
pub use types::{
    ClientConfig, DragConfig, DEFAULT_API_URL, DEFAULT_AUTH_SCHEME, DEFAULT_AUTH_URL,
    DEFAULT_TIMEOUT_SECS,
};

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;
