//! Typed configuration values

use crate::{error::ConfigError, ConfigResult};
use dragboard_kanban::DEFAULT_ACTIVATION_DISTANCE;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default base URL of the boards/columns/tasks API
pub const DEFAULT_API_URL: &str = "http://localhost:8000/kanban";

/// Default base URL of the login/signup API
pub const DEFAULT_AUTH_URL: &str = "http://localhost:8000/api";

/// Default prefix for the `Authorization` header
pub const DEFAULT_AUTH_SCHEME: &str = "Token";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings for talking to the board backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub api_url: String,
    pub auth_url: String,
    pub auth_scheme: String,
    pub timeout_secs: u64,
    pub drag: DragConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            auth_url: DEFAULT_AUTH_URL.to_string(),
            auth_scheme: DEFAULT_AUTH_SCHEME.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            drag: DragConfig::default(),
        }
    }
}

/// Pointer interaction settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DragConfig {
    /// Pixels of pointer travel before a press becomes a drag
    pub activation_distance: f64,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            activation_distance: DEFAULT_ACTIVATION_DISTANCE,
        }
    }
}

impl ClientConfig {
    /// Request timeout as a duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Point both endpoints at a single server root, e.g. a test server
    pub fn with_server(mut self, root: &str) -> Self {
        let root = root.trim_end_matches('/');
        self.api_url = root.to_string();
        self.auth_url = root.to_string();
        self
    }

    /// Reject values that cannot work at all
    pub fn validate(&self) -> ConfigResult<()> {
        for (key, url) in [("api_url", &self.api_url), ("auth_url", &self.auth_url)] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::validation(format!(
                    "{} must be an http(s) URL, got '{}'",
                    key, url
                )));
            }
        }
        if self.auth_scheme.trim().is_empty() {
            return Err(ConfigError::validation("auth_scheme must not be empty"));
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::validation("timeout_secs must be positive"));
        }
        let distance = self.drag.activation_distance;
        if !distance.is_finite() || distance < 0.0 {
            return Err(ConfigError::validation(format!(
                "drag.activation_distance must be a non-negative number, got {}",
                distance
            )));
        }
        Ok(())
    }
}
