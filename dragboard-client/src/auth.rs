//! Token login and credential storage.
//!
//! Credentials live as JSON in `~/.dragboard/credentials` with owner-only
//! permissions. `DRAGBOARD_CREDENTIALS_PATH` moves the file and
//! `DRAGBOARD_TOKEN` bypasses it entirely.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use dragboard_config::{global_config_dir, ClientConfig};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::client::BoardClient;
use crate::error::{ApiError, Result};

/// Overrides the credentials file location
pub const CREDENTIALS_PATH_ENV: &str = "DRAGBOARD_CREDENTIALS_PATH";

/// Supplies a token without a credentials file
pub const TOKEN_ENV: &str = "DRAGBOARD_TOKEN";

/// Stored credentials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub token: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub user_id: Option<u64>,
}

/// Get the credentials file path.
pub fn credentials_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var(CREDENTIALS_PATH_ENV) {
        return Ok(PathBuf::from(path));
    }
    Ok(global_config_dir()?.join("credentials"))
}

/// Load credentials, preferring the environment token over the file.
pub fn load_credentials() -> Option<Credentials> {
    if let Ok(token) = std::env::var(TOKEN_ENV) {
        return Some(Credentials {
            token,
            username: String::new(),
            user_id: None,
        });
    }

    let path = credentials_path().ok()?;
    if !path.exists() {
        return None;
    }

    let contents = fs::read_to_string(&path).ok()?;
    serde_json::from_str(&contents).ok()
}

/// Save credentials to file with secure permissions.
pub fn save_credentials(creds: &Credentials) -> Result<()> {
    let path = credentials_path()?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let contents = serde_json::to_string_pretty(creds)?;
    let mut file = fs::File::create(&path)?;
    file.write_all(contents.as_bytes())?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&path, fs::Permissions::from_mode(0o600))?;
    }

    debug!("Saved credentials to {}", path.display());
    Ok(())
}

/// Delete the credentials file. Returns whether one existed.
pub fn delete_credentials() -> Result<bool> {
    let path = credentials_path()?;
    if !path.exists() {
        return Ok(false);
    }
    fs::remove_file(&path)?;
    Ok(true)
}

/// Build a client carrying the stored token. Fails if none is available.
pub fn authenticated_client(config: &ClientConfig) -> Result<BoardClient> {
    let credentials = load_credentials().ok_or(ApiError::AuthRequired)?;
    if credentials.token.is_empty() {
        return Err(ApiError::AuthRequired);
    }
    Ok(BoardClient::new(config)?.with_token(credentials.token))
}

/// Log in and persist the returned token.
pub async fn login(client: &BoardClient, username: &str, password: &str) -> Result<Credentials> {
    let response = client.login(username, password).await?;
    let credentials = Credentials {
        token: response.token,
        username: username.to_string(),
        user_id: Some(response.user_id),
    };
    save_credentials(&credentials)?;
    info!("Logged in as {}", username);
    Ok(credentials)
}

/// Forget the stored token. The server keeps it valid.
pub fn logout() -> Result<bool> {
    let removed = delete_credentials()?;
    if removed {
        info!("Logged out");
    }
    Ok(removed)
}
