//! Configuration file discovery
//!
//! Looks for `config.{toml,yaml,yml,json}` in the global `~/.dragboard/`
//! directory and in the project `./.dragboard/` directory. Global files are
//! returned first so project files override them when merged.

use crate::{error::ConfigError, ConfigResult};
use std::path::{Path, PathBuf};
use tracing::{debug, trace, warn};

/// Name of the directory holding configuration and credentials
pub const CONFIG_DIR_NAME: &str = ".dragboard";

const FILE_NAMES: [&str; 4] = ["config.toml", "config.yaml", "config.yml", "config.json"];

/// Configuration file format detected from file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Yaml,
    Json,
}

impl ConfigFormat {
    /// Detect format from file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "toml" => Some(Self::Toml),
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Where a configuration file was found
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ConfigScope {
    Global,
    Project,
}

/// A discovered configuration file
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigFile {
    pub path: PathBuf,
    pub format: ConfigFormat,
    pub scope: ConfigScope,
}

/// The global configuration directory, `~/.dragboard`
pub fn global_config_dir() -> ConfigResult<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(CONFIG_DIR_NAME))
        .ok_or(ConfigError::HomeDirectoryNotFound)
}

/// File discovery service for finding configuration files
#[derive(Debug, Default)]
pub struct FileDiscovery {
    project_dir: Option<PathBuf>,
    global_dir: Option<PathBuf>,
}

impl FileDiscovery {
    /// Resolve directories from the home and current directory at discovery time
    pub fn new() -> Self {
        Self::default()
    }

    /// Use explicit directories instead of home/current directory
    pub fn with_dirs(project_dir: Option<PathBuf>, global_dir: Option<PathBuf>) -> Self {
        Self {
            project_dir,
            global_dir,
        }
    }

    /// Discover all configuration files, lowest precedence first
    pub fn discover_all(&self) -> Vec<ConfigFile> {
        let global_dir = self
            .global_dir
            .clone()
            .or_else(|| global_config_dir().ok());
        let project_dir = self.project_dir.clone().or_else(|| {
            std::env::current_dir()
                .ok()
                .map(|cwd| cwd.join(CONFIG_DIR_NAME))
        });

        let mut files = Vec::new();
        if let Some(ref dir) = global_dir {
            files.extend(search_directory(dir, ConfigScope::Global));
        }
        if let Some(ref dir) = project_dir {
            // Running from $HOME makes both scopes the same directory
            if global_dir.as_ref() != Some(dir) {
                files.extend(search_directory(dir, ConfigScope::Project));
            }
        }

        debug!("Discovered {} configuration files", files.len());
        files
    }
}

fn search_directory(dir: &Path, scope: ConfigScope) -> Vec<ConfigFile> {
    if !dir.exists() {
        trace!("Directory does not exist: {}", dir.display());
        return Vec::new();
    }
    if !dir.is_dir() {
        warn!("Path exists but is not a directory: {}", dir.display());
        return Vec::new();
    }

    FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .filter(|path| path.is_file())
        .filter_map(|path| {
            let format = ConfigFormat::from_extension(path.extension()?.to_str()?)?;
            trace!("Found config: {} ({:?})", path.display(), format);
            Some(ConfigFile {
                path,
                format,
                scope,
            })
        })
        .collect()
}
