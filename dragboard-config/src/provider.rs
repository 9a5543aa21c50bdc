//! Configuration provider using Figment

use crate::{
    discovery::{ConfigFile, ConfigFormat, FileDiscovery},
    types::ClientConfig,
    ConfigResult,
};
use figment::{
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
    Figment,
};
use tracing::{debug, trace};

/// Prefix for environment overrides
pub const ENV_PREFIX: &str = "DRAGBOARD_";

/// Environment keys that carry credentials rather than configuration
const NON_CONFIG_ENV_KEYS: [&str; 2] = ["token", "credentials_path"];

/// Configuration provider using figment
///
/// Sources are merged in precedence order, later ones winning:
/// 1. Defaults
/// 2. Global file (`~/.dragboard/config.*`)
/// 3. Project file (`./.dragboard/config.*`)
/// 4. Environment (`DRAGBOARD_*`, `__` separates nested keys)
///
/// Nothing is cached; each call reads the sources again.
#[derive(Debug, Default)]
pub struct ConfigProvider {
    discovery: FileDiscovery,
}

impl ConfigProvider {
    /// Create a provider that discovers files from home and current directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a provider with a custom discovery, e.g. fixed directories
    pub fn with_discovery(discovery: FileDiscovery) -> Self {
        Self { discovery }
    }

    /// Load and validate the client configuration
    pub fn load(&self) -> ConfigResult<ClientConfig> {
        let config: ClientConfig = self.build_figment().extract()?;
        config.validate()?;
        debug!(
            api_url = %config.api_url,
            auth_url = %config.auth_url,
            "Loaded client configuration"
        );
        Ok(config)
    }

    fn build_figment(&self) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(ClientConfig::default()));

        for file in self.discovery.discover_all() {
            trace!("Merging config file: {}", file.path.display());
            figment = figment.merge(load_config_file(&file));
        }

        figment.merge(
            Env::prefixed(ENV_PREFIX)
                .ignore(&NON_CONFIG_ENV_KEYS)
                .split("__"),
        )
    }
}

fn load_config_file(file: &ConfigFile) -> Figment {
    let path = &file.path;
    match file.format {
        ConfigFormat::Toml => Figment::from(Toml::file(path)),
        ConfigFormat::Yaml => Figment::from(Yaml::file(path)),
        ConfigFormat::Json => Figment::from(Json::file(path)),
    }
}

/// Load configuration from all default sources
pub fn load_configuration() -> ConfigResult<ClientConfig> {
    ConfigProvider::new().load()
}
