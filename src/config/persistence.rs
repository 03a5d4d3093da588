use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use tracing::info;

use super::settings::BridgeConfig;
use crate::error::Result;

pub const ENV_PREFIX: &str = "SQUEEZEBOX_BRIDGE";
pub const CONFIG_PATH_VAR: &str = "SQUEEZEBOX_BRIDGE_CONFIG";
const CONFIG_FILE_NAME: &str = "squeezebox-bridge.toml";

/// Config file next to the add-on data, or in the working directory.
pub fn default_config_path() -> PathBuf {
    std::env::var_os(CONFIG_PATH_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
}

/// Load settings from an optional TOML file, overridden by `SQUEEZEBOX_BRIDGE__*`
/// environment variables.
pub fn load_config(path: &Path) -> Result<BridgeConfig> {
    info!("Loading bridge config from {}", path.display());
    let settings = Config::builder()
        .add_source(
            File::from(path.to_path_buf())
                .format(FileFormat::Toml)
                .required(false),
        )
        .add_source(env_source())
        .build()?;
    finish(settings)
}

fn env_source() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .separator("__")
        .try_parsing(true)
}

fn finish(settings: Config) -> Result<BridgeConfig> {
    let config: BridgeConfig = settings.try_deserialize()?;
    config.validate()?;
    Ok(config)
}
