pub mod builder;
pub mod defaults;
pub mod merge;
pub mod types;


pub use builder::ConfigBuilder;
pub use defaults::DEFAULT_CONFIG_FILE;
pub use types::*;

use anyhow::{Context, Result};
use std::path::Path;

/// Read a YAML config file; a file that does not exist yields empty input
pub fn load_config(config_file: impl AsRef<Path>) -> Result<ConfigInput> {
    let path = config_file.as_ref();
    if !path.exists() {
        return Ok(ConfigInput::default());
    }

    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    if contents.trim().is_empty() {
        return Ok(ConfigInput::default());
    }
    serde_yaml::from_str(&contents)
        .with_context(|| format!("Invalid config file {}", path.display()))
}

/// Load `config_file` and resolve it against the defaults
pub fn resolve_config(config_file: impl AsRef<Path>) -> Result<Config> {
    ConfigBuilder::new()
        .with_file(load_config(config_file)?)
        .resolve()
}
