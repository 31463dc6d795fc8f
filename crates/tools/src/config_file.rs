use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use strata::WorldConfig;

/// Parses a TOML world config; keys left out keep their default values.
pub fn parse_world_config(text: &str) -> Result<WorldConfig> {
    let config: WorldConfig = toml::from_str(text).context("config is not valid TOML")?;
    config.validate()?;
    Ok(config)
}

pub fn load_world_config(path: &Path) -> Result<WorldConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    parse_world_config(&text).with_context(|| format!("bad config file: {}", path.display()))
}

/// Loads `path` when given, otherwise the built-in defaults.
pub fn resolve_world_config(path: Option<&Path>) -> Result<WorldConfig> {
    path.map_or_else(|| Ok(WorldConfig::default()), load_world_config)
}
