use std::fs;
use std::path::Path;

use accept_languages_core::Apartment;
use serde::Deserialize;

use crate::error::CliError;
use crate::output::OutputFormat;

pub const DEFAULT_CONFIG_PATH: &str = "accept-languages.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    pub format: OutputFormat,
    pub apartment: Apartment,
    pub log_filter: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Lines,
            apartment: Apartment::MultiThreaded,
            log_filter: "warn".to_string(),
        }
    }
}

pub fn load_config(path: &Path) -> Result<CliConfig, CliError> {
    let contents = fs::read_to_string(path)?;
    let config = toml::from_str(&contents)?;
    Ok(config)
}

pub fn load_config_or_default(path: &Path) -> Result<CliConfig, CliError> {
    if path.exists() {
        load_config(path)
    } else {
        Ok(CliConfig::default())
    }
}

pub fn load_selected_config(path: Option<&Path>) -> Result<CliConfig, CliError> {
    match path {
        Some(path) => load_config(path),
        None => load_config_or_default(Path::new(DEFAULT_CONFIG_PATH)),
    }
}
