use serde::Deserialize;

use crate::error::Result;
use crate::model::greeting::Greeting;

const DEFAULTS: &str = include_str!("../../config/default.toml");

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ModuleConfig {
    pub greeting: Greeting,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Install a stderr subscriber when the module is opened.
    pub enabled: bool,
    /// `EnvFilter` directive, e.g. `kznllm=debug`.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            filter: "kznllm=warn".to_string(),
        }
    }
}

impl ModuleConfig {
    /// Load the defaults embedded at build time.
    pub fn load() -> Result<Self> {
        Self::from_toml(DEFAULTS)
    }

    /// Parse a TOML document. Missing tables and keys keep their defaults.
    pub fn from_toml(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }
}
