use std::io;

use tracing_subscriber::EnvFilter;

use crate::error::{Error, Result};
use crate::model::config::LoggingConfig;

/// Install a stderr subscriber (never stdout, which carries greetings).
///
/// Returns `Ok(false)` when disabled or when the host already installed a
/// global subscriber.
pub fn init(config: &LoggingConfig) -> Result<bool> {
    if !config.enabled {
        return Ok(false);
    }

    let filter = parse_filter(&config.filter)?;
    let installed = tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .try_init()
        .is_ok();

    if installed {
        tracing::info!("kznllm logging initialized");
    }
    Ok(installed)
}

fn parse_filter(directives: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(directives).map_err(|_| Error::InvalidFilter(directives.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_config_installs_nothing() {
        assert!(!init(&LoggingConfig::default()).unwrap());
    }

    #[test]
    fn default_filter_parses() {
        assert!(parse_filter(&LoggingConfig::default().filter).is_ok());
    }

    #[test]
    fn bad_filter_is_rejected() {
        let config = LoggingConfig {
            enabled: true,
            filter: "kznllm=loud".to_string(),
        };
        assert!(matches!(init(&config), Err(Error::InvalidFilter(f)) if f == "kznllm=loud"));
    }
}
