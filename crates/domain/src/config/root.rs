use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::server::ServerConfig;
use super::topology::TopologyConfig;
use serde::{Deserialize, Serialize};

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub topology: TopologyConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub web_port: Option<u16>,
    pub bind_address: Option<String>,
    pub cache_ttl_ms: Option<u64>,
    pub directory_file: Option<String>,
}

impl Config {
    /// Load from a TOML file (or defaults when no path is given), then
    /// apply CLI overrides on top.
    pub fn load(path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => {
                let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
                    path: path.to_string(),
                    reason: e.to_string(),
                })?;
                toml::from_str(&raw).map_err(|e| ConfigError::Parse(e.to_string()))?
            }
            None => Self::default(),
        };

        if let Some(web_port) = overrides.web_port {
            config.server.web_port = web_port;
        }
        if let Some(bind_address) = overrides.bind_address {
            config.server.bind_address = bind_address;
        }
        if let Some(cache_ttl_ms) = overrides.cache_ttl_ms {
            config.topology.cache_ttl_ms = cache_ttl_ms;
        }
        if let Some(directory_file) = overrides.directory_file {
            config.topology.directory_file = Some(directory_file);
        }

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.topology.cache_ttl_ms == 0 {
            return Err(ConfigError::Invalid(
                "topology.cache_ttl_ms must be positive".to_string(),
            ));
        }
        if !LOG_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::Invalid(format!(
                "unknown logging.level '{}'",
                self.logging.level
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::load(None, CliOverrides::default()).unwrap();
        assert_eq!(config.server.web_port, 8080);
        assert_eq!(config.topology.cache_ttl_ms, 1000);
        assert_eq!(config.logging.level, "info");
        config.validate().unwrap();
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: Config = toml::from_str(
            r#"
            [topology]
            cache_ttl_ms = 250
            directory_file = "/etc/topograph/directory.json"
            "#,
        )
        .unwrap();
        assert_eq!(config.topology.cache_ttl_ms, 250);
        assert_eq!(
            config.topology.directory_file.as_deref(),
            Some("/etc/topograph/directory.json")
        );
        assert_eq!(config.server.web_port, 8080);
    }

    #[test]
    fn test_cli_overrides_win() {
        let overrides = CliOverrides {
            web_port: Some(9090),
            cache_ttl_ms: Some(50),
            ..Default::default()
        };
        let config = Config::load(None, overrides).unwrap();
        assert_eq!(config.server.web_port, 9090);
        assert_eq!(config.topology.cache_ttl_ms, 50);
    }

    #[test]
    fn test_zero_ttl_is_rejected() {
        let overrides = CliOverrides {
            cache_ttl_ms: Some(0),
            ..Default::default()
        };
        let config = Config::load(None, overrides).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_log_level_is_rejected() {
        let mut config = Config::default();
        config.logging.level = "verbose".to_string();
        assert!(config.validate().is_err());
    }
}
