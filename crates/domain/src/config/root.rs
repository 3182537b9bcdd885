use super::{
    CacheConfig, CircuitConfig, ConfigError, DatabaseConfig, IdempotencyConfig, LoggingConfig,
    ServerConfig,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub cache: CacheConfig,

    #[serde(default)]
    pub circuit: CircuitConfig,

    #[serde(default)]
    pub idempotency: IdempotencyConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Command-line overrides applied on top of the config file.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub port: Option<u16>,
    pub bind_address: Option<String>,
    pub database_path: Option<String>,
}

impl Config {
    /// Loads configuration from a TOML file if given, falling back to
    /// defaults, then applies CLI overrides.
    pub fn load(path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => {
                let contents = std::fs::read_to_string(path).map_err(|source| {
                    ConfigError::Read {
                        path: path.to_string(),
                        source,
                    }
                })?;
                toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))?
            }
            None => Config::default(),
        };

        if let Some(port) = overrides.port {
            config.server.port = port;
        }
        if let Some(bind) = overrides.bind_address {
            config.server.bind_address = bind;
        }
        if let Some(db) = overrides.database_path {
            config.database.path = db;
        }

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.circuit.failure_rate_threshold) {
            return Err(ConfigError::Invalid(
                "circuit.failure_rate_threshold must be within 0.0..=1.0".to_string(),
            ));
        }
        if self.circuit.half_open_trials == 0 {
            return Err(ConfigError::Invalid(
                "circuit.half_open_trials must be at least 1".to_string(),
            ));
        }
        if self.circuit.min_calls == 0 {
            return Err(ConfigError::Invalid(
                "circuit.min_calls must be at least 1".to_string(),
            ));
        }
        if self.cache.local_max_entries == 0 {
            return Err(ConfigError::Invalid(
                "cache.local_max_entries must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
