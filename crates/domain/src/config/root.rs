use serde::{Deserialize, Serialize};

use super::database::DatabaseConfig;
use super::dnsbl::DnsblConfig;
use super::errors::ConfigError;
use super::job_queue::JobQueueConfig;
use super::logging::LoggingConfig;
use super::server::ServerConfig;

const LOCAL_CONFIG_PATH: &str = "dnsbl-tracker.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/dnsbl-tracker/config.toml";

/// Main configuration structure for dnsbl-tracker
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// HTTP server configuration (port, bind address)
    #[serde(default)]
    pub server: ServerConfig,

    /// SQLite storage configuration
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Blocklist zones and lookup timeout
    #[serde(default)]
    pub dnsbl: DnsblConfig,

    /// Lookup queue sizing
    #[serde(default)]
    pub job_queue: JobQueueConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. dnsbl-tracker.toml in current directory
    /// 3. /etc/dnsbl-tracker/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::get_config_path() {
                Some(found) => Self::from_file(&found)?,
                None => Self::default(),
            },
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Load configuration from a specific file
    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line overrides to configuration
    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.web_port {
            self.server.web_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(db) = overrides.database_path {
            self.database.path = db;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(length) = overrides.queue_length {
            self.job_queue.queue_length = length;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.web_port == 0 {
            return Err(ConfigError::Validation("Web port cannot be 0".to_string()));
        }

        if self.dnsbl.blocklist_domains.is_empty() {
            return Err(ConfigError::Validation(
                "No blocklist domains configured".to_string(),
            ));
        }

        if let Some(blank) = self
            .dnsbl
            .blocklist_domains
            .iter()
            .find(|zone| zone.trim().is_empty())
        {
            return Err(ConfigError::Validation(format!(
                "Blocklist domain '{}' is empty",
                blank
            )));
        }

        if self.job_queue.queue_length == 0 {
            return Err(ConfigError::Validation(
                "Job queue length must be greater than 0".to_string(),
            ));
        }

        if self.database.max_connections == 0 {
            return Err(ConfigError::Validation(
                "Database max_connections must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        [LOCAL_CONFIG_PATH, SYSTEM_CONFIG_PATH]
            .into_iter()
            .find(|candidate| std::path::Path::new(candidate).exists())
            .map(str::to_string)
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub web_port: Option<u16>,
    pub bind_address: Option<String>,
    pub database_path: Option<String>,
    pub log_level: Option<String>,
    pub queue_length: Option<usize>,
}
