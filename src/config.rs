use derive_more::{Display, Error};
use dotenvy::dotenv;
use std::env;
use std::str::FromStr;
use tracing::Level;

#[derive(Debug, Display, Error)]
pub enum ConfigError {
    #[display(fmt = "invalid value {:?} for {}", value, key)]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum StorageBackend {
    #[display(fmt = "mongodb")]
    MongoDb,
    #[display(fmt = "memory")]
    Memory,
}

impl FromStr for StorageBackend {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mongodb" | "mongo" => Ok(StorageBackend::MongoDb),
            "memory" => Ok(StorageBackend::Memory),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server_addr: String,
    pub database_url: String,
    pub database_name: String,
    pub storage_backend: StorageBackend,
    pub api_prefix: String,

    // Logging
    pub log_dir: String,
    pub log_level: Level,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup, falling back to defaults for absent keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let storage_backend = var("STORAGE_BACKEND", "mongodb");
        let log_level = var("LOG_LEVEL", "debug");

        Ok(Self {
            server_addr: var("SERVER_ADDR", "0.0.0.0:5000"),
            database_url: var("DATABASE_URL", "mongodb://127.0.0.1:27017"),
            database_name: var("DATABASE_NAME", "smart_leave"),
            storage_backend: storage_backend.parse().map_err(|_| {
                ConfigError::InvalidValue {
                    key: "STORAGE_BACKEND",
                    value: storage_backend.clone(),
                }
            })?,
            api_prefix: var("API_PREFIX", "/api"),
            log_dir: var("LOG_DIR", "logs"),
            log_level: log_level.parse().map_err(|_| ConfigError::InvalidValue {
                key: "LOG_LEVEL",
                value: log_level.clone(),
            })?,
        })
    }
}
