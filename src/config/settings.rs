use clap::ArgMatches;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::utils::error::LoaderError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    // Pipeline identification
    pub pipeline_name: String,
    pub pipeline_version: String,

    // Input settings
    pub ingest: IngestConfig,

    // Destination settings
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestConfig {
    pub input_path: String,
    pub delimiter: char,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub table_name: String,
    pub batch_size: usize,
    pub sqlite: SqliteConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SqliteConfig {
    pub database_path: String,
    pub busy_timeout_ms: u64,
    pub enable_wal: bool,
    pub sync_mode: String,
    pub cache_size_kb: i32,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            input_path: "data/processed/cleaned_sensor_data.csv".to_string(),
            delimiter: ',',
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            table_name: "sensor_readings".to_string(),
            batch_size: 500,
            sqlite: SqliteConfig::default(),
        }
    }
}

impl Default for SqliteConfig {
    fn default() -> Self {
        Self {
            database_path: "database/vehicle_diagnostics.db".to_string(),
            busy_timeout_ms: 30000,
            enable_wal: false,
            sync_mode: "NORMAL".to_string(),
            cache_size_kb: 1000,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pipeline_name: "Vehicle Diagnostics Loader".to_string(),
            pipeline_version: crate::VERSION.to_string(),
            ingest: IngestConfig::default(),
            storage: StorageConfig::default(),
        }
    }
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, LoaderError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&content)?;

        // Set version if not present (for backward compatibility)
        if config.pipeline_version.is_empty() {
            config.pipeline_version = crate::VERSION.to_string();
        }

        if config.storage.table_name.is_empty() {
            return Err(LoaderError::ConfigError(
                "storage.table_name must not be empty".to_string(),
            ));
        }

        Ok(config)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), LoaderError> {
        // Create directory if it doesn't exist
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Override file/default settings with command line arguments.
    pub fn apply_matches(&mut self, matches: &ArgMatches) -> Result<(), LoaderError> {
        if let Some(input) = matches.get_one::<String>("input") {
            self.ingest.input_path = input.clone();
        }
        if let Some(database) = matches.get_one::<String>("database") {
            self.storage.sqlite.database_path = database.clone();
        }
        if let Some(table) = matches.get_one::<String>("table") {
            if table.is_empty() {
                return Err(LoaderError::ConfigError(
                    "table name must not be empty".to_string(),
                ));
            }
            self.storage.table_name = table.clone();
        }
        Ok(())
    }

    pub fn delimiter_byte(&self) -> u8 {
        self.ingest.delimiter as u8
    }
}
