use log::info;
use std::path::Path;

use crate::config::Config;
use crate::ingest;
use crate::output::{ConsoleFormatter, ReportFormatter};
use crate::storage::models::{LoadReport, TableStats};
use crate::storage::SqliteManager;
use crate::utils::error::LoaderError;

/// Orchestrates the replace-load of the cleaned sensor CSV into the
/// diagnostics database: resolve paths, ensure directory, read input, open
/// database, write table, close, report.
pub struct LoaderService {
    config: Config,
    formatter: Box<dyn ReportFormatter>,
}

impl LoaderService {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            formatter: Box::new(ConsoleFormatter),
        }
    }

    pub fn set_formatter(&mut self, formatter: Box<dyn ReportFormatter>) {
        self.formatter = formatter;
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Runs the full load. Returns `Ok(None)` when the input file is absent:
    /// that path prints operator guidance and leaves the database untouched.
    pub async fn run_load(&self) -> Result<Option<LoadReport>, LoaderError> {
        let input_path = self.config.ingest.input_path.clone();
        let database_path = self.config.storage.sqlite.database_path.clone();
        let table_name = self.config.storage.table_name.clone();

        // Ensure the database directory exists
        if let Some(parent) = Path::new(&database_path).parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        // The database is opened only after the input is confirmed readable,
        // so the missing-file branch never touches it.
        if !Path::new(&input_path).exists() {
            println!("❌ Error: Processed data file not found at {}", input_path);
            println!("💡 Please run the upstream data cleaning step first to generate it.");
            return Ok(None);
        }

        let dataset = ingest::read_dataset(&input_path, self.config.delimiter_byte())?;
        println!(
            "✅ Successfully loaded {} records from cleaned data",
            dataset.record_count()
        );

        let manager = SqliteManager::new(&self.config.storage.sqlite).await?;
        let inserted = manager
            .replace_table(&table_name, &dataset, self.config.storage.batch_size)
            .await?;
        manager.close().await;

        let report = LoadReport {
            records_loaded: inserted,
            column_count: dataset.column_count(),
            table_name,
            database_path,
        };

        println!("{}", self.formatter.format_load(&report));
        Ok(Some(report))
    }

    /// Reports row count and column layout of the destination table. Never
    /// creates the database file.
    pub async fn show_stats(&self) -> Result<Option<TableStats>, LoaderError> {
        let database_path = &self.config.storage.sqlite.database_path;

        if !Path::new(database_path).exists() {
            println!("❌ Database not found at {}", database_path);
            println!("💡 Run a load first to create it.");
            return Ok(None);
        }

        info!("📈 Reading statistics from {}", database_path);

        let manager = SqliteManager::new(&self.config.storage.sqlite).await?;
        let stats = manager.table_stats(&self.config.storage.table_name).await;
        manager.close().await;
        let stats = stats?;

        println!("{}", self.formatter.format_stats(&stats));
        Ok(Some(stats))
    }
}
