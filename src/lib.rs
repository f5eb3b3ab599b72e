//! Vehicle Diagnostics Data Loader
//!
//! Pipeline stage that reads cleaned vehicle sensor data from a CSV file and
//! replace-loads it into the local SQLite diagnostics database. The column
//! set is mirrored from the input file; no schema is declared here.

pub mod cli;
pub mod config;
pub mod ingest;
pub mod output;
pub mod services;
pub mod storage;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use ingest::{read_dataset, ColumnType, Dataset, FieldValue};
pub use output::{ConsoleFormatter, JsonFormatter, ReportFormatter};
pub use services::LoaderService;
pub use storage::{LoadReport, SqliteManager, TableStats};
pub use utils::error::LoaderError;

pub const VERSION: &str = "0.1.0";
