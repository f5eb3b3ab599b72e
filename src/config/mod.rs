pub mod settings;

pub use settings::{Config, IngestConfig, SqliteConfig, StorageConfig};
