use log::{debug, info};
use sqlx::{Row, SqlitePool};
use std::path::Path;
use std::time::Duration;

use crate::config::settings::SqliteConfig;
use crate::ingest::dataset::{Dataset, FieldValue};
use crate::storage::models::TableStats;
use crate::utils::error::LoaderError;

#[derive(Clone)]
pub struct SqliteManager {
    pool: SqlitePool,
}

impl SqliteManager {
    pub async fn new(config: &SqliteConfig) -> Result<Self, LoaderError> {
        // Create database directory if it doesn't exist
        if let Some(parent) = Path::new(&config.database_path).parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    LoaderError::DatabaseError(format!(
                        "Failed to create database directory: {}",
                        e
                    ))
                })?;
            }
        }

        info!("🗄️  Opening SQLite database: {}", config.database_path);

        let pool = SqlitePool::connect_with(
            sqlx::sqlite::SqliteConnectOptions::new()
                .filename(&config.database_path)
                .create_if_missing(true)
                .busy_timeout(Duration::from_millis(config.busy_timeout_ms))
                .journal_mode(if config.enable_wal {
                    sqlx::sqlite::SqliteJournalMode::Wal
                } else {
                    sqlx::sqlite::SqliteJournalMode::Delete
                })
                .synchronous(match config.sync_mode.as_str() {
                    "OFF" => sqlx::sqlite::SqliteSynchronous::Off,
                    "NORMAL" => sqlx::sqlite::SqliteSynchronous::Normal,
                    "FULL" => sqlx::sqlite::SqliteSynchronous::Full,
                    _ => sqlx::sqlite::SqliteSynchronous::Normal,
                }),
        )
        .await
        .map_err(|e| LoaderError::DatabaseError(format!("Failed to connect to SQLite: {}", e)))?;

        sqlx::query(&format!("PRAGMA cache_size = -{}", config.cache_size_kb))
            .execute(&pool)
            .await
            .map_err(|e| LoaderError::DatabaseError(format!("Failed to set cache size: {}", e)))?;

        Ok(Self { pool })
    }

    /// Full replace-load: drops any prior table definition and contents,
    /// recreates the table from the dataset schema, and inserts every row
    /// inside a single transaction.
    pub async fn replace_table(
        &self,
        table: &str,
        dataset: &Dataset,
        batch_size: usize,
    ) -> Result<usize, LoaderError> {
        let table_ident = quote_ident(table);
        let mut tx = self.pool.begin().await?;

        sqlx::query(&format!("DROP TABLE IF EXISTS {}", table_ident))
            .execute(&mut *tx)
            .await?;

        let column_defs: Vec<String> = dataset
            .columns()
            .iter()
            .zip(dataset.column_types())
            .map(|(name, ty)| format!("{} {}", quote_ident(name), ty.sql_type()))
            .collect();

        sqlx::query(&format!(
            "CREATE TABLE {} ({})",
            table_ident,
            column_defs.join(", ")
        ))
        .execute(&mut *tx)
        .await?;

        let column_list: Vec<String> = dataset.columns().iter().map(|c| quote_ident(c)).collect();
        let placeholders: Vec<&str> = dataset.columns().iter().map(|_| "?").collect();
        let insert_sql = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            table_ident,
            column_list.join(", "),
            placeholders.join(", ")
        );

        let mut inserted = 0usize;
        let chunk_size = batch_size.max(1);
        for chunk in dataset.rows().chunks(chunk_size) {
            for row in chunk {
                let mut query = sqlx::query(&insert_sql);
                for value in row {
                    query = match value {
                        FieldValue::Integer(v) => query.bind(*v),
                        FieldValue::Real(v) => query.bind(*v),
                        FieldValue::Text(v) => query.bind(v.clone()),
                        FieldValue::Null => query.bind(Option::<String>::None),
                    };
                }
                query.execute(&mut *tx).await?;
                inserted += 1;
            }
            debug!("💾 Inserted {}/{} rows", inserted, dataset.record_count());
        }

        tx.commit().await?;

        info!(
            "💾 Replaced table '{}' with {} rows ({} columns)",
            table,
            inserted,
            dataset.column_count()
        );
        Ok(inserted)
    }

    /// Row count and column layout of a table.
    pub async fn table_stats(&self, table: &str) -> Result<TableStats, LoaderError> {
        let columns = self.table_columns(table).await?;
        if columns.is_empty() {
            return Err(LoaderError::DatabaseError(format!(
                "Table '{}' does not exist",
                table
            )));
        }

        let total_records: i64 =
            sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", quote_ident(table)))
                .fetch_one(&self.pool)
                .await?;

        Ok(TableStats {
            table_name: table.to_string(),
            total_records,
            columns,
        })
    }

    /// Column names of a table in declaration order. Empty if the table does
    /// not exist.
    pub async fn table_columns(&self, table: &str) -> Result<Vec<String>, LoaderError> {
        let rows = sqlx::query(&format!("PRAGMA table_info({})", quote_ident(table)))
            .fetch_all(&self.pool)
            .await?;

        Ok(rows
            .iter()
            .map(|row| row.get::<String, _>("name"))
            .collect())
    }

    // Close all connections gracefully
    pub async fn close(&self) {
        debug!("🔒 Closing SQLite database connections");
        self.pool.close().await;
    }
}

// Table and column names come from the CSV header and config, not from bind
// parameters, so they are quoted as identifiers.
fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::dataset::Dataset;

    fn sample_config(dir: &tempfile::TempDir) -> SqliteConfig {
        SqliteConfig {
            database_path: dir
                .path()
                .join("diagnostics.db")
                .to_string_lossy()
                .to_string(),
            ..SqliteConfig::default()
        }
    }

    fn sensor_dataset(rows: &[&[&str]]) -> Dataset {
        Dataset::from_records(
            vec![
                "timestamp".to_string(),
                "sensor_id".to_string(),
                "value".to_string(),
            ],
            rows.iter()
                .map(|r| r.iter().map(|c| c.to_string()).collect())
                .collect(),
        )
    }

    #[tokio::test]
    async fn test_replace_load_row_count() {
        let dir = tempfile::tempdir().unwrap();
        let manager = SqliteManager::new(&sample_config(&dir)).await.unwrap();

        let dataset = sensor_dataset(&[
            &["2024-01-01 00:00:00", "rpm", "3000"],
            &["2024-01-01 00:00:01", "rpm", "3100"],
            &["2024-01-01 00:00:02", "coolant_temp", "85.5"],
        ]);

        let inserted = manager
            .replace_table("sensor_readings", &dataset, 500)
            .await
            .unwrap();
        assert_eq!(inserted, 3);

        let stats = manager.table_stats("sensor_readings").await.unwrap();
        assert_eq!(stats.total_records, 3);
        assert_eq!(stats.columns, vec!["timestamp", "sensor_id", "value"]);

        manager.close().await;
    }

    #[tokio::test]
    async fn test_replace_discards_prior_contents_and_schema() {
        let dir = tempfile::tempdir().unwrap();
        let manager = SqliteManager::new(&sample_config(&dir)).await.unwrap();

        let first = sensor_dataset(&[
            &["2024-01-01 00:00:00", "rpm", "3000"],
            &["2024-01-01 00:00:01", "rpm", "3100"],
        ]);
        manager
            .replace_table("sensor_readings", &first, 500)
            .await
            .unwrap();

        // Second load has a different column set entirely
        let second = Dataset::from_records(
            vec!["unix_ts".to_string(), "reading".to_string()],
            vec![vec!["1704067200".to_string(), "42.5".to_string()]],
        );
        manager
            .replace_table("sensor_readings", &second, 500)
            .await
            .unwrap();

        let stats = manager.table_stats("sensor_readings").await.unwrap();
        assert_eq!(stats.total_records, 1);
        assert_eq!(stats.columns, vec!["unix_ts", "reading"]);

        manager.close().await;
    }

    #[tokio::test]
    async fn test_replace_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let manager = SqliteManager::new(&sample_config(&dir)).await.unwrap();

        let dataset = sensor_dataset(&[&["2024-01-01 00:00:00", "rpm", "3000"]]);

        manager
            .replace_table("sensor_readings", &dataset, 500)
            .await
            .unwrap();
        manager
            .replace_table("sensor_readings", &dataset, 500)
            .await
            .unwrap();

        let stats = manager.table_stats("sensor_readings").await.unwrap();
        assert_eq!(stats.total_records, 1);
        assert_eq!(stats.columns, vec!["timestamp", "sensor_id", "value"]);

        manager.close().await;
    }

    #[tokio::test]
    async fn test_empty_dataset_creates_empty_table() {
        let dir = tempfile::tempdir().unwrap();
        let manager = SqliteManager::new(&sample_config(&dir)).await.unwrap();

        let dataset = sensor_dataset(&[]);
        let inserted = manager
            .replace_table("sensor_readings", &dataset, 500)
            .await
            .unwrap();
        assert_eq!(inserted, 0);

        let stats = manager.table_stats("sensor_readings").await.unwrap();
        assert_eq!(stats.total_records, 0);
        assert_eq!(stats.columns, vec!["timestamp", "sensor_id", "value"]);

        manager.close().await;
    }

    #[tokio::test]
    async fn test_stats_for_missing_table_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let manager = SqliteManager::new(&sample_config(&dir)).await.unwrap();

        assert!(manager.table_stats("sensor_readings").await.is_err());

        manager.close().await;
    }
}
