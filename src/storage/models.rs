use serde::{Deserialize, Serialize};

/// Summary of one completed replace-load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadReport {
    pub records_loaded: usize,
    pub column_count: usize,
    pub table_name: String,
    pub database_path: String,
}

/// Row count and column layout of a destination table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableStats {
    pub table_name: String,
    pub total_records: i64,
    pub columns: Vec<String>,
}
